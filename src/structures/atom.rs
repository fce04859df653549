/*!
(The internal representation of) an atom, aka. a 'variable'.

Atoms are the things to which a truth value may be assigned.
Atoms are 1-indexed --- the atom `0` is reserved to mean 'no atom', notably in an
uninitialised [decision tree](crate::structures::tree) node.

In the SAT literature these are often called 'variables', and in the logic literature 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded by [i32::MAX] so every atom has a signed [literal](crate::structures::literal) form.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
