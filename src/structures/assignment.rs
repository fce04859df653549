/*!
A (partial) function from atoms to truth values.

The canonical representation is a vector of optional booleans whose length is one more than the
atom count, so the value of atom *a* is the contents of index *a*.
Index `0` is unused, as atoms are 1-indexed.

During a search the assignment is the solver's trail: an atom set on some branch is cleared
when that branch is abandoned, in strict LIFO order.
The assignment itself does not enforce this --- it is a plain mapping, and the discipline
belongs to [solve](crate::procedures::solve).

Construction is fallible.
An assignment over more than [ATOM_MAX](crate::structures::atom::ATOM_MAX) atoms, or one whose
backing store cannot be reserved, is reported as a (recoverable)
[AllocationError](crate::types::err::AllocationError) rather than an abort.
*/

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err::{self, ErrorKind},
};

/// A partial mapping from atoms to truth values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The value of atom *a*, at index *a*. Index 0 is unused.
    values: Vec<Option<bool>>,
}

impl Assignment {
    /// A fresh, all-unvalued assignment over atoms `1..=atom_count`.
    pub fn new(atom_count: Atom) -> Result<Self, ErrorKind> {
        if atom_count > ATOM_MAX {
            return Err(ErrorKind::from(err::AllocationError::AtomsExhausted));
        }

        let length = atom_count as usize + 1;
        let mut values = Vec::new();
        values
            .try_reserve_exact(length)
            .map_err(|_| err::AllocationError::Assignment)?;
        values.resize(length, None);

        Ok(Assignment { values })
    }

    /// The number of atoms in the assignment.
    pub fn atom_count(&self) -> Atom {
        (self.values.len() - 1) as Atom
    }

    /// Some value of an atom under the assignment, or otherwise nothing.
    ///
    /// Atoms outside the assignment have no value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(atom as usize).copied().flatten()
    }

    /// Sets the value of the given atom.
    ///
    /// # Panics
    /// If the atom is outside the assignment.
    pub fn set(&mut self, atom: Atom, value: bool) {
        self.values[atom as usize] = Some(value);
    }

    /// Clears the value of the given atom.
    ///
    /// # Panics
    /// If the atom is outside the assignment.
    pub fn clear(&mut self, atom: Atom) {
        self.values[atom as usize] = None;
    }

    /// The lowest-indexed atom without a value, if one exists.
    ///
    /// This fixed order is the solver's (deliberately heuristic-free) branch order.
    pub fn first_unvalued(&self) -> Option<Atom> {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    /// A count of atoms with some value.
    pub fn valued_count(&self) -> usize {
        self.values.iter().skip(1).filter(|v| v.is_some()).count()
    }

    /// An iterator over `(atom, value)` pairs, for atoms with some value.
    pub fn valued_atoms(&self) -> impl Iterator<Item = (Atom, bool)> + '_ {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }

    /// The assignment as a string of valued literals in DIMACS form.
    pub fn as_dimacs_string(&self) -> String {
        let mut the_string = String::new();
        for (atom, value) in self.valued_atoms() {
            match value {
                true => the_string.push_str(format!("{atom} ").as_str()),
                false => the_string.push_str(format!("-{atom} ").as_str()),
            }
        }
        the_string.pop();
        the_string
    }
}
