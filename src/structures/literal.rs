/*!
Literals --- atoms paired with a (boolean) polarity.

The canonical representation of a literal is a signed integer whose magnitude identifies the
atom and whose sign identifies the polarity:
- A positive literal is satisfied when its atom is assigned true.
- A negative literal is satisfied when its atom is assigned false.

This is the DIMACS representation, and means a parsed literal is used as-is throughout a solve.

```rust
# use chroma_sat::structures::literal::{CLiteral, Literal};
let literal = CLiteral::new(79, true);

assert_eq!(literal.atom(), 79);
assert!(literal.polarity());

assert_eq!(literal.negate(), -79);
assert!(!literal.negate().polarity());
```
*/

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a polarity.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The canonical implementation of a literal.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}
