/*!
Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.

The canonical representation of a clause is a vector of literals, with the clause trait
implemented over the vector.

```rust
# use chroma_sat::structures::assignment::Assignment;
# use chroma_sat::structures::clause::Clause;
# use chroma_sat::structures::literal::{CLiteral, Literal};
let clause: Vec<CLiteral> = vec![3, -5];

let mut assignment = Assignment::new(5).unwrap();
assert!(!clause.satisfied_on(&assignment));
assert!(!clause.unsatisfiable_on(&assignment));

assignment.set(3, false);
assignment.set(5, true);
assert!(clause.unsatisfiable_on(&assignment));
```

Note, the empty clause is satisfied on no assignment and unsatisfiable on every assignment.
*/

use crate::structures::{
    assignment::Assignment,
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over the literals in the clause, in clause order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// An iterator over the atoms in the clause, in clause order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Whether some literal of the clause is satisfied on the given assignment.
    fn satisfied_on(&self, assignment: &Assignment) -> bool;

    /// Whether every literal of the clause is falsified on the given assignment.
    ///
    /// A clause with an unvalued literal, or an already-satisfying literal, is not
    /// unsatisfiable --- the unvalued literal may yet satisfy it.
    fn unsatisfiable_on(&self, assignment: &Assignment) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            the_string.push('0');
        } else {
            the_string.pop();
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn satisfied_on(&self, assignment: &Assignment) -> bool {
        self.iter()
            .any(|literal| assignment.value_of(literal.atom()) == Some(literal.polarity()))
    }

    fn unsatisfiable_on(&self, assignment: &Assignment) -> bool {
        self.iter().all(
            |literal| matches!(assignment.value_of(literal.atom()), Some(value) if value != literal.polarity()),
        )
    }
}
