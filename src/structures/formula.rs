/*!
A formula in conjunctive normal form: a collection of clauses plus an atom count.

Clauses are kept in insertion order for the sake of diagnostics, and no deduplication or
simplification of any kind is performed --- redundancy from the
[encoder](crate::procedures::encode) is accepted as-is.

Invariant: the atom of every literal lies in `[1, atom_count]`.
[add_clause](Formula::add_clause) enforces this with a hard
[FormulaError](crate::types::err::FormulaError), so a formula holding an out-of-range literal
never reaches the solver.
*/

use crate::{
    structures::{
        assignment::Assignment,
        atom::Atom,
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self, ErrorKind},
};

/// A formula in conjunctive normal form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The clauses of the formula, in insertion order.
    clauses: Vec<CClause>,

    /// The number of atoms the formula is over.
    atom_count: Atom,
}

impl Formula {
    /// A fresh formula over atoms `1..=atom_count`, with no clauses.
    pub fn new(atom_count: Atom) -> Self {
        Formula {
            clauses: Vec::new(),
            atom_count,
        }
    }

    /// The number of atoms the formula is over.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The number of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the clauses of the formula, in insertion order.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// Appends a clause to the formula.
    ///
    /// Every literal must be over an atom in `[1, atom_count]` --- anything else is rejected
    /// with [FormulaError::LiteralOutOfRange](err::FormulaError), never clamped or dropped.
    ///
    /// The empty clause is accepted, and makes the formula unsatisfiable on every assignment.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        for literal in clause.literals() {
            let atom = literal.atom();
            if atom == 0 || atom > self.atom_count {
                return Err(ErrorKind::from(err::FormulaError::LiteralOutOfRange {
                    literal: *literal,
                    atom_count: self.atom_count,
                }));
            }
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// Whether every clause has some satisfied literal on the given assignment.
    ///
    /// This is the solver's success terminal state.
    pub fn satisfied_on(&self, assignment: &Assignment) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_on(assignment))
    }

    /// Whether some clause has every literal falsified on the given assignment.
    ///
    /// This is the solver's failure terminal state for a branch.
    pub fn unsatisfiable_on(&self, assignment: &Assignment) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.unsatisfiable_on(assignment))
    }

    /// The formula in DIMACS form: a problem line followed by one terminated clause per line.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!("p cnf {} {}\n", self.atom_count, self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(clause.as_dimacs(true).as_str());
            the_string.push('\n');
        }
        the_string
    }
}
