/*!
Reading and writing formulas in (DIMACS-style) CNF.

The format, in short:
- Lines starting with `c` are comments, ignored.
- One problem line `p cnf <atoms> <clauses>` precedes the clauses.
- Each clause is a line of space-separated signed-integer literals terminated by `0`.
- A `%` line ends the formula early (some benchmark archives carry such trailers).

A literal whose atom falls outside `[1, atoms]` is a fatal format error --- the whole formula
is rejected, nothing is clamped or dropped.
A mismatch between the declared and actual clause count is only noted in the logs, as the
count was an estimate in some producers.

```rust
# use chroma_sat::io::dimacs::read_dimacs;
let dimacs = "c a comment
p cnf 2 2
1 2 0
-1 -2 0
";

let formula = read_dimacs(dimacs.as_bytes()).unwrap();
assert_eq!(formula.atom_count(), 2);
assert_eq!(formula.clause_count(), 2);
```
*/

use std::io::{BufRead, Write};

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        formula::Formula,
        literal::CLiteral,
    },
    types::err::{self, ErrorKind},
};

/// Reads a DIMACS formula from `reader`.
pub fn read_dimacs(mut reader: impl BufRead) -> Result<Formula, ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    let mut formula: Option<Formula> = None;
    let mut expected_clauses: usize = 0;

    // First phase, read until the formula begins.
    'preamble_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break 'preamble_loop,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(ErrorKind::from(err::FormulaError::Line(line_counter))),
        }

        match buffer.chars().next() {
            Some('c') => continue 'preamble_loop,

            Some('p') => {
                let mut problem_details = buffer.split_whitespace().skip(1);

                match problem_details.next() {
                    Some("cnf") => {}
                    _ => return Err(ErrorKind::from(err::FormulaError::ProblemSpecification)),
                }

                let atom_count: Atom = match problem_details.next().map(str::parse) {
                    Some(Ok(count)) => count,
                    _ => return Err(ErrorKind::from(err::FormulaError::ProblemSpecification)),
                };

                expected_clauses = match problem_details.next().map(str::parse) {
                    Some(Ok(count)) => count,
                    _ => return Err(ErrorKind::from(err::FormulaError::ProblemSpecification)),
                };

                formula = Some(Formula::new(atom_count));
                break 'preamble_loop;
            }

            _ if buffer.trim().is_empty() => continue 'preamble_loop,

            _ => break 'preamble_loop,
        }
    }

    // Anything other than a problem line ends the preamble, clauses included.
    let Some(mut formula) = formula else {
        return Err(ErrorKind::from(err::FormulaError::MissingProblemLine));
    };

    let mut clause_buffer: CClause = Vec::new();

    // Second phase, read until the formula ends.
    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break 'formula_loop,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(ErrorKind::from(err::FormulaError::Line(line_counter))),
        }

        match buffer.chars().next() {
            Some('%') => break 'formula_loop,
            Some('c') => continue 'formula_loop,

            _ => {
                for item in buffer.split_whitespace() {
                    match item {
                        "0" => {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            formula.add_clause(the_clause)?;
                        }

                        _ => match item.parse::<CLiteral>() {
                            Ok(literal) => clause_buffer.push(literal),
                            Err(_) => {
                                return Err(ErrorKind::from(err::FormulaError::Line(
                                    line_counter,
                                )))
                            }
                        },
                    }
                }
            }
        }
    }

    // A clause without its terminating zero is malformed, not a clause to guess at.
    if !clause_buffer.is_empty() {
        return Err(ErrorKind::from(err::FormulaError::Line(line_counter)));
    }

    if formula.clause_count() != expected_clauses {
        log::warn!(target: targets::PARSER,
            "Expected {expected_clauses} clauses, read {}", formula.clause_count());
    }

    log::info!(target: targets::PARSER,
        "Read a formula over {} atoms with {} clauses",
        formula.atom_count(),
        formula.clause_count()
    );

    Ok(formula)
}

/// Writes `formula` to `writer` in DIMACS form: the problem line, then one terminated clause
/// per line, in insertion order.
pub fn write_dimacs(formula: &Formula, writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        writer,
        "p cnf {} {}",
        formula.atom_count(),
        formula.clause_count()
    )?;

    for clause in formula.clauses() {
        writeln!(writer, "{}", clause.as_dimacs(true))?;
    }

    Ok(())
}
