use std::fmt;

use super::{Term, TermId, Terms};

/// Diagnostic rendering of a term, see [`Terms::display`]
///
/// Compounds render as their first subterm applied to the rest, `f(a, X)`
#[derive(Debug, Clone, Copy)]
pub struct TermDisplay<'a> {
    terms: &'a Terms,
    term: TermId,
}

impl<'a> TermDisplay<'a> {
    pub(super) fn new(terms: &'a Terms, term: TermId) -> Self {
        Self { terms, term }
    }
}

enum Piece {
    Term(TermId),
    Punct(&'static str),
}

impl fmt::Display for TermDisplay<'_> {
    // Uses an explicit stack, terms can be nested arbitrarily deep
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Term(self.term)];
        while let Some(piece) = stack.pop() {
            let term = match piece {
                Piece::Punct(punct) => {
                    f.write_str(punct)?;
                    continue;
                }
                Piece::Term(term) => term,
            };
            match self.terms.get(term) {
                Term::Atom(name) | Term::Variable(name) => f.write_str(name)?,
                Term::Constant(value) => write!(f, "{value}")?,
                Term::Compound(args) => {
                    let (head, rest) = args.split_first().ok_or(fmt::Error)?;
                    stack.push(Piece::Punct(")"));
                    for (i, arg) in rest.iter().enumerate().rev() {
                        stack.push(Piece::Term(*arg));
                        if i > 0 {
                            stack.push(Piece::Punct(", "));
                        }
                    }
                    stack.push(Piece::Punct("("));
                    stack.push(Piece::Term(*head));
                }
            }
        }
        Ok(())
    }
}
