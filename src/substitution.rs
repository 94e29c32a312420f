//! Ordered variable bindings produced by a successful unification

use std::{
    collections::{HashMap, HashSet},
    slice,
};

use value_type::value_type;

use crate::term::{Term, TermError, TermId, Terms};


/// A variable bound to a term
#[value_type(Copy)]
pub struct Binding {
    variable: TermId,
    term: TermId,
}

impl Binding {
    pub(crate) fn new(variable: TermId, term: TermId) -> Self {
        Self { variable, term }
    }

    /// The bound variable
    #[must_use]
    pub fn variable(&self) -> TermId {
        self.variable
    }

    /// The term the variable is bound to
    #[must_use]
    pub fn term(&self) -> TermId {
        self.term
    }
}

/// Error returned by [`Bindings::apply`]
#[value_type(Copy)]
#[derive(thiserror::Error)]
pub enum Error {
    /// Following the bindings from this variable leads back to it. Only
    /// possible if unification ran without the occurs-check
    #[error("Binding for {0} refers back to itself")]
    Cyclic(TermId),
    /// Wraps [`TermError`]
    #[error(transparent)]
    Term(#[from] TermError),
}

/// Bindings in the order they were made
///
/// Each variable appears at most once. A bound term may mention variables
/// bound by other entries, [`Bindings::apply`] resolves them
#[value_type]
pub struct Bindings(Vec<Binding>);

impl Bindings {
    pub(crate) fn new(bindings: Vec<Binding>) -> Self {
        Self(bindings)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn as_slice(&self) -> &[Binding] {
        &self.0
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> slice::Iter<'_, Binding> {
        self.0.iter()
    }

    /// The term `variable` is directly bound to, if any
    #[must_use]
    pub fn lookup(&self, variable: TermId) -> Option<TermId> {
        self.0
            .iter()
            .find(|binding| binding.variable == variable)
            .map(Binding::term)
    }

    /// Replace every bound variable in `term` with its value, transitively.
    /// New terms are interned into `terms`
    pub fn apply(
        &self,
        terms: &mut Terms,
        term: TermId,
    ) -> Result<TermId, Error> {
        let mut applier = Applier {
            terms,
            bindings: self
                .0
                .iter()
                .map(|binding| (binding.variable, binding.term))
                .collect(),
            expanding: HashSet::new(),
            done: HashMap::new(),
        };
        applier.apply(term)
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = &'a Binding;

    type IntoIter = slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct Applier<'a> {
    terms: &'a mut Terms,
    bindings: HashMap<TermId, TermId>,
    // Variables whose binding is currently being expanded, seeing one of these
    // again means the bindings are cyclic
    expanding: HashSet<TermId>,
    done: HashMap<TermId, TermId>,
}

// Pending work for the applier's explicit stack
enum Step {
    // Rewrite this term
    Visit(TermId),
    // All subterms are rewritten, intern the rewritten compound
    Rebuild(TermId),
    // The variable's binding is rewritten, the variable rewrites to the same
    Finish(TermId, TermId),
}

impl Applier<'_> {
    // Iterative so deeply nested terms can't exhaust the call stack
    fn apply(&mut self, root: TermId) -> Result<TermId, Error> {
        let mut stack = vec![Step::Visit(root)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(term) => {
                    if self.done.contains_key(&term) {
                        continue;
                    }
                    match self.terms.get(term) {
                        Term::Variable(_) => {
                            let Some(&bound) = self.bindings.get(&term) else {
                                let _ = self.done.insert(term, term);
                                continue;
                            };
                            if !self.expanding.insert(term) {
                                return Err(Error::Cyclic(term));
                            }
                            stack.push(Step::Finish(term, bound));
                            stack.push(Step::Visit(bound));
                        }
                        Term::Compound(args) => {
                            stack.push(Step::Rebuild(term));
                            stack.extend(
                                args.iter().rev().map(|&arg| Step::Visit(arg)),
                            );
                        }
                        Term::Atom(_) | Term::Constant(_) => {
                            let _ = self.done.insert(term, term);
                        }
                    }
                }
                Step::Rebuild(term) => {
                    let Term::Compound(args) = self.terms.get(term) else {
                        unreachable!("Only compounds are rebuilt");
                    };
                    let applied = args
                        .iter()
                        .map(|arg| self.done[arg])
                        .collect::<Vec<_>>();
                    let result = self.terms.compound(applied)?;
                    let _ = self.done.insert(term, result);
                }
                Step::Finish(var, bound) => {
                    let _ = self.expanding.remove(&var);
                    let result = self.done[&bound];
                    let _ = self.done.insert(var, result);
                }
            }
        }
        Ok(self.done[&root])
    }
}
