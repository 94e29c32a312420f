//! Robinson unification with an optional occurs-check

use std::collections::{HashMap, HashSet};

use ena::unify::InPlaceUnificationTable;
use tracing::{debug, trace};

use self::{value::Slot, var::VarKey};
use crate::{
    config::Config,
    substitution::{Binding, Bindings},
    term::{Term, TermId, Terms},
};

mod value;
mod var;

/// Outcome of [`Unifier::unify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationResult {
    /// The terms unify under these bindings
    Success(Bindings),
    /// The terms do not unify
    Failure,
}

impl UnificationResult {
    #[allow(missing_docs)]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    /// The bindings made, always empty on failure
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        match self {
            Self::Success(bindings) => bindings.as_slice(),
            Self::Failure => &[],
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn into_bindings(self) -> Option<Bindings> {
        match self {
            Self::Success(bindings) => Some(bindings),
            Self::Failure => None,
        }
    }
}

impl From<Result<Bindings, Mismatch>> for UnificationResult {
    fn from(result: Result<Bindings, Mismatch>) -> Self {
        match result {
            Ok(bindings) => Self::Success(bindings),
            Err(_) => Self::Failure,
        }
    }
}

/// Reason two terms failed to unify, returned by [`Unifier::try_unify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Mismatch {
    /// Different atoms, constants or shapes
    #[error("{left} does not unify with {right}")]
    Clash {
        #[allow(missing_docs)]
        left: TermId,
        #[allow(missing_docs)]
        right: TermId,
    },
    /// Compounds of different arity
    #[error("Compound arity {left} does not match {right}")]
    ArityMismatch {
        #[allow(missing_docs)]
        left: usize,
        #[allow(missing_docs)]
        right: usize,
    },
    /// The occurs-check rejected binding `variable` to a term containing it
    #[error("{variable} occurs in {term}")]
    Occurs {
        #[allow(missing_docs)]
        variable: TermId,
        #[allow(missing_docs)]
        term: TermId,
    },
}

/// Unify two terms with the default [`Config`]
#[must_use]
pub fn unify(terms: &Terms, lhs: TermId, rhs: TermId) -> UnificationResult {
    Unifier::default().unify(terms, lhs, rhs)
}

/// Unifies pairs of terms under a fixed [`Config`]
///
/// Each call owns its binding environment, a `Unifier` can be shared freely
/// between threads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unifier {
    config: Config,
}

impl Unifier {
    /// Constructor
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Unify `lhs` with `rhs`
    ///
    /// On success the result holds one binding per variable bound, in the
    /// order the bindings were made. When a variable meets a term the variable
    /// is bound to the term whichever side it is on, when two variables meet
    /// the left one is bound to the right one
    #[must_use]
    pub fn unify(
        &self,
        terms: &Terms,
        lhs: TermId,
        rhs: TermId,
    ) -> UnificationResult {
        self.try_unify(terms, lhs, rhs).into()
    }

    /// As [`Unifier::unify`] but reports why unification failed
    pub fn try_unify(
        &self,
        terms: &Terms,
        lhs: TermId,
        rhs: TermId,
    ) -> Result<Bindings, Mismatch> {
        let mut env = Environment::new(terms, self.config);
        match env.unify(lhs, rhs) {
            Ok(()) => Ok(Bindings::new(env.bindings)),
            Err(mismatch) => {
                debug!(
                    lhs = %terms.display(lhs),
                    rhs = %terms.display(rhs),
                    reason = %mismatch,
                    "unification failed"
                );
                Err(mismatch)
            }
        }
    }
}

// A term after looking through the bindings made so far
enum Resolved {
    // An unbound variable class and the variable that stands for it
    Free(VarKey, TermId),
    // Anything other than a variable
    Term(TermId),
}

// Binding environment for a single unification call
struct Environment<'a> {
    terms: &'a Terms,
    config: Config,
    table: InPlaceUnificationTable<VarKey>,
    keys: HashMap<TermId, VarKey>,
    bindings: Vec<Binding>,
    // Compound pairs which have already been queued. Meeting one again is
    // treated as success, without this cyclic bindings would loop forever
    visited: HashSet<(TermId, TermId)>,
}

impl<'a> Environment<'a> {
    fn new(terms: &'a Terms, config: Config) -> Self {
        Self {
            terms,
            config,
            table: InPlaceUnificationTable::new(),
            keys: HashMap::new(),
            bindings: Vec::new(),
            visited: HashSet::new(),
        }
    }

    fn key(&mut self, var: TermId) -> VarKey {
        if let Some(&key) = self.keys.get(&var) {
            return key;
        }
        let key = self.table.new_key(Slot::Free(var));
        let _ = self.keys.insert(var, key);
        key
    }

    fn resolve(&mut self, term: TermId) -> Resolved {
        let Term::Variable(_) = self.terms.get(term) else {
            return Resolved::Term(term);
        };
        let key = self.key(term);
        match self.table.probe_value(key) {
            Slot::Free(head) => Resolved::Free(self.table.find(key), head),
            Slot::Bound(bound) => Resolved::Term(bound),
        }
    }

    // Works through an explicit list of pending pairs, terms can be nested
    // arbitrarily deep
    fn unify(&mut self, left: TermId, right: TermId) -> Result<(), Mismatch> {
        let mut work = vec![(left, right)];
        while let Some((left, right)) = work.pop() {
            match (self.resolve(left), self.resolve(right)) {
                (
                    Resolved::Free(left_key, left),
                    Resolved::Free(right_key, right),
                ) => {
                    // Same class, e.g. a variable against itself. Not a binding
                    if left_key == right_key {
                        continue;
                    }
                    self.table.unify_var_var(left_key, right_key)?;
                    self.record(left, right);
                }
                (Resolved::Free(key, var), Resolved::Term(term))
                | (Resolved::Term(term), Resolved::Free(key, var)) => {
                    self.bind(key, var, term)?;
                }
                (Resolved::Term(left), Resolved::Term(right)) => {
                    self.unify_terms(left, right, &mut work)?;
                }
            }
        }
        Ok(())
    }

    // Queues the argument pairs of two compounds, reversed so they are popped
    // left to right
    fn unify_terms(
        &mut self,
        left: TermId,
        right: TermId,
        work: &mut Vec<(TermId, TermId)>,
    ) -> Result<(), Mismatch> {
        // Terms are hash-consed so equal handles are equal terms
        if left == right {
            return Ok(());
        }
        let terms = self.terms;
        let (Term::Compound(left_args), Term::Compound(right_args)) =
            (terms.get(left), terms.get(right))
        else {
            return Err(Mismatch::Clash { left, right });
        };
        if left_args.len() != right_args.len() {
            return Err(Mismatch::ArityMismatch {
                left: left_args.len(),
                right: right_args.len(),
            });
        }
        if !self.visited.insert((left, right)) {
            return Ok(());
        }
        work.extend(
            left_args.iter().copied().zip(right_args.iter().copied()).rev(),
        );
        Ok(())
    }

    fn bind(
        &mut self,
        key: VarKey,
        var: TermId,
        term: TermId,
    ) -> Result<(), Mismatch> {
        if self.config.occurs_check && self.occurs(key, term) {
            return Err(Mismatch::Occurs {
                variable: var,
                term,
            });
        }
        self.table.unify_var_value(key, Slot::Bound(term))?;
        self.record(var, term);
        Ok(())
    }

    // Does the class of `key` occur in `term`, looking through bindings
    fn occurs(&mut self, key: VarKey, term: TermId) -> bool {
        let terms = self.terms;
        let mut seen = HashSet::new();
        let mut stack = vec![term];
        while let Some(term) = stack.pop() {
            if !seen.insert(term) {
                continue;
            }
            match terms.get(term) {
                Term::Variable(_) => match self.resolve(term) {
                    Resolved::Free(other, _) => {
                        if self.table.unioned(key, other) {
                            return true;
                        }
                    }
                    Resolved::Term(bound) => stack.push(bound),
                },
                Term::Compound(args) => stack.extend(args.iter().copied()),
                Term::Atom(_) | Term::Constant(_) => {}
            }
        }
        false
    }

    fn record(&mut self, var: TermId, term: TermId) {
        trace!(
            variable = %self.terms.display(var),
            term = %self.terms.display(term),
            "binding"
        );
        self.bindings.push(Binding::new(var, term));
    }
}
