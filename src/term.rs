//! Term arena
//!
//! Every term lives in a [`Terms`] arena and is addressed by a [`TermId`].
//! The arena hash-conses its entries, building a term which is structurally
//! equal to an existing one returns the existing handle. Structural equality
//! is therefore handle equality, atoms are interned and two variables with the
//! same name are the same variable.

use std::{collections::hash_map::RandomState, fmt, hash::BuildHasher};

use hashbrown::HashTable;

use genawaiter::rc::{Co, Gen};
use value_type::value_type;

pub use self::{
    constant::{Constant, Version, VersionError},
    display::TermDisplay,
};

mod constant;
mod display;

/// Handle to a term in a [`Terms`] arena
///
/// Only meaningful for the arena that issued it
#[value_type(Copy)]
pub struct TermId(u32);

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl TermId {
    fn index(self) -> usize {
        self.0 as usize
    }

    // Handle for the entry at `index`, `None` once handles run out
    fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }
}

/// Borrowed view of a term
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term<'a> {
    /// Symbolic identifier, never equal to a constant
    Atom(&'a str),
    #[allow(missing_docs)]
    Constant(&'a Constant),
    /// Named placeholder
    Variable(&'a str),
    /// Non-empty sequence of subterms, the arity is the length
    Compound(&'a [TermId]),
}

/// Returned when a term can't be constructed
#[value_type(Copy)]
#[derive(thiserror::Error)]
pub enum TermError {
    /// Compounds need at least one subterm
    #[error("Compound terms must have at least one subterm")]
    EmptyCompound,
    /// The handle was not issued by this arena
    #[error("Unknown term {0}")]
    UnknownTerm(TermId),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Node {
    Atom(Box<str>),
    Constant(Constant),
    Variable(Box<str>),
    Compound(Box<[TermId]>),
}

/// Append-only, hash-consed term arena
///
/// A compound can only refer to terms that already exist so every term is a
/// finite tree
///
/// An arena holds at most `u32::MAX + 1` distinct terms. The constructors
/// panic when asked to intern one more
#[derive(Debug, Default)]
pub struct Terms {
    nodes: Vec<Node>,
    // Handles into `nodes`, hashed by the node they point at so each node is
    // stored once
    index: HashTable<TermId>,
    hasher: RandomState,
}

impl Terms {
    /// Constructor
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms in the arena
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Intern an atom
    ///
    /// # Panics
    /// If the arena is full
    pub fn atom(&mut self, name: &str) -> TermId {
        self.intern(Node::Atom(name.into()))
    }

    /// Intern a constant
    ///
    /// # Panics
    /// If the arena is full
    pub fn constant(&mut self, value: impl Into<Constant>) -> TermId {
        self.intern(Node::Constant(value.into()))
    }

    /// Intern a variable
    ///
    /// # Panics
    /// If the arena is full
    pub fn variable(&mut self, name: &str) -> TermId {
        self.intern(Node::Variable(name.into()))
    }

    /// Intern a compound term from its subterms, in order
    ///
    /// # Panics
    /// If the arena is full
    pub fn compound(
        &mut self,
        args: impl IntoIterator<Item = TermId>,
    ) -> Result<TermId, TermError> {
        let args = args.into_iter().collect::<Box<[_]>>();
        if args.is_empty() {
            return Err(TermError::EmptyCompound);
        }
        if let Some(&unknown) =
            args.iter().find(|arg| arg.index() >= self.nodes.len())
        {
            return Err(TermError::UnknownTerm(unknown));
        }
        Ok(self.intern(Node::Compound(args)))
    }

    /// Look up a variable without creating it
    #[must_use]
    pub fn find_variable(&self, name: &str) -> Option<TermId> {
        self.lookup(&Node::Variable(name.into()))
    }

    /// View a term
    ///
    /// # Panics
    /// If `id` was issued by a different arena
    #[must_use]
    pub fn get(&self, id: TermId) -> Term<'_> {
        match &self.nodes[id.index()] {
            Node::Atom(name) => Term::Atom(name),
            Node::Constant(value) => Term::Constant(value),
            Node::Variable(name) => Term::Variable(name),
            Node::Compound(args) => Term::Compound(args),
        }
    }

    /// True if `term` is the variable `name` or contains it
    #[must_use]
    pub fn occurs_in(&self, name: &str, term: TermId) -> bool {
        self.subterms(term).any(|subterm| {
            matches!(self.get(subterm), Term::Variable(var) if var == name)
        })
    }

    /// Depth first, pre-order walk over `term` and all of its subterms
    ///
    /// Shared subterms are visited once per occurrence
    pub fn subterms(&self, term: TermId) -> impl Iterator<Item = TermId> {
        Gen::new(move |co: Co<TermId>| async move {
            let mut stack = vec![term];
            while let Some(id) = stack.pop() {
                co.yield_(id).await;
                if let Node::Compound(args) = &self.nodes[id.index()] {
                    stack.extend(args.iter().rev().copied());
                }
            }
        })
        .into_iter()
    }

    /// The distinct variables in `term` in order of first occurrence
    #[must_use]
    pub fn variables(&self, term: TermId) -> Vec<TermId> {
        let mut result = Vec::new();
        for subterm in self.subterms(term) {
            if matches!(self.get(subterm), Term::Variable(_))
                && !result.contains(&subterm)
            {
                result.push(subterm);
            }
        }
        result
    }

    /// True if `term` contains no variables
    #[must_use]
    pub fn is_ground(&self, term: TermId) -> bool {
        !self
            .subterms(term)
            .any(|subterm| matches!(self.get(subterm), Term::Variable(_)))
    }

    /// Diagnostic rendering of a term
    #[must_use]
    pub fn display(&self, term: TermId) -> TermDisplay<'_> {
        TermDisplay::new(self, term)
    }

    fn lookup(&self, node: &Node) -> Option<TermId> {
        let hash = self.hasher.hash_one(node);
        self.index
            .find(hash, |id| self.nodes[id.index()] == *node)
            .copied()
    }

    fn intern(&mut self, node: Node) -> TermId {
        let hash = self.hasher.hash_one(&node);
        let Self {
            nodes,
            index,
            hasher,
        } = self;
        if let Some(&id) = index.find(hash, |id| nodes[id.index()] == node) {
            return id;
        }
        let id = TermId::from_index(nodes.len()).expect("Term arena overflow");
        nodes.push(node);
        let _ = index.insert_unique(hash, id, |id| {
            hasher.hash_one(&nodes[id.index()])
        });
        id
    }
}
