//! Term unification for logic programming style term algebras
//!
//! Terms are built in a [`Terms`] arena and unified with a [`Unifier`]:
//!
//! ```
//! use heron::{Config, Terms, Unifier};
//!
//! let mut terms = Terms::new();
//! let f = terms.atom("f");
//! let a = terms.atom("a");
//! let x = terms.variable("X");
//! let left = terms.compound([f, x])?;
//! let right = terms.compound([f, a])?;
//!
//! let result = Unifier::new(Config::default()).unify(&terms, left, right);
//! assert!(result.is_success());
//! assert_eq!(result.bindings()[0].term(), a);
//! # Ok::<(), heron::TermError>(())
//! ```
#![warn(elided_lifetimes_in_paths)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_results)]
#![deny(missing_debug_implementations)]
#![deny(missing_copy_implementations)]
#![warn(clippy::pedantic)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::let_underscore_untyped)]
#![allow(clippy::similar_names)]
#![allow(clippy::result_large_err)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::missing_errors_doc)]

pub use self::{
    config::Config,
    substitution::{Binding, Bindings},
    term::{
        Constant, Term, TermDisplay, TermError, TermId, Terms, Version,
        VersionError,
    },
    unification::{Mismatch, UnificationResult, Unifier, unify},
};

pub mod config;
pub mod substitution;
pub mod term;
pub mod unification;
