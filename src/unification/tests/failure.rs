use std::f64::consts::{E, PI};

use pretty_assertions::assert_eq;

use super::builders::Builder;
use crate::{Constant, Mismatch, Unifier, unify};

#[test]
fn different_atoms() {
    let mut b = Builder::new();
    let bob = b.atom("bob");
    let sue = b.atom("sue");
    let result = b.unify(bob, sue);
    assert!(result.is_failure());
    assert!(result.bindings().is_empty());
}

#[test]
fn different_constants() {
    let mut b = Builder::new();
    let pairs = [
        (b.constant(1), b.constant(2)),
        (b.constant("a"), b.constant("")),
        (b.constant(""), b.constant(Constant::Text(None))),
        (b.constant(false), b.constant(true)),
        (b.constant(PI), b.constant(E)),
        (b.version("1.2.3.4"), b.version("1.2.3.5")),
        (b.version("1.2"), b.version("1.2.0")),
        (b.constant(1), b.constant(1.0)),
    ];
    for (left, right) in pairs {
        assert!(
            b.unify(left, right).is_failure(),
            "{} vs {}",
            b.terms.display(left),
            b.terms.display(right)
        );
    }
}

#[test]
fn atom_is_not_text() {
    let mut b = Builder::new();
    let atom = b.atom("bob");
    let text = b.constant("bob");
    assert!(b.unify(atom, text).is_failure());
    assert!(b.unify(text, atom).is_failure());
}

#[test]
fn arity_mismatch() {
    let mut b = Builder::new();
    let f = b.atom("f");
    let bob = b.atom("bob");
    let sue = b.atom("sue");
    let x = b.var("X");
    let y = b.var("Y");

    let long = b.c([f, bob, sue]);
    let short = b.c([f, bob]);
    assert_eq!(
        Err(Mismatch::ArityMismatch { left: 3, right: 2 }),
        Unifier::default().try_unify(&b.terms, long, short)
    );

    let fx = b.c([f, x]);
    let fxy = b.c([f, x, y]);
    assert!(b.unify(fx, fxy).is_failure());
}

#[test]
fn different_heads() {
    let mut b = Builder::new();
    let f = b.atom("f");
    let g = b.atom("g");
    let x = b.var("X");
    let y = b.var("Y");
    let fx = b.c([f, x]);
    let gy = b.c([g, y]);
    assert_eq!(
        Err(Mismatch::Clash { left: f, right: g }),
        Unifier::default().try_unify(&b.terms, fx, gy)
    );
}

#[test]
fn atom_against_compound() {
    let mut b = Builder::new();
    let f = b.atom("f");
    let one = b.constant(1);
    let term = b.c([f, one]);
    assert!(b.unify(f, term).is_failure());
    assert!(b.unify(term, one).is_failure());
}

#[test]
fn failure_discards_bindings() {
    let mut b = Builder::new();
    let f = b.atom("f");
    let a = b.atom("a");
    let c = b.atom("b");
    let d = b.atom("c");
    let x = b.var("X");
    // X is bound by the first argument before the second one fails
    let left = b.c([f, x, c]);
    let right = b.c([f, a, d]);
    let result = unify(&b.terms, left, right);
    assert!(result.is_failure());
    assert!(result.bindings().is_empty());
    assert_eq!(None, result.into_bindings());
}
