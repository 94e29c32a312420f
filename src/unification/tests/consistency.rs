use pretty_assertions::assert_eq;

use super::builders::{Builder, bindings};
use crate::substitution::Error;

#[test]
fn repeated_variable_must_agree() {
    let mut b = Builder::new();
    let f = b.atom("f");
    let a = b.atom("a");
    let c = b.atom("b");
    let x = b.var("X");
    let fxx = b.c([f, x, x]);

    let fab = b.c([f, a, c]);
    let result = b.unify(fxx, fab);
    assert!(result.is_failure());
    assert!(result.bindings().is_empty());

    let faa = b.c([f, a, a]);
    let result = b.unify(fxx, faa);
    assert_eq!(bindings!["X" => "a"], b.show(&result));
}

#[test]
fn aliased_variables_share_a_value() {
    let mut b = Builder::new();
    let f = b.atom("f");
    let a = b.atom("a");
    let c = b.atom("b");
    let x = b.var("X");
    let y = b.var("Y");
    // X = Y, Y = a, then X = b must fail
    let left = b.c([f, x, y, x]);
    let right = b.c([f, y, a, c]);
    assert!(b.unify(left, right).is_failure());
}

#[test]
fn each_variable_is_bound_once() -> Result<(), Error> {
    let mut b = Builder::new();
    let f = b.atom("f");
    let a = b.atom("a");
    let x = b.var("X");
    let y = b.var("Y");
    let z = b.var("Z");
    let left = b.c([f, x, y, y]);
    let right = b.c([f, y, z, a]);

    let result = b.unify(left, right);
    assert_eq!(
        bindings!["X" => "Y", "Y" => "Z", "Z" => "a"],
        b.show(&result)
    );

    let Some(bindings) = result.into_bindings() else {
        panic!("Expected bindings");
    };
    let applied = bindings.apply(&mut b.terms, left)?;
    assert_eq!("f(a, a, a)", b.terms.display(applied).to_string());
    Ok(())
}

#[test]
fn bound_variable_unifies_with_its_value() {
    let mut b = Builder::new();
    let f = b.atom("f");
    let g = b.atom("g");
    let a = b.atom("a");
    let x = b.var("X");
    let y = b.var("Y");
    let ga = b.c([g, a]);
    let gy = b.c([g, y]);
    // X = g(a), then X against g(Y) binds Y = a
    let left = b.c([f, x, x]);
    let right = b.c([f, ga, gy]);
    let result = b.unify(left, right);
    assert_eq!(bindings!["X" => "g(a)", "Y" => "a"], b.show(&result));
}
