use std::thread;

use pretty_assertions::assert_eq;

use super::builders::{Builder, bindings};
use crate::{Bindings, Config, Terms, Unifier};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shareable_between_threads() {
    assert_send_sync::<Terms>();
    assert_send_sync::<Unifier>();
    assert_send_sync::<Bindings>();
}

#[test]
fn unify_in_parallel() {
    let mut b = Builder::new();
    let f = b.atom("f");
    let g = b.atom("g");
    let a = b.atom("a");
    let x = b.var("X");
    let y = b.var("Y");
    let gx = b.c([g, x]);
    let lhs = b.c([f, gx, x]);
    let rhs = b.c([f, y, a]);
    let fa = b.c([f, a]);
    let fxx = b.c([f, x, x]);
    let fab = b.c([f, a, a]);

    let b = &b;
    let unifier = Unifier::new(Config::new().with_occurs_check(true));
    let results = thread::scope(|scope| {
        let handles = [(lhs, rhs), (fa, x), (fxx, fab), (fa, fab)]
            .into_iter()
            .map(|(lhs, rhs)| {
                scope.spawn(move || unifier.unify(&b.terms, lhs, rhs))
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("Unification should not panic"))
            .collect::<Vec<_>>()
    });

    assert_eq!(b.show(&results[0]), bindings!["Y" => "g(X)", "X" => "a"]);
    assert_eq!(b.show(&results[1]), bindings!["X" => "f(a)"]);
    assert_eq!(b.show(&results[2]), bindings!["X" => "a"]);
    assert!(results[3].is_failure());
}
