//! Routing a fired event to bound callbacks.

use eventspace::{
    Callback, DispatchPolicy, SpaceScope,
    testing::{CallLog, FakeEvent, FakeNode},
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

mod common;
use common::{Spaces, click, global, per_element, registry};

/// Binds s1, s2, s3 in order, each to its own logged callback.
fn three_spaces(spaces: &Spaces, node: &FakeNode, log: &CallLog) {
    for space in ["s1", "s2", "s3"] {
        spaces.on(node, "click", space, &log.callback(space), false);
    }
}

#[test]
fn test_all_active_fires_only_active_space() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    three_spaces(&spaces, &node, &log);

    spaces.set(&node, "s2");
    node.fire(&click());

    assert_eq!(log.calls(), vec!["s2"]);
}

#[test]
fn test_all_active_fires_every_active_in_order() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    three_spaces(&spaces, &node, &log);

    // Activation order must not matter.
    spaces.set(&node, ["s3", "s1"]);
    node.fire(&click());

    assert_eq!(log.calls(), vec!["s1", "s3"]);
}

#[test]
fn test_first_inactive_fires_first_inactive_only() {
    let (spaces, _) = registry(DispatchPolicy::FirstInactive, SpaceScope::PerElement);
    let node = FakeNode::new("n");
    let log = CallLog::new();
    three_spaces(&spaces, &node, &log);

    spaces.set(&node, "s2");
    node.fire(&click());
    assert_eq!(log.calls(), vec!["s1"]);

    log.clear();
    spaces.set(&node, "s1");
    node.fire(&click());
    assert_eq!(log.calls(), vec!["s3"]);

    log.clear();
    spaces.set(&node, "s3");
    node.fire(&click());
    assert!(log.calls().is_empty());
}

#[test]
fn test_nothing_active_fires_nothing() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    three_spaces(&spaces, &node, &log);

    assert_eq!(node.fire(&click()), 1);
    assert!(log.calls().is_empty());
}

#[test]
fn test_callback_receives_node_and_payload() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("button");
    let log = CallLog::new();
    spaces.on(&node, "click", "a", &log.context_callback("cb"), false);
    spaces.set(&node, "a");

    node.fire(&click().with_detail("left"));

    assert_eq!(log.calls(), vec!["cb@button:left"]);
}

#[test]
fn test_one_callback_in_two_active_spaces_runs_twice() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    spaces.on(&node, "click", ["a", "b"], &log.callback("shared"), false);
    spaces.set(&node, ["a", "b"]);

    node.fire(&click());

    assert_eq!(log.calls(), vec!["shared", "shared"]);
}

#[test]
fn test_events_are_routed_by_type() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    spaces.on(&node, "click", "a", &log.callback("click"), false);
    spaces.on(&node, "keyup", "a", &log.callback("keyup"), false);
    spaces.set(&node, "a");

    node.fire(&FakeEvent::new("keyup"));

    assert_eq!(log.calls(), vec!["keyup"]);
}

#[test]
fn test_global_scope_dispatch_follows_global_activation() {
    let (spaces, _) = global();
    let first = FakeNode::new("first");
    let second = FakeNode::new("second");
    let log = CallLog::new();
    spaces.on(&first, "click", "intro", &log.callback("first/intro"), false);
    spaces.on(&second, "click", "intro", &log.callback("second/intro"), false);
    spaces.on(&second, "click", "tour", &log.callback("second/tour"), false);

    spaces.activate("intro");
    first.fire(&click());
    second.fire(&click());
    assert_eq!(log.calls(), vec!["first/intro", "second/intro"]);

    log.clear();
    spaces.activate("tour");
    first.fire(&click());
    second.fire(&click());
    assert_eq!(log.calls(), vec!["second/tour"]);
}

#[test]
fn test_global_scope_ignores_per_node_activation() {
    let (spaces, _) = global();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    spaces.on(&node, "click", "a", &log.callback("a"), false);

    spaces.set(&node, "a");
    node.fire(&click());

    assert!(log.calls().is_empty());
}

#[test]
fn test_direct_dispatch_matches_native_path() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let cb = Callback::new(move |_: &FakeNode, _: &FakeEvent| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    spaces.on(&node, "click", "a", &cb, false);
    spaces.set(&node, "a");

    assert_eq!(spaces.dispatch(&node, "click", &click()), 1);
    node.fire(&click());

    assert_eq!(count.load(Ordering::SeqCst), 2);
}
