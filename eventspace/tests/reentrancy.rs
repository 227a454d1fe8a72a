//! Callbacks that mutate the registry while it dispatches.

use eventspace::{
    Callback,
    testing::{CallLog, FakeEvent, FakeNode},
};
use std::sync::{Arc, Mutex};

mod common;
use common::{Spaces, click, per_element};

/// A callback that records itself, then runs `action` against the registry.
fn acting(
    spaces: &Spaces,
    log: &CallLog,
    label: &str,
    action: impl Fn(&Spaces, &FakeNode, &Callback<FakeNode, FakeEvent>) + Send + Sync + 'static,
) -> Callback<FakeNode, FakeEvent> {
    let registry = spaces.clone();
    let record = log.callback(label);
    let slot: Arc<Mutex<Option<Callback<FakeNode, FakeEvent>>>> = Arc::new(Mutex::new(None));
    let this = slot.clone();
    let cb = Callback::new(move |node: &FakeNode, event: &FakeEvent| {
        record.call(node, event);
        let me = this.lock().unwrap().clone();
        if let Some(me) = me {
            action(&registry, node, &me);
        }
    });
    *slot.lock().unwrap() = Some(cb.clone());
    cb
}

#[test]
fn test_callback_can_unbind_itself() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    let once = acting(&spaces, &log, "once", |spaces, node, me| {
        spaces.off_callback(node, "click", "a", me);
    });
    spaces.on(&node, "click", "a", &once, false);
    spaces.on(&node, "click", "a", &log.callback("after"), false);
    spaces.set(&node, "a");

    node.fire(&click());
    node.fire(&click());

    assert_eq!(log.calls(), vec!["once", "after", "after"]);
}

#[test]
fn test_deactivation_during_fire_applies_next_fire() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    let switch = acting(&spaces, &log, "switch", |spaces, node, _| {
        spaces.unset(node, "b");
    });
    spaces.on(&node, "click", "a", &switch, false);
    spaces.on(&node, "click", "b", &log.callback("b"), false);
    spaces.set(&node, ["a", "b"]);

    node.fire(&click());
    node.fire(&click());

    assert_eq!(log.calls(), vec!["switch", "b", "switch"]);
}

#[test]
fn test_binding_added_during_fire_runs_next_fire() {
    let (spaces, _) = per_element();
    let node = FakeNode::new("n");
    let log = CallLog::new();
    let late = log.callback("late");
    let adder = acting(&spaces, &log, "adder", move |spaces, node, me| {
        spaces.on(node, "click", "a", &late, false);
        spaces.off_callback(node, "click", "a", me);
    });
    spaces.on(&node, "click", "a", &adder, false);
    spaces.set(&node, "a");

    node.fire(&click());
    node.fire(&click());

    assert_eq!(log.calls(), vec!["adder", "late"]);
    assert_eq!(node.listener_count("click"), 1);
}
