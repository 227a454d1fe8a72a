#![allow(dead_code)]

use eventspace::{
    DispatchPolicy, EventSpaces, SpaceScope,
    testing::{FakeEvent, FakeNode, RecordingSink},
};

pub type Spaces = EventSpaces<FakeNode, FakeEvent>;

// ============================================================================
// Fixtures
// ============================================================================

/// Routes `tracing` output through the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A registry with the given configuration and a sink the test can inspect.
pub fn registry(policy: DispatchPolicy, scope: SpaceScope) -> (Spaces, RecordingSink) {
    init_tracing();
    let sink = RecordingSink::new();
    let spaces = Spaces::builder()
        .policy(policy)
        .scope(scope)
        .sink(sink.clone())
        .build();
    (spaces, sink)
}

/// Default configuration: all-active dispatch, per-element spaces.
pub fn per_element() -> (Spaces, RecordingSink) {
    registry(DispatchPolicy::AllActive, SpaceScope::PerElement)
}

/// Global, exclusively activated spaces with all-active dispatch.
pub fn global() -> (Spaces, RecordingSink) {
    registry(DispatchPolicy::AllActive, SpaceScope::Global)
}

pub fn click() -> FakeEvent {
    FakeEvent::new("click")
}
