//! Testing utilities for eventspace.
//!
//! This module provides an in-memory host so registries can be exercised
//! without a real DOM.
//!
//! # Features
//!
//! - [`FakeNode`]: An [`EventTarget`] that records native listeners and fires events
//! - [`FakeEvent`]: A minimal event payload carrying its type
//! - [`RecordingSink`]: A [`DiagnosticSink`] that keeps every report
//! - [`CallLog`]: Records callback invocations in order

use eventspace_core::{Callback, DiagnosticSink, EventTarget, NativeListener, PtrKey, UsageError};
use std::sync::{Arc, Mutex, PoisonError};

// ============================================================================
// Fake Host
// ============================================================================

/// An event payload for [`FakeNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeEvent {
    /// Event type, e.g. `"click"`.
    pub kind: String,
    /// Free-form data a test can assert on.
    pub detail: String,
}

impl FakeEvent {
    /// An event of the given type with empty detail.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            detail: String::new(),
        }
    }

    /// Sets the detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

struct AttachedListener {
    event_type: String,
    listener: NativeListener<FakeEvent>,
    capture: bool,
}

struct FakeNodeInner {
    name: String,
    listeners: Mutex<Vec<AttachedListener>>,
}

/// An in-memory node. Clones are the same node.
///
/// # Example
///
/// ```rust,ignore
/// let node = FakeNode::new("button");
/// spaces.on(&node, "click", "intro", &callback, false);
///
/// node.fire(&FakeEvent::new("click"));
/// assert_eq!(node.listener_count("click"), 1);
/// ```
#[derive(Clone)]
pub struct FakeNode {
    inner: Arc<FakeNodeInner>,
}

impl FakeNode {
    /// Create a node with a label used in assertions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(FakeNodeInner {
                name: name.into(),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// The label given at creation.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Invokes every native listener attached for `event.kind`.
    ///
    /// Returns the number of native listeners invoked.
    pub fn fire(&self, event: &FakeEvent) -> usize {
        let listeners: Vec<_> = self
            .lock()
            .iter()
            .filter(|l| l.event_type == event.kind)
            .map(|l| l.listener.clone())
            .collect();
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    /// Number of native listeners attached for `event_type`.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.lock()
            .iter()
            .filter(|l| l.event_type == event_type)
            .count()
    }

    /// Capture flags of the native listeners for `event_type`, in attach order.
    pub fn capture_flags(&self, event_type: &str) -> Vec<bool> {
        self.lock()
            .iter()
            .filter(|l| l.event_type == event_type)
            .map(|l| l.capture)
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<AttachedListener>> {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for FakeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FakeNode").field(&self.inner.name).finish()
    }
}

impl EventTarget<FakeEvent> for FakeNode {
    type Key = PtrKey;

    fn key(&self) -> PtrKey {
        PtrKey::of(&self.inner)
    }

    fn add_native_listener(
        &self,
        event_type: &str,
        listener: NativeListener<FakeEvent>,
        capture: bool,
    ) {
        self.lock().push(AttachedListener {
            event_type: event_type.to_owned(),
            listener,
            capture,
        });
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// A diagnostic sink that records every report.
///
/// Clones share the same record, so keep one clone and hand the other to the
/// builder.
#[derive(Clone, Default)]
pub struct RecordingSink {
    reports: Arc<Mutex<Vec<(&'static str, UsageError)>>>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports so far as `(operation, error)` pairs.
    pub fn reports(&self) -> Vec<(&'static str, UsageError)> {
        self.reports.lock().unwrap().clone()
    }

    /// Number of reports so far.
    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, operation: &'static str, error: &UsageError) {
        self.reports.lock().unwrap().push((operation, error.clone()));
    }
}

// ============================================================================
// Call Log
// ============================================================================

/// Records which callbacks ran, in order.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let first = log.callback("first");
///
/// spaces.on(&node, "click", "a", &first, false);
/// node.fire(&FakeEvent::new("click"));
///
/// assert_eq!(log.calls(), vec!["first"]);
/// ```
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends `label` to this log each time it runs.
    pub fn callback(&self, label: &str) -> Callback<FakeNode, FakeEvent> {
        let calls = self.calls.clone();
        let label = label.to_owned();
        Callback::new(move |_: &FakeNode, _: &FakeEvent| {
            calls.lock().unwrap().push(label.clone());
        })
    }

    /// A callback that appends `"{label}@{node}:{detail}"`, showing the call
    /// context and payload it received.
    pub fn context_callback(&self, label: &str) -> Callback<FakeNode, FakeEvent> {
        let calls = self.calls.clone();
        let label = label.to_owned();
        Callback::new(move |node: &FakeNode, event: &FakeEvent| {
            calls
                .lock()
                .unwrap()
                .push(format!("{label}@{}:{}", node.name(), event.detail));
        })
    }

    /// Labels recorded so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}
