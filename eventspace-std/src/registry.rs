//! The event space registry and its public API.
//!
//! [`EventSpaces`] is a cheap, cloneable handle to one registry. Build it once
//! with [`EventSpacesBuilder`] and pass it to whatever code registers
//! handlers; there is no ambient global instance.
//!
//! # Flow
//!
//! 1. [`on`](EventSpaces::on) binds a callback to spaces for an event type on
//!    a node. The first binding for a (node, event type) pair attaches one
//!    native listener through the host.
//! 2. Spaces are switched with [`set`](EventSpaces::set) /
//!    [`unset`](EventSpaces::unset) (per node) or
//!    [`activate`](EventSpaces::activate) /
//!    [`deactivate`](EventSpaces::deactivate) (global).
//! 3. When the host fires the native listener, the registry picks callbacks by
//!    the configured [`DispatchPolicy`] and runs them with the node as call
//!    context.
//!
//! Malformed calls are reported to the configured [`DiagnosticSink`] and do
//! nothing else.

use crate::{
    diagnostics::TracingSink,
    dispatch::select,
    elements::{ElementRecord, ElementRegistry},
    spaces::SpaceRegistry,
};
use eventspace_core::{
    Callback, DiagnosticSink, DispatchPolicy, EventTarget, Message, Names, NativeListener,
    SpaceScope, UsageError,
};
use std::{
    marker::PhantomData,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
};

/// Resolved configuration of an [`EventSpaces`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventSpacesConfig {
    /// How a fired event picks callbacks.
    pub policy: DispatchPolicy,
    /// Which registry holds the activation state dispatch consults.
    pub scope: SpaceScope,
}

struct State<T: EventTarget<E>, E: Message> {
    globals: SpaceRegistry,
    elements: ElementRegistry<T, E>,
}

struct Inner<T: EventTarget<E>, E: Message> {
    config: EventSpacesConfig,
    sink: Box<dyn DiagnosticSink>,
    state: Mutex<State<T, E>>,
}

/// Handle to an event space registry.
///
/// Clones share the registry. Native listeners hold only a weak reference, so
/// once every handle is dropped they stop dispatching.
pub struct EventSpaces<T: EventTarget<E>, E: Message> {
    inner: Arc<Inner<T, E>>,
}

impl<T: EventTarget<E>, E: Message> Clone for EventSpaces<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: EventTarget<E>, E: Message> Default for EventSpaces<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EventTarget<E>, E: Message> EventSpaces<T, E> {
    /// A registry with the default configuration: [`DispatchPolicy::AllActive`],
    /// [`SpaceScope::PerElement`] and a [`TracingSink`].
    pub fn new() -> Self {
        EventSpacesBuilder::new().build()
    }

    /// Start configuring a registry.
    pub fn builder() -> EventSpacesBuilder<T, E> {
        EventSpacesBuilder::new()
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> EventSpacesConfig {
        self.inner.config
    }

    // ------------------------------------------------------------------
    // Global spaces
    // ------------------------------------------------------------------

    /// Declares global spaces, inactive.
    ///
    /// Existing spaces keep their state unless `overwrite` is set, in which
    /// case they are recreated inactive.
    pub fn declare(&self, names: impl Into<Names>, overwrite: bool) {
        self.guarded("declare", |state| {
            let names = names.into().validate()?;
            state
                .globals
                .declare(names.iter().map(String::as_str), overwrite);
            Ok(())
        });
    }

    /// Deletes global spaces. Absent names are ignored.
    pub fn remove(&self, names: impl Into<Names>) {
        self.guarded("remove", |state| {
            let names = names.into().validate()?;
            state.globals.remove(names.iter().map(String::as_str));
            Ok(())
        });
    }

    /// Makes exactly the named global spaces active.
    ///
    /// Every other global space is deactivated. Names that were never declared
    /// are ignored rather than created.
    pub fn activate(&self, names: impl Into<Names>) {
        self.guarded("activate", |state| {
            let names = names.into().validate()?;
            state.globals.activate_exclusive(&names);
            Ok(())
        });
    }

    /// Deactivates the named global spaces.
    pub fn deactivate(&self, names: impl Into<Names>) {
        self.guarded("deactivate", |state| {
            let names = names.into().validate()?;
            state.globals.deactivate(names.iter().map(String::as_str));
            Ok(())
        });
    }

    /// Deactivates every global space.
    pub fn deactivate_all(&self) {
        self.lock().globals.deactivate_all();
    }

    /// Whether the global space `name` exists and is active.
    pub fn is_active(&self, name: &str) -> bool {
        self.lock().globals.is_active(name)
    }

    /// Whether the global space `name` exists.
    pub fn has_space(&self, name: &str) -> bool {
        self.lock().globals.contains(name)
    }

    /// Names of the global spaces, sorted.
    pub fn space_names(&self) -> Vec<String> {
        self.lock().globals.names().map(str::to_owned).collect()
    }

    /// A copy of the global space registry.
    pub fn global_spaces(&self) -> SpaceRegistry {
        self.lock().globals.clone()
    }

    // ------------------------------------------------------------------
    // Per-node spaces
    // ------------------------------------------------------------------

    /// Activates the named spaces on `target`, creating any that are missing.
    ///
    /// Activation is additive: spaces already active on the node stay active.
    /// An empty list deactivates every space on the node, like
    /// [`unset_all`](Self::unset_all).
    ///
    /// A node that has no bindings yet still gets a record here, so spaces
    /// can be switched on before the first [`on`](Self::on). No native
    /// listener is attached until then.
    pub fn set(&self, target: &T, names: impl Into<Names>) {
        self.guarded("set", |state| {
            let names = names.into().validate()?;
            if names.is_empty() {
                if let Some(record) = state.elements.find_mut(&target.key()) {
                    record.spaces_mut().deactivate_all();
                }
                return Ok(());
            }
            state
                .elements
                .ensure(target)
                .spaces_mut()
                .activate_additive(names.iter().map(String::as_str));
            Ok(())
        });
    }

    /// Deactivates the named spaces on `target`; the rest are untouched.
    pub fn unset(&self, target: &T, names: impl Into<Names>) {
        self.guarded("unset", |state| {
            let names = names.into().validate()?;
            if let Some(record) = state.elements.find_mut(&target.key()) {
                record
                    .spaces_mut()
                    .deactivate(names.iter().map(String::as_str));
            }
            Ok(())
        });
    }

    /// Deactivates every space on `target`.
    pub fn unset_all(&self, target: &T) {
        if let Some(record) = self.lock().elements.find_mut(&target.key()) {
            record.spaces_mut().deactivate_all();
        }
    }

    /// Whether the space `name` on `target` exists and is active.
    pub fn is_active_on(&self, target: &T, name: &str) -> bool {
        self.lock()
            .elements
            .find(&target.key())
            .is_some_and(|record| record.spaces().is_active(name))
    }

    /// A copy of the space registry owned by `target`, if it was observed.
    pub fn element_spaces(&self, target: &T) -> Option<SpaceRegistry> {
        self.lock()
            .elements
            .find(&target.key())
            .map(|record| record.spaces().clone())
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Binds `callback` to `event_type` on `target`, once per named space.
    ///
    /// Unknown spaces are declared inactive in the configured scope. The first
    /// binding for this (node, event type) pair attaches one native listener,
    /// passing `capture` through to the host; later bindings reuse it.
    pub fn on(
        &self,
        target: &T,
        event_type: &str,
        names: impl Into<Names>,
        callback: &Callback<T, E>,
        capture: bool,
    ) {
        let attach = self.guarded("on", |state| {
            UsageError::check_event_type(event_type)?;
            let names = names.into().validate()?;
            if names.is_empty() {
                return Err(UsageError::NoSpaces);
            }
            let scope = self.inner.config.scope;
            let State { globals, elements } = state;
            let record = elements.ensure(target);
            let spaces = match scope {
                SpaceScope::Global => globals,
                SpaceScope::PerElement => record.spaces_mut(),
            };
            spaces.declare(names.iter().map(String::as_str), false);
            record.bind(event_type, &names, callback);
            Ok(record.mark_attached(event_type))
        });

        if attach == Some(true) {
            tracing::debug!(event_type, ?capture, "attaching native listener");
            let listener = self.native_listener(target, event_type);
            target.add_native_listener(event_type, listener, capture);
        }
    }

    /// Removes every binding for `event_type` on `target`.
    ///
    /// The native listener stays attached and simply finds nothing to run.
    pub fn off(&self, target: &T, event_type: &str) {
        self.unbind(target, event_type, None, None);
    }

    /// Removes the bindings for `event_type` on `target` in the named spaces.
    pub fn off_spaces(&self, target: &T, event_type: &str, names: impl Into<Names>) {
        self.unbind(target, event_type, Some(names.into()), None);
    }

    /// Removes the bindings for `event_type` on `target` that are in one of
    /// the named spaces and run exactly `callback`.
    pub fn off_callback(
        &self,
        target: &T,
        event_type: &str,
        names: impl Into<Names>,
        callback: &Callback<T, E>,
    ) {
        self.unbind(target, event_type, Some(names.into()), Some(callback));
    }

    /// Number of bindings for `event_type` on `target`.
    pub fn binding_count(&self, target: &T, event_type: &str) -> usize {
        self.lock()
            .elements
            .find(&target.key())
            .map_or(0, |record| record.bindings(event_type).len())
    }

    /// Number of nodes the registry has observed.
    pub fn element_count(&self) -> usize {
        self.lock().elements.len()
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Runs the dispatch handler for an event of `event_type` fired on
    /// `target`, exactly as the attached native listener does.
    ///
    /// Returns the number of callbacks invoked.
    pub fn dispatch(&self, target: &T, event_type: &str, event: &E) -> usize {
        self.inner.dispatch(&target.key(), event_type, event)
    }

    fn native_listener(&self, target: &T, event_type: &str) -> NativeListener<E> {
        let registry: Weak<Inner<T, E>> = Arc::downgrade(&self.inner);
        let key = target.key();
        let event_type = event_type.to_owned();
        Arc::new(move |event: &E| {
            if let Some(inner) = registry.upgrade() {
                inner.dispatch(&key, &event_type, event);
            }
        })
    }

    fn unbind(
        &self,
        target: &T,
        event_type: &str,
        names: Option<Names>,
        callback: Option<&Callback<T, E>>,
    ) {
        self.guarded("off", |state| {
            UsageError::check_event_type(event_type)?;
            let names = names.map(Names::validate).transpose()?;
            if let Some(record) = state.elements.find_mut(&target.key()) {
                record.unbind(event_type, |b| {
                    names.as_ref().is_none_or(|names| names.contains(&b.space))
                        && callback.is_none_or(|cb| b.callback.same(cb))
                });
            }
            Ok(())
        });
    }

    /// Runs `op` under the lock, reporting an error instead of returning it.
    fn guarded<R>(
        &self,
        operation: &'static str,
        op: impl FnOnce(&mut State<T, E>) -> Result<R, UsageError>,
    ) -> Option<R> {
        let result = op(&mut *self.lock());
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.inner.sink.report(operation, &err);
                None
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<T, E>> {
        self.inner.lock()
    }
}

impl<T: EventTarget<E>, E: Message> Inner<T, E> {
    fn lock(&self) -> MutexGuard<'_, State<T, E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, key: &T::Key, event_type: &str, event: &E) -> usize {
        // Snapshot under the lock; callbacks may re-enter the registry.
        let (target, callbacks) = {
            let state = self.lock();
            let Some(record) = state.elements.find(key) else {
                return 0;
            };
            let callbacks = self.selected(&state.globals, record, event_type);
            (record.target().clone(), callbacks)
        };

        tracing::trace!(event_type, selected = callbacks.len(), "dispatching event");
        for callback in &callbacks {
            callback.call(&target, event);
        }
        callbacks.len()
    }

    fn selected(
        &self,
        globals: &SpaceRegistry,
        record: &ElementRecord<T, E>,
        event_type: &str,
    ) -> Vec<Callback<T, E>> {
        let spaces = match self.config.scope {
            SpaceScope::Global => globals,
            SpaceScope::PerElement => record.spaces(),
        };
        select(self.config.policy, record.bindings(event_type), |name| {
            spaces.is_active(name)
        })
    }
}

/// Builder for an [`EventSpaces`] registry.
pub struct EventSpacesBuilder<T, E> {
    config: EventSpacesConfig,
    sink: Box<dyn DiagnosticSink>,
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<T: EventTarget<E>, E: Message> Default for EventSpacesBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EventTarget<E>, E: Message> EventSpacesBuilder<T, E> {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EventSpacesConfig::default(),
            sink: Box::new(TracingSink),
            _marker: PhantomData,
        }
    }

    /// Set the dispatch policy.
    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set where activation state lives.
    pub fn scope(mut self, scope: SpaceScope) -> Self {
        self.config.scope = scope;
        self
    }

    /// Set the sink that receives usage diagnostics.
    pub fn sink(mut self, sink: impl DiagnosticSink) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Build the registry.
    pub fn build(self) -> EventSpaces<T, E> {
        EventSpaces {
            inner: Arc::new(Inner {
                config: self.config,
                sink: self.sink,
                state: Mutex::new(State {
                    globals: SpaceRegistry::new(),
                    elements: ElementRegistry::new(),
                }),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, FakeEvent, FakeNode, RecordingSink};

    fn click() -> FakeEvent {
        FakeEvent::new("click")
    }

    #[test]
    fn test_single_native_listener_per_pair() {
        let spaces = EventSpaces::<FakeNode, FakeEvent>::new();
        let node = FakeNode::new("n");
        let log = CallLog::new();
        let cb = log.callback("cb");

        spaces.on(&node, "click", ["a", "b"], &cb, false);
        spaces.on(&node, "click", "c", &cb, true);
        spaces.on(&node, "keyup", "a", &cb, true);

        assert_eq!(node.listener_count("click"), 1);
        assert_eq!(node.capture_flags("click"), vec![false]);
        assert_eq!(node.listener_count("keyup"), 1);
        assert_eq!(spaces.binding_count(&node, "click"), 3);
    }

    #[test]
    fn test_on_declares_in_configured_scope() {
        let node = FakeNode::new("n");
        let cb = CallLog::new().callback("cb");

        let per_element = EventSpaces::<FakeNode, FakeEvent>::new();
        per_element.on(&node, "click", "a", &cb, false);
        assert!(!per_element.has_space("a"));
        assert!(per_element.element_spaces(&node).is_some_and(|s| s.contains("a")));

        let global = EventSpaces::<FakeNode, FakeEvent>::builder()
            .scope(SpaceScope::Global)
            .build();
        global.on(&node, "click", "a", &cb, false);
        assert!(global.has_space("a"));
        assert!(!global.is_active("a"));
    }

    #[test]
    fn test_dispatch_without_record_is_noop() {
        let spaces = EventSpaces::<FakeNode, FakeEvent>::new();
        assert_eq!(spaces.dispatch(&FakeNode::new("n"), "click", &click()), 0);
    }

    #[test]
    fn test_dropped_registry_leaves_inert_listener() {
        let node = FakeNode::new("n");
        let log = CallLog::new();
        {
            let spaces = EventSpaces::<FakeNode, FakeEvent>::new();
            spaces.on(&node, "click", "a", &log.callback("cb"), false);
            spaces.set(&node, "a");
            assert_eq!(node.fire(&click()), 1);
        }

        node.fire(&click());
        assert_eq!(log.calls(), vec!["cb"]);
    }

    #[test]
    fn test_malformed_event_type_reported() {
        let sink = RecordingSink::new();
        let spaces = EventSpaces::<FakeNode, FakeEvent>::builder()
            .sink(sink.clone())
            .build();
        let node = FakeNode::new("n");

        spaces.on(&node, "", "a", &CallLog::new().callback("cb"), false);

        assert_eq!(sink.reports(), vec![("on", UsageError::EmptyEventType)]);
        assert_eq!(spaces.element_count(), 0);
        assert_eq!(node.listener_count(""), 0);
    }

    #[test]
    fn test_config_roundtrip() {
        let spaces = EventSpaces::<FakeNode, FakeEvent>::builder()
            .policy(DispatchPolicy::FirstInactive)
            .scope(SpaceScope::Global)
            .build();

        assert_eq!(
            spaces.config(),
            EventSpacesConfig {
                policy: DispatchPolicy::FirstInactive,
                scope: SpaceScope::Global,
            }
        );
    }
}
