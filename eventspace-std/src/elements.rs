//! Element registry: per-node listener state.

use crate::spaces::SpaceRegistry;
use eventspace_core::{Callback, EventTarget, Message};
use std::collections::{HashMap, HashSet};

/// One callback bound to one space for one event type.
pub struct Binding<T, E: Message> {
    /// Space the binding belongs to.
    pub space: String,
    /// Callback run when the binding is selected.
    pub callback: Callback<T, E>,
}

impl<T, E: Message> Clone for Binding<T, E> {
    fn clone(&self) -> Self {
        Self {
            space: self.space.clone(),
            callback: self.callback.clone(),
        }
    }
}

impl<T, E: Message> std::fmt::Debug for Binding<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("space", &self.space)
            .field("callback", &self.callback)
            .finish()
    }
}

/// Recorded listener state of one observed node.
pub struct ElementRecord<T, E: Message> {
    target: T,
    spaces: SpaceRegistry,
    events: HashMap<String, Vec<Binding<T, E>>>,
    attached: HashSet<String>,
}

impl<T: Clone + 'static, E: Message> ElementRecord<T, E> {
    fn new(target: T) -> Self {
        Self {
            target,
            spaces: SpaceRegistry::new(),
            events: HashMap::new(),
            attached: HashSet::new(),
        }
    }

    /// The node handle used as call context.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Spaces owned by this node.
    pub fn spaces(&self) -> &SpaceRegistry {
        &self.spaces
    }

    /// Mutable access to the spaces owned by this node.
    pub fn spaces_mut(&mut self) -> &mut SpaceRegistry {
        &mut self.spaces
    }

    /// Bindings for `event_type` in registration order.
    pub fn bindings(&self, event_type: &str) -> &[Binding<T, E>] {
        self.events
            .get(event_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Appends one binding per space, keeping earlier bindings first.
    pub fn bind(&mut self, event_type: &str, spaces: &[String], callback: &Callback<T, E>) {
        let list = self.events.entry(event_type.to_owned()).or_default();
        list.extend(spaces.iter().map(|space| Binding {
            space: space.clone(),
            callback: callback.clone(),
        }));
    }

    /// Removes the bindings for `event_type` that `pred` matches.
    ///
    /// Returns how many were removed.
    pub fn unbind(&mut self, event_type: &str, pred: impl Fn(&Binding<T, E>) -> bool) -> usize {
        let Some(list) = self.events.get_mut(event_type) else {
            return 0;
        };
        let before = list.len();
        list.retain(|binding| !pred(binding));
        before - list.len()
    }

    /// Records that a native listener for `event_type` is attached.
    ///
    /// Returns `true` only the first time for a given event type.
    pub fn mark_attached(&mut self, event_type: &str) -> bool {
        self.attached.insert(event_type.to_owned())
    }

    /// Whether a native listener for `event_type` is attached.
    pub fn is_attached(&self, event_type: &str) -> bool {
        self.attached.contains(event_type)
    }
}

/// Identity-keyed map from node to its record. At most one record per node.
pub struct ElementRegistry<T: EventTarget<E>, E: Message> {
    records: HashMap<T::Key, ElementRecord<T, E>>,
}

impl<T: EventTarget<E>, E: Message> Default for ElementRegistry<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EventTarget<E>, E: Message> ElementRegistry<T, E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// The record for the node with this key, if any.
    pub fn find(&self, key: &T::Key) -> Option<&ElementRecord<T, E>> {
        self.records.get(key)
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, key: &T::Key) -> Option<&mut ElementRecord<T, E>> {
        self.records.get_mut(key)
    }

    /// The record for `target`, created empty if missing.
    pub fn ensure(&mut self, target: &T) -> &mut ElementRecord<T, E> {
        self.records
            .entry(target.key())
            .or_insert_with(|| ElementRecord::new(target.clone()))
    }

    /// Number of observed nodes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no node has been observed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
