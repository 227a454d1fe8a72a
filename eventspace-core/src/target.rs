//! # Host Seam (EventTarget)
//!
//! eventspace does not own a DOM. It sits on top of whatever library delivers
//! native events, and talks to it through [`EventTarget`]:
//!
//! 1. **Identity**: each node yields a key. Two handles with equal keys are the
//!    same node, which is how reference equality is expressed.
//! 2. **Attachment**: the registry hands the node one [`NativeListener`] per
//!    event type and relies on the host to call it every time that event
//!    fires on the node.
//!
//! Host handles are cheap clones (`Arc`, index, id). The registry keeps one
//! clone per observed node to use as the callback's call context.

use crate::message::Message;
use std::{fmt::Debug, hash::Hash, sync::Arc};

/// The closure a host invokes when a native event fires.
pub type NativeListener<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// A node handle from the host event-binding library.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `EventTarget` for `{E}`",
    label = "missing `EventTarget` implementation",
    note = "Host node handles must provide an identity key and native listener attachment."
)]
pub trait EventTarget<E: Message>: Clone + Send + Sync + 'static {
    /// Identity of the node. Equal keys mean the same node.
    type Key: Eq + Hash + Clone + Debug + Send + Sync + 'static;

    /// Returns the identity key of this node.
    fn key(&self) -> Self::Key;

    /// Attaches a native listener for `event_type`.
    ///
    /// `capture` is passed through untouched; its meaning belongs to the host.
    fn add_native_listener(&self, event_type: &str, listener: NativeListener<E>, capture: bool);
}

/// Identity key derived from an `Arc` allocation.
///
/// Hosts whose node handles are `Arc`s can use this as [`EventTarget::Key`].
/// The key stays unique as long as some clone of the `Arc` is alive, which the
/// registry guarantees by holding one per observed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PtrKey(usize);

impl PtrKey {
    /// The key of the allocation behind `node`.
    pub fn of<N: ?Sized>(node: &Arc<N>) -> Self {
        Self(Arc::as_ptr(node).cast::<()>() as usize)
    }
}
