//! # Callbacks (Handler)
//!
//! User code that runs when a bound event fires in an active space.
//!
//! A [`Handler`] receives the node the event fired on as its call context and
//! the native event payload as its sole argument. Handlers are stored as
//! [`Callback`] handles so the same handler can be bound to several spaces
//! and later unbound by identity.

use crate::message::Message;
use std::{fmt, sync::Arc};

/// A function run for a dispatched event.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle `{E}` events on `{T}`",
    label = "missing `Handler<{T}, {E}>` implementation",
    note = "Handlers are closures `Fn(&{T}, &{E})` or types implementing `call`."
)]
pub trait Handler<T, E: Message>: Send + Sync + 'static {
    /// Runs the handler with `target` as call context.
    fn call(&self, target: &T, event: &E);
}

// Blanket impl for closures
impl<F, T, E> Handler<T, E> for F
where
    E: Message,
    F: Fn(&T, &E) + Send + Sync + 'static,
{
    fn call(&self, target: &T, event: &E) {
        (self)(target, event);
    }
}

/// A shared handle to a [`Handler`].
///
/// Clones refer to the same handler. Equality is identity: two callbacks are
/// equal only when they are clones of one another, even if built from
/// identical closures.
pub struct Callback<T, E: Message> {
    inner: Arc<dyn Handler<T, E>>,
}

impl<T: 'static, E: Message> Callback<T, E> {
    /// Wraps a handler.
    pub fn new<H: Handler<T, E>>(handler: H) -> Self {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Runs the wrapped handler.
    pub fn call(&self, target: &T, event: &E) {
        self.inner.call(target, event);
    }

    /// Whether both handles point at the same handler.
    pub fn same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl<T, E: Message> Clone for Callback<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static, E: Message> PartialEq for Callback<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<T: 'static, E: Message> Eq for Callback<T, E> {}

impl<T, E: Message> fmt::Debug for Callback<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback")
            .field(&Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
