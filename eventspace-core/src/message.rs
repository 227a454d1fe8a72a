//! Message trait for event payloads.

/// A marker trait for the native event payloads delivered to callbacks.
///
/// Payloads must be `Send + Sync + 'static` so a registry handle can be shared
/// with the host. Every such type is a `Message`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct PointerEvent { x: i32, y: i32 }
///
/// // PointerEvent is a Message through the blanket impl.
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Event payloads in eventspace must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Message for T {}
