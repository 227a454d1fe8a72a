//! # eventspace-core
//!
//! Core traits and value types for eventspace.
//!
//! eventspace lets several handlers share one native event listener on a node
//! and partitions them into named *spaces*. Toggling a space turns its group of
//! handlers on or off without touching the native listener.
//!
//! This crate has minimal dependencies and is meant to be imported by host
//! integrations (the glue between eventspace and a concrete DOM or widget
//! library) that don't need the `eventspace-std` registry.
//!
//! # Building Blocks
//!
//! - [`EventTarget`] - The host's node handle: identity key plus native
//!   listener attachment
//! - [`Handler`] / [`Callback`] - User callbacks, compared by identity
//! - [`Names`] - One space name or an ordered list of them
//! - [`DispatchPolicy`] / [`SpaceScope`] - How a fired event picks callbacks
//!   and where space activation lives
//! - [`DiagnosticSink`] - Where malformed calls are reported
//!
//! # Error Types
//!
//! - [`UsageError`] - A malformed argument; reported, never returned

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod diagnostic;
mod error;
mod handler;
mod message;
mod names;
mod policy;
mod target;

// Re-exports
pub use diagnostic::DiagnosticSink;
pub use error::UsageError;
pub use handler::{Callback, Handler};
pub use message::Message;
pub use names::Names;
pub use policy::{DispatchPolicy, SpaceScope};
pub use target::{EventTarget, NativeListener, PtrKey};
