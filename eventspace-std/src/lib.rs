//! # eventspace-std
//!
//! Standard implementations for eventspace.
//!
//! This crate provides:
//! - **Registry**: [`EventSpaces`] and its [`EventSpacesBuilder`]
//! - **Spaces**: [`SpaceRegistry`], the name to activation flag map
//! - **Elements**: [`ElementRegistry`], per-node bindings and spaces
//! - **Dispatch**: [`dispatch::select`], binding selection per policy
//! - **Diagnostics**: [`TracingSink`]
//! - **Testing**: an in-memory host in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use eventspace_core;

// Modules
pub mod diagnostics;
pub mod dispatch;
pub mod elements;
pub mod registry;
pub mod spaces;
pub mod testing;

pub use diagnostics::TracingSink;
pub use elements::{Binding, ElementRecord, ElementRegistry};
pub use registry::{EventSpaces, EventSpacesBuilder, EventSpacesConfig};
pub use spaces::{Space, SpaceRegistry};
