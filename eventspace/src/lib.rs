//! # eventspace - Named Groups of Event Handlers
//!
//! `eventspace` lets several handlers share a single native listener per
//! (node, event type) and sorts them into named *spaces*. Switching a space on
//! or off decides which handlers run, without re-subscribing anything on the
//! host.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eventspace::prelude::*;
//!
//! let spaces = EventSpaces::<MyNode, MyEvent>::new();
//! let intro = Callback::new(|node: &MyNode, event: &MyEvent| { /* ... */ });
//!
//! // One native "click" listener, two spaces.
//! spaces.on(&button, "click", ["intro", "tour"], &intro, false);
//!
//! spaces.set(&button, "intro"); // intro handlers now run on click
//! spaces.unset(&button, "intro"); // and now they don't
//! ```
//!
//! ## Policies
//!
//! - [`DispatchPolicy::AllActive`] (default) runs every binding whose space is
//!   active; [`DispatchPolicy::FirstInactive`] runs only the first binding
//!   whose space is inactive.
//! - [`SpaceScope::PerElement`] (default) keeps additive activation per node;
//!   [`SpaceScope::Global`] shares one exclusively activated registry.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use eventspace_core::{
    // Callbacks
    Callback,
    // Diagnostics
    DiagnosticSink,
    // Policies
    DispatchPolicy,
    // Host seam
    EventTarget,
    Handler,
    Message,
    // Names
    Names,
    NativeListener,
    PtrKey,
    SpaceScope,
    // Errors
    UsageError,
};

pub use eventspace_std::{
    EventSpaces, EventSpacesBuilder, EventSpacesConfig, Space, SpaceRegistry, TracingSink,
};

/// Per-node state and binding selection.
pub mod internals {
    pub use eventspace_std::{
        Binding, ElementRecord, ElementRegistry,
        dispatch::select,
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use eventspace_std::testing::*;
}

/// Prelude module - common imports for eventspace.
///
/// # Usage
///
/// ```rust,ignore
/// use eventspace::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Callback, DispatchPolicy, EventSpaces, EventTarget, Handler, Message, Names, SpaceScope,
    };
}
