//! Error types for eventspace.
//!
//! Nothing in eventspace is fatal. Malformed arguments surface as a
//! [`UsageError`] handed to the configured [`DiagnosticSink`], and the call
//! that produced it becomes a no-op.
//!
//! [`DiagnosticSink`]: crate::DiagnosticSink

use thiserror::Error;

/// A call was made with an argument of the wrong shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A space name was empty or blank.
    #[error("invalid space name: {0:?}")]
    InvalidSpaceName(String),

    /// An event type was empty or blank.
    #[error("event type must be a non-empty string")]
    EmptyEventType,

    /// A handler was registered without any space to bind it to.
    #[error("at least one space name is required")]
    NoSpaces,
}

impl UsageError {
    /// Checks an event type argument.
    pub fn check_event_type(event_type: &str) -> Result<(), Self> {
        if event_type.trim().is_empty() {
            return Err(Self::EmptyEventType);
        }
        Ok(())
    }
}
