//! Logging sink for usage diagnostics.

use eventspace_core::{DiagnosticSink, UsageError};

/// A sink that logs rejected calls through `tracing` at `warn` level.
///
/// This is the default sink of [`EventSpaces`](crate::EventSpaces).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, operation: &'static str, error: &UsageError) {
        tracing::warn!(operation, %error, "ignored malformed call");
    }
}
