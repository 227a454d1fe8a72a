//! Diagnostic reporting for malformed calls.

use crate::error::UsageError;

/// Receives usage errors from calls that were turned into no-ops.
///
/// The registry reports through this trait instead of returning errors, so a
/// bad argument never interrupts the caller.
pub trait DiagnosticSink: Send + Sync + 'static {
    /// Called once per rejected call.
    fn report(&self, operation: &'static str, error: &UsageError);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&'static str, &UsageError) + Send + Sync + 'static,
{
    fn report(&self, operation: &'static str, error: &UsageError) {
        (self)(operation, error);
    }
}
