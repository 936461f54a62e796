//! Diagnostic reporting
//!
//! Fetch problems never reach the user; they are reported once each through
//! a [`DiagnosticSink`] and the panel keeps showing what it had.

use crate::error::FetchError;

/// Receiver for non-fatal panel problems
pub trait DiagnosticSink {
    fn report(&self, error: &FetchError);
}

/// Reports through `tracing`: empty data as a warning, failures as errors
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &FetchError) {
        match error {
            FetchError::EmptyVisits => {
                tracing::warn!("No visit data to render");
            }
            other => {
                tracing::error!(error = %other, kind = ?other.kind(), "Failed to load weekly visits");
            }
        }
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&FetchError),
{
    fn report(&self, error: &FetchError) {
        self(error)
    }
}
