use crate::Injectable;
use crate::error::ReportError;

/// Sink for report failures that should not abort the caller
pub trait FailureRecorder: Send + Sync {
    fn record(&self, error: &ReportError);
}

/// Records failures as `error`-level tracing events.
#[derive(Debug, Default, Injectable)]
pub struct TracingFailureRecorder;

impl FailureRecorder for TracingFailureRecorder {
    fn record(&self, error: &ReportError) {
        tracing::error!(error = %error, "Report failure");
    }
}
