//! Progress reporting seam for the orchestrator.

/// Receives stage-by-stage status messages during project creation.
pub trait ProgressReporter {
    fn report(&self, message: &str);
}

/// Reporter that forwards status messages to the log.
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn report(&self, message: &str) {
        log::info!("{}", message);
    }
}
