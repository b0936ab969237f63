//! Resumption points.
//!
//! Stage code propagates [`CompilerError`]s with `?`. The places that catch
//! them and move on to the next unit use [`run_safe`] to normalize whatever
//! came back, and a [`ReportQueue`] so that no caught report is lost.

use std::any::type_name;
use std::error::Error;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::error::CompilerError;
use super::report::Report;

/// Run `f`, turning any failure it returns into a [`CompilerError`].
///
/// Compiler errors pass through untouched; foreign failures are wrapped once.
pub fn run_safe<T, E, F>(f: F) -> Result<T, CompilerError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    f().map_err(|failure| CompilerError::from_foreign(failure.into(), Some(type_name::<E>())))
}

/// Ordered, thread-safe collection of the reports caught at resumption points
#[derive(Debug, Default)]
pub struct ReportQueue {
    reports: Mutex<Vec<Arc<Report>>>,
}

impl ReportQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, error: CompilerError) {
        let report = error.into_report();
        debug!(
            level = report.level().as_str(),
            code = %report.handler().code_string(),
            "queued report: {}",
            report.message()
        );
        self.reports.lock().push(report);
    }

    /// Run one unit of work; on failure queue its report and return `None`
    /// so the caller can continue with the next unit
    pub fn resume<T, E, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        match run_safe(f) {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Check if any queued report has `Error` level
    pub fn has_errors(&self) -> bool {
        self.reports.lock().iter().any(|report| report.is_error())
    }

    /// Snapshot of the queued reports, in arrival order
    pub fn reports(&self) -> Vec<Arc<Report>> {
        self.reports.lock().clone()
    }

    /// Take every queued report, leaving the queue empty
    pub fn drain(&self) -> Vec<Arc<Report>> {
        std::mem::take(&mut *self.reports.lock())
    }
}
