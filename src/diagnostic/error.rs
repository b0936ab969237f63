//! The compiler error: a report in flight.
//!
//! A [`CompilerError`] couples one [`Report`] to ordinary `Result`
//! propagation. Stages return it with `?` until a resumption point catches
//! it; by then the report is already complete, so the catcher never has to
//! rebuild context.

use std::any::type_name;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::context::{Context, SingleItemContext};
use super::handler::Handler;
use super::handlers::{ForeignFailure, UnexpectedFailure};
use super::report::Report;
use crate::base::DocError;

#[derive(Debug, Clone)]
pub struct CompilerError {
    report: Arc<Report>,
}

impl CompilerError {
    /// Raise a typed failure through its handler
    pub fn new<C: Context, H: Handler<C> + ?Sized>(context: C, handler: &H) -> Self {
        Self::from_report(handler.create_report(context))
    }

    pub fn from_report(report: Report) -> Self {
        Self {
            report: Arc::new(report),
        }
    }

    /// Wrap a foreign failure so it can travel with a report.
    ///
    /// A `CompilerError` is returned unchanged; anything else goes through
    /// [`UnexpectedFailure`] exactly once.
    pub fn wrap<E: Error + Send + Sync + 'static>(failure: E) -> Self {
        Self::from_foreign(Box::new(failure), Some(type_name::<E>()))
    }

    /// [`CompilerError::wrap`] for failures whose concrete type is erased
    pub fn wrap_boxed(failure: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::from_foreign(failure, None)
    }

    pub(crate) fn from_foreign(
        failure: Box<dyn Error + Send + Sync + 'static>,
        type_name: Option<&'static str>,
    ) -> Self {
        match failure.downcast::<CompilerError>() {
            Ok(already) => *already,
            Err(foreign) => {
                let failure = ForeignFailure::new(type_name, foreign.into());
                Self::new(SingleItemContext::new(failure), &UnexpectedFailure)
            }
        }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Shared handle to the carried report
    pub fn report_arc(&self) -> &Arc<Report> {
        &self.report
    }

    pub fn into_report(self) -> Arc<Report> {
        self.report
    }

    /// Check whether both errors carry the very same report
    pub fn ptr_eq(&self, other: &CompilerError) -> bool {
        Arc::ptr_eq(&self.report, &other.report)
    }
}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report.message())
    }
}

impl Error for CompilerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.report
            .cause()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl From<Report> for CompilerError {
    fn from(report: Report) -> Self {
        Self::from_report(report)
    }
}

impl From<DocError> for CompilerError {
    fn from(error: DocError) -> Self {
        Self::wrap(error)
    }
}
