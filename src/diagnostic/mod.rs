//! Diagnostic model
//!
//! This module separates *reporting* from *control flow*:
//! - [`Context`] describes one failure instance, in a stage-specific shape
//! - [`Handler`] turns a context of its shape into a leveled [`Report`]
//! - [`CompilerError`] carries the report back up the call stack via `?`
//! - [`run_safe`] and [`ReportQueue`] serve the resumption points that catch it

mod component;
mod context;
mod error;
mod handler;
mod handlers;
mod level;
mod report;
mod resume;

pub use component::{Component, Hint, Label};
pub use context::{Context, SingleItemContext};
pub use error::CompilerError;
pub use handler::{Handler, HandlerInfo};
pub use handlers::{
    AccessOperation, ForeignFailure, SourceAccessContext, SourceAccessFailure, UnexpectedFailure,
};
pub use level::Level;
pub use report::{Cause, Report, ReportBuilder};
pub use resume::{ReportQueue, run_safe};
