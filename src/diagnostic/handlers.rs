//! Handlers provided by the core.
//!
//! - [`UnexpectedFailure`] (`E0000`): anything that is not already a
//!   [`CompilerError`](super::CompilerError)
//! - [`SourceAccessFailure`] (`E0001`): stat, read or decode failures of a
//!   source

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use smol_str::SmolStr;

use super::component::Hint;
use super::context::{Context, SingleItemContext};
use super::handler::{Handler, HandlerInfo};
use super::level::Level;
use super::report::{Cause, Report};

const UNEXPECTED_FAILURE_DESCRIPTION: &str = "\
this error is emitted when a failure that did not come from the compiler's
diagnostic system is caught. typically this is the result of a bug within the
compiler; if you see this error please report it along with the cause chain.";

const SOURCE_ACCESS_DESCRIPTION: &str = "\
this error is emitted when the text of a source cannot be obtained: the file
could not be inspected, could not be read, or is not valid in the encoding the
source was configured with. check that the file exists, is readable, and that
the configured encoding matches its contents.";

/// A failure from outside the diagnostic system
#[derive(Debug, Clone)]
pub struct ForeignFailure {
    /// Rust type name of the failure, when it was known at the wrapping site
    pub type_name: Option<&'static str>,
    pub error: Cause,
}

impl ForeignFailure {
    pub fn new(type_name: Option<&'static str>, error: Cause) -> Self {
        Self { type_name, error }
    }
}

/// Reports failures that are not compiler errors
#[derive(Debug, Clone, Copy, Default)]
pub struct UnexpectedFailure;

impl UnexpectedFailure {
    pub const INFO: HandlerInfo = HandlerInfo::new(
        "unexpected-failure",
        Level::Error,
        0,
        UNEXPECTED_FAILURE_DESCRIPTION,
    );
}

impl Handler<SingleItemContext<ForeignFailure>> for UnexpectedFailure {
    fn info(&self) -> HandlerInfo {
        Self::INFO
    }

    fn create_report(&self, context: SingleItemContext<ForeignFailure>) -> Report {
        let failure = context.into_inner();
        let mut message = failure.error.to_string();
        if message.is_empty() {
            message.push_str("no message");
        }
        let message = match failure.type_name {
            Some(type_name) => format!("{type_name}: {message}"),
            None => message,
        };

        Report::builder(Self::INFO)
            .message(message)
            .shared_cause(failure.error)
            .build()
    }
}

/// What a source was doing when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessOperation {
    /// Reading the modification time
    Stat,
    /// Reading the contents
    Read,
    /// Decoding the contents with the configured encoding
    Decode,
}

impl AccessOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stat => "inspect",
            Self::Read => "read",
            Self::Decode => "decode",
        }
    }
}

/// Everything known about a failed source access
#[derive(Debug)]
pub struct SourceAccessContext {
    pub source_name: SmolStr,
    pub path: PathBuf,
    pub operation: AccessOperation,
    pub error: io::Error,
}

impl Context for SourceAccessContext {}

/// Reports sources whose text cannot be obtained
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceAccessFailure;

impl SourceAccessFailure {
    pub const INFO: HandlerInfo =
        HandlerInfo::new("source-access", Level::Error, 1, SOURCE_ACCESS_DESCRIPTION);
}

impl Handler<SourceAccessContext> for SourceAccessFailure {
    fn info(&self) -> HandlerInfo {
        Self::INFO
    }

    fn create_report(&self, context: SourceAccessContext) -> Report {
        let message = format!(
            "could not {} `{}` for source `{}`: {}",
            context.operation.as_str(),
            context.path.display(),
            context.source_name,
            context.error
        );

        let hint = match (context.operation, context.error.kind()) {
            (_, io::ErrorKind::NotFound) => Some("check that the file exists"),
            (_, io::ErrorKind::PermissionDenied) => Some("check the file's permissions"),
            (AccessOperation::Decode, _) => Some("check the encoding configured for this source"),
            _ => None,
        };

        let builder = Report::builder(Self::INFO)
            .message(message)
            .shared_cause(Arc::new(context.error));
        match hint {
            Some(hint) => builder.hint(hint).build(),
            None => builder.build(),
        }
    }
}
