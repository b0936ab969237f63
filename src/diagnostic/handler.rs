//! Handlers: the mapping from a failure context to a report.
//!
//! A handler doubles as the identity of a kind of diagnostic, which is why it
//! carries the level, a stable numeric code and a long-form description.
//! Handlers are stateless; declare them as unit structs and pass references
//! to them wherever a report is raised.

use std::fmt;

use super::context::Context;
use super::level::Level;
use super::report::Report;

/// Identity of a handler, copied into every report it creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerInfo {
    /// Short machine-friendly name (e.g. `unexpected-failure`)
    pub name: &'static str,
    pub level: Level,
    /// Numeric code; `E0999` has code 999
    pub code: u16,
    /// Long-form explanation, shown when the user asks for one
    pub description: &'static str,
}

impl HandlerInfo {
    pub const fn new(
        name: &'static str,
        level: Level,
        code: u16,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            level,
            code,
            description,
        }
    }

    /// Get the code with its level prefix (e.g. "E0001")
    pub fn code_string(&self) -> String {
        format!("{}{:04}", self.level.code_prefix(), self.code)
    }
}

impl fmt::Display for HandlerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.level, self.code_string())
    }
}

/// Converts a context of shape `C` into a [`Report`].
///
/// `create_report` must not panic: a handler that fails makes its own
/// failure unreportable.
pub trait Handler<C: Context> {
    fn info(&self) -> HandlerInfo;

    fn create_report(&self, context: C) -> Report;

    fn level(&self) -> Level {
        self.info().level
    }

    fn code(&self) -> u16 {
        self.info().code
    }

    fn description(&self) -> &'static str {
        self.info().description
    }
}
