//! Structured reports
//!
//! A [`Report`] is the immutable output of a handler:
//! - Identity of the handler that created it (level, code, description)
//! - Rendered message
//! - Optional lower-level cause, kept for trace display
//! - Ordered display components

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::component::{Component, Hint};
use super::handler::HandlerInfo;
use super::level::Level;

/// Shared lower-level failure behind a report
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub struct Report {
    handler: HandlerInfo,
    message: String,
    cause: Option<Cause>,
    components: Vec<Arc<dyn Component>>,
}

impl Report {
    /// Create a report with a message and nothing else
    pub fn new(handler: HandlerInfo, message: impl Into<String>) -> Self {
        Self {
            handler,
            message: message.into(),
            cause: None,
            components: Vec::new(),
        }
    }

    /// Create a builder for more complex reports
    pub fn builder(handler: HandlerInfo) -> ReportBuilder {
        ReportBuilder::new(handler)
    }

    /// Record the failure that caused this report
    pub fn with_cause<E: Error + Send + Sync + 'static>(mut self, cause: E) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Append a display component
    pub fn with_component<T: Component>(mut self, component: T) -> Self {
        self.components.push(Arc::new(component));
        self
    }

    pub fn handler(&self) -> &HandlerInfo {
        &self.handler
    }

    pub fn level(&self) -> Level {
        self.handler.level
    }

    pub fn is_error(&self) -> bool {
        self.handler.level.is_error()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Shared handle to the cause, for re-exposing it through `Error::source`
    pub fn cause_arc(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Messages of the cause and everything it was caused by, outermost first
    pub fn cause_chain(&self) -> Vec<String> {
        let mut chain = Vec::new();
        let mut next: Option<&(dyn Error + 'static)> =
            self.cause().map(|cause| cause as &(dyn Error + 'static));
        while let Some(err) = next {
            chain.push(err.to_string());
            next = err.source();
        }
        chain
    }

    pub fn components(&self) -> &[Arc<dyn Component>] {
        &self.components
    }

    /// Components of one concrete type, in report order
    pub fn components_of<T: Component>(&self) -> impl Iterator<Item = &T> {
        self.components.iter().filter_map(|c| c.downcast_ref::<T>())
    }

    /// Format the report as plain text
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.handler.code_string(), self.message);
        for hint in self.components_of::<Hint>() {
            result.push_str(&format!("\n  hint: {}", hint.0));
        }
        for cause in self.cause_chain() {
            result.push_str(&format!("\n  caused by: {}", cause));
        }
        result
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.handler, self.message)
    }
}

/// Builder for creating complex reports
pub struct ReportBuilder {
    handler: HandlerInfo,
    message: Option<String>,
    cause: Option<Cause>,
    components: Vec<Arc<dyn Component>>,
}

impl ReportBuilder {
    pub fn new(handler: HandlerInfo) -> Self {
        Self {
            handler,
            message: None,
            cause: None,
            components: Vec::new(),
        }
    }

    /// Set the report message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the cause
    pub fn cause<E: Error + Send + Sync + 'static>(mut self, cause: E) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Set an already shared cause
    pub fn shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Add a display component
    pub fn component<T: Component>(mut self, component: T) -> Self {
        self.components.push(Arc::new(component));
        self
    }

    /// Add a hint
    pub fn hint(self, hint: impl Into<String>) -> Self {
        self.component(Hint::new(hint))
    }

    /// Build the report; falls back to the handler description when no
    /// message was set
    pub fn build(self) -> Report {
        Report {
            message: self
                .message
                .unwrap_or_else(|| self.handler.description.to_string()),
            handler: self.handler,
            cause: self.cause,
            components: self.components,
        }
    }
}
