//! Display components attached to reports.
//!
//! Components are opaque to this crate: each handler decides which shapes it
//! attaches and each consumer decides how to show them. [`Label`] and
//! [`Hint`] cover the common cases.

use std::any::Any;
use std::fmt::Debug;

use crate::base::Index;

/// A piece of a report meant for display (source span, suggested fix, ...)
pub trait Component: Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

impl dyn Component {
    /// Recover the concrete component type
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Component>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// A `[start, end)` source span with a message, e.g. "opened here"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub start: Index,
    pub end: Index,
    pub message: String,
}

impl Label {
    pub fn new(start: Index, end: Index, message: impl Into<String>) -> Self {
        Self {
            start,
            end,
            message: message.into(),
        }
    }

    /// Zero-width label at a single position
    pub fn at(index: Index, message: impl Into<String>) -> Self {
        Self::new(index.clone(), index, message)
    }
}

impl Component for Label {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A suggestion for fixing the problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint(pub String);

impl Hint {
    pub fn new(hint: impl Into<String>) -> Self {
        Self(hint.into())
    }
}

impl Component for Hint {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
