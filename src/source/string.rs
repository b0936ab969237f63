//! In-memory sources, e.g. console buffers and tests

use super::SourceBackend;
use crate::base::SourceInfo;
use crate::diagnostic::CompilerError;

/// Fixed text; never stale
#[derive(Debug, Clone)]
pub struct StringBackend {
    text: String,
}

impl StringBackend {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl SourceBackend for StringBackend {
    fn read_source(&mut self, _info: &SourceInfo) -> Result<String, CompilerError> {
        Ok(self.text.clone())
    }

    fn should_update(&self, _info: &SourceInfo) -> Result<bool, CompilerError> {
        Ok(false)
    }
}
