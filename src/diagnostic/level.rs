//! Severity levels for diagnostics

use std::fmt;

/// Severity level of a handler and every report it creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Fatal for the current unit, compilation of it cannot continue
    #[default]
    Error,
    /// Technically allowed, but still problematic
    Warning,
    /// Cosmetic problems such as formatting
    Lint,
}

impl Level {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Lint => "lint",
        }
    }

    /// Letter prefixed to diagnostic codes (`E0001`, `W0001`, `L0001`)
    pub fn code_prefix(&self) -> char {
        match self {
            Self::Error => 'E',
            Self::Warning => 'W',
            Self::Lint => 'L',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level() {
        assert!(Level::Error.is_error());
        assert!(!Level::Warning.is_error());
        assert!(!Level::Lint.is_error());

        assert_eq!(Level::Error.as_str(), "error");
        assert_eq!(Level::Warning.as_str(), "warning");
        assert_eq!(Level::Lint.as_str(), "lint");
        assert_eq!(Level::default(), Level::Error);
    }

    #[test]
    fn test_levels_order_by_severity() {
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Lint);
    }
}
