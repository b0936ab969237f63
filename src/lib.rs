//! # mono-base
//!
//! Foundation layer of the mono compiler front-end.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! source      → Sources: cached snapshots from files and buffers
//!   ↓
//! diagnostic  → Context/Handler/Report, CompilerError, resumption points
//!   ↓
//! base        → Primitives (Doc, Index, Line, SourceInfo)
//! ```

// ============================================================================
// MODULES (dependency order: base → diagnostic → source)
// ============================================================================

/// Foundation types: Doc, Index, Line, SourceInfo
pub mod base;

/// Diagnostics: handlers, reports, and the compiler error that carries them
pub mod diagnostic;

/// Sources: file and string providers of document snapshots
pub mod source;

// Re-export foundation types
pub use base::{Doc, DocError, Index, Line, Module, SourceInfo};
pub use diagnostic::{CompilerError, Handler, HandlerInfo, Level, Report, ReportQueue};
pub use source::{FileSourceOptions, Source, TextEncoding};
