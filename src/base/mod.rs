//! Foundation types for the mono toolchain.
//!
//! This module provides the values every compiler stage works with:
//! - [`Doc`] - Immutable, newline-normalized source snapshots
//! - [`Index`] - Offset/line/column positions inside a snapshot
//! - [`Line`] - Per-line views derived from a snapshot
//! - [`SourceInfo`], [`Module`] - Identity of the source behind a snapshot
//! - [`DocError`] - Out-of-range lookups
//!
//! This module has NO dependencies on other mono modules.

mod doc;
mod error;
mod line;
mod position;
mod source_info;

pub use doc::{Doc, normalize_newlines};
pub use error::DocError;
pub use line::Line;
pub use position::Index;
pub use source_info::{Module, STRING_SOURCE_NAME, SourceInfo};
