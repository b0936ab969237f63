//! Sources: producers of document snapshots.
//!
//! A [`Source`] is anything that can produce mono code, such as a file or a
//! string buffer typed into a console. It hands out immutable [`Doc`]s and
//! only builds a new one when its backend reports the content changed.
//!
//! `latest_doc` takes `&mut self`; share a source across threads behind a
//! lock, or keep each source on one worker.

mod encoding;
mod file;
mod string;

use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::{Doc, Module, STRING_SOURCE_NAME, SourceInfo};
use crate::diagnostic::CompilerError;

pub use encoding::{DecodeError, TextEncoding};
pub use file::{FileBackend, FileSourceOptions};
pub use string::StringBackend;

/// Where a source's text comes from.
///
/// `should_update` must not have side effects: calling it repeatedly
/// without reading is always safe.
pub trait SourceBackend: Debug + Send {
    /// Fetch the raw text; may block on I/O
    fn read_source(&mut self, info: &SourceInfo) -> Result<String, CompilerError>;

    /// Check whether the text changed since the last successful read
    fn should_update(&self, info: &SourceInfo) -> Result<bool, CompilerError>;
}

#[derive(Debug)]
pub struct Source {
    info: Arc<SourceInfo>,
    backend: Box<dyn SourceBackend>,
    current: Option<Arc<Doc>>,
}

impl Source {
    pub fn new(info: SourceInfo, backend: impl SourceBackend + 'static) -> Self {
        Self {
            info: Arc::new(info),
            backend: Box::new(backend),
            current: None,
        }
    }

    /// A UTF-8 file named after its absolute path
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::file_with(path, FileSourceOptions::default())
    }

    pub fn file_with(path: impl Into<PathBuf>, options: FileSourceOptions) -> Self {
        let path = path.into();
        let name = options
            .name
            .unwrap_or_else(|| FileBackend::default_name(&path));
        Self::new(
            SourceInfo::new(name, options.module),
            FileBackend::new(path, options.encoding),
        )
    }

    /// Fixed text named `<string source>`
    pub fn string(text: impl Into<String>) -> Self {
        Self::string_with(text, STRING_SOURCE_NAME, None)
    }

    pub fn string_with(
        text: impl Into<String>,
        name: impl Into<SmolStr>,
        module: Option<Module>,
    ) -> Self {
        Self::new(SourceInfo::new(name, module), StringBackend::new(text))
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn module(&self) -> Option<&Module> {
        self.info.module()
    }

    pub fn info(&self) -> &Arc<SourceInfo> {
        &self.info
    }

    pub fn should_update(&self) -> Result<bool, CompilerError> {
        self.backend.should_update(&self.info)
    }

    /// The cached snapshot, without checking for staleness
    pub fn current_doc(&self) -> Option<&Arc<Doc>> {
        self.current.as_ref()
    }

    /// Fetch the latest snapshot.
    ///
    /// Returns the cached document unless there is none yet or the backend
    /// reports a change, in which case the text is read again (possibly
    /// blocking) and a new document replaces the cached one.
    pub fn latest_doc(&mut self) -> Result<Arc<Doc>, CompilerError> {
        if let Some(doc) = &self.current {
            if !self.backend.should_update(&self.info)? {
                trace!(source = self.info.name(), revision = doc.revision(), "snapshot is current");
                return Ok(Arc::clone(doc));
            }
        }

        self.refresh()
    }

    /// Read the text again regardless of staleness and replace the cached
    /// snapshot with the result.
    ///
    /// On failure the cached snapshot is kept.
    pub fn refresh(&mut self) -> Result<Arc<Doc>, CompilerError> {
        let text = self.backend.read_source(&self.info)?;
        let doc = Arc::new(Doc::new(&text, Arc::clone(&self.info)));
        debug!(
            source = self.info.name(),
            revision = doc.revision(),
            lines = doc.line_count(),
            "built new snapshot"
        );
        self.current = Some(Arc::clone(&doc));
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend whose staleness and reads are scripted by the test
    #[derive(Debug)]
    struct Scripted {
        versions: Vec<&'static str>,
        reads: usize,
        stale: bool,
    }

    impl SourceBackend for Scripted {
        fn read_source(&mut self, _info: &SourceInfo) -> Result<String, CompilerError> {
            let text = self.versions[self.reads.min(self.versions.len() - 1)];
            self.reads += 1;
            Ok(text.to_string())
        }

        fn should_update(&self, _info: &SourceInfo) -> Result<bool, CompilerError> {
            Ok(self.stale)
        }
    }

    #[test]
    fn test_string_source_caches_snapshot() {
        let mut source = Source::string("a\r\nb");

        assert!(source.current_doc().is_none());
        let first = source.latest_doc().unwrap();
        let second = source.latest_doc().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.as_str(), "a\nb");
        assert_eq!(source.name(), STRING_SOURCE_NAME);
        assert!(!source.should_update().unwrap());
    }

    #[test]
    fn test_stale_backend_builds_new_snapshot() {
        let backend = Scripted {
            versions: vec!["one", "two"],
            reads: 0,
            stale: true,
        };
        let mut source = Source::new(SourceInfo::new("scripted", None), backend);

        let first = source.latest_doc().unwrap();
        let second = source.latest_doc().unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.as_str(), "one");
        assert_eq!(second.as_str(), "two");
        assert!(second.revision() > first.revision());
        // Superseded snapshots stay usable
        assert_eq!(first.index_at(3).unwrap().line_col(), (1, 4));
    }

    #[test]
    fn test_refresh_replaces_cached_snapshot() {
        let backend = Scripted {
            versions: vec!["one", "two"],
            reads: 0,
            stale: false,
        };
        let mut source = Source::new(SourceInfo::new("scripted", None), backend);

        let first = source.latest_doc().unwrap();
        let refreshed = source.refresh().unwrap();
        let latest = source.latest_doc().unwrap();

        assert_eq!(first.as_str(), "one");
        assert_eq!(refreshed.as_str(), "two");
        assert!(Arc::ptr_eq(&refreshed, &latest));
        assert!(Arc::ptr_eq(source.current_doc().unwrap(), &latest));
    }

    #[test]
    fn test_snapshot_shares_source_identity() {
        let module = Module::new("release");
        let mut source = Source::string_with("x", "repl", Some(module.clone()));
        let doc = source.latest_doc().unwrap();

        assert_eq!(doc.source().name(), "repl");
        assert!(doc.source().module().unwrap().ptr_eq(&module));
        assert_eq!(source.module().unwrap().downcast_ref::<&'static str>(), Some(&"release"));
    }
}
