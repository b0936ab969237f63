//! File-backed sources.
//!
//! The snapshot is refreshed from the file's `modified` timestamp: a new read
//! happens only when the file changed after the last successful read. The
//! timestamp seen at that read is remembered too, so a file stamped in the
//! future is not re-read on every check.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use smol_str::SmolStr;
use tracing::warn;

use super::SourceBackend;
use super::encoding::TextEncoding;
use crate::base::{Module, SourceInfo};
use crate::diagnostic::{AccessOperation, CompilerError, SourceAccessContext, SourceAccessFailure};

/// Construction options for a file-backed source
#[derive(Debug, Clone, Default)]
pub struct FileSourceOptions {
    /// Display name; defaults to the absolute path of the file
    pub name: Option<SmolStr>,
    pub encoding: TextEncoding,
    pub module: Option<Module>,
}

impl FileSourceOptions {
    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_module(mut self, module: Module) -> Self {
        self.module = Some(module);
        self
    }
}

#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    encoding: TextEncoding,
    /// Wall-clock time taken right before the last successful read
    last_read: Option<SystemTime>,
    /// File `modified` timestamp observed by the last successful read
    last_modified: Option<SystemTime>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>, encoding: TextEncoding) -> Self {
        Self {
            path: path.into(),
            encoding,
            last_read: None,
            last_modified: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn last_read(&self) -> Option<SystemTime> {
        self.last_read
    }

    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }

    /// Absolute form of `path`, used as the default display name
    pub(crate) fn default_name(path: &Path) -> SmolStr {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        SmolStr::new(absolute.display().to_string())
    }

    /// Read the whole file along with its `modified` timestamp, taken from the
    /// same open handle before the contents
    fn read_bytes(&self) -> io::Result<(Vec<u8>, Option<SystemTime>)> {
        let mut file = fs::File::open(&self.path)?;
        let modified = file.metadata().and_then(|metadata| metadata.modified()).ok();
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok((bytes, modified))
    }

    fn failure(
        &self,
        info: &SourceInfo,
        operation: AccessOperation,
        error: io::Error,
    ) -> CompilerError {
        warn!(
            source = info.name(),
            path = %self.path.display(),
            operation = operation.as_str(),
            %error,
            "source access failed"
        );
        CompilerError::new(
            SourceAccessContext {
                source_name: SmolStr::new(info.name()),
                path: self.path.clone(),
                operation,
                error,
            },
            &SourceAccessFailure,
        )
    }
}

impl SourceBackend for FileBackend {
    fn read_source(&mut self, info: &SourceInfo) -> Result<String, CompilerError> {
        // Taken before reading so a write racing the read still counts as newer
        let started = SystemTime::now();

        let (bytes, modified) = self
            .read_bytes()
            .map_err(|error| self.failure(info, AccessOperation::Read, error))?;
        let text = self.encoding.decode(bytes).map_err(|error| {
            let error = io::Error::new(io::ErrorKind::InvalidData, error);
            self.failure(info, AccessOperation::Decode, error)
        })?;

        self.last_read = Some(started);
        self.last_modified = modified;
        Ok(text)
    }

    fn should_update(&self, info: &SourceInfo) -> Result<bool, CompilerError> {
        let Some(last_read) = self.last_read else {
            return Ok(true);
        };
        let modified = fs::metadata(&self.path)
            .and_then(|metadata| metadata.modified())
            .map_err(|error| self.failure(info, AccessOperation::Stat, error))?;
        Ok(modified > last_read && Some(modified) != self.last_modified)
    }
}
