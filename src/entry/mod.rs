#[cfg(feature = "tokio")]
pub mod nonblocking;

#[cfg(feature = "tokio")]
pub use nonblocking::AsyncFileEntry;

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{InspectError, Result};
use crate::core::types::{system_time_to_datetime, EntryInfo, EntryKind, HashAlgorithm};
use crate::utils::path::{base_name, extension_of, is_hidden, stem_of};
use crate::utils::{digest_bytes, sniff_mime};

/// One filesystem location, captured as an immutable path at construction.
/// Every query hits the filesystem live; nothing is cached on the entry.
///
/// No query or mutation ever surfaces an error: each failure collapses to
/// the operation's documented default (`false`, `0`, `""`, no-op), so a
/// caller cannot distinguish "does not exist" from "exists but
/// inaccessible". Failures are recorded through `log` for operators who
/// need the detail.
#[derive(Debug, Clone)]
pub struct FileEntry {
    path: PathBuf,
}

impl FileEntry {
    /// The path is not validated; nonexistent or malformed paths simply
    /// make later queries report their defaults.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        fs::metadata(&self.path).is_ok()
    }

    pub fn is_file(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(metadata) => metadata.is_file(),
            Err(err) => {
                log::debug!("stat failed for {}: {}", self.path.display(), err);
                false
            }
        }
    }

    pub fn is_directory(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(metadata) => metadata.is_dir(),
            Err(err) => {
                log::debug!("stat failed for {}: {}", self.path.display(), err);
                false
            }
        }
    }

    /// Extension per the first-dot policy: everything after the first `.`
    /// in the path string, lower-cased. `file.tar.gz` reports `tar.gz`.
    pub fn extension(&self) -> String {
        extension_of(&self.path_str())
    }

    /// Base name (final `/` segment). With `remove_extension`, truncated
    /// at the first `.` within that segment.
    pub fn name(&self, remove_extension: bool) -> String {
        if remove_extension {
            stem_of(&self.path_str())
        } else {
            base_name(&self.path_str())
        }
    }

    /// Byte length per filesystem metadata. `0` on any failure, which is
    /// indistinguishable from an actually-empty file.
    pub fn size(&self) -> u64 {
        match fs::metadata(&self.path) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                log::debug!("stat failed for {}: {}", self.path.display(), err);
                0
            }
        }
    }

    /// Lower-case hex digest over the entry's full content. Empty when the
    /// path is not a regular file or cannot be read. The whole file is
    /// loaded into memory before hashing; very large files are the
    /// caller's problem.
    pub fn hash(&self, algorithm: HashAlgorithm) -> String {
        match self.read_contents() {
            Ok(data) => digest_bytes(algorithm, &data),
            Err(err) => {
                log::debug!("{} digest skipped for {}: {}", algorithm, self.path.display(), err);
                String::new()
            }
        }
    }

    /// Media type detected from the entry's content: magic-byte signature
    /// match first, then the text/binary heuristic (`text/plain` vs
    /// `application/octet-stream`). Empty when the path is not a regular
    /// file or cannot be read.
    pub fn mime_type(&self) -> String {
        match self.read_contents() {
            Ok(data) => sniff_mime(&data),
            Err(err) => {
                log::debug!("mime sniff skipped for {}: {}", self.path.display(), err);
                String::new()
            }
        }
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden(&self.path_str())
    }

    /// Full snapshot of the entry. Fields degrade individually the same
    /// way the underlying queries do.
    pub fn info(&self) -> EntryInfo {
        let metadata = fs::metadata(&self.path).ok();
        let kind = metadata
            .as_ref()
            .map(EntryKind::from_metadata)
            .unwrap_or(EntryKind::Missing);

        let extension = match self.extension() {
            ext if ext.is_empty() => None,
            ext => Some(ext),
        };

        let mime_type = match self.mime_type() {
            mime if mime.is_empty() => None,
            mime => Some(mime),
        };

        EntryInfo {
            path: self.path.clone(),
            name: self.name(false),
            extension,
            kind,
            size: metadata.as_ref().map(|m| m.len()).unwrap_or(0),
            mime_type,
            created_at: metadata
                .as_ref()
                .and_then(|m| m.created().ok())
                .and_then(system_time_to_datetime),
            modified_at: metadata
                .as_ref()
                .and_then(|m| m.modified().ok())
                .and_then(system_time_to_datetime),
            is_hidden: self.is_hidden(),
        }
    }

    /// Creates a directory at the path. `false` without side effects when
    /// anything already exists there; with `recursive`, missing ancestors
    /// are created as well.
    pub fn mkdir(&self, recursive: bool) -> bool {
        if self.exists() {
            return false;
        }

        let result = if recursive {
            fs::create_dir_all(&self.path)
        } else {
            fs::create_dir(&self.path)
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                log::warn!("mkdir failed for {}: {}", self.path.display(), err);
                false
            }
        }
    }

    /// Removes the entry: directories via `remove_dir` (`remove_dir_all`
    /// when `recursive`), regular files via `remove_file`, anything else
    /// is a no-op. `true` unless the attempted removal itself errored, so
    /// removing a nonexistent path succeeds.
    pub fn rm(&self, recursive: bool) -> bool {
        let result = if self.is_directory() {
            if recursive {
                fs::remove_dir_all(&self.path)
            } else {
                fs::remove_dir(&self.path)
            }
        } else if self.is_file() {
            fs::remove_file(&self.path)
        } else {
            Ok(())
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                log::warn!("rm failed for {}: {}", self.path.display(), err);
                false
            }
        }
    }

    fn path_str(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }

    fn read_contents(&self) -> Result<Vec<u8>> {
        if !self.is_file() {
            return Err(InspectError::NotAFile(self.path.clone()));
        }
        Ok(fs::read(&self.path)?)
    }
}
