use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::core::error::{InspectError, Result};
use crate::core::types::{system_time_to_datetime, EntryInfo, EntryKind, HashAlgorithm};
use crate::utils::path::{base_name, extension_of, is_hidden, stem_of};
use crate::utils::{digest_bytes, sniff_mime};

/// Non-blocking twin of [`FileEntry`](crate::entry::FileEntry). Same
/// contract per operation: defaults instead of errors, live filesystem
/// reads, no added atomicity. Pure string queries stay synchronous.
#[derive(Debug, Clone)]
pub struct AsyncFileEntry {
    path: PathBuf,
}

impl AsyncFileEntry {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        fs::metadata(&self.path).await.is_ok()
    }

    pub async fn is_file(&self) -> bool {
        match fs::metadata(&self.path).await {
            Ok(metadata) => metadata.is_file(),
            Err(err) => {
                log::debug!("stat failed for {}: {}", self.path.display(), err);
                false
            }
        }
    }

    pub async fn is_directory(&self) -> bool {
        match fs::metadata(&self.path).await {
            Ok(metadata) => metadata.is_dir(),
            Err(err) => {
                log::debug!("stat failed for {}: {}", self.path.display(), err);
                false
            }
        }
    }

    pub fn extension(&self) -> String {
        extension_of(&self.path_str())
    }

    pub fn name(&self, remove_extension: bool) -> String {
        if remove_extension {
            stem_of(&self.path_str())
        } else {
            base_name(&self.path_str())
        }
    }

    pub async fn size(&self) -> u64 {
        match fs::metadata(&self.path).await {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                log::debug!("stat failed for {}: {}", self.path.display(), err);
                0
            }
        }
    }

    pub async fn hash(&self, algorithm: HashAlgorithm) -> String {
        match self.read_contents().await {
            Ok(data) => digest_bytes(algorithm, &data),
            Err(err) => {
                log::debug!("{} digest skipped for {}: {}", algorithm, self.path.display(), err);
                String::new()
            }
        }
    }

    pub async fn mime_type(&self) -> String {
        match self.read_contents().await {
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

    pub async fn info(&self) -> EntryInfo {
        let metadata = fs::metadata(&self.path).await.ok();
        let kind = metadata
            .as_ref()
            .map(EntryKind::from_metadata)
            .unwrap_or(EntryKind::Missing);

        let extension = match self.extension() {
            ext if ext.is_empty() => None,
            ext => Some(ext),
        };

        let mime_type = match self.mime_type().await {
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

    pub async fn mkdir(&self, recursive: bool) -> bool {
        if self.exists().await {
            return false;
        }

        let result = if recursive {
            fs::create_dir_all(&self.path).await
        } else {
            fs::create_dir(&self.path).await
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                log::warn!("mkdir failed for {}: {}", self.path.display(), err);
                false
            }
        }
    }

    pub async fn rm(&self, recursive: bool) -> bool {
        let result = if self.is_directory().await {
            if recursive {
                fs::remove_dir_all(&self.path).await
            } else {
                fs::remove_dir(&self.path).await
            }
        } else if self.is_file().await {
            fs::remove_file(&self.path).await
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

    async fn read_contents(&self) -> Result<Vec<u8>> {
        if !self.is_file().await {
            return Err(InspectError::NotAFile(self.path.clone()));
        }
        Ok(fs::read(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::FileEntry;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_async_queries_match_sync() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("data.txt");
        std_fs::write(&file_path, "Hello, world!").unwrap();

        let sync_entry = FileEntry::new(&file_path);
        let async_entry = AsyncFileEntry::new(&file_path);

        assert_eq!(async_entry.exists().await, sync_entry.exists());
        assert_eq!(async_entry.is_file().await, sync_entry.is_file());
        assert_eq!(async_entry.is_directory().await, sync_entry.is_directory());
        assert_eq!(async_entry.size().await, sync_entry.size());
        assert_eq!(async_entry.extension(), sync_entry.extension());
        assert_eq!(async_entry.name(true), sync_entry.name(true));
        assert_eq!(
            async_entry.hash(HashAlgorithm::Sha256).await,
            sync_entry.hash(HashAlgorithm::Sha256)
        );
        assert_eq!(async_entry.mime_type().await, sync_entry.mime_type());
    }

    #[tokio::test]
    async fn test_async_defaults_on_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let entry = AsyncFileEntry::new(temp_dir.path().join("missing"));

        assert!(!entry.exists().await);
        assert_eq!(entry.size().await, 0);
        assert_eq!(entry.hash(HashAlgorithm::Md5).await, "");
        assert_eq!(entry.mime_type().await, "");
        assert_eq!(entry.info().await.kind, EntryKind::Missing);
    }

    #[tokio::test]
    async fn test_async_mkdir_and_rm() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let entry = AsyncFileEntry::new(&nested);
        assert!(!entry.mkdir(false).await);
        assert!(entry.mkdir(true).await);
        assert!(entry.is_directory().await);
        assert!(!entry.mkdir(true).await);

        std_fs::write(nested.join("inner.txt"), "x").unwrap();
        assert!(!entry.rm(false).await);
        assert!(entry.rm(true).await);
        assert!(!entry.exists().await);
    }
}
