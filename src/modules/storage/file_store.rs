use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::KeyValueStore;
use crate::core::error::{AppError, Result};

/// File-backed key-value store
///
/// Each key maps to `<data_dir>/<key>.json`. Writes land in a temp file and
/// are renamed into place, so a crash cannot leave a torn entry behind.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();

        fs::create_dir_all(&data_dir).await.map_err(|e| {
            tracing::error!("Failed to create data dir {}: {}", data_dir.display(), e);
            AppError::Storage(format!("failed to create data directory: {}", e))
        })?;

        Ok(Self { data_dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!("Failed to read entry '{}': {}", key, e);
                Err(AppError::Storage(format!(
                    "failed to read entry '{}': {}",
                    key, e
                )))
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.entry_path(key);
        let tmp = self.data_dir.join(format!("{}.json.tmp", key));

        fs::write(&tmp, value).await.map_err(|e| {
            tracing::error!("Failed to write entry '{}': {}", key, e);
            AppError::Storage(format!("failed to write entry '{}': {}", key, e))
        })?;

        fs::rename(&tmp, &path).await.map_err(|e| {
            tracing::error!("Failed to commit entry '{}': {}", key, e);
            AppError::Storage(format!("failed to commit entry '{}': {}", key, e))
        })
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!("Failed to remove entry '{}': {}", key, e);
                Err(AppError::Storage(format!(
                    "failed to remove entry '{}': {}",
                    key, e
                )))
            }
        }
    }
}
