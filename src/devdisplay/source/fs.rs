use super::SourceFetcher;
use crate::error::{DevDisplayError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads sources from a data directory on disk.
pub struct FileFetcher {
    data_dir: PathBuf,
}

impl FileFetcher {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

#[async_trait]
impl SourceFetcher for FileFetcher {
    async fn fetch(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| DevDisplayError::source_failure(name, format!("{}: {}", path.display(), e)))
    }

    fn locate(&self, name: &str) -> String {
        self.path_for(name).display().to_string()
    }
}
