use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use tokio::task;

use crate::upload::types::UploadError;

/// Abstraction over how the bytes of a selected file are obtained.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn read(&self, path: &Path) -> Result<Vec<u8>, UploadError>;
}

/// Bundle of dependencies used by the upload pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct UploadDependencies {
    pub source: Arc<dyn ImageSource>,
}

impl Default for UploadDependencies {
    fn default() -> Self {
        Self {
            source: Arc::new(FileImageSource),
        }
    }
}

/// Reads the selected file from disk. An empty path means nothing was selected.
pub struct FileImageSource;

#[async_trait]
impl ImageSource for FileImageSource {
    async fn read(&self, path: &Path) -> Result<Vec<u8>, UploadError> {
        if path.as_os_str().is_empty() {
            return Err(UploadError::Cancelled("no file selected".to_string()));
        }

        let path = path.to_path_buf();
        task::spawn_blocking(move || std::fs::read(path))
            .await
            .map_err(|e| UploadError::TaskFailed(format!("Read task failed: {}", e)))?
            .map_err(UploadError::from)
    }
}
