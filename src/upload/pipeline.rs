use std::{path::Path, sync::Arc};

use tokio::task;

use crate::draw::LoadedImage;
use crate::upload::{
    dependencies::UploadDependencies,
    types::{UploadError, UploadOutcome, UploadRequest},
};

pub(crate) async fn perform_upload(
    request: UploadRequest,
    dependencies: Arc<UploadDependencies>,
) -> UploadOutcome {
    let UploadRequest { id, path } = request;
    log::debug!("Processing upload #{id}: {}", path.display());

    match read_and_decode(&path, dependencies).await {
        Ok(image) => {
            log::info!(
                "Decoded upload #{id} ({}x{}) from {}",
                image.width(),
                image.height(),
                path.display()
            );
            UploadOutcome::Loaded { id, path, image }
        }
        Err(UploadError::Cancelled(reason)) => {
            log::info!("Upload #{id} cancelled: {reason}");
            UploadOutcome::Cancelled { id, reason }
        }
        Err(err) => {
            log::warn!("Upload #{id} from {} failed: {err}", path.display());
            UploadOutcome::Failed {
                id,
                path,
                reason: err.to_string(),
            }
        }
    }
}

async fn read_and_decode(
    path: &Path,
    dependencies: Arc<UploadDependencies>,
) -> Result<LoadedImage, UploadError> {
    let bytes = dependencies.source.read(path).await?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    task::spawn_blocking(move || LoadedImage::decode(&bytes))
        .await
        .map_err(|e| UploadError::TaskFailed(format!("Decode task failed: {}", e)))?
        .map_err(UploadError::from)
}
