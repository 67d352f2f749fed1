use std::path::Path;

use crate::draw::LoadedImage;
use crate::upload::{UploadError, UploadId, UploadOutcome};

use super::{Pad, PadError};

impl Pad {
    /// The current image underlay.
    pub fn loaded_image(&self) -> Option<&LoadedImage> {
        self.loaded_image.as_ref()
    }

    /// Replaces the underlay and composites it. Drawings are cleared.
    ///
    /// The image is only kept once it has been composited; on error the
    /// previous image and the surface stay as they were.
    pub fn load_image(&mut self, image: LoadedImage) -> Result<(), PadError> {
        self.surface.composite_image(Some(&image))?;
        self.loaded_image = Some(image);
        Ok(())
    }

    /// Drops the underlay and re-composites (leaving a blank surface).
    pub fn remove_image(&mut self) -> Result<(), PadError> {
        self.loaded_image = None;
        self.surface.composite_image(None)?;
        log::info!("Image removed");
        Ok(())
    }

    /// Starts a background upload of the file at `path`.
    ///
    /// The surface is untouched until the outcome is applied by
    /// [`poll_uploads`](Self::poll_uploads) or
    /// [`wait_for_uploads`](Self::wait_for_uploads).
    pub fn request_upload(&mut self, path: &Path) -> Result<UploadId, PadError> {
        let uploads = self.uploads.as_mut().ok_or(UploadError::NotRunning)?;
        Ok(uploads.request_upload(path)?)
    }

    /// Number of uploads whose outcome has not been applied.
    pub fn pending_uploads(&self) -> usize {
        self.uploads.as_ref().map_or(0, |uploads| uploads.pending())
    }

    /// Applies every upload outcome that is ready, without blocking.
    ///
    /// # Returns
    /// Number of outcomes applied
    pub fn poll_uploads(&mut self) -> Result<usize, PadError> {
        let mut applied = 0;
        while let Some(outcome) = self.uploads.as_mut().and_then(|u| u.try_take_outcome()) {
            self.apply_upload_outcome(outcome)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Blocks until no upload is in flight, applying outcomes as they arrive.
    ///
    /// Must not be called from inside the tokio runtime driving the uploads.
    pub fn wait_for_uploads(&mut self) -> Result<usize, PadError> {
        let mut applied = 0;
        while let Some(outcome) = self.uploads.as_mut().and_then(|u| u.wait_for_outcome()) {
            self.apply_upload_outcome(outcome)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Applies one outcome. Only a decoded image changes state; failures and
    /// cancellations leave the previous image and drawings alone.
    fn apply_upload_outcome(&mut self, outcome: UploadOutcome) -> Result<(), PadError> {
        match outcome {
            UploadOutcome::Loaded { id, path, image } => {
                log::info!(
                    "Upload #{id} loaded {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                );
                if let Err(err) = self.load_image(image) {
                    log::warn!("Upload #{id} of {} could not be composited: {err}", path.display());
                }
                Ok(())
            }
            UploadOutcome::Failed { id, path, reason } => {
                log::warn!("Upload #{id} of {} failed: {reason}", path.display());
                Ok(())
            }
            UploadOutcome::Cancelled { id, reason } => {
                log::info!("Upload #{id} cancelled: {reason}");
                Ok(())
            }
        }
    }
}
