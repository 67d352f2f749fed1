//! Data types for image uploads.

use crate::draw::{ImageError, LoadedImage};
use std::path::PathBuf;
use thiserror::Error;

/// Identifier handed out for each upload request, in request order.
pub type UploadId = u64;

/// A request to read and decode one image file.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub id: UploadId,
    pub path: PathBuf,
}

/// Result of one upload, delivered back to the pad session.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// The file decoded; the session should make it the loaded image.
    Loaded {
        id: UploadId,
        path: PathBuf,
        image: LoadedImage,
    },
    /// Reading or decoding failed; prior state stays as it was.
    Failed {
        id: UploadId,
        path: PathBuf,
        reason: String,
    },
    /// The selection was abandoned; prior state stays as it was.
    Cancelled { id: UploadId, reason: String },
}

impl UploadOutcome {
    /// Request id this outcome answers.
    pub fn id(&self) -> UploadId {
        match self {
            UploadOutcome::Loaded { id, .. }
            | UploadOutcome::Failed { id, .. }
            | UploadOutcome::Cancelled { id, .. } => *id,
        }
    }
}

/// Errors that can occur during an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read image file: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] ImageError),

    #[error("Upload cancelled: {0}")]
    Cancelled(String),

    #[error("Upload manager not running")]
    NotRunning,

    #[error("Upload task failed: {0}")]
    TaskFailed(String),
}
