//! Image upload functionality for the pad.
//!
//! Uploads are the pad's only asynchronous boundary: files are read and
//! decoded on a tokio runtime while the session keeps handling input, and
//! the decoded image replaces the underlay only when its outcome is applied.

pub mod types;

mod dependencies;
mod manager;
mod pipeline;

pub use dependencies::{FileImageSource, ImageSource, UploadDependencies};
pub use manager::UploadManager;
pub use types::{UploadError, UploadId, UploadOutcome, UploadRequest};
