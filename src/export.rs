//! Writing the exported PNG to disk.

use crate::config::ExportConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the exported image.
pub const DEFAULT_FILENAME: &str = "drawing-pad-image.png";

/// Errors that can occur while saving the exported image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save image to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the exported PNG is written. The file is always [`DEFAULT_FILENAME`].
#[derive(Debug, Clone)]
pub struct ExportTarget {
    /// Directory to save the image to.
    pub save_directory: PathBuf,
}

impl Default for ExportTarget {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl ExportTarget {
    /// Builds the target from the `[export]` config section, expanding `~`.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
        }
    }

    /// Full path of the exported file.
    pub fn path(&self) -> PathBuf {
        self.save_directory.join(DEFAULT_FILENAME)
    }
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory).map_err(|source| ExportError::Io {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save PNG bytes to the export target, replacing any previous export.
///
/// # Returns
/// Path to the saved file
pub fn save_png(image_data: &[u8], target: &ExportTarget) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&target.save_directory)?;
    let file_path = directory.join(DEFAULT_FILENAME);
    let io_err = |source| ExportError::Io {
        path: file_path.clone(),
        source,
    };

    log::info!(
        "Saving image to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data).map_err(io_err)?;

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600)).map_err(io_err)?;
    }

    log::info!("Image saved: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
