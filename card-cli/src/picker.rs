//! Image picker backed by the local filesystem.
//!
//! The terminal has no media library, so the user names the photo directly.
//! Filesystem permission errors stand in for a refused library permission.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use card_core::{ImageFormat, ImagePicker, LocalImage, PickError, PickOutcome, PickRequest};

/// Picks the file given on the command line. No path means the user cancelled.
#[derive(Debug, Clone, Default)]
pub struct FsPicker {
    path: Option<PathBuf>,
}

impl FsPicker {
    /// Create a picker that will return `path`.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

fn io_error(path: &Path, e: &io::Error) -> PickError {
    if e.kind() == io::ErrorKind::PermissionDenied {
        PickError::PermissionDenied
    } else {
        PickError::Failed(format!("{}: {e}", path.display()))
    }
}

#[async_trait]
impl ImagePicker for FsPicker {
    async fn pick(&self, request: &PickRequest) -> Result<PickOutcome, PickError> {
        let Some(path) = &self.path else {
            return Ok(PickOutcome::Cancelled);
        };
        tracing::debug!(
            "Picking {} (aspect {}:{})",
            path.display(),
            request.aspect.0,
            request.aspect.1
        );

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
            .ok_or_else(|| {
                PickError::Failed(format!("{}: not a supported image", path.display()))
            })?;

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| io_error(path, &e))?;
        if !metadata.is_file() {
            return Err(PickError::Failed(format!(
                "{}: not a file",
                path.display()
            )));
        }
        // Metadata can succeed on files we cannot read.
        tokio::fs::File::open(path)
            .await
            .map_err(|e| io_error(path, &e))?;

        let absolute = tokio::fs::canonicalize(path)
            .await
            .map_err(|e| io_error(path, &e))?;
        let uri = format!("file://{}", absolute.display());
        Ok(PickOutcome::Selected(LocalImage::new(uri, format)))
    }
}
