//! The platform image picker, seen from the composer.
//!
//! The picker is an external collaborator: the host implements
//! [`ImagePicker`] against whatever media library it has, and the composer
//! only ever sees a [`PickOutcome`] or a [`PickError`].

use async_trait::async_trait;
use thiserror::Error;

use crate::LocalImage;

/// Options passed to the picker when it is launched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRequest {
    /// Only offer still images.
    pub images_only: bool,
    /// Let the user crop before returning.
    pub allows_editing: bool,
    /// Crop aspect as `(width, height)`.
    pub aspect: (u32, u32),
    /// Compression quality, 0.0 to 1.0.
    pub quality: f32,
}

impl Default for PickRequest {
    fn default() -> Self {
        Self {
            images_only: true,
            allows_editing: true,
            aspect: (4, 3),
            quality: 1.0,
        }
    }
}

/// What the user did with the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A photo was chosen.
    Selected(LocalImage),
    /// The user backed out of the picker.
    Cancelled,
}

/// Ways a pick can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// The user refused media library access.
    #[error("Media library permission denied")]
    PermissionDenied,

    /// The platform picker failed.
    #[error("Image picker failed: {0}")]
    Failed(String),
}

/// A media library the composer can pick a photo from.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Show the picker and wait for the user.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::PermissionDenied`] if library access was refused
    /// and [`PickError::Failed`] for any platform-level failure.
    async fn pick(&self, request: &PickRequest) -> Result<PickOutcome, PickError>;
}
