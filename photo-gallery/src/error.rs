use std::fmt;

/// Failure reported by a platform capability (media store, camera, share sheet)
#[derive(Debug)]
pub enum ProviderError {
    PermissionDenied(String),
    Timeout(String),
    Cancelled(String),
    PlatformNotSupported(String),
    Io(std::io::Error),
    Other(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            ProviderError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            ProviderError::Cancelled(msg) => write!(f, "Cancelled: {}", msg),
            ProviderError::PlatformNotSupported(msg) => {
                write!(f, "Platform not supported: {}", msg)
            }
            ProviderError::Io(e) => write!(f, "IO error: {}", e),
            ProviderError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<std::io::Error> for ProviderError {
    fn from(e: std::io::Error) -> Self {
        ProviderError::Io(e)
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Other(format!("Malformed platform response: {}", e))
    }
}

impl From<tokio::task::JoinError> for ProviderError {
    fn from(e: tokio::task::JoinError) -> Self {
        ProviderError::Other(format!("Background task failed: {}", e))
    }
}

/// Platform capability a permission prompt belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionScope {
    MediaLibrary,
    Camera,
}

/// User-visible gallery errors. All of them are recoverable.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryError {
    PermissionDenied(PermissionScope),
    LoadFailed(String),
    DeleteFailed(String),
    CaptureFailed(String),
    /// Capability notice, not a failure: the device has no share target
    ShareUnavailable,
    ShareFailed(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::PermissionDenied(PermissionScope::MediaLibrary) => {
                write!(f, "Permission denied: media library")
            }
            GalleryError::PermissionDenied(PermissionScope::Camera) => {
                write!(f, "Permission denied: camera")
            }
            GalleryError::LoadFailed(msg) => write!(f, "Loading photos failed: {}", msg),
            GalleryError::DeleteFailed(msg) => write!(f, "Deleting photo failed: {}", msg),
            GalleryError::CaptureFailed(msg) => write!(f, "Capturing photo failed: {}", msg),
            GalleryError::ShareUnavailable => write!(f, "Sharing is not available on this device"),
            GalleryError::ShareFailed(msg) => write!(f, "Sharing photo failed: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {}

impl GalleryError {
    /// Fluent message id used by the UI to render this notice
    pub fn message_key(&self) -> &'static str {
        match self {
            GalleryError::PermissionDenied(PermissionScope::MediaLibrary) => {
                "notice-media-permission-denied"
            }
            GalleryError::PermissionDenied(PermissionScope::Camera) => {
                "notice-camera-permission-denied"
            }
            GalleryError::LoadFailed(_) => "notice-load-failed",
            GalleryError::DeleteFailed(_) => "notice-delete-failed",
            GalleryError::CaptureFailed(_) => "notice-capture-failed",
            GalleryError::ShareUnavailable => "notice-share-unavailable",
            GalleryError::ShareFailed(_) => "notice-share-failed",
        }
    }

    /// False for capability notices that do not describe a failed operation
    pub fn is_failure(&self) -> bool {
        !matches!(self, GalleryError::ShareUnavailable)
    }
}
