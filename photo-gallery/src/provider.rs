//! Capability traits for the platform subsystems the gallery depends on.
//!
//! The gallery core is generic over these traits. Android implementations
//! live in [`crate::android`], the desktop media store in [`crate::fs_store`].

#![allow(async_fn_in_trait)]

use crate::error::ProviderError;
use crate::models::{Asset, AssetId, AssetPage, CameraFacing, PageRequest, Permission};

/// Platform photo library
pub trait MediaStore {
    async fn permission(&self) -> Result<Permission, ProviderError>;

    /// Shows the platform prompt if needed
    async fn request_permission(&self) -> Result<Permission, ProviderError>;

    async fn list_photos(&self, request: &PageRequest) -> Result<AssetPage, ProviderError>;

    async fn delete_assets(&self, ids: &[AssetId]) -> Result<(), ProviderError>;

    /// Imports a captured file into the library
    async fn save_photo(&self, file_uri: &str) -> Result<Asset, ProviderError>;
}

/// Device camera
pub trait CaptureProvider {
    async fn permission(&self) -> Result<Permission, ProviderError>;

    async fn request_permission(&self) -> Result<Permission, ProviderError>;

    /// Returns the uri of the captured file
    async fn take_picture(&self, facing: CameraFacing) -> Result<String, ProviderError>;
}

/// Platform share sheet
pub trait ShareProvider {
    async fn is_available(&self) -> bool;

    async fn share(&self, uri: &str) -> Result<(), ProviderError>;
}

/// Camera and share sheet for platforms without either
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl CaptureProvider for Unsupported {
    async fn permission(&self) -> Result<Permission, ProviderError> {
        Ok(Permission::Denied)
    }

    async fn request_permission(&self) -> Result<Permission, ProviderError> {
        Ok(Permission::Denied)
    }

    async fn take_picture(&self, _facing: CameraFacing) -> Result<String, ProviderError> {
        Err(ProviderError::PlatformNotSupported(
            "Camera not available on this platform".to_string(),
        ))
    }
}

impl ShareProvider for Unsupported {
    async fn is_available(&self) -> bool {
        false
    }

    async fn share(&self, _uri: &str) -> Result<(), ProviderError> {
        Err(ProviderError::PlatformNotSupported(
            "Sharing not available on this platform".to_string(),
        ))
    }
}
