//! # Photo Gallery
//!
//! Paginated photo gallery and screen navigation on top of the platform's
//! media library, camera and share sheet.
//!
//! This crate provides:
//! - [`GalleryController`]: the paginated asset list (load, load more,
//!   refresh) plus delete and share on single assets
//! - [`ScreenNavigator`]: the gallery / camera / viewer state machine
//! - [`GallerySession`]: the wiring between both and the device capabilities
//! - capability traits ([`MediaStore`], [`CaptureProvider`], [`ShareProvider`])
//!   with a directory backed store for desktop and JNI providers for Android
//!
//! ## Platform Separation
//!
//! The core is generic over the capability traits and has no platform code.
//! Android specifics live in [`android`] and are only compiled for Android.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_gallery::{FsMediaStore, GalleryController, GallerySession, Unsupported};
//!
//! let gallery = GalleryController::new(FsMediaStore::new("./data/photos"), Unsupported, 30);
//! let session = GallerySession::new(gallery, Unsupported);
//! session.start().await;
//! ```

pub mod android;
pub mod config;
pub mod controller;
pub mod error;
pub mod fs_store;
pub mod models;
pub mod navigator;
pub mod provider;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::{AndroidConfig, GalleryConfig};
pub use controller::{GalleryController, GalleryState, LoadOutcome};
pub use error::{GalleryError, PermissionScope, ProviderError};
pub use fs_store::FsMediaStore;
pub use models::{Asset, AssetId, AssetPage, CameraFacing, Cursor, PageRequest, Permission};
pub use navigator::{NavigationError, Screen, ScreenNavigator};
pub use provider::{CaptureProvider, MediaStore, ShareProvider, Unsupported};
pub use session::{GallerySession, MediaAccess, SessionState};

#[cfg(target_os = "android")]
pub use android::{AndroidCamera, AndroidMediaStore, AndroidShare};
