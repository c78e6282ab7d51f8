//! Picks the capability providers for the target platform.

use crate::filesystem;
use photo_gallery::{GalleryConfig, GalleryController, GallerySession};
use std::rc::Rc;

#[cfg(target_os = "android")]
use photo_gallery::{AndroidCamera as Camera, AndroidMediaStore as Store, AndroidShare as Share};

#[cfg(not(target_os = "android"))]
use photo_gallery::{FsMediaStore as Store, Unsupported as Camera, Unsupported as Share};

pub type AppSession = GallerySession<Store, Camera, Share>;

#[cfg(target_os = "android")]
fn providers(config: &GalleryConfig) -> (Store, Camera, Share) {
    (
        Store::new(&config.android),
        Camera::new(&config.android),
        Share::new(&config.android),
    )
}

#[cfg(not(target_os = "android"))]
fn providers(config: &GalleryConfig) -> (Store, Camera, Share) {
    let dir = config
        .media_dir
        .clone()
        .unwrap_or_else(filesystem::photos_dir);
    log::info!("Using photo directory {}", dir.display());
    (Store::new(dir), Camera, Share)
}

pub fn build_session() -> Rc<AppSession> {
    let config = GalleryConfig::load(&filesystem::config_path());
    log::info!("Page size {}", config.page_size);
    let (store, camera, share) = providers(&config);
    Rc::new(GallerySession::new(
        GalleryController::new(store, share, config.page_size),
        camera,
    ))
}
