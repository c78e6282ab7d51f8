//! Wiring between the gallery controller, the screen navigator and the
//! device capabilities.
//!
//! Every UI event goes through [`GallerySession`]. Failures never escape it:
//! they leave state as it was and raise a [`GalleryError`] notice instead.

use crate::controller::{GalleryController, GalleryState, LoadOutcome};
use crate::error::{GalleryError, PermissionScope, ProviderError};
use crate::models::{Asset, CameraFacing, Permission};
use crate::navigator::{Screen, ScreenNavigator};
use crate::provider::{CaptureProvider, MediaStore, ShareProvider};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Whether the photo library may be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaAccess {
    #[default]
    Unknown,
    Granted,
    /// Denied: the gallery is replaced by a persistent notice
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub navigator: ScreenNavigator,
    pub facing: CameraFacing,
    pub media_access: MediaAccess,
    /// A capture is being taken or saved
    pub capturing: bool,
    /// Blocking notice shown until dismissed
    pub notice: Option<GalleryError>,
}

impl SessionState {
    pub fn screen(&self) -> &Screen {
        self.navigator.current()
    }
}

pub struct GallerySession<M, C, S> {
    gallery: GalleryController<M, S>,
    camera: C,
    state: Mutex<SessionState>,
    updates: watch::Sender<SessionState>,
}

impl<M, C, S> GallerySession<M, C, S>
where
    M: MediaStore,
    C: CaptureProvider,
    S: ShareProvider,
{
    pub fn new(gallery: GalleryController<M, S>, camera: C) -> Self {
        let (updates, _rx) = watch::channel(SessionState::default());
        Self {
            gallery,
            camera,
            state: Mutex::new(SessionState::default()),
            updates,
        }
    }

    pub fn gallery(&self) -> &GalleryController<M, S> {
        &self.gallery
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn gallery_state(&self) -> GalleryState {
        self.gallery.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.updates.subscribe()
    }

    /// Asks for photo library access and loads the first page
    pub async fn start(&self) {
        log::info!("Starting gallery session");
        self.unlock_library().await;
    }

    /// Prompts for photo library access again after a denial
    pub async fn retry_permission(&self) {
        if self.lock().media_access != MediaAccess::Blocked {
            return;
        }
        self.unlock_library().await;
    }

    pub async fn load_more(&self) {
        if !self.library_open() {
            return;
        }
        if let Err(e) = self.gallery.load_more().await {
            self.raise(e);
        }
    }

    pub async fn refresh(&self) {
        if !self.library_open() {
            return;
        }
        if let Err(e) = self.gallery.refresh().await {
            self.raise(e);
        }
    }

    /// Shows `asset` in the viewer
    pub fn select(&self, asset: Asset) {
        self.update(|state| {
            if let Err(e) = state.navigator.view(asset) {
                log::debug!("Select ignored: {}", e);
            }
        });
    }

    /// Leaves the viewer
    pub fn back(&self) {
        self.update(|state| {
            if let Err(e) = state.navigator.close_viewer() {
                log::debug!("Back ignored: {}", e);
            }
        });
    }

    /// Switches to the camera once camera permission is granted
    pub async fn open_camera(&self) {
        if self.lock().screen() != &Screen::Gallery {
            log::warn!("Camera can only be opened from the gallery");
            return;
        }

        let permission = match self.camera.permission().await {
            Ok(Permission::Granted) => Ok(Permission::Granted),
            Ok(Permission::Denied) => self.camera.request_permission().await,
            Err(e) => Err(e),
        };
        match permission {
            Ok(Permission::Granted) => self.update(|state| {
                if let Err(e) = state.navigator.open_camera() {
                    log::debug!("Camera not opened: {}", e);
                }
            }),
            Ok(Permission::Denied) => {
                log::info!("Camera permission denied");
                self.raise(GalleryError::PermissionDenied(PermissionScope::Camera));
            }
            Err(e) => {
                log::warn!("Camera permission check failed: {}", e);
                self.raise(GalleryError::PermissionDenied(PermissionScope::Camera));
            }
        }
    }

    pub fn cancel_camera(&self) {
        self.update(|state| {
            if state.capturing {
                log::debug!("Cancel ignored while a capture is saved");
            } else if let Err(e) = state.navigator.close_camera() {
                log::debug!("Cancel ignored: {}", e);
            }
        });
    }

    pub fn toggle_facing(&self) {
        self.update(|state| state.facing = state.facing.toggled());
    }

    /// Takes a picture, saves it to the library, refreshes the list and
    /// returns to the gallery
    pub async fn capture(&self) {
        let facing = {
            let mut state = self.lock();
            if state.screen() != &Screen::Camera || state.capturing {
                return;
            }
            state.capturing = true;
            self.updates.send_replace(state.clone());
            state.facing
        };

        let saved = self.take_and_save(facing).await;
        self.update(|state| state.capturing = false);

        match saved {
            Ok(asset) => {
                log::info!("Captured photo saved as {}", asset.id);
                let refreshed = self.gallery.refresh().await;
                self.update(|state| {
                    // the user may have left the camera in the meantime
                    if state.screen() != &Screen::Camera {
                        log::debug!("Capture finished after the camera was left");
                    } else if let Err(e) = state.navigator.close_camera() {
                        log::debug!("Camera not closed after capture: {}", e);
                    }
                });
                if let Err(e) = refreshed {
                    self.raise(e);
                }
            }
            Err(e) => {
                log::error!("Capture failed: {}", e);
                self.raise(GalleryError::CaptureFailed(e.to_string()));
            }
        }
    }

    /// Deletes the asset shown in the viewer and returns to the gallery
    pub async fn delete_selected(&self) {
        let Some(asset) = self.selection() else {
            return;
        };
        match self.gallery.delete(&asset).await {
            Ok(_) => self.update(|state| {
                if !state.navigator.is_viewing(&asset.id) {
                    log::debug!("Photo {} deleted after the viewer moved on", asset.id);
                } else if let Err(e) = state.navigator.close_viewer() {
                    log::debug!("Viewer not closed after delete: {}", e);
                }
            }),
            Err(e) => self.raise(e),
        }
    }

    /// Shares the asset shown in the viewer
    pub async fn share_selected(&self) {
        let Some(asset) = self.selection() else {
            return;
        };
        if let Err(e) = self.gallery.share(&asset).await {
            self.raise(e);
        }
    }

    pub fn dismiss_notice(&self) {
        self.update(|state| state.notice = None);
    }

    async fn unlock_library(&self) {
        let store = self.gallery.store();
        let permission = match store.permission().await {
            Ok(Permission::Granted) => Ok(Permission::Granted),
            Ok(Permission::Denied) => store.request_permission().await,
            Err(e) => Err(e),
        };

        match permission {
            Ok(Permission::Granted) => {
                self.update(|state| state.media_access = MediaAccess::Granted);
                match self.gallery.load_initial().await {
                    Ok(LoadOutcome::Skipped) => {
                        log::debug!("Initial load already running")
                    }
                    Ok(_) => {}
                    Err(e) => self.raise(e),
                }
            }
            Ok(Permission::Denied) => {
                log::warn!("Photo library permission denied");
                self.update(|state| state.media_access = MediaAccess::Blocked);
            }
            Err(e) => {
                log::error!("Photo library permission check failed: {}", e);
                self.update(|state| state.media_access = MediaAccess::Blocked);
            }
        }
    }

    async fn take_and_save(&self, facing: CameraFacing) -> Result<Asset, ProviderError> {
        let file_uri = self.camera.take_picture(facing).await?;
        log::debug!("Picture taken: {}", file_uri);
        self.gallery.store().save_photo(&file_uri).await
    }

    fn selection(&self) -> Option<Asset> {
        self.lock().navigator.selection().cloned()
    }

    fn library_open(&self) -> bool {
        self.lock().media_access == MediaAccess::Granted
    }

    fn raise(&self, notice: GalleryError) {
        log::info!("Notice: {}", notice);
        self.update(|state| state.notice = Some(notice));
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        let mut state = self.lock();
        f(&mut state);
        self.updates.send_replace(state.clone());
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
