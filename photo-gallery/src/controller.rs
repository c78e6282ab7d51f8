//! Paginated asset list with load / load-more / refresh and per-asset actions.
//!
//! Only one pagination request may be applied at a time. `load_initial` and
//! `load_more` are dropped while a request is outstanding; `refresh`
//! supersedes it. Every request carries the generation it was issued under
//! and a response from an older generation is discarded on arrival, so a
//! slow page can never overwrite a list that was reset in the meantime.

use crate::error::GalleryError;
use crate::models::{Asset, AssetId, AssetPage, Cursor, PageRequest};
use crate::provider::{MediaStore, ShareProvider};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Gallery state as observed by the UI
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub assets: Vec<Asset>,
    pub cursor: Option<Cursor>,
    pub has_more: bool,
    /// A pagination request is outstanding
    pub loading: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            cursor: None,
            has_more: true,
            loading: false,
        }
    }
}

/// What happened to a pagination call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was applied to the list
    Applied,
    /// Nothing was requested: no more pages, or a request is in flight
    Skipped,
    /// The response arrived after a refresh and was discarded
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Apply {
    Replace,
    Append,
}

#[derive(Debug, Default)]
struct Inner {
    state: GalleryState,
    generation: u64,
    /// Generation of the outstanding request
    in_flight: Option<u64>,
}

pub struct GalleryController<M, S> {
    store: M,
    sharer: S,
    page_size: u32,
    inner: Mutex<Inner>,
    updates: watch::Sender<GalleryState>,
}

impl<M: MediaStore, S: ShareProvider> GalleryController<M, S> {
    pub fn new(store: M, sharer: S, page_size: u32) -> Self {
        let (updates, _rx) = watch::channel(GalleryState::default());
        Self {
            store,
            sharer,
            page_size: page_size.max(1),
            inner: Mutex::new(Inner::default()),
            updates,
        }
    }

    pub fn store(&self) -> &M {
        &self.store
    }

    pub fn snapshot(&self) -> GalleryState {
        self.lock().state.clone()
    }

    /// Receives a fresh [`GalleryState`] after every mutation
    pub fn subscribe(&self) -> watch::Receiver<GalleryState> {
        self.updates.subscribe()
    }

    /// Requests the first page and replaces the list with it
    pub async fn load_initial(&self) -> Result<LoadOutcome, GalleryError> {
        let generation = {
            let mut inner = self.lock();
            if inner.in_flight.is_some() {
                log::debug!("Initial load skipped, request already in flight");
                return Ok(LoadOutcome::Skipped);
            }
            self.begin(&mut inner)
        };

        let result = self
            .store
            .list_photos(&PageRequest::first(self.page_size))
            .await;
        self.finish(generation, result, Apply::Replace)
    }

    /// Requests the page after the stored cursor and appends it
    pub async fn load_more(&self) -> Result<LoadOutcome, GalleryError> {
        let (generation, request) = {
            let mut inner = self.lock();
            if !inner.state.has_more || inner.in_flight.is_some() {
                return Ok(LoadOutcome::Skipped);
            }
            // Without a cursor the next page is the first page
            let Some(cursor) = inner.state.cursor.clone() else {
                drop(inner);
                return self.load_initial().await;
            };
            (
                self.begin(&mut inner),
                PageRequest::after(self.page_size, cursor),
            )
        };

        log::debug!("Loading more photos after {:?}", request.after);
        let result = self.store.list_photos(&request).await;
        self.finish(generation, result, Apply::Append)
    }

    /// Starts over from the first page, superseding any outstanding request.
    ///
    /// The list is only replaced once the fresh page arrives; on failure the
    /// previous list and cursor stay as they were.
    pub async fn refresh(&self) -> Result<LoadOutcome, GalleryError> {
        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            if inner.in_flight.is_some() {
                log::debug!(
                    "Refresh supersedes request of generation {}",
                    inner.generation - 1
                );
            }
            self.begin(&mut inner)
        };

        let result = self
            .store
            .list_photos(&PageRequest::first(self.page_size))
            .await;
        self.finish(generation, result, Apply::Replace)
    }

    /// Deletes one asset from the platform library and from the list.
    ///
    /// Returns whether the asset was still in the list; an asset already
    /// dropped by a concurrent refresh is fine.
    pub async fn delete(&self, asset: &Asset) -> Result<bool, GalleryError> {
        log::info!("Deleting photo {}", asset.id);
        self.store
            .delete_assets(std::slice::from_ref(&asset.id))
            .await
            .map_err(|e| {
                log::error!("Deleting photo {} failed: {}", asset.id, e);
                GalleryError::DeleteFailed(e.to_string())
            })?;

        let removed = {
            let mut inner = self.lock();
            let removed = remove_by_id(&mut inner.state.assets, &asset.id);
            if removed {
                self.updates.send_replace(inner.state.clone());
            }
            removed
        };
        if !removed {
            log::debug!("Photo {} was no longer listed", asset.id);
        }
        Ok(removed)
    }

    /// Opens the platform share flow for one asset. Never touches the list.
    pub async fn share(&self, asset: &Asset) -> Result<(), GalleryError> {
        if !self.sharer.is_available().await {
            log::info!("Sharing not available on this device");
            return Err(GalleryError::ShareUnavailable);
        }
        self.sharer.share(&asset.uri).await.map_err(|e| {
            log::warn!("Sharing photo {} failed: {}", asset.id, e);
            GalleryError::ShareFailed(e.to_string())
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, inner: &mut Inner) -> u64 {
        inner.in_flight = Some(inner.generation);
        inner.state.loading = true;
        self.updates.send_replace(inner.state.clone());
        inner.generation
    }

    fn finish(
        &self,
        generation: u64,
        result: Result<AssetPage, crate::error::ProviderError>,
        apply: Apply,
    ) -> Result<LoadOutcome, GalleryError> {
        let mut inner = self.lock();
        if inner.generation != generation {
            log::debug!(
                "Discarding page of generation {} (current {})",
                generation,
                inner.generation
            );
            return Ok(LoadOutcome::Stale);
        }
        inner.in_flight = None;
        inner.state.loading = false;

        let outcome = match result {
            Ok(page) => {
                let count = page.assets.len();
                apply_page(&mut inner.state, page, apply);
                log::debug!(
                    "Applied page of {} photos ({} total, more: {})",
                    count,
                    inner.state.assets.len(),
                    inner.state.has_more
                );
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                log::error!("Loading photos failed: {}", e);
                Err(GalleryError::LoadFailed(e.to_string()))
            }
        };
        self.updates.send_replace(inner.state.clone());
        outcome
    }
}

fn apply_page(state: &mut GalleryState, page: AssetPage, apply: Apply) {
    if apply == Apply::Replace {
        state.assets.clear();
    }
    let mut seen: HashSet<AssetId> = state.assets.iter().map(|a| a.id.clone()).collect();
    for asset in page.assets {
        if seen.insert(asset.id.clone()) {
            state.assets.push(asset);
        } else {
            log::warn!("Media store returned photo {} twice, ignoring", asset.id);
        }
    }
    state.has_more = page.has_more && page.next_cursor.is_some();
    state.cursor = page.next_cursor;
}

fn remove_by_id(assets: &mut Vec<Asset>, id: &AssetId) -> bool {
    match assets.iter().position(|a| &a.id == id) {
        Some(index) => {
            assets.remove(index);
            true
        }
        None => false,
    }
}
