//! Scripted capability fakes for unit tests

use crate::error::ProviderError;
use crate::models::{Asset, AssetId, AssetPage, CameraFacing, Cursor, PageRequest, Permission};
use crate::provider::{CaptureProvider, MediaStore, ShareProvider};
use chrono::{DateTime, Duration};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

struct Scripted {
    page: Result<AssetPage, String>,
    gate: Option<oneshot::Receiver<()>>,
}

pub fn asset(id: &str) -> Asset {
    let base = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
    let offset = id.parse::<i64>().unwrap_or(0);
    Asset::new(
        id,
        format!("file:///photos/{}.jpg", id),
        base - Duration::seconds(offset),
    )
}

pub fn page(ids: &[&str], cursor: Option<&str>, has_more: bool) -> AssetPage {
    AssetPage {
        assets: ids.iter().map(|id| asset(id)).collect(),
        next_cursor: cursor.map(Cursor::from),
        has_more,
    }
}

pub fn ids(assets: &[Asset]) -> Vec<String> {
    assets.iter().map(|a| a.id.to_string()).collect()
}

pub struct FakeStore {
    pages: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<PageRequest>>,
    deleted: Mutex<Vec<AssetId>>,
    saved: Mutex<Vec<String>>,
    fail_deletes: Mutex<bool>,
    delete_gate: Mutex<Option<oneshot::Receiver<()>>>,
    fail_saves: Mutex<bool>,
    permission: Mutex<Permission>,
    grant_on_request: Mutex<Permission>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            fail_deletes: Mutex::new(false),
            delete_gate: Mutex::new(None),
            fail_saves: Mutex::new(false),
            permission: Mutex::new(Permission::Granted),
            grant_on_request: Mutex::new(Permission::Granted),
        }
    }

    /// Permission starts denied and the prompt answers with `on_request`
    pub fn with_permission(on_request: Permission) -> Self {
        let store = Self::new();
        *store.permission.lock().unwrap() = Permission::Denied;
        *store.grant_on_request.lock().unwrap() = on_request;
        store
    }

    pub fn set_grant_on_request(&self, permission: Permission) {
        *self.grant_on_request.lock().unwrap() = permission;
    }

    pub fn push(&self, page: AssetPage) {
        self.pages.lock().unwrap().push_back(Scripted {
            page: Ok(page),
            gate: None,
        });
    }

    pub fn push_error(&self, msg: &str) {
        self.pages.lock().unwrap().push_back(Scripted {
            page: Err(msg.to_string()),
            gate: None,
        });
    }

    /// The response is held back until the returned sender fires
    pub fn push_gated(&self, page: AssetPage) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.pages.lock().unwrap().push_back(Scripted {
            page: Ok(page),
            gate: Some(rx),
        });
        tx
    }

    pub fn fail_deletes(&self) {
        *self.fail_deletes.lock().unwrap() = true;
    }

    /// The next delete is held back until the returned sender fires
    pub fn gate_deletes(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.delete_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<PageRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<AssetId> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

impl MediaStore for FakeStore {
    async fn permission(&self) -> Result<Permission, ProviderError> {
        Ok(*self.permission.lock().unwrap())
    }

    async fn request_permission(&self) -> Result<Permission, ProviderError> {
        let granted = *self.grant_on_request.lock().unwrap();
        *self.permission.lock().unwrap() = granted;
        Ok(granted)
    }

    async fn list_photos(&self, request: &PageRequest) -> Result<AssetPage, ProviderError> {
        self.calls.lock().unwrap().push(request.clone());
        let scripted = self.pages.lock().unwrap().pop_front();
        let Some(scripted) = scripted else {
            return Err(ProviderError::Other("no page scripted".to_string()));
        };
        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.page.map_err(ProviderError::Other)
    }

    async fn delete_assets(&self, ids: &[AssetId]) -> Result<(), ProviderError> {
        let gate = self.delete_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if *self.fail_deletes.lock().unwrap() {
            return Err(ProviderError::Other("delete rejected".to_string()));
        }
        self.deleted.lock().unwrap().extend(ids.iter().cloned());
        Ok(())
    }

    async fn save_photo(&self, file_uri: &str) -> Result<Asset, ProviderError> {
        if *self.fail_saves.lock().unwrap() {
            return Err(ProviderError::Other("save rejected".to_string()));
        }
        self.saved.lock().unwrap().push(file_uri.to_string());
        Ok(asset("0"))
    }
}

pub struct FakeCamera {
    permission: Mutex<Permission>,
    grant_on_request: Permission,
    fail: bool,
    shots: Mutex<Vec<CameraFacing>>,
}

impl FakeCamera {
    pub fn granted() -> Self {
        Self {
            permission: Mutex::new(Permission::Granted),
            grant_on_request: Permission::Granted,
            fail: false,
            shots: Mutex::new(Vec::new()),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: Mutex::new(Permission::Denied),
            grant_on_request: Permission::Denied,
            ..Self::granted()
        }
    }

    /// Not yet granted, but the prompt is accepted
    pub fn prompt_grants() -> Self {
        Self {
            permission: Mutex::new(Permission::Denied),
            ..Self::granted()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::granted()
        }
    }

    pub fn shots(&self) -> Vec<CameraFacing> {
        self.shots.lock().unwrap().clone()
    }
}

impl CaptureProvider for FakeCamera {
    async fn permission(&self) -> Result<Permission, ProviderError> {
        Ok(*self.permission.lock().unwrap())
    }

    async fn request_permission(&self) -> Result<Permission, ProviderError> {
        *self.permission.lock().unwrap() = self.grant_on_request;
        Ok(self.grant_on_request)
    }

    async fn take_picture(&self, facing: CameraFacing) -> Result<String, ProviderError> {
        if self.fail {
            return Err(ProviderError::Cancelled("shutter jammed".to_string()));
        }
        self.shots.lock().unwrap().push(facing);
        Ok("file:///cache/capture.jpg".to_string())
    }
}

pub struct FakeShare {
    available: bool,
    shared: Mutex<Vec<String>>,
}

impl FakeShare {
    pub fn available() -> Self {
        Self {
            available: true,
            shared: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::available()
        }
    }

    pub fn shared(&self) -> Vec<String> {
        self.shared.lock().unwrap().clone()
    }
}

impl ShareProvider for FakeShare {
    async fn is_available(&self) -> bool {
        self.available
    }

    async fn share(&self, uri: &str) -> Result<(), ProviderError> {
        self.shared.lock().unwrap().push(uri.to_string());
        Ok(())
    }
}
