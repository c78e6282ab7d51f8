use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable platform identifier of a photo
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A photo owned by the platform media store
///
/// The application only references assets; it never copies or edits the
/// underlying file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    /// Content locator (`file://` on desktop, `content://` on Android)
    pub uri: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Asset {
    pub fn new(id: impl Into<AssetId>, uri: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            created_at,
            width: None,
            height: None,
        }
    }
}

/// Opaque continuation token handed out by the media store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Result of one enumeration call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetPage {
    pub assets: Vec<Asset>,
    pub next_cursor: Option<Cursor>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Photo,
}

/// Enumeration order. Ties on the timestamp are broken by identifier so
/// pages never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    NewestFirst,
}

/// Parameters of a `list_photos` call
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page_size: u32,
    pub after: Option<Cursor>,
    pub kind: MediaKind,
    pub order: SortOrder,
}

impl PageRequest {
    pub fn first(page_size: u32) -> Self {
        Self {
            page_size,
            after: None,
            kind: MediaKind::Photo,
            order: SortOrder::NewestFirst,
        }
    }

    pub fn after(page_size: u32, cursor: Cursor) -> Self {
        Self {
            after: Some(cursor),
            ..Self::first(page_size)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

impl From<bool> for Permission {
    fn from(granted: bool) -> Self {
        if granted {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }
}

/// Which camera lens to capture with. Purely a local UI setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_toggles_back_and_forth() {
        let facing = CameraFacing::default();
        assert_eq!(facing, CameraFacing::Back);
        assert_eq!(facing.toggled(), CameraFacing::Front);
        assert_eq!(facing.toggled().toggled(), CameraFacing::Back);
    }

    #[test]
    fn test_page_request_after_keeps_photo_filter() {
        let request = PageRequest::after(30, Cursor::from("c1"));
        assert_eq!(request.page_size, 30);
        assert_eq!(request.after, Some(Cursor::from("c1")));
        assert_eq!(request.kind, MediaKind::Photo);
        assert_eq!(request.order, SortOrder::NewestFirst);
    }

    #[test]
    fn test_asset_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&AssetId::from("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
