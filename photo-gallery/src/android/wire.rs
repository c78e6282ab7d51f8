// JSON exchanged with MainActivity

#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use crate::error::ProviderError;
use crate::models::{Asset, AssetId, AssetPage, Cursor, Permission};
use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAsset {
    id: String,
    uri: String,
    /// Epoch milliseconds
    created_at: i64,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePage {
    assets: Vec<WireAsset>,
    #[serde(default)]
    next_cursor: Option<String>,
    #[serde(default)]
    has_more: bool,
}

impl TryFrom<WireAsset> for Asset {
    type Error = ProviderError;

    fn try_from(wire: WireAsset) -> Result<Self, Self::Error> {
        let created_at = DateTime::from_timestamp_millis(wire.created_at).ok_or_else(|| {
            ProviderError::Other(format!(
                "Photo {} has invalid timestamp {}",
                wire.id, wire.created_at
            ))
        })?;
        Ok(Asset {
            id: AssetId::new(wire.id),
            uri: wire.uri,
            created_at,
            width: wire.width,
            height: wire.height,
        })
    }
}

pub(crate) fn parse_page(json: &str) -> Result<AssetPage, ProviderError> {
    let wire: WirePage = serde_json::from_str(json)?;
    let assets = wire
        .assets
        .into_iter()
        .map(Asset::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let next_cursor = wire.next_cursor.filter(|c| !c.is_empty()).map(Cursor::new);
    Ok(AssetPage {
        has_more: wire.has_more && next_cursor.is_some(),
        assets,
        next_cursor,
    })
}

pub(crate) fn parse_asset(json: &str) -> Result<Asset, ProviderError> {
    let wire: WireAsset = serde_json::from_str(json)?;
    Asset::try_from(wire)
}

pub(crate) fn encode_ids(ids: &[AssetId]) -> Result<String, ProviderError> {
    Ok(serde_json::to_string(ids)?)
}

pub(crate) fn parse_permission(result: &str) -> Result<Permission, ProviderError> {
    match result.trim() {
        "granted" => Ok(Permission::Granted),
        "denied" => Ok(Permission::Denied),
        other => Err(ProviderError::Other(format!(
            "Unexpected permission result {:?}",
            other
        ))),
    }
}
