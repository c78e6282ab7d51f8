//! Display sources for asset URIs.
//!
//! The webview cannot load `file://` URIs, so local photos are inlined as
//! base64 data URLs. Encoding runs on the blocking pool and the results are
//! cached by URI, so a re-render never touches the disk.

use base64::Engine;
use dioxus::prelude::*;
use photo_gallery::GalleryState;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Resolved `src` values keyed by asset URI, shared through context
#[derive(Clone, Copy)]
pub struct ImageSources(Signal<HashMap<String, String>>);

impl ImageSources {
    /// The resolved source, or an empty string while it is still loading
    pub fn src(&self, uri: &str) -> String {
        self.0.read().get(uri).cloned().unwrap_or_default()
    }
}

/// Keeps [`ImageSources`] in step with the listed assets
pub fn use_image_sources(gallery: Signal<GalleryState>) -> ImageSources {
    let mut sources = use_signal(HashMap::<String, String>::new);
    // only changes when the listed URIs do, not on loading flags
    let uris = use_memo(move || {
        gallery
            .read()
            .assets
            .iter()
            .map(|a| a.uri.clone())
            .collect::<Vec<_>>()
    });

    use_resource(move || async move {
        let uris = uris();
        let missing = {
            let known = sources.peek();
            missing_uris(&uris, &known)
        };
        let resolved = load_image_srcs(missing).await;

        let wanted: HashSet<&String> = uris.iter().collect();
        let mut sources = sources.write();
        sources.retain(|uri, _| wanted.contains(uri));
        sources.extend(resolved);
    });

    ImageSources(sources)
}

fn missing_uris(uris: &[String], known: &HashMap<String, String>) -> Vec<String> {
    uris.iter()
        .filter(|uri| !known.contains_key(*uri))
        .cloned()
        .collect()
}

/// Encodes `uris` on the blocking pool
pub async fn load_image_srcs(uris: Vec<String>) -> Vec<(String, String)> {
    if uris.is_empty() {
        return Vec::new();
    }
    log::debug!("Encoding {} photos for display", uris.len());
    tokio::task::spawn_blocking(move || {
        uris.into_iter()
            .map(|uri| {
                let src = image_src(&uri);
                (uri, src)
            })
            .collect()
    })
    .await
    .unwrap_or_else(|e| {
        log::error!("Encoding photos failed: {}", e);
        Vec::new()
    })
}

/// Turns an asset URI into something an `<img>` can display.
///
/// Blocking for `file://` URIs; everything else (e.g. `content://`) is
/// passed through.
fn image_src(uri: &str) -> String {
    let Some(path) = uri.strip_prefix("file://") else {
        return uri.to_string();
    };
    match std::fs::read(path) {
        Ok(bytes) => format!(
            "data:{};base64,{}",
            mime_type(Path::new(path)),
            base64::engine::general_purpose::STANDARD.encode(bytes)
        ),
        Err(e) => {
            log::warn!("Failed to read {}: {}", path, e);
            uri.to_string()
        }
    }
}

fn mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        _ => "image/jpeg",
    }
}
