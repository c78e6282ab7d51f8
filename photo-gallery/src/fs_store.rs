//! Media store over a plain directory of image files.
//!
//! Used on desktop and in tests. Photos are ordered newest first by
//! modification time, ties broken by file name, and the cursor encodes the
//! sort key of the last returned photo as `"<millis>:<file name>"`.

use crate::error::ProviderError;
use crate::models::{Asset, AssetId, AssetPage, Cursor, PageRequest, Permission};
use crate::provider::MediaStore;
use chrono::{DateTime, Utc};
use std::cmp::{Ordering, Reverse};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "heic"];

#[derive(Debug, Clone)]
pub struct FsMediaStore {
    dir: PathBuf,
}

/// Sort key: newest first, then by name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey(Reverse<i64>, String);

impl SortKey {
    fn to_cursor(&self) -> Cursor {
        Cursor::new(format!("{}:{}", (self.0).0, self.1))
    }

    fn from_cursor(cursor: &Cursor) -> Result<Self, ProviderError> {
        let (millis, name) = cursor
            .as_str()
            .split_once(':')
            .ok_or_else(|| ProviderError::Other(format!("Invalid cursor {:?}", cursor)))?;
        let millis = millis
            .parse::<i64>()
            .map_err(|_| ProviderError::Other(format!("Invalid cursor {:?}", cursor)))?;
        Ok(SortKey(Reverse(millis), name.to_string()))
    }
}

impl FsMediaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: &AssetId) -> Result<PathBuf, ProviderError> {
        let name = id.as_str();
        if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
            return Err(ProviderError::Other(format!("Invalid photo id {:?}", name)));
        }
        Ok(self.dir.join(name))
    }
}

fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| PHOTO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

fn strip_file_uri(uri: &str) -> &str {
    uri.strip_prefix("file://").unwrap_or(uri)
}

fn scan(dir: &Path) -> Result<Vec<(SortKey, Asset)>, ProviderError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_photo(&path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            log::warn!("Skipping photo with non UTF-8 name: {}", path.display());
            continue;
        };
        let modified: DateTime<Utc> = entry.metadata()?.modified()?.into();
        let millis = modified.timestamp_millis();
        let created_at = DateTime::from_timestamp_millis(millis).unwrap_or(modified);
        let absolute = fs::canonicalize(&path).unwrap_or(path);
        let asset = Asset::new(name.clone(), file_uri(&absolute), created_at);
        entries.push((SortKey(Reverse(millis), name), asset));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

fn list_page(dir: &Path, request: &PageRequest) -> Result<AssetPage, ProviderError> {
    let after = request.after.as_ref().map(SortKey::from_cursor).transpose()?;
    let remaining: Vec<(SortKey, Asset)> = scan(dir)?
        .into_iter()
        .filter(|(key, _)| match &after {
            Some(after) => key.cmp(after) == Ordering::Greater,
            None => true,
        })
        .collect();

    let page_size = request.page_size.max(1) as usize;
    let has_more = remaining.len() > page_size;
    let page: Vec<(SortKey, Asset)> = remaining.into_iter().take(page_size).collect();
    let next_cursor = if has_more {
        page.last().map(|(key, _)| key.to_cursor())
    } else {
        None
    };

    Ok(AssetPage {
        assets: page.into_iter().map(|(_, asset)| asset).collect(),
        next_cursor,
        has_more,
    })
}

impl MediaStore for FsMediaStore {
    async fn permission(&self) -> Result<Permission, ProviderError> {
        Ok(Permission::from(self.dir.is_dir()))
    }

    /// Creates the directory; there is no prompt on desktop
    async fn request_permission(&self) -> Result<Permission, ProviderError> {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || fs::create_dir_all(dir)).await??;
        Ok(Permission::Granted)
    }

    async fn list_photos(&self, request: &PageRequest) -> Result<AssetPage, ProviderError> {
        let dir = self.dir.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || list_page(&dir, &request)).await?
    }

    async fn delete_assets(&self, ids: &[AssetId]) -> Result<(), ProviderError> {
        let paths = ids
            .iter()
            .map(|id| self.path_for(id))
            .collect::<Result<Vec<_>, _>>()?;
        tokio::task::spawn_blocking(move || -> Result<(), std::io::Error> {
            for path in paths {
                fs::remove_file(&path)?;
                log::info!("Deleted {}", path.display());
            }
            Ok(())
        })
        .await??;
        Ok(())
    }

    /// Copies the file into the directory under a fresh UUID name
    async fn save_photo(&self, source_uri: &str) -> Result<Asset, ProviderError> {
        let source = PathBuf::from(strip_file_uri(source_uri));
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_else(|| "jpg".to_string());
        let name = format!("{}.{}", Uuid::new_v4(), ext);
        let target = self.dir.join(&name);

        let dir = self.dir.clone();
        let copy_target = target.clone();
        let modified = tokio::task::spawn_blocking(move || -> Result<DateTime<Utc>, std::io::Error> {
            fs::create_dir_all(&dir)?;
            fs::copy(&source, &copy_target)?;
            Ok(fs::metadata(&copy_target)?.modified()?.into())
        })
        .await??;

        log::info!("Saved photo to {}", target.display());
        Ok(Asset::new(name, file_uri(&target), modified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("photo-gallery-{}", Uuid::new_v4()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn touch(dir: &Path, name: &str, now: SystemTime, age_secs: u64) {
        let path = dir.join(name);
        fs::write(&path, b"jpeg").unwrap();
        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(now - Duration::from_secs(age_secs))
            .unwrap();
    }

    fn names(page: &AssetPage) -> Vec<String> {
        page.assets.iter().map(|a| a.id.to_string()).collect()
    }

    #[tokio::test]
    async fn test_pages_are_newest_first_without_gaps_or_overlap() {
        let tmp = TempDir::new();
        let now = SystemTime::now();
        touch(&tmp.0, "a.jpg", now, 500);
        touch(&tmp.0, "b.jpg", now, 400);
        touch(&tmp.0, "c.png", now, 300);
        touch(&tmp.0, "d.jpg", now, 300);
        touch(&tmp.0, "e.webp", now, 100);
        touch(&tmp.0, "notes.txt", now, 0);
        let store = FsMediaStore::new(&tmp.0);

        let first = store.list_photos(&PageRequest::first(2)).await.unwrap();
        assert_eq!(names(&first), ["e.webp", "c.png"]);
        assert!(first.has_more);

        let cursor = first.next_cursor.clone().unwrap();
        let second = store.list_photos(&PageRequest::after(2, cursor)).await.unwrap();
        assert_eq!(names(&second), ["d.jpg", "b.jpg"]);
        assert!(second.has_more);

        let cursor = second.next_cursor.clone().unwrap();
        let third = store.list_photos(&PageRequest::after(2, cursor)).await.unwrap();
        assert_eq!(names(&third), ["a.jpg"]);
        assert!(!third.has_more);
        assert!(third.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_exact_page_boundary_reports_no_more() {
        let tmp = TempDir::new();
        let now = SystemTime::now();
        touch(&tmp.0, "a.jpg", now, 20);
        touch(&tmp.0, "b.jpg", now, 10);
        let store = FsMediaStore::new(&tmp.0);

        let page = store.list_photos(&PageRequest::first(2)).await.unwrap();
        assert_eq!(page.assets.len(), 2);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_missing_directory_lists_nothing() {
        let store = FsMediaStore::new(std::env::temp_dir().join(Uuid::new_v4().to_string()));
        assert_eq!(store.permission().await.unwrap(), Permission::Denied);
        let page = store.list_photos(&PageRequest::first(10)).await.unwrap();
        assert!(page.assets.is_empty());
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_save_then_delete() {
        let tmp = TempDir::new();
        let capture = tmp.0.join("capture.tmp.JPG");
        fs::write(&capture, b"jpeg").unwrap();
        let library = tmp.0.join("library");
        let store = FsMediaStore::new(&library);
        assert_eq!(store.request_permission().await.unwrap(), Permission::Granted);

        let saved = store
            .save_photo(&format!("file://{}", capture.display()))
            .await
            .unwrap();
        assert!(saved.id.as_str().ends_with(".jpg"));
        assert!(library.join(saved.id.as_str()).exists());

        let page = store.list_photos(&PageRequest::first(10)).await.unwrap();
        assert_eq!(page.assets.len(), 1);
        assert_eq!(page.assets[0].id, saved.id);

        store.delete_assets(&[saved.id.clone()]).await.unwrap();
        assert!(!library.join(saved.id.as_str()).exists());
    }

    #[tokio::test]
    async fn test_delete_rejects_path_traversal() {
        let tmp = TempDir::new();
        let store = FsMediaStore::new(&tmp.0);
        let result = store.delete_assets(&[AssetId::from("../secret.jpg")]).await;
        assert!(matches!(result, Err(ProviderError::Other(_))));
    }

    #[tokio::test]
    async fn test_delete_checks_every_id_before_removing() {
        let tmp = TempDir::new();
        touch(&tmp.0, "a.jpg", SystemTime::now(), 0);
        let store = FsMediaStore::new(&tmp.0);

        let result = store
            .delete_assets(&[AssetId::from("a.jpg"), AssetId::from("../b.jpg")])
            .await;
        assert!(matches!(result, Err(ProviderError::Other(_))));
        assert!(tmp.0.join("a.jpg").exists());

        let missing = store.delete_assets(&[AssetId::from("gone.jpg")]).await;
        assert!(matches!(missing, Err(ProviderError::Io(_))));
    }

    #[test]
    fn test_cursor_roundtrip_keeps_names_with_colons() {
        let key = SortKey(Reverse(1_700_000_000_123), "IMG:1.jpg".to_string());
        assert_eq!(SortKey::from_cursor(&key.to_cursor()).unwrap(), key);
        assert!(SortKey::from_cursor(&Cursor::from("garbage")).is_err());
    }
}
