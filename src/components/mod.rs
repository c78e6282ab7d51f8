mod camera_screen;
mod gallery_screen;
mod notice;
mod permission_gate;
mod viewer_screen;

pub use camera_screen::CameraScreen;
pub use gallery_screen::GalleryScreen;
pub use notice::NoticeDialog;
pub use permission_gate::PermissionGate;
pub use viewer_screen::ViewerScreen;

use dioxus_gallery::GalleryLabels;
use dioxus_i18n::t;

/// Gallery widget texts in the active language
fn gallery_labels() -> GalleryLabels {
    GalleryLabels {
        empty: t!("gallery-empty"),
        load_more: t!("gallery-load-more"),
        loading: t!("gallery-loading"),
        back: t!("viewer-back"),
        share: t!("viewer-share"),
        delete: t!("viewer-delete"),
    }
}
