use crate::image_source::ImageSources;
use crate::platform::AppSession;
use dioxus::prelude::*;
use dioxus_gallery::{FullscreenViewer, GalleryItem};
use photo_gallery::Asset;
use std::rc::Rc;

#[component]
pub fn ViewerScreen(asset: Asset) -> Element {
    let session = use_context::<Rc<AppSession>>();
    let sources = use_context::<ImageSources>();
    let mut busy = use_signal(|| false);

    let item = GalleryItem {
        id: asset.id.to_string(),
        src: sources.src(&asset.uri),
    };
    let caption = asset
        .created_at
        .with_timezone(&chrono::Local)
        .format("%d.%m.%Y %H:%M")
        .to_string();

    let on_close = {
        let session = session.clone();
        move |_: ()| session.back()
    };
    let on_share = {
        let session = session.clone();
        move |_: String| {
            let session = session.clone();
            spawn(async move {
                busy.set(true);
                session.share_selected().await;
                busy.set(false);
            });
        }
    };
    let on_delete = {
        let session = session.clone();
        move |_: String| {
            let session = session.clone();
            spawn(async move {
                busy.set(true);
                session.delete_selected().await;
                busy.set(false);
            });
        }
    };

    rsx! {
        FullscreenViewer {
            item,
            caption: Some(caption),
            busy: busy(),
            labels: super::gallery_labels(),
            on_close,
            on_share,
            on_delete,
        }
    }
}
