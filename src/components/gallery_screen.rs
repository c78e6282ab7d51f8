use crate::image_source::ImageSources;
use crate::platform::AppSession;
use dioxus::prelude::*;
use dioxus_gallery::{Gallery, GalleryItem};
use dioxus_i18n::t;
use photo_gallery::GalleryState;
use std::rc::Rc;

#[component]
pub fn GalleryScreen(gallery: GalleryState) -> Element {
    let session = use_context::<Rc<AppSession>>();
    let sources = use_context::<ImageSources>();

    let items: Vec<GalleryItem> = gallery
        .assets
        .iter()
        .map(|asset| GalleryItem {
            id: asset.id.to_string(),
            src: sources.src(&asset.uri),
        })
        .collect();

    let on_select = {
        let session = session.clone();
        let assets = gallery.assets.clone();
        move |id: String| match assets.iter().find(|a| a.id.as_str() == id) {
            Some(asset) => session.select(asset.clone()),
            None => log::warn!("Selected photo {} is no longer listed", id),
        }
    };
    let on_load_more = {
        let session = session.clone();
        move |_: ()| {
            let session = session.clone();
            spawn(async move { session.load_more().await });
        }
    };
    let on_refresh = {
        let session = session.clone();
        move |_: MouseEvent| {
            let session = session.clone();
            spawn(async move { session.refresh().await });
        }
    };
    let on_camera = {
        let session = session.clone();
        move |_: MouseEvent| {
            let session = session.clone();
            spawn(async move { session.open_camera().await });
        }
    };

    rsx! {
        div { style: "padding: 12px;",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h1 { style: "margin: 0; font-size: 22px;", {t!("app-title")} }
                div { style: "display: flex; gap: 8px;",
                    button {
                        class: "btn-secondary",
                        style: "padding: 10px 14px; font-size: 15px;",
                        disabled: gallery.loading,
                        onclick: on_refresh,
                        {t!("action-refresh")}
                    }
                    button {
                        class: "btn-primary",
                        style: "padding: 10px 14px; font-size: 15px;",
                        onclick: on_camera,
                        "📷 "
                        {t!("action-camera")}
                    }
                }
            }

            Gallery {
                items,
                has_more: gallery.has_more,
                loading: gallery.loading,
                labels: super::gallery_labels(),
                on_select,
                on_load_more,
            }
        }
    }
}
