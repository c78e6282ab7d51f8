use dioxus::prelude::*;
use photo_gallery::{MediaAccess, Screen};

mod components;
mod filesystem;
mod i18n;
mod image_source;
mod platform;

use components::{CameraScreen, GalleryScreen, NoticeDialog, PermissionGate, ViewerScreen};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("photo-roll"),
    );

    #[cfg(not(target_os = "android"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[component]
fn App() -> Element {
    dioxus_i18n::prelude::use_init_i18n(i18n::init_i18n);
    let session = use_context_provider(platform::build_session);

    let mut session_state = use_signal(|| session.snapshot());
    let mut gallery_state = use_signal(|| session.gallery_state());
    let image_sources = image_source::use_image_sources(gallery_state);
    use_context_provider(|| image_sources);

    // Mirror session and gallery updates into signals
    let watched = session.clone();
    use_future(move || {
        let mut rx = watched.subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let state = rx.borrow_and_update().clone();
                session_state.set(state);
            }
        }
    });
    let watched = session.clone();
    use_future(move || {
        let mut rx = watched.gallery().subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let state = rx.borrow_and_update().clone();
                gallery_state.set(state);
            }
        }
    });

    // Permission prompt and first page
    let starting = session.clone();
    use_future(move || {
        let session = starting.clone();
        async move { session.start().await }
    });

    let state = session_state();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",
            div { style: "flex: 1; overflow-y: auto;",
                match (state.media_access, state.screen().clone()) {
                    (MediaAccess::Blocked, _) => rsx! {
                        PermissionGate {}
                    },
                    (_, Screen::Gallery) => rsx! {
                        GalleryScreen { gallery: gallery_state() }
                    },
                    (_, Screen::Camera) => rsx! {
                        CameraScreen { facing: state.facing, capturing: state.capturing }
                    },
                    (_, Screen::Viewer(asset)) => rsx! {
                        ViewerScreen { asset }
                    },
                }
            }

            if let Some(notice) = state.notice.clone() {
                NoticeDialog { notice }
            }
        }
    }
}
