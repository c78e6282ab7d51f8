use crate::platform::AppSession;
use dioxus::prelude::*;
use dioxus_i18n::t;
use photo_gallery::CameraFacing;
use std::rc::Rc;

#[component]
pub fn CameraScreen(facing: CameraFacing, capturing: bool) -> Element {
    let session = use_context::<Rc<AppSession>>();

    let facing_label = match facing {
        CameraFacing::Back => t!("camera-facing-back"),
        CameraFacing::Front => t!("camera-facing-front"),
    };

    let on_toggle = {
        let session = session.clone();
        move |_: MouseEvent| session.toggle_facing()
    };
    let on_capture = {
        let session = session.clone();
        move |_: MouseEvent| {
            let session = session.clone();
            spawn(async move { session.capture().await });
        }
    };
    let on_cancel = {
        let session = session.clone();
        move |_: MouseEvent| session.cancel_camera()
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 16px; height: 100%; padding: 24px; background: #111; color: white;",
            div { style: "font-size: 16px;", "{facing_label}" }

            if capturing {
                div { style: "color: #ccc;", {t!("camera-capturing")} }
            }

            button {
                class: "btn-primary",
                style: "width: 100%; max-width: 320px; padding: 18px; font-size: 18px;",
                disabled: capturing,
                onclick: on_capture,
                "📸 "
                {t!("action-capture")}
            }
            button {
                class: "btn-secondary",
                style: "width: 100%; max-width: 320px; padding: 14px; font-size: 16px;",
                disabled: capturing,
                onclick: on_toggle,
                "🔄 "
                {t!("action-switch-camera")}
            }
            button {
                class: "btn-secondary",
                style: "width: 100%; max-width: 320px; padding: 14px; font-size: 16px;",
                disabled: capturing,
                onclick: on_cancel,
                {t!("action-cancel")}
            }
        }
    }
}
