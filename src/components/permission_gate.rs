use crate::platform::AppSession;
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::rc::Rc;

/// Shown instead of the gallery while media library access is denied
#[component]
pub fn PermissionGate() -> Element {
    let session = use_context::<Rc<AppSession>>();

    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; height: 100%; padding: 24px; text-align: center;",
            div { style: "font-size: 48px;", "🔒" }
            h2 { style: "margin: 0;", {t!("permission-title")} }
            p { style: "color: #666; margin: 0;", {t!("permission-body")} }
            button {
                class: "btn-primary",
                style: "padding: 14px 24px; font-size: 16px;",
                onclick: move |_| {
                    let session = session.clone();
                    spawn(async move { session.retry_permission().await });
                },
                {t!("action-retry")}
            }
        }
    }
}
