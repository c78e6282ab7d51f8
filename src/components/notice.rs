use crate::platform::AppSession;
use dioxus::prelude::*;
use dioxus_i18n::t;
use photo_gallery::GalleryError;
use std::rc::Rc;

/// Blocking message for a failed user action
#[component]
pub fn NoticeDialog(notice: GalleryError) -> Element {
    let session = use_context::<Rc<AppSession>>();
    let message = t!(notice.message_key());
    let border = if notice.is_failure() { "#cc0000" } else { "#0066cc" };

    rsx! {
        div { style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.5); z-index: 2000; display: flex; align-items: center; justify-content: center; padding: 24px;",
            div { style: "background: white; border-radius: 12px; border-top: 4px solid {border}; padding: 20px; max-width: 360px; width: 100%;",
                p { style: "margin: 0 0 16px 0; font-size: 16px;", "{message}" }
                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 12px; font-size: 16px;",
                    onclick: move |_| session.dismiss_notice(),
                    {t!("action-ok")}
                }
            }
        }
    }
}
