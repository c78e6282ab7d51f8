use dioxus::prelude::*;

/// Represents a single item in the gallery
#[derive(Clone, PartialEq, Debug)]
pub struct GalleryItem {
    /// Unique identifier for the item
    pub id: String,
    /// Data URL or URI of the image; empty while it is still loading
    pub src: String,
}

/// Texts shown by the gallery widgets, so callers can translate them
#[derive(Clone, PartialEq, Debug)]
pub struct GalleryLabels {
    pub empty: String,
    pub load_more: String,
    pub loading: String,
    pub back: String,
    pub share: String,
    pub delete: String,
}

impl Default for GalleryLabels {
    fn default() -> Self {
        Self {
            empty: "No photos available".to_string(),
            load_more: "Load more".to_string(),
            loading: "Loading…".to_string(),
            back: "Back".to_string(),
            share: "Share".to_string(),
            delete: "Delete".to_string(),
        }
    }
}

/// A paginated photo grid
///
/// Renders the items it is given and asks the parent for the next page via
/// `on_load_more`. Pagination state stays with the parent; while `loading`
/// is set the load button is disabled.
///
/// # Example
/// ```rust,ignore
/// Gallery {
///     items: items(),
///     has_more: true,
///     loading: false,
///     on_select: move |id| { /* open viewer */ },
///     on_load_more: move |_| { /* fetch next page */ },
/// }
/// ```
#[component]
pub fn Gallery(
    /// Items in display order
    items: Vec<GalleryItem>,
    /// Whether another page can be requested
    has_more: bool,
    /// Whether a page request is outstanding
    #[props(default)]
    loading: bool,
    #[props(default)]
    labels: GalleryLabels,
    /// Callback when a thumbnail is tapped
    on_select: EventHandler<String>,
    /// Callback when the next page is requested
    on_load_more: EventHandler<()>,
) -> Element {
    if items.is_empty() && !loading {
        return rsx! {
            div {
                style: "padding: 24px; text-align: center; background: #f5f5f5; border-radius: 8px; color: #999;",
                "{labels.empty}"
            }
        };
    }

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 4px;",
            for item in items {
                Thumbnail {
                    key: "{item.id}",
                    item: item.clone(),
                    on_select,
                }
            }
        }
        if loading {
            div { style: "padding: 16px; text-align: center; color: #999;", "{labels.loading}" }
        } else if has_more {
            button {
                class: "btn-secondary",
                style: "width: 100%; padding: 14px; margin: 12px 0; font-size: 16px;",
                onclick: move |_| on_load_more.call(()),
                "{labels.load_more}"
            }
        }
    }
}

/// Internal component for rendering a single thumbnail
#[component]
fn Thumbnail(item: GalleryItem, on_select: EventHandler<String>) -> Element {
    rsx! {
        div {
            style: "position: relative; aspect-ratio: 1/1; overflow: hidden; background: #e0e0e0; cursor: pointer;",
            onclick: {
                let item_id = item.id.clone();
                move |_| on_select.call(item_id.clone())
            },
            // grey placeholder until the source is resolved
            if !item.src.is_empty() {
                img {
                    src: "{item.src}",
                    loading: "lazy",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
            }
        }
    }
}

/// A fullscreen photo viewer component
///
/// Displays a single photo with back, share and delete actions
#[component]
pub fn FullscreenViewer(
    /// Item being viewed
    item: GalleryItem,
    /// Optional caption, e.g. the capture date
    #[props(default)]
    caption: Option<String>,
    /// Disables the actions while one is running
    #[props(default)]
    busy: bool,
    #[props(default)]
    labels: GalleryLabels,
    /// Callback when user closes the viewer
    on_close: EventHandler<()>,
    on_share: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.95); z-index: 1000; display: flex; flex-direction: column;",
            // Header with back button
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 16px; background: rgba(0, 0, 0, 0.7);",
                button {
                    style: "padding: 8px 16px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 8px; font-size: 16px; cursor: pointer; border: none;",
                    onclick: move |_| on_close.call(()),
                    "‹ {labels.back}"
                }
                div {
                    style: "color: white; font-size: 14px;",
                    if let Some(caption) = &caption {
                        "{caption}"
                    }
                }
            }
            // Main image area
            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 20px;",
                if !item.src.is_empty() {
                    img {
                        src: "{item.src}",
                        style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                    }
                }
            }
            // Footer with actions
            div {
                style: "display: flex; justify-content: center; gap: 16px; padding: 16px; background: rgba(0, 0, 0, 0.7);",
                button {
                    style: "padding: 12px 24px; background: #0066cc; color: white; border-radius: 8px; font-size: 16px; cursor: pointer; border: none;",
                    disabled: busy,
                    onclick: {
                        let item_id = item.id.clone();
                        move |_| on_share.call(item_id.clone())
                    },
                    "{labels.share}"
                }
                button {
                    style: "padding: 12px 24px; background: #cc0000; color: white; border-radius: 8px; font-size: 16px; cursor: pointer; border: none;",
                    disabled: busy,
                    onclick: {
                        let item_id = item.id.clone();
                        move |_| on_delete.call(item_id.clone())
                    },
                    "{labels.delete}"
                }
            }
        }
    }
}
