//! Gallery Component
//!
//! Responsive grid of artwork tiles. Each tile is a `button`, so mouse,
//! touch and keyboard activation all arrive as one click event carrying
//! the artwork id.

use dioxus::prelude::*;
use folio_core::{ArtworkId, GalleryView, TileView};

/// Thumbnail grid
///
/// # Examples
///
/// ```rust,ignore
/// let view = GalleryView::from_catalog(&catalog, &motion);
///
/// rsx! {
///     Gallery {
///         view: view,
///         on_select: move |id| { selection.write().activate(&catalog, &id); },
///     }
/// }
/// ```
#[component]
pub fn Gallery(
    /// Tiles in catalog order
    view: GalleryView,
    /// Activation handler (receives artwork ID)
    on_select: EventHandler<ArtworkId>,
) -> Element {
    let empty = view.is_empty();

    rsx! {
        section { id: "work", class: "gallery-section",
            if empty {
                p { class: "gallery__empty", "No works to show yet." }
            }
            div { class: "gallery",
                for tile in view.tiles {
                    ArtworkTile {
                        key: "{tile.id}",
                        tile: tile.clone(),
                        on_select: on_select,
                    }
                }
            }
        }
    }
}

/// One grid cell: lazy image with a title/caption overlay
#[component]
pub fn ArtworkTile(tile: TileView, on_select: EventHandler<ArtworkId>) -> Element {
    let class = match tile.motion_class {
        Some(motion) => format!("tile {}", motion),
        None => "tile".to_string(),
    };
    let style = tile.motion_style.clone().unwrap_or_default();
    let id = tile.id.clone();

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            r#type: "button",
            onclick: move |_| {
                tracing::debug!(%id, "Tile activated");
                on_select.call(id.clone());
            },

            div { class: "tile__frame",
                img {
                    class: "tile__img",
                    src: "{tile.image_url}",
                    alt: "{tile.alt}",
                    "loading": "lazy",
                }
            }

            div { class: "tile__overlay",
                h3 { class: "tile__title", "{tile.title}" }
                p { class: "tile__caption", "{tile.caption}" }
            }
        }
    }
}
