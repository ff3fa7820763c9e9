//! Lightbox Component
//!
//! Full-viewport overlay showing the selected work. The component stays
//! mounted for the life of the page and renders nothing while the
//! selection is closed; it holds the key-bus subscription for Escape.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Dismissal, KeySource, LightboxView, PointerTarget};
use folio_ui::CloseButton;

use crate::context::{use_key_bus, use_selection, use_session};

#[component]
pub fn Lightbox() -> Element {
    let session = use_session();
    let bus = use_key_bus();
    let mut selection = use_selection();

    // Dropped with the component, which unsubscribes the listener
    use_hook(move || {
        Rc::new(bus.subscribe(Box::new(move |key: &str| {
            // A write marks every reader dirty, so only take one on a real transition
            if !selection.peek().key_transition(key).changed() {
                return;
            }
            let mut selection = selection;
            selection.write().key(key);
        })))
    });

    let Some(view) = LightboxView::from_selection(selection.read().state(), &session.motion)
    else {
        return rsx! {};
    };

    let overlay_class = match view.overlay_class {
        Some(motion) => format!("lightbox {}", motion),
        None => "lightbox".to_string(),
    };
    let panel_class = match view.panel_class {
        Some(motion) => format!("lightbox__panel {}", motion),
        None => "lightbox__panel".to_string(),
    };

    rsx! {
        div {
            class: "{overlay_class}",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{view.caption_text()}",
            onclick: move |_| {
                selection.write().pointer(PointerTarget::Backdrop);
            },

            div {
                class: "{panel_class}",
                // Clicks inside the panel never reach the backdrop
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    onclick: move |_| {
                        selection.write().dismiss(Dismissal::CloseButton);
                    }
                }

                div { class: "lightbox__frame",
                    img {
                        class: "lightbox__img",
                        src: "{view.image_url}",
                        alt: "{view.alt}",
                    }
                }

                div { class: "lightbox__caption",
                    span { class: "lightbox__title", "{view.title}" }
                    for detail in view.details.iter() {
                        span { class: "lightbox__detail", "{detail}" }
                    }
                }
            }
        }
    }
}
