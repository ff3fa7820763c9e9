use dioxus::prelude::*;
use folio_core::{ArtworkId, GalleryView, KeyBus, SelectionController};

use crate::components::{use_global_keys, ContactFooter, Gallery, Intro, Lightbox, SiteHeader};
use crate::context::Session;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the session, the key bus and the selection
/// signal, then lays out the single page.
#[component]
pub fn App() -> Element {
    let session: Session = use_context_provider(crate::session);
    let bus: KeyBus = use_context_provider(KeyBus::new);
    let mut selection: Signal<SelectionController> = use_signal(SelectionController::new);
    use_context_provider(|| selection);

    // Forward webview key presses to the bus for as long as the app is mounted
    use_global_keys(bus);

    // Catalog is fixed for the session, so the grid is built once
    let gallery = use_hook(|| GalleryView::from_catalog(&session.catalog, &session.motion));

    let catalog = session.catalog.clone();
    let on_select = move |id: ArtworkId| {
        selection.write().activate(&catalog, &id);
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            SiteHeader { profile: session.profile.clone() }
            main {
                Intro { profile: session.profile.clone() }
                Gallery { view: gallery, on_select: on_select }
            }
            Lightbox {}
            ContactFooter { profile: session.profile.clone() }
        }
    }
}
