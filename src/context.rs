//! Context providers for Folio.
//!
//! The App component provides the session, the key bus and the selection
//! signal; everything below reads them through these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let session = use_session();
//! let mut selection = use_selection();
//! selection.write().dismiss(Dismissal::CloseButton);
//! ```

use dioxus::prelude::*;
use folio_core::{Catalog, KeyBus, Motion, SelectionController, SiteProfile};

/// Read-only data for the whole session
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub profile: SiteProfile,
    pub catalog: Catalog,
    pub motion: Motion,
}

/// Hook to access the session from context.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Hook to access the lightbox selection.
///
/// Returns the signal the App created, so writes re-render every reader.
pub fn use_selection() -> Signal<SelectionController> {
    use_context::<Signal<SelectionController>>()
}

/// Hook to access the dismissal-key source.
pub fn use_key_bus() -> KeyBus {
    use_context::<KeyBus>()
}
