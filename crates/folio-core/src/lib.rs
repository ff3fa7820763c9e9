//! Folio Core Library
//!
//! Everything behind the portfolio page that is not markup: the artwork
//! catalog, the lightbox selection state machine, the dismissal-key
//! capability, the motion decorator and the view models the UI renders.
//!
//! ## Overview
//!
//! The catalog is fixed for the whole session. The only mutable state is
//! the [`SelectionController`], which is either closed or showing exactly
//! one artwork.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{Catalog, Dismissal, Selection, SelectionController};
//!
//! let catalog = Catalog::builtin();
//! let mut selection = SelectionController::new();
//!
//! let first = catalog.iter().next().unwrap().id.clone();
//! selection.activate(&catalog, &first);
//! assert!(selection.is_open());
//!
//! selection.dismiss(Dismissal::EscapeKey);
//! assert_eq!(selection.state(), &Selection::Closed);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod keys;
pub mod motion;
pub mod selection;
pub mod types;
pub mod view;

// Re-exports
pub use catalog::Catalog;
pub use config::{FolioConfig, SiteProfile, SocialLink};
pub use error::{FolioError, Result};
pub use keys::{KeyBus, KeySource, Subscription, DISMISS_KEY};
pub use motion::Motion;
pub use selection::{Dismissal, PointerTarget, Selection, SelectionController, Transition};
pub use types::*;
pub use view::{detail_line, grid_caption, GalleryView, LightboxView, TileView};
