//! UI Components for Folio.
//!
//! One module per region of the page, top to bottom.

mod footer;
mod gallery;
mod header;
mod keyboard;
mod lightbox;

pub use footer::ContactFooter;
pub use gallery::Gallery;
pub use header::{Intro, SiteHeader};
pub use keyboard::use_global_keys;
pub use lightbox::Lightbox;
