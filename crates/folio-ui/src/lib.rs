//! Folio UI Components
//!
//! Small Dioxus widgets shared by the portfolio page: icon buttons, the
//! lightbox close control and the footer contact links.
//!
//! ## Look
//!
//! Quiet gallery styling, white walls and black type:
//! - **Ink (#171717)**: titles and body text
//! - **Stone (#737373)**: secondary copy
//! - **Paper (#ffffff)**: page background
//!
//! Class names match the stylesheet shipped with the desktop shell.

pub mod components;

pub use components::*;
