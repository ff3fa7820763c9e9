//! Reusable widgets for the portfolio page

mod button;
mod contact_link;
mod icon;

pub use button::*;
pub use contact_link::*;
pub use icon::*;
