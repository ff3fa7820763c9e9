//! Glyph icons
//!
//! Icons are single characters rendered in a span, which keeps them
//! selectable-free and sized by the surrounding font.

use dioxus::prelude::*;

/// Icons used on the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Mail,
    Social,
    Close,
}

impl IconKind {
    /// Returns the glyph for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Mail => "\u{2709}",
            IconKind::Social => "\u{25CE}",
            IconKind::Close => "\u{00D7}",
        }
    }

    /// Returns the CSS class for this icon
    pub fn class(&self) -> &'static str {
        match self {
            IconKind::Mail => "icon icon-mail",
            IconKind::Social => "icon icon-social",
            IconKind::Close => "icon icon-close",
        }
    }
}

/// Decorative icon, hidden from screen readers
#[component]
pub fn Icon(kind: IconKind) -> Element {
    rsx! {
        span {
            class: kind.class(),
            "aria-hidden": "true",
            "{kind.glyph()}"
        }
    }
}
