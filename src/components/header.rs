//! Site Header Component
//!
//! Sticky bar with the artist's name, tagline and in-page anchor links,
//! followed by the short intro above the grid.

use dioxus::prelude::*;
use folio_core::SiteProfile;

/// In-page section reachable from the header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLink {
    Work,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 2] = [NavLink::Work, NavLink::Contact];

    /// Get the display name for this link
    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Work => "Work",
            NavLink::Contact => "Contact",
        }
    }

    /// Get the anchor this link jumps to
    pub fn href(&self) -> &'static str {
        match self {
            NavLink::Work => "#work",
            NavLink::Contact => "#contact",
        }
    }
}

#[component]
pub fn SiteHeader(profile: SiteProfile) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    h1 { class: "site-header__name", "{profile.artist_name}" }
                    p { class: "site-header__tagline", "{profile.tagline}" }
                }
                nav { class: "site-header__nav",
                    for link in NavLink::ALL {
                        a {
                            key: "{link.href()}",
                            class: "site-header__link",
                            href: link.href(),
                            "{link.label()}"
                        }
                    }
                }
            }
        }
    }
}

/// Heading and blurb above the grid
#[component]
pub fn Intro(profile: SiteProfile) -> Element {
    rsx! {
        section { class: "intro",
            h2 { class: "intro__heading", "{profile.intro_heading}" }
            p { class: "intro__text", "{profile.intro_text}" }
        }
    }
}
