//! Contact Link Component
//!
//! Outlined pill links used in the footer. External links open in a new
//! window without a referrer; `mailto:` links use the platform handler.

use dioxus::prelude::*;

use crate::components::button::join_class;
use crate::components::icon::{Icon, IconKind};

/// Properties for the ContactLink component
#[derive(Clone, PartialEq, Props)]
pub struct ContactLinkProps {
    /// Link target (`mailto:` or `https:`)
    pub href: String,
    /// Visible link text
    pub label: String,
    /// Leading icon
    pub icon: IconKind,
    /// Open in a new window
    #[props(default = false)]
    pub external: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Whether `href` leaves the page (anything but `mailto:` and anchors)
pub fn is_external_href(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[component]
pub fn ContactLink(props: ContactLinkProps) -> Element {
    let full_class = join_class("contact-link", props.class.as_deref());

    rsx! {
        if props.external {
            a {
                class: "{full_class}",
                href: "{props.href}",
                target: "_blank",
                rel: "noreferrer",
                Icon { kind: props.icon }
                " {props.label}"
            }
        } else {
            a {
                class: "{full_class}",
                href: "{props.href}",
                Icon { kind: props.icon }
                " {props.label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_is_not_external() {
        assert!(!is_external_href("mailto:artist@example.com"));
        assert!(!is_external_href("#contact"));
    }

    #[test]
    fn web_links_are_external() {
        assert!(is_external_href("https://instagram.com/yourhandle"));
        assert!(is_external_href("http://example.com"));
    }
}
