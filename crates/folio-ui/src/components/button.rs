//! Button Components
//!
//! Icon-only buttons. The lightbox close control is the only one the page
//! needs today, but it is built on the generic [`IconButton`].

use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};

/// Joins a base class with optional extra classes
pub(crate) fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                // Keep the click from reaching the overlay behind the button
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CloseButton { onclick: move |_| selection.write().dismiss(Dismissal::CloseButton) }
/// }
/// ```
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            Icon { kind: IconKind::Close }
        }
    }
}
