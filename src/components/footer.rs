//! Contact Footer Component

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::SiteProfile;
use folio_ui::{is_external_href, ContactLink, IconKind};

#[component]
pub fn ContactFooter(profile: SiteProfile) -> Element {
    let year = chrono::Local::now().year();
    let copyright = profile.copyright_line(year);

    rsx! {
        footer { id: "contact", class: "site-footer",
            div { class: "site-footer__inner",
                h2 { class: "site-footer__heading", "Contact" }
                p { class: "site-footer__text", "{profile.contact_text}" }

                div { class: "site-footer__links",
                    ContactLink {
                        href: profile.mailto_href(),
                        label: profile.contact_email.clone(),
                        icon: IconKind::Mail,
                    }
                    if let Some(social) = &profile.social {
                        ContactLink {
                            href: social.url.clone(),
                            label: social.label.clone(),
                            icon: IconKind::Social,
                            external: is_external_href(&social.url),
                        }
                    }
                }

                div { class: "site-footer__copyright", "{copyright}" }
            }
        }
    }
}
