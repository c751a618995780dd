//! Landing page.

use dioxus::prelude::*;

use crate::app::components::NavLink;
use crate::app::site_context::use_site;
use crate::nav::path::{item_path, SPECIALTIES, SPECIALTIES_CATEGORY, SPECIALTIES_PATH};

#[component]
pub fn Home() -> Element {
    let site = use_site().data();

    rsx! {
        section { class: "hero",
            h1 { "Welcome to {site.name}" }
            p { "Round-the-clock care backed by specialists across every discipline." }
            NavLink { to: SPECIALTIES_PATH, class: "action action--primary", "Explore our specialties" }
        }
        section { class: "cards",
            for name in SPECIALTIES.iter() {
                NavLink {
                    key: "{name}",
                    to: item_path(SPECIALTIES_CATEGORY, name),
                    class: "card",
                    h3 { "{name}" }
                }
            }
        }
    }
}
