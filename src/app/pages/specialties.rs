//! Specialty index and detail pages.

use dioxus::prelude::*;

use super::not_found::Missing;
use crate::app::components::NavLink;
use crate::nav::path::{item_path, kebab_case, SPECIALTIES, SPECIALTIES_CATEGORY};

/// Name of the specialty whose slug is `slug`.
pub fn specialty_name(slug: &str) -> Option<&'static str> {
    SPECIALTIES
        .iter()
        .copied()
        .find(|name| kebab_case(name) == slug)
}

#[component]
pub fn Specialties() -> Element {
    rsx! {
        h1 { "Centers of Excellence" }
        ul { class: "link-list",
            for name in SPECIALTIES.iter() {
                li { key: "{name}",
                    NavLink { to: item_path(SPECIALTIES_CATEGORY, name), "{name}" }
                }
            }
        }
    }
}

#[component]
pub fn Specialty(slug: String) -> Element {
    let Some(name) = specialty_name(&slug) else {
        return rsx! {
            Missing { path: format!("/specialties/{slug}") }
        };
    };

    rsx! {
        h1 { "{name}" }
        p { "Our {name} department offers consultations, diagnostics and treatment." }
        NavLink { to: "/specialties", "All specialties" }
    }
}
