use dioxus::prelude::*;

use crate::app::components::NavLink;

/// Body shown for paths with no page.
#[component]
pub fn Missing(path: String) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "Nothing lives at " code { "{path}" } "." }
        NavLink { to: "/", "Back to home" }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        Missing { path: format!("/{}", segments.join("/")) }
    }
}
