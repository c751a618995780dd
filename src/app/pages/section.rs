//! Pages for menu labels: `/about/:slug` and the catch-all `/:slug`.

use dioxus::prelude::*;

use super::not_found::Missing;
use crate::app::site_context::use_site;

#[component]
pub fn About(slug: String) -> Element {
    let site = use_site().data();
    let path = format!("/about/{slug}");
    let Some(title) = site.title_for_path(&path) else {
        return rsx! {
            Missing { path }
        };
    };

    rsx! {
        h1 { "{title}" }
        p { "Learn more about {site.name}: {title}." }
    }
}

#[component]
pub fn Section(slug: String) -> Element {
    let site = use_site().data();
    let path = format!("/{slug}");
    let Some(title) = site.title_for_path(&path) else {
        return rsx! {
            Missing { path }
        };
    };

    rsx! {
        h1 { "{title}" }
        p { "Information about {title} at {site.name}." }
    }
}
