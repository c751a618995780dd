//! Search results page.

use dioxus::prelude::*;

use crate::app::components::NavLink;
use crate::app::site_context::use_site;
use crate::nav::search;

#[component]
pub fn Search(query: String) -> Element {
    let site = use_site().data();
    let hits = search(&site.navigation, &query);

    rsx! {
        h1 { "Search" }
        if query.trim().is_empty() {
            p { "Type a service, specialty or page name in the search box." }
        } else if hits.is_empty() {
            p { "No results for \"{query}\"." }
        } else {
            p { "{hits.len()} result(s) for \"{query}\"" }
            ul { class: "link-list",
                for hit in hits.iter() {
                    li { key: "{hit.path}",
                        NavLink { to: hit.path.clone(), "{hit.label}" }
                        if let Some(category) = &hit.category {
                            small { class: "text-muted", " in {category}" }
                        }
                    }
                }
            }
        }
    }
}
