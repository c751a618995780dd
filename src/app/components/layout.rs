//! Client layout wrapping every routed page with the navbar.

use dioxus::prelude::*;

use super::nav_link::NavigateHandle;
use super::navbar::Navbar;
use crate::app::auth_context::use_auth;
use crate::app::site_context::use_site;
use crate::app::{route_path, Route};
use crate::auth::AuthProvider;
use crate::nav::{dispatch, NavAction};

/// Router layout: reads location and session, hands them to the navbar.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let auth = use_auth();
    let site = use_site();

    let go = use_callback(move |path: String| match path.parse::<Route>() {
        Ok(target) => {
            tracing::debug!("navigating to {}", path);
            navigator.push(target);
        }
        Err(e) => tracing::warn!("no route for {}: {}", path, e),
    });
    use_context_provider(|| NavigateHandle::new(go));

    let data = site.data();
    let name = data.name.clone();

    rsx! {
        Navbar {
            current_path: route_path(&route),
            session: auth.session(),
            site: data,
            on_navigate: go,
            on_action: move |action: NavAction| {
                dispatch(&action, &auth, |path| go.call(path.to_string()));
            },
        }
        main { class: "page",
            Outlet::<Route> {}
        }
        Footer { name }
    }
}

#[component]
pub fn Footer(name: String) -> Element {
    let version = env!("MEDCENTER_VERSION");

    rsx! {
        footer { class: "footer",
            small { "{name} · v{version}" }
        }
    }
}
