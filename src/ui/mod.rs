//! Server-rendered pages.
//!
//! Every route of the client app is also rendered here with Dioxus SSR so
//! the site works without client-side code. The navbar is rendered in static
//! mode: plain links, dropdowns revealed by CSS hover.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::app::auth_context::use_auth_provider;
use crate::app::components::{Footer, Navbar};
use crate::app::site_context::use_site_provider;
use crate::app::{has_page, page_title, route_body, route_path, Route, SITE_CSS};
use crate::auth::AuthProvider;
use crate::nav::SiteData;

/// HTML document wrapper
fn html_doc(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{SITE_CSS}</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Full page for `route`: navbar, page body and footer.
#[component]
pub fn StaticPage(route: Route, site: SiteData) -> Element {
    // No browser session on the server: always a guest render.
    let auth = use_auth_provider();
    use_site_provider(site.clone());
    let name = site.name.clone();

    rsx! {
        Navbar {
            current_path: route_path(&route),
            session: auth.session(),
            site,
            static_render: true,
        }
        main { class: "page",
            {route_body(route)}
        }
        Footer { name }
    }
}

/// Render `route` to a complete HTML document.
pub fn render_page(route: Route, site: &SiteData) -> String {
    let title = page_title(&route, site);
    let site = site.clone();
    let body = dioxus::ssr::render_element(rsx! {
        StaticPage { route, site }
    });
    html_doc(&title, &body)
}

fn not_found_route(path: &str) -> Route {
    Route::NotFound {
        segments: path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// GET /* - Any app route, rendered on the server
pub async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    let route = match target.parse::<Route>() {
        Ok(route) => route,
        Err(e) => {
            tracing::debug!("Unroutable path {}: {}", target, e);
            not_found_route(uri.path())
        }
    };

    let status = if has_page(&route, &state.site) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (status, Html(render_page(route, &state.site))).into_response()
}
