//! Dioxus application: routes, root component and page lookup helpers.
//!
//! The same page components back the client router (through [`Shell`]) and
//! the server's static renderer (through [`route_body`]).

use dioxus::prelude::*;

pub mod api;
pub mod auth_context;
pub mod components;
pub mod pages;
pub mod site_context;

use auth_context::use_auth_provider;
use components::Shell;
use pages::{
    About, AdminDashboard, AdminLogin, Dashboard, Home, Login, NotFound, Search, Section,
    Specialties, Specialty,
};
use site_context::use_site_provider;

use crate::nav::SiteData;

/// Site stylesheet, shared by the client app and the SSR document.
pub const SITE_CSS: &str = include_str!("../../public/site.css");

/// Root app component with routing
#[component]
pub fn App() -> Element {
    use_auth_provider();
    use_site_provider(SiteData::default());

    rsx! {
        document::Style { {SITE_CSS} }
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/specialties")]
        Specialties {},
        #[route("/specialties/:slug")]
        Specialty { slug: String },
        #[route("/about/:slug")]
        About { slug: String },
        #[route("/search?:query")]
        Search { query: String },
        #[route("/login")]
        Login {},
        #[route("/admin-login")]
        AdminLogin {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/:slug")]
        Section { slug: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Location path of `route`, without query string.
pub fn route_path(route: &Route) -> String {
    let full = route.to_string();
    match full.split_once('?') {
        Some((path, _)) => path.to_string(),
        None => full,
    }
}

/// Whether `route` leads to real content for `site`.
///
/// Slug routes accept any segment; only paths a menu link resolves to, or a
/// known specialty, have a page.
pub fn has_page(route: &Route, site: &SiteData) -> bool {
    match route {
        Route::NotFound { .. } => false,
        Route::Specialty { slug } => pages::specialties::specialty_name(slug).is_some(),
        Route::About { .. } | Route::Section { .. } => {
            site.title_for_path(&route_path(route)).is_some()
        }
        _ => true,
    }
}

/// Browser tab title for `route`.
pub fn page_title(route: &Route, site: &SiteData) -> String {
    let page = match route {
        Route::Home {} => return site.name.clone(),
        Route::Specialties {} => "Centers of Excellence".to_string(),
        Route::Specialty { slug } => pages::specialties::specialty_name(slug)
            .map(str::to_string)
            .unwrap_or_else(|| "Not Found".to_string()),
        Route::About { .. } | Route::Section { .. } => site
            .title_for_path(&route_path(route))
            .unwrap_or_else(|| "Not Found".to_string()),
        Route::Search { .. } => "Search".to_string(),
        Route::Login {} => "Login".to_string(),
        Route::AdminLogin {} => "Admin Login".to_string(),
        Route::Dashboard {} => "User Dashboard".to_string(),
        Route::AdminDashboard {} => "Admin Dashboard".to_string(),
        Route::NotFound { .. } => "Not Found".to_string(),
    };
    format!("{} - {}", page, site.name)
}

/// Page body for `route` outside the router (server rendering).
pub fn route_body(route: Route) -> Element {
    match route {
        Route::Home {} => rsx! { Home {} },
        Route::Specialties {} => rsx! { Specialties {} },
        Route::Specialty { slug } => rsx! { Specialty { slug } },
        Route::About { slug } => rsx! { About { slug } },
        Route::Search { query } => rsx! { Search { query } },
        Route::Login {} => rsx! { Login {} },
        Route::AdminLogin {} => rsx! { AdminLogin {} },
        Route::Dashboard {} => rsx! { Dashboard {} },
        Route::AdminDashboard {} => rsx! { AdminDashboard {} },
        Route::Section { slug } => rsx! { Section { slug } },
        Route::NotFound { segments } => rsx! { NotFound { segments } },
    }
}
