//! User and admin dashboards.

use dioxus::prelude::*;

use crate::app::auth_context::use_auth;
use crate::app::components::{use_navigate_handle, ActionButton, NavLink};
use crate::auth::AuthProvider;
use crate::nav::panel::{ADMIN_LOGIN_PATH, LOGIN_PATH};
use crate::nav::{dispatch, NavAction};

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let Some(user) = auth.user() else {
        return rsx! {
            SignInPrompt { login_path: LOGIN_PATH }
        };
    };

    rsx! {
        h1 { "User Dashboard" }
        p { "Welcome back, {user.name}." }
        ul { class: "link-list",
            li { NavLink { to: "/book-appointment", "Book an appointment" } }
            li { NavLink { to: "/health-checkup", "Health checkup packages" } }
        }
        SignOutButton {}
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    match auth.user() {
        Some(user) if user.is_admin => rsx! {
            h1 { "Admin Dashboard" }
            p { "Signed in as {user.name}." }
            SignOutButton {}
        },
        Some(_) => rsx! {
            h1 { "Admin Dashboard" }
            p { "This area is restricted to hospital staff." }
            SignOutButton {}
        },
        None => rsx! {
            SignInPrompt { login_path: ADMIN_LOGIN_PATH }
        },
    }
}

#[component]
fn SignInPrompt(login_path: &'static str) -> Element {
    rsx! {
        h1 { "Please sign in" }
        NavLink { to: login_path, class: "action action--primary", "Go to login" }
    }
}

#[component]
fn SignOutButton() -> Element {
    let auth = use_auth();
    let navigate = use_navigate_handle();

    rsx! {
        ActionButton {
            action: NavAction::LOGOUT,
            static_render: navigate.is_none(),
            on_action: move |action: NavAction| {
                dispatch(&action, &auth, |path| {
                    if let Some(navigate) = navigate {
                        navigate.go(path);
                    }
                });
            },
        }
    }
}
