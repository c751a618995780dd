//! Sign-in pages for patients and staff.
//!
//! Credentials are not checked here: the page only starts a local session
//! through [`AuthContext`](crate::app::auth_context::AuthContext).

use dioxus::prelude::*;

use crate::app::auth_context::use_auth;
use crate::app::components::use_navigate_handle;
use crate::auth::User;
use crate::nav::panel::{ADMIN_DASHBOARD_PATH, DASHBOARD_PATH};

#[component]
pub fn Login() -> Element {
    rsx! {
        LoginForm { admin: false }
    }
}

#[component]
pub fn AdminLogin() -> Element {
    rsx! {
        LoginForm { admin: true }
    }
}

#[component]
fn LoginForm(admin: bool) -> Element {
    let auth = use_auth();
    let navigate = use_navigate_handle();
    let mut name = use_signal(String::new);

    let title = if admin { "Admin Login" } else { "Patient Login" };
    let destination = if admin {
        ADMIN_DASHBOARD_PATH
    } else {
        DASHBOARD_PATH
    };

    rsx! {
        h1 { "{title}" }
        form {
            class: "login-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let entered = name().trim().to_string();
                if entered.is_empty() {
                    return;
                }
                auth.sign_in(User { name: entered, is_admin: admin });
                if let Some(navigate) = navigate {
                    navigate.go(destination);
                }
            },
            label { r#for: "login-name", "Name" }
            input {
                id: "login-name",
                r#type: "text",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            button { r#type: "submit", class: "action action--primary", "Sign in" }
        }
    }
}
