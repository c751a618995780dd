//! Login / dashboard buttons gated by the auth session.

use dioxus::prelude::*;

use super::icons::ShieldIcon;
use crate::nav::{ActionStyle, AuthPanel, NavAction};

/// Renders the button group selected by `panel`.
#[component]
pub fn ActionPanel(
    panel: AuthPanel,
    /// Render actions as plain links (no client-side handlers)
    #[props(default = false)]
    static_render: bool,
    #[props(default)] on_action: EventHandler<NavAction>,
) -> Element {
    rsx! {
        div { class: "action-panel",
            for action in panel.actions().iter().copied() {
                ActionButton {
                    key: "{action.id}",
                    action,
                    static_render,
                    on_action,
                }
            }
        }
    }
}

/// A single navbar action.
#[component]
pub fn ActionButton(
    action: NavAction,
    #[props(default = false)] static_render: bool,
    #[props(default)] on_action: EventHandler<NavAction>,
) -> Element {
    let class = action.style.class();
    let admin = action.style == ActionStyle::Admin;

    if static_render {
        return rsx! {
            a {
                class: "{class}",
                href: action.target(),
                "data-action": action.id,
                if admin {
                    ShieldIcon {}
                }
                "{action.label}"
            }
        };
    }

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "data-action": action.id,
            onclick: move |_| on_action.call(action),
            if admin {
                ShieldIcon {}
            }
            "{action.label}"
        }
    }
}
