//! Links that use client-side navigation when a router is mounted.

use dioxus::prelude::*;

/// Navigation capability injected by the client shell.
///
/// Absent during SSR, where links fall back to plain page loads.
#[derive(Clone, Copy)]
pub struct NavigateHandle(Callback<String>);

impl NavigateHandle {
    pub fn new(callback: Callback<String>) -> Self {
        NavigateHandle(callback)
    }

    pub fn go(&self, path: impl Into<String>) {
        self.0.call(path.into());
    }
}

/// Optional navigation handle for components rendered in both modes.
pub fn use_navigate_handle() -> Option<NavigateHandle> {
    try_use_context::<NavigateHandle>()
}

/// Anchor that routes through [`NavigateHandle`] when one is provided.
#[component]
pub fn NavLink(
    /// Target path
    #[props(into)]
    to: String,
    #[props(default, into)]
    class: String,
    children: Element,
) -> Element {
    let handle = use_navigate_handle();
    let target = to.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{to}",
            onclick: move |evt: MouseEvent| {
                if let Some(handle) = handle {
                    evt.prevent_default();
                    handle.go(target.clone());
                }
            },
            {children}
        }
    }
}
