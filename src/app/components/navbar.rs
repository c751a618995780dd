//! Top navigation bar: search, contact numbers, auth actions and the
//! dropdown menu.
//!
//! The bar takes everything from props. The client shell feeds it the router
//! location and a navigation callback; the server feeds it the requested path
//! and renders it with `static_render`, in which case links are plain anchors
//! and every dropdown is emitted for the stylesheet to reveal on hover.

use dioxus::prelude::*;

use super::action_panel::ActionPanel;
use super::icons::{ChevronDownIcon, SearchIcon};
use crate::auth::Session;
use crate::nav::search::SEARCH_PATH;
use crate::nav::{search_url, AuthPanel, DropdownState, NavAction, NavChild, NavItem, SiteData};

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// Path of the page being shown (e.g. "/specialties/cardiology")
    pub current_path: String,
    /// Authentication flags for the action panel
    pub session: Session,
    pub site: SiteData,
    /// Server-rendered page without client-side handlers
    #[props(default = false)]
    pub static_render: bool,
    /// Called with the target path when a menu link or search is followed
    #[props(default)]
    pub on_navigate: EventHandler<String>,
    /// Called when an auth action button is pressed
    #[props(default)]
    pub on_action: EventHandler<NavAction>,
}

#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let dropdown = use_signal(DropdownState::default);
    let mut query = use_signal(String::new);

    let static_render = props.static_render;
    let on_navigate = props.on_navigate;
    let panel = AuthPanel::for_session(props.session);

    rsx! {
        header { class: "navbar",
            div { class: "navbar__top",
                div { class: "navbar__inner",
                    form {
                        class: "navbar__search",
                        role: "search",
                        action: SEARCH_PATH,
                        method: "get",
                        onsubmit: move |evt: FormEvent| {
                            if static_render {
                                return;
                            }
                            evt.prevent_default();
                            let q = query();
                            if !q.trim().is_empty() {
                                on_navigate.call(search_url(&q));
                            }
                        },
                        input {
                            r#type: "text",
                            name: "query",
                            placeholder: "Search Services",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "navbar__search-button",
                            "aria-label": "Search",
                            SearchIcon {}
                        }
                    }
                    div { class: "navbar__contacts",
                        for (position, contact) in props.site.contacts.iter().enumerate() {
                            div { key: "{position}", class: "contact",
                                span { class: "contact__label", "{contact.label}" }
                                div { class: "contact__number",
                                    span { class: "contact__phone", "📞" }
                                    span { "{contact.number}" }
                                }
                            }
                        }
                        ActionPanel { panel, static_render, on_action: props.on_action }
                    }
                }
            }
            div { class: "navbar__menu",
                nav { class: "menu",
                    for (index, item) in props.site.navigation.iter().enumerate() {
                        MenuEntry {
                            key: "{index}",
                            index,
                            item: item.clone(),
                            current_path: props.current_path.clone(),
                            dropdown,
                            static_render,
                            on_navigate,
                        }
                    }
                }
            }
        }
    }
}

/// One top-level menu entry, with its dropdown when it is a parent.
#[component]
fn MenuEntry(
    index: usize,
    item: NavItem,
    current_path: String,
    mut dropdown: Signal<DropdownState>,
    static_render: bool,
    on_navigate: EventHandler<String>,
) -> Element {
    let open = dropdown().is_open(index);
    let highlighted = item.is_active(&current_path) || open;
    let is_parent = item.is_parent();

    let entry_class = if is_parent {
        "menu__entry menu__entry--parent"
    } else {
        "menu__entry"
    };
    let link_class = if highlighted {
        "menu__link menu__link--active"
    } else {
        "menu__link"
    };
    let chevron_class = if open {
        "menu__chevron menu__chevron--open"
    } else {
        "menu__chevron"
    };
    let underline_class = if highlighted {
        "menu__underline menu__underline--shown"
    } else {
        "menu__underline"
    };
    let dropdown_class = if static_render {
        "dropdown dropdown--static"
    } else {
        "dropdown"
    };

    // Parents are not navigable; their anchor is a hover target only.
    let href = match &item {
        NavItem::Leaf { path, .. } => path.clone(),
        NavItem::Parent { .. } => "#".to_string(),
    };
    let leaf_target = match &item {
        NavItem::Leaf { path, .. } => Some(path.clone()),
        NavItem::Parent { .. } => None,
    };
    let show_children = is_parent && (open || static_render);

    let enter_item = item.clone();
    let leave_item = item.clone();

    rsx! {
        div {
            class: "{entry_class}",
            onmouseenter: move |_| {
                let next = dropdown().enter(index, &enter_item);
                dropdown.set(next);
            },
            onmouseleave: move |_| {
                let next = dropdown().leave(&leave_item);
                dropdown.set(next);
            },
            a {
                class: "{link_class}",
                href: "{href}",
                onclick: move |evt: MouseEvent| {
                    match &leaf_target {
                        None => evt.prevent_default(),
                        Some(path) if !static_render => {
                            evt.prevent_default();
                            on_navigate.call(path.clone());
                        }
                        Some(_) => {}
                    }
                },
                span { "{item.label()}" }
                if is_parent {
                    ChevronDownIcon { class: chevron_class.to_string() }
                }
                div { class: "{underline_class}" }
            }
            if show_children {
                div { class: "{dropdown_class}",
                    for (position, child) in item.children().iter().enumerate() {
                        DropdownLink {
                            key: "{position}",
                            child: child.clone(),
                            dropdown,
                            static_render,
                            on_navigate,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DropdownLink(
    child: NavChild,
    mut dropdown: Signal<DropdownState>,
    static_render: bool,
    on_navigate: EventHandler<String>,
) -> Element {
    let target = child.path.clone();

    rsx! {
        a {
            class: "dropdown__link",
            href: "{child.path}",
            onclick: move |evt: MouseEvent| {
                if static_render {
                    return;
                }
                evt.prevent_default();
                dropdown.set(DropdownState::Closed);
                on_navigate.call(target.clone());
            },
            "{child.label}"
        }
    }
}
