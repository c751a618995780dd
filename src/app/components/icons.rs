//! Inline SVG icons.

use dioxus::prelude::*;

#[component]
pub fn SearchIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            circle { cx: "11", cy: "11", r: "8" }
            line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
        }
    }
}

#[component]
pub fn ChevronDownIcon(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            polyline { points: "6 9 12 15 18 9" }
        }
    }
}

#[component]
pub fn ShieldIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon--shield",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
        }
    }
}
