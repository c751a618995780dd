//! Path resolution and active-route detection.

use regex::Regex;
use std::sync::LazyLock;

/// Category whose children map under `/specialties`.
pub const SPECIALTIES_CATEGORY: &str = "Centers of Excellence";

/// Category whose children map under `/about`.
pub const ABOUT_CATEGORY: &str = "About Us";

/// Dropdown label that links to the specialties index.
pub const VIEW_ALL_SPECIALTIES: &str = "View All Specialties";

/// Specialties that have their own page under `/specialties/`.
pub const SPECIALTIES: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Gastroenterology",
    "Orthopedic",
    "Oncology",
    "Gynecology",
];

pub const SPECIALTIES_PATH: &str = "/specialties";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercase `label` and collapse each whitespace run into one hyphen.
///
/// Punctuation is kept as-is: `"Women's Health"` becomes `"women's-health"`.
pub fn kebab_case(label: &str) -> String {
    WHITESPACE.replace_all(&label.to_lowercase(), "-").into_owned()
}

/// Path of a top-level entry. `Home` is the site root.
pub fn top_level_path(label: &str) -> String {
    if label == "Home" {
        "/".to_string()
    } else {
        format!("/{}", kebab_case(label))
    }
}

/// Path of a dropdown entry `item` listed under `category`.
pub fn item_path(category: &str, item: &str) -> String {
    if category == SPECIALTIES_CATEGORY {
        if item == VIEW_ALL_SPECIALTIES {
            return SPECIALTIES_PATH.to_string();
        }
        if SPECIALTIES.contains(&item) {
            return format!("{}/{}", SPECIALTIES_PATH, kebab_case(item));
        }
    }

    if category == ABOUT_CATEGORY {
        return format!("/about/{}", kebab_case(item));
    }

    format!("/{}", kebab_case(item))
}

/// Whether `candidate` should read as the current route for `current`.
///
/// The root only matches itself; every other path matches by prefix, so a
/// parent path is active for all of its nested routes.
pub fn is_active(candidate: &str, current: &str) -> bool {
    if candidate == "/" {
        current == "/"
    } else {
        current.starts_with(candidate)
    }
}
