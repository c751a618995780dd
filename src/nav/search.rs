//! Search over navigation labels.

use serde::{Deserialize, Serialize};

use super::item::NavItem;

pub const SEARCH_PATH: &str = "/search";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub label: String,
    /// Dropdown the hit was found under, if any.
    pub category: Option<String>,
    pub path: String,
}

/// Every navigable label containing `query` (case-insensitive), in menu order.
pub fn search(items: &[NavItem], query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for item in items {
        match item {
            NavItem::Leaf { label, path } => {
                if label.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        label: label.clone(),
                        category: None,
                        path: path.clone(),
                    });
                }
            }
            NavItem::Parent { label, children } => {
                hits.extend(
                    children
                        .iter()
                        .filter(|child| child.label.to_lowercase().contains(&needle))
                        .map(|child| SearchHit {
                            label: child.label.clone(),
                            category: Some(label.clone()),
                            path: child.path.clone(),
                        }),
                );
            }
        }
    }
    hits
}

/// URL of the search results page for `query`.
pub fn search_url(query: &str) -> String {
    format!("{}?query={}", SEARCH_PATH, urlencoding::encode(query.trim()))
}
