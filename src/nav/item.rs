//! Navigation entries.

use serde::{Deserialize, Serialize};

use super::path::{is_active, item_path, top_level_path};
use crate::error::{Result, SiteError};

/// Navigation record as it appears in configuration (`navbar.json`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

impl NavEntry {
    pub fn leaf(name: &str) -> Self {
        NavEntry {
            name: name.to_string(),
            items: None,
        }
    }

    pub fn parent(name: &str, items: &[&str]) -> Self {
        NavEntry {
            name: name.to_string(),
            items: Some(items.iter().map(|s| s.to_string()).collect()),
        }
    }
}

/// One dropdown link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavChild {
    pub label: String,
    pub path: String,
}

/// Top-level navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    /// Navigable entry.
    Leaf { label: String, path: String },
    /// Dropdown parent. Its own link is suppressed.
    Parent {
        label: String,
        children: Vec<NavChild>,
    },
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            NavItem::Leaf { label, .. } | NavItem::Parent { label, .. } => label,
        }
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, NavItem::Parent { .. })
    }

    pub fn children(&self) -> &[NavChild] {
        match self {
            NavItem::Leaf { .. } => &[],
            NavItem::Parent { children, .. } => children,
        }
    }

    /// Path derived from the label, used for active highlighting.
    ///
    /// For a parent this is never linked to.
    pub fn path(&self) -> String {
        match self {
            NavItem::Leaf { path, .. } => path.clone(),
            NavItem::Parent { label, .. } => top_level_path(label),
        }
    }

    /// Whether the entry reads as current for `current_path`.
    ///
    /// A parent is also active when one of its dropdown links is.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(&self.path(), current_path)
            || self
                .children()
                .iter()
                .any(|child| is_active(&child.path, current_path))
    }
}

impl TryFrom<(usize, NavEntry)> for NavItem {
    type Error = SiteError;

    fn try_from((index, entry): (usize, NavEntry)) -> Result<Self> {
        if entry.name.trim().is_empty() {
            return Err(SiteError::InvalidEntry {
                index,
                reason: "name is blank".to_string(),
            });
        }

        match entry.items {
            None => Ok(NavItem::Leaf {
                path: top_level_path(&entry.name),
                label: entry.name,
            }),
            Some(items) => {
                let mut children = Vec::with_capacity(items.len());
                for item in items {
                    if item.trim().is_empty() {
                        return Err(SiteError::InvalidEntry {
                            index,
                            reason: format!("blank dropdown label under '{}'", entry.name),
                        });
                    }
                    children.push(NavChild {
                        path: item_path(&entry.name, &item),
                        label: item,
                    });
                }
                Ok(NavItem::Parent {
                    label: entry.name,
                    children,
                })
            }
        }
    }
}

impl From<&NavItem> for NavEntry {
    fn from(item: &NavItem) -> Self {
        match item {
            NavItem::Leaf { label, .. } => NavEntry {
                name: label.clone(),
                items: None,
            },
            NavItem::Parent { label, children } => NavEntry {
                name: label.clone(),
                items: Some(children.iter().map(|c| c.label.clone()).collect()),
            },
        }
    }
}

/// Convert configuration records into navigation items, in order.
pub fn build_nav(entries: Vec<NavEntry>) -> Result<Vec<NavItem>> {
    entries
        .into_iter()
        .enumerate()
        .map(NavItem::try_from)
        .collect()
}

/// Parse `navbar.json` content.
pub fn parse_nav(json: &str) -> Result<Vec<NavItem>> {
    let entries: Vec<NavEntry> = serde_json::from_str(json)?;
    build_nav(entries)
}
