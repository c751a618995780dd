//! Navigation model: menu entries, path rules, hover state, action panel
//! and label search. Nothing here depends on the UI framework.

pub mod data;
pub mod dropdown;
pub mod item;
pub mod panel;
pub mod path;
pub mod search;

pub use data::{ContactLine, SiteData, SitePayload};
pub use dropdown::DropdownState;
pub use item::{build_nav, parse_nav, NavChild, NavEntry, NavItem};
pub use panel::{dispatch, ActionKind, ActionStyle, AuthPanel, NavAction};
pub use path::{is_active, item_path, kebab_case, top_level_path};
pub use search::{search, search_url, SearchHit};
