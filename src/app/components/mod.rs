//! Shared UI components.

pub mod action_panel;
pub mod icons;
pub mod layout;
pub mod nav_link;
pub mod navbar;

pub use action_panel::{ActionButton, ActionPanel};
pub use layout::{Footer, Shell};
pub use nav_link::{use_navigate_handle, NavLink, NavigateHandle};
pub use navbar::Navbar;
