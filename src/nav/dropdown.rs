//! Hover state of the dropdown menus.

use super::item::NavItem;

/// Which dropdown, if any, is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open(usize),
}

impl DropdownState {
    /// Pointer entered the entry at `index`. Leaves ignore the event.
    pub fn enter(self, index: usize, item: &NavItem) -> Self {
        if item.is_parent() {
            DropdownState::Open(index)
        } else {
            self
        }
    }

    /// Pointer left `item`. Leaves ignore the event.
    pub fn leave(self, item: &NavItem) -> Self {
        if item.is_parent() {
            DropdownState::Closed
        } else {
            self
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self == DropdownState::Open(index)
    }
}
