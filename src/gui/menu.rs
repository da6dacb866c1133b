//! Base Menu Component
//!
//! An ordered list of items with a wrapping selection cursor. Screens own
//! one of these each; how an item is drawn is decided by the controller.

use serde::{Deserialize, Serialize};

/// What activating a menu item does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    StartGame,
    OpenSettings,
    OpenControlsInfo,
    GoBack,
    Quit,
}

/// A menu entry: label plus the action it triggers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        MenuItem {
            label: label.into(),
            action,
        }
    }
}

/// A stateful menu with a selection cursor
///
/// Items are fixed once the menu is built. The cursor always points at an
/// existing item; on an empty menu navigation is a no-op and there is no
/// selected item.
///
/// # Example
///
/// ```rust
/// use starfield_menu::gui::{Menu, MenuAction, MenuItem};
///
/// let mut menu = Menu::new(vec![
///     MenuItem::new("Play", MenuAction::StartGame),
///     MenuItem::new("Exit", MenuAction::Quit),
/// ]);
///
/// menu.select_next();
/// assert_eq!(menu.selected_action(), Some(MenuAction::Quit));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
    selected_index: usize,
}

impl Menu {
    /// Creates a menu with the first item selected
    pub fn new(items: Vec<MenuItem>) -> Self {
        Menu {
            items,
            selected_index: 0,
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        let count = self.items.len();
        if count > 0 {
            self.selected_index = (self.selected_index + count - 1) % count;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        let count = self.items.len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    /// Moves the cursor to `index`, ignoring out-of-range values
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    /// Get currently selected index
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_action(&self) -> Option<MenuAction> {
        self.items.get(self.selected_index).map(|item| item.action)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
