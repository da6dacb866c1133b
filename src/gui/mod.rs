//! Menu Screens
//!
//! The interactive half of the front-end. Everything here is plain state:
//! no toolkit types, no drawing. The [`MenuController`](crate::menu_controller::MenuController)
//! turns the active screen into draw directives each tick.
//!
//! # Available Components
//!
//! - [`Menu`] - Item list with a wrapping selection cursor
//! - [`Screen`] - Title / main menu / settings state machine
//! - [`ControlsInfo`] - Timed info pause inside the settings screen
//!
//! # Example Usage
//!
//! ```rust
//! use starfield_menu::gui::{MenuCatalog, Screen};
//! use starfield_menu::input_system::NavigationEvent;
//! use std::time::Instant;
//!
//! let catalog = MenuCatalog::default();
//! let (screen, _) = Screen::Title.handle(NavigationEvent::Activate, Instant::now(), &catalog);
//! assert!(matches!(screen, Screen::MainMenu(_)));
//! ```

pub mod controls_info;
pub mod menu;
pub mod screen;

pub use controls_info::ControlsInfo;
pub use menu::{Menu, MenuAction, MenuItem};
pub use screen::{MenuCatalog, Screen, ScreenEffect};
