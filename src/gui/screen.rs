//! Screen State Machine
//!
//! The whole transition table lives in [`Screen::handle`]: one match over
//! the active screen and the incoming event. Pairs that are not listed fall
//! through to "stay put, no effect".
//!
//! ```text
//! Title ──Activate──▶ MainMenu ──Activate(OpenSettings)──▶ Settings
//!                        ▲                                   │
//!                        └────────Activate(GoBack)───────────┘
//! ```
//!
//! Quit (window close, or activating a Quit item) ends the front-end from
//! any screen, including while the controls info is up.

use super::controls_info::ControlsInfo;
use super::menu::{Menu, MenuAction, MenuItem};
use crate::input_system::NavigationEvent;
use std::time::{Duration, Instant};

/// Items and timings every screen is built from
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    pub main_menu: Vec<MenuItem>,
    pub settings_menu: Vec<MenuItem>,
    pub info_duration: Duration,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        MenuCatalog {
            main_menu: vec![
                MenuItem::new("Play", MenuAction::StartGame),
                MenuItem::new("Settings", MenuAction::OpenSettings),
                MenuItem::new("Exit", MenuAction::Quit),
            ],
            settings_menu: vec![
                MenuItem::new("Controls", MenuAction::OpenControlsInfo),
                MenuItem::new("Back", MenuAction::GoBack),
            ],
            info_duration: super::controls_info::DEFAULT_INFO_DURATION,
        }
    }
}

/// One full-screen interactive mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Title,
    MainMenu(Menu),
    Settings {
        menu: Menu,
        /// Set while the controls info pause is running
        info: Option<ControlsInfo>,
    },
}

/// Side effects a transition asks the outside world for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffect {
    StartGame,
    ControlsInfoShown,
    Quit,
}

impl Screen {
    pub fn main_menu(catalog: &MenuCatalog) -> Self {
        Screen::MainMenu(Menu::new(catalog.main_menu.clone()))
    }

    pub fn settings(catalog: &MenuCatalog) -> Self {
        Screen::Settings {
            menu: Menu::new(catalog.settings_menu.clone()),
            info: None,
        }
    }

    /// Applies one navigation event, returning the next screen
    pub fn handle(
        self,
        event: NavigationEvent,
        now: Instant,
        catalog: &MenuCatalog,
    ) -> (Screen, Option<ScreenEffect>) {
        use NavigationEvent::*;

        match (self, event) {
            (screen, Quit) => (screen, Some(ScreenEffect::Quit)),

            (Screen::Title, Activate) => (Screen::main_menu(catalog), None),

            (Screen::MainMenu(mut menu), MoveUp) => {
                menu.select_previous();
                (Screen::MainMenu(menu), None)
            }
            (Screen::MainMenu(mut menu), MoveDown) => {
                menu.select_next();
                (Screen::MainMenu(menu), None)
            }
            (Screen::MainMenu(menu), Activate) => match menu.selected_action() {
                Some(MenuAction::StartGame) => {
                    (Screen::MainMenu(menu), Some(ScreenEffect::StartGame))
                }
                Some(MenuAction::OpenSettings) => (Screen::settings(catalog), None),
                Some(MenuAction::Quit) => (Screen::MainMenu(menu), Some(ScreenEffect::Quit)),
                _ => (Screen::MainMenu(menu), None),
            },

            // Navigation is held while the info is showing
            (screen @ Screen::Settings { info: Some(_), .. }, _) => (screen, None),

            (Screen::Settings { mut menu, info }, MoveUp) => {
                menu.select_previous();
                (Screen::Settings { menu, info }, None)
            }
            (Screen::Settings { mut menu, info }, MoveDown) => {
                menu.select_next();
                (Screen::Settings { menu, info }, None)
            }
            (Screen::Settings { menu, info }, Activate) => match menu.selected_action() {
                Some(MenuAction::OpenControlsInfo) => {
                    let info = ControlsInfo::start(now, catalog.info_duration);
                    (
                        Screen::Settings {
                            menu,
                            info: Some(info),
                        },
                        Some(ScreenEffect::ControlsInfoShown),
                    )
                }
                Some(MenuAction::GoBack) => (Screen::main_menu(catalog), None),
                Some(MenuAction::Quit) => {
                    (Screen::Settings { menu, info }, Some(ScreenEffect::Quit))
                }
                _ => (Screen::Settings { menu, info }, None),
            },

            (screen, _) => (screen, None),
        }
    }

    /// Drops an info pause whose deadline has passed; true if one ended
    pub fn expire_info(&mut self, now: Instant) -> bool {
        if let Screen::Settings { info, .. } = self {
            if info.is_some_and(|pause| pause.is_expired(now)) {
                *info = None;
                return true;
            }
        }
        false
    }

    /// The active menu, if this screen has one
    pub fn menu(&self) -> Option<&Menu> {
        match self {
            Screen::Title => None,
            Screen::MainMenu(menu) => Some(menu),
            Screen::Settings { menu, .. } => Some(menu),
        }
    }

    pub fn is_showing_info(&self) -> bool {
        matches!(self, Screen::Settings { info: Some(_), .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Title => "title",
            Screen::MainMenu(_) => "main menu",
            Screen::Settings { info: Some(_), .. } => "settings (info)",
            Screen::Settings { .. } => "settings",
        }
    }
}
