//! Menu controller
//!
//! Drives the active [`Screen`] once per tick: drains the tick's input,
//! applies transitions, animates the background and hands back a fresh
//! [`DrawPlan`]. The application loop owns the window and just executes
//! whatever plan comes out.

use crate::config::MenuConfig;
use crate::draw_plan::{DrawCommand, DrawPlan, Rgb, TextPosition};
use crate::gui::{MenuCatalog, Screen, ScreenEffect};
use crate::input_system::{NavigationEvent, RawInput};
use crate::phrases::PhraseSource;
use crate::starfield::StarField;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Requests for the outside world that do not change the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSignal {
    StartGame,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub plan: DrawPlan,
    pub terminate: bool,
    pub signals: Vec<MenuSignal>,
}

/// Colors, texts and positions used to draw the screens
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStyle {
    pub background_color: Rgb,
    pub item_color: Rgb,
    pub selected_item_color: Rgb,
    pub selected_marker: String,
    pub title_text: String,
    pub prompt_text: String,
    pub controls_info: Vec<String>,
    pub title_y: i32,
    pub prompt_y: i32,
    pub menu_y: i32,
    pub item_spacing: i32,
}

impl MenuStyle {
    pub fn from_config(config: &MenuConfig) -> Self {
        MenuStyle {
            background_color: config.colors.background,
            item_color: config.colors.text,
            selected_item_color: config.colors.selected,
            selected_marker: config.selected_marker.clone(),
            title_text: config.title_text.clone(),
            prompt_text: config.prompt_text.clone(),
            controls_info: config.controls_info.clone(),
            title_y: config.layout.title_y,
            prompt_y: config.layout.prompt_y,
            menu_y: config.layout.menu_y,
            item_spacing: config.layout.item_spacing,
        }
    }
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle::from_config(&MenuConfig::default())
    }
}

pub struct MenuController {
    screen: Screen,
    catalog: MenuCatalog,
    style: MenuStyle,
    starfield: StarField,
    phrases: PhraseSource,
    rng: StdRng,
    width: u32,
    height: u32,
    terminated: bool,
}

impl MenuController {
    /// Builds the controller on the title screen
    ///
    /// The random source is seeded exactly once here, from the config seed
    /// if there is one.
    pub fn new(config: &MenuConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &MenuConfig, mut rng: StdRng) -> Self {
        let starfield = StarField::new(
            config.stars.count,
            config.window.width,
            config.window.height,
            config.stars.speed,
            config.stars.size,
            &mut rng,
        );

        MenuController {
            screen: Screen::Title,
            catalog: config.catalog(),
            style: MenuStyle::from_config(config),
            starfield,
            phrases: PhraseSource::new(config.phrases.clone()),
            rng,
            width: config.window.width,
            height: config.window.height,
            terminated: false,
        }
    }

    /// Runs one tick
    ///
    /// Events are applied in arrival order. A quit stops the processing of
    /// the remaining events for this tick. The background still advances
    /// and a full plan is produced either way.
    pub fn update(&mut self, events: &[RawInput], now: Instant) -> FrameOutput {
        let mut signals = Vec::new();

        if self.screen.expire_info(now) {
            tracing::debug!("controls info closed");
        }

        if !self.terminated {
            for event in events.iter().copied().filter_map(NavigationEvent::from_raw) {
                if let Some(effect) = self.dispatch(event, now) {
                    match effect {
                        ScreenEffect::StartGame => {
                            tracing::debug!("start game requested");
                            signals.push(MenuSignal::StartGame);
                        }
                        ScreenEffect::ControlsInfoShown => {
                            tracing::debug!(
                                duration_ms = self.catalog.info_duration.as_millis() as u64,
                                "showing controls info"
                            );
                        }
                        ScreenEffect::Quit => {
                            tracing::info!(screen = self.screen.name(), "quit requested");
                            self.terminated = true;
                            break;
                        }
                    }
                }
            }
        }

        self.starfield.advance(&mut self.rng);
        let plan = self.compose();
        tracing::trace!(commands = plan.len(), "frame composed");

        FrameOutput {
            plan,
            terminate: self.terminated,
            signals,
        }
    }

    fn dispatch(&mut self, event: NavigationEvent, now: Instant) -> Option<ScreenEffect> {
        let from = self.screen.name();
        let screen = std::mem::take(&mut self.screen);
        let (next, effect) = screen.handle(event, now, &self.catalog);
        self.screen = next;

        let to = self.screen.name();
        if from != to {
            tracing::info!(from, to, "screen transition");
        } else if let Some(menu) = self.screen.menu() {
            tracing::debug!(?event, selected = menu.selected_index(), "navigation");
        }
        effect
    }

    /// Assembles the frame: background, particles, phrase, then the screen
    fn compose(&mut self) -> DrawPlan {
        let style = &self.style;
        let mut plan = DrawPlan::new();

        plan.push(DrawCommand::Clear(style.background_color));
        plan.extend(self.starfield.render());

        if let Some(phrase) = self.phrases.pick(&mut self.rng, self.width, self.height) {
            plan.push(DrawCommand::Text {
                text: phrase.text.to_string(),
                color: style.item_color,
                position: TextPosition::At {
                    x: phrase.x,
                    y: phrase.y,
                },
            });
        }

        match &self.screen {
            Screen::Title => {
                plan.push(DrawCommand::Banner {
                    fallback: style.title_text.clone(),
                    color: style.item_color,
                    y: style.title_y,
                });
                plan.push(DrawCommand::Text {
                    text: style.prompt_text.clone(),
                    color: style.item_color,
                    position: TextPosition::Centered { y: style.prompt_y },
                });
            }
            Screen::Settings { info: Some(_), .. } => {
                for (i, line) in style.controls_info.iter().enumerate() {
                    plan.push(DrawCommand::Text {
                        text: line.clone(),
                        color: style.item_color,
                        position: TextPosition::Centered {
                            y: style.menu_y + i as i32 * style.item_spacing,
                        },
                    });
                }
            }
            Screen::MainMenu(menu) | Screen::Settings { menu, .. } => {
                for (i, item) in menu.items().iter().enumerate() {
                    let is_selected = i == menu.selected_index();
                    let (text, color) = if is_selected {
                        (
                            format!("{}{}", style.selected_marker, item.label),
                            style.selected_item_color,
                        )
                    } else {
                        (item.label.clone(), style.item_color)
                    };

                    plan.push(DrawCommand::Text {
                        text,
                        color,
                        position: TextPosition::Centered {
                            y: style.menu_y + i as i32 * style.item_spacing,
                        },
                    });
                }
            }
        }

        plan
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn starfield(&self) -> &StarField {
        &self.starfield
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_system::Key;
    use std::time::Duration;

    const DOWN: RawInput = RawInput::KeyDown(Key::Down);
    const UP: RawInput = RawInput::KeyDown(Key::Up);
    const ENTER: RawInput = RawInput::KeyDown(Key::Enter);

    fn controller() -> MenuController {
        let config = MenuConfig {
            rng_seed: Some(1234),
            ..MenuConfig::default()
        };
        MenuController::new(&config)
    }

    fn selected(controller: &MenuController) -> usize {
        controller.screen().menu().unwrap().selected_index()
    }

    fn count_particles(plan: &DrawPlan) -> usize {
        plan.commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Particle { .. }))
            .count()
    }

    #[test]
    fn test_starts_on_title() {
        let controller = controller();
        assert_eq!(*controller.screen(), Screen::Title);
        assert!(!controller.is_terminated());
    }

    #[test]
    fn test_title_plan_has_banner_and_prompt() {
        let mut controller = controller();
        let output = controller.update(&[], Instant::now());

        assert!(!output.terminate);
        assert!(output.plan.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Banner { fallback, .. } if fallback == "Chud Bullet Hell"
        )));
        assert!(output.plan.texts().any(|(text, _, _)| text == "Press Enter to Start"));
    }

    #[test]
    fn test_enter_then_navigate() {
        let mut controller = controller();
        let now = Instant::now();

        controller.update(&[ENTER], now);
        assert!(matches!(controller.screen(), Screen::MainMenu(_)));
        assert_eq!(selected(&controller), 0);

        controller.update(&[UP], now);
        assert_eq!(selected(&controller), 2);

        controller.update(&[DOWN], now);
        assert_eq!(selected(&controller), 0);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut controller = controller();
        let output = controller.update(&[RawInput::KeyDown(Key::Other)], Instant::now());

        assert!(!output.terminate);
        assert_eq!(*controller.screen(), Screen::Title);
    }

    #[test]
    fn test_window_close_stops_processing() {
        let mut controller = controller();
        let now = Instant::now();
        controller.update(&[ENTER], now);

        let output = controller.update(&[DOWN, RawInput::WindowClose, DOWN], now);

        assert!(output.terminate);
        assert_eq!(selected(&controller), 1);
        assert_eq!(count_particles(&output.plan), 8);
    }

    #[test]
    fn test_stays_terminated() {
        let mut controller = controller();
        let now = Instant::now();
        controller.update(&[RawInput::WindowClose], now);

        let output = controller.update(&[ENTER], now);
        assert!(output.terminate);
        assert_eq!(*controller.screen(), Screen::Title);
    }

    #[test]
    fn test_exit_item_terminates() {
        let mut controller = controller();
        let output = controller.update(&[ENTER, UP, ENTER], Instant::now());
        assert!(output.terminate);
    }

    #[test]
    fn test_play_emits_start_signal() {
        let mut controller = controller();
        let output = controller.update(&[ENTER, ENTER], Instant::now());

        assert_eq!(output.signals, vec![MenuSignal::StartGame]);
        assert!(!output.terminate);
        assert!(matches!(controller.screen(), Screen::MainMenu(_)));
    }

    #[test]
    fn test_main_menu_plan_composition() {
        let mut controller = controller();
        let now = Instant::now();
        controller.update(&[ENTER, DOWN], now);

        let output = controller.update(&[], now);
        let commands = output.plan.commands();

        let clears = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear(_)))
            .count();
        assert_eq!(clears, 1);
        assert_eq!(commands[0], DrawCommand::Clear(Rgb::RED));
        assert_eq!(count_particles(&output.plan), 8);

        let texts: Vec<_> = output.plan.texts().collect();
        assert_eq!(texts.len(), 4);

        let phrases = texts
            .iter()
            .filter(|(_, _, position)| matches!(position, TextPosition::At { .. }))
            .count();
        assert_eq!(phrases, 1);

        let items = &texts[1..];
        assert_eq!(items[0], ("Play", Rgb::YELLOW, TextPosition::Centered { y: 200 }));
        assert_eq!(
            items[1],
            ("--> Settings", Rgb::WHITE, TextPosition::Centered { y: 250 })
        );
        assert_eq!(items[2], ("Exit", Rgb::YELLOW, TextPosition::Centered { y: 300 }));
    }

    #[test]
    fn test_settings_round_trip() {
        let mut controller = controller();
        let now = Instant::now();

        controller.update(&[ENTER, DOWN, ENTER], now);
        assert!(matches!(controller.screen(), Screen::Settings { .. }));
        assert_eq!(selected(&controller), 0);

        controller.update(&[DOWN, ENTER], now);
        assert!(matches!(controller.screen(), Screen::MainMenu(_)));
        assert_eq!(selected(&controller), 0);
    }

    #[test]
    fn test_controls_info_is_timed_and_interruptible() {
        let mut controller = controller();
        let start = Instant::now();

        controller.update(&[ENTER, DOWN, ENTER, ENTER], start);
        assert!(controller.screen().is_showing_info());

        let output = controller.update(&[DOWN], start + Duration::from_secs(1));
        assert!(controller.screen().is_showing_info());
        assert!(output.plan.texts().any(|(text, _, _)| text == "Enter: select"));
        assert!(!output.plan.texts().any(|(text, _, _)| text.contains("Back")));

        let output = controller.update(&[], start + Duration::from_secs(3));
        assert!(!controller.screen().is_showing_info());
        assert!(matches!(controller.screen(), Screen::Settings { .. }));
        assert!(output.plan.texts().any(|(text, _, _)| text == "--> Controls"));
    }

    #[test]
    fn test_window_close_during_controls_info() {
        let mut controller = controller();
        let start = Instant::now();
        controller.update(&[ENTER, DOWN, ENTER, ENTER], start);

        let output = controller.update(&[RawInput::WindowClose], start + Duration::from_secs(1));
        assert!(output.terminate);
    }

    #[test]
    fn test_particles_advance_every_tick() {
        let mut controller = controller();
        let before = controller.starfield().particles().to_vec();

        controller.update(&[], Instant::now());

        assert_ne!(controller.starfield().particles(), before.as_slice());
    }
}
