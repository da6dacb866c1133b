//! Title and menu front-end for a small 2D game
//!
//! The core is toolkit-free: [`menu_controller::MenuController`] takes the
//! tick's input events and returns a [`draw_plan::DrawPlan`] plus a quit
//! flag. The SDL2 window, assets and the frame loop live in the binary and,
//! with the `sdl` feature, in [`render`].

pub mod config;
pub mod draw_plan;
pub mod error;
pub mod gui;
pub mod input_system;
pub mod menu_controller;
pub mod phrases;
pub mod starfield;
pub mod text;

#[cfg(feature = "sdl")]
pub mod render;

pub use config::MenuConfig;
pub use draw_plan::{DrawCommand, DrawPlan, Rgb, TextPosition};
pub use error::{ConfigError, FrontendError};
pub use menu_controller::{FrameOutput, MenuController, MenuSignal};
