//! Toolkit-agnostic frame description
//!
//! A [`DrawPlan`] is an ordered list of directives for one frame. The core
//! builds a fresh plan every tick and the rendering sink consumes it right
//! away; nothing here knows about SDL2 or pixels.

use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// Where a piece of text goes
///
/// Centered text is resolved by the sink once it has measured the string
/// (see [`crate::text::place`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextPosition {
    /// Horizontally centered in the window, top edge at `y`
    Centered { y: i32 },
    /// Top-left corner at `(x, y)`
    At { x: i32, y: i32 },
}

/// A single draw directive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole frame with one color
    Clear(Rgb),

    /// One background particle, drawn as a `size` x `size` square
    Particle { x: f32, y: f32, size: u32 },

    /// A line of text
    Text {
        text: String,
        color: Rgb,
        position: TextPosition,
    },

    /// The title banner: the title image if the sink has one, otherwise
    /// `fallback` drawn as centered text at `y`
    Banner { fallback: String, color: Rgb, y: i32 },
}

/// Ordered directives for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawPlan {
    commands: Vec<DrawCommand>,
}

impl DrawPlan {
    pub fn new() -> Self {
        DrawPlan::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the text directives only, in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Rgb, TextPosition)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text {
                text,
                color,
                position,
            } => Some((text.as_str(), *color, *position)),
            _ => None,
        })
    }
}

impl Extend<DrawCommand> for DrawPlan {
    fn extend<I: IntoIterator<Item = DrawCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl IntoIterator for DrawPlan {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
