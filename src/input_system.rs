//! Input mapping
//!
//! Raw toolkit input is first reduced to [`RawInput`], a small
//! toolkit-free event type, and then to a [`NavigationEvent`] through a
//! fixed key mapping. Anything the mapping does not know is dropped.

/// Keys the front-end distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Other,
}

/// One input event as delivered by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    KeyDown(Key),
    WindowClose,
}

/// Abstract navigation input, decoupled from key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    MoveUp,
    MoveDown,
    Activate,
    Quit,
}

impl NavigationEvent {
    /// Fixed mapping from raw input; `None` means "ignore"
    pub fn from_raw(input: RawInput) -> Option<Self> {
        match input {
            RawInput::WindowClose => Some(NavigationEvent::Quit),
            RawInput::KeyDown(Key::Up) => Some(NavigationEvent::MoveUp),
            RawInput::KeyDown(Key::Down) => Some(NavigationEvent::MoveDown),
            RawInput::KeyDown(Key::Enter) => Some(NavigationEvent::Activate),
            RawInput::KeyDown(Key::Other) => None,
        }
    }
}

#[cfg(feature = "sdl")]
mod sdl {
    use super::{Key, RawInput};
    use sdl2::EventPump;
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;

    /// Translates one SDL2 event; events the front-end never looks at give `None`
    pub fn translate_event(event: &Event) -> Option<RawInput> {
        match event {
            Event::Quit { .. } => Some(RawInput::WindowClose),
            Event::KeyDown {
                keycode: Some(key), ..
            } => Some(RawInput::KeyDown(translate_key(*key))),
            _ => None,
        }
    }

    fn translate_key(key: Keycode) -> Key {
        match key {
            Keycode::Up => Key::Up,
            Keycode::Down => Key::Down,
            Keycode::Return | Keycode::KpEnter => Key::Enter,
            _ => Key::Other,
        }
    }

    /// Drains every pending SDL2 event, in arrival order
    pub fn poll_events(event_pump: &mut EventPump) -> Vec<RawInput> {
        event_pump
            .poll_iter()
            .filter_map(|event| translate_event(&event))
            .collect()
    }
}

#[cfg(feature = "sdl")]
pub use sdl::{poll_events, translate_event};
