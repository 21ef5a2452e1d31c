//! Input abstraction layer.
//!
//! Normalizes host pointer, wheel and keyboard events into a unified
//! `InputEvent`. Pointer positions are canvas-relative screen pixels; the
//! editor maps them to world space.

use kurbo::Point;

/// Keyboard modifier state captured with an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Platform command key: ⌘ on macOS, Ctrl elsewhere.
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            _ => PointerButton::Primary,
        }
    }
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
        modifiers: Modifiers,
    },

    PointerMove { x: f64, y: f64 },

    /// Pointer released, or left the canvas mid-gesture.
    PointerUp { x: f64, y: f64 },

    DoubleClick { x: f64, y: f64 },

    /// Wheel over the canvas. Positive `delta_y` scrolls down (zoom out).
    Wheel { x: f64, y: f64, delta_y: f64 },

    Key {
        /// `KeyboardEvent.key` value (e.g. `"z"`, `"Escape"`, `" "`).
        key: String,
        modifiers: Modifiers,
        /// Focus is inside an input or textarea.
        in_text_field: bool,
    },
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown {
            x,
            y,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            modifiers: Modifiers::NONE,
            in_text_field: false,
        }
    }

    pub fn key_with(key: &str, modifiers: Modifiers) -> Self {
        Self::Key {
            key: key.to_string(),
            modifiers,
            in_text_field: false,
        }
    }

    /// Screen position, if this is a positional event.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y }
            | Self::DoubleClick { x, y }
            | Self::Wheel { x, y, .. } => Some(Point::new(*x, *y)),
            Self::Key { .. } => None,
        }
    }
}
