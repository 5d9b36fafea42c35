//! Input events delivered by the host shell.
//!
//! Positions are screen-space client coordinates; the dispatcher converts
//! them to canvas/image space itself so hosts stay dumb.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Events the annotation canvas responds to.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed { button: MouseButton, client: Point },
    /// Mouse button released.
    MouseReleased { button: MouseButton, client: Point },
    /// Mouse moved.
    MouseMoved { client: Point },
    /// Mouse left the tracked frame.
    MouseLeft { client: Point },
    /// Mouse wheel scrolled.
    MouseWheel { delta: f64, client: Point },
    /// Primary button double-clicked.
    DoubleClick { client: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key },
    /// Keyboard key released.
    KeyReleased { key: Key },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys (simplified set: characters plus the keys the dispatcher
/// and bindings care about).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Shift,
    Ctrl,
    Alt,
    Meta,
    Space,
    Enter,
    Escape,
    Tab,
    Delete,
}
