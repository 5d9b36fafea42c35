//! Input dispatcher state.
//!
//! Holds the explicit held-key set and the grab-to-pan session record, plus
//! the shared clamped mouse-position math every mouse handler goes through.
//! The per-event routing itself lives on [`crate::canvas::AnnotationCanvas`],
//! which owns the collaborators the handlers forward to.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::event::Key;
use crate::geometry::{Point, Size};

/// Modifier-key bindings for viewport gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Held while pressing/dragging to grab-pan an oversized canvas.
    pub pan: Key,
    /// Held while wheel-scrolling to zoom.
    pub zoom: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pan: Key::Ctrl,
            zoom: Key::Shift,
        }
    }
}

/// An active grab-to-pan session: where the pointer and the scroll position
/// were when the grab started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrabSession {
    pub start_client: Point,
    pub start_scroll: Point,
}

impl GrabSession {
    /// Scroll position that keeps the grabbed content under the pointer
    /// after it moved to `client`.
    pub fn scroll_for(&self, client: Point) -> Point {
        self.start_scroll - (client - self.start_client)
    }
}

/// Mutable input state owned by the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    grab: Option<GrabSession>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    /// Record a key release.
    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Whether a key is currently held.
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop all held keys. Used on mouse-leave: the matching key-up events
    /// may never reach this frame.
    pub fn clear_keys(&mut self) {
        self.held.clear();
    }

    /// Begin a grab-pan session.
    pub fn start_grab(&mut self, client: Point, scroll: Point) {
        self.grab = Some(GrabSession {
            start_client: client,
            start_scroll: scroll,
        });
    }

    /// The active grab session, if any.
    pub fn grab(&self) -> Option<GrabSession> {
        self.grab
    }

    /// End any grab-pan session.
    pub fn end_grab(&mut self) {
        self.grab = None;
    }
}

/// Shared mouse-position computation: client coordinates relative to the
/// canvas origin (container origin plus centering padding minus scroll),
/// clamped into the logical canvas so picking and editing never see
/// out-of-canvas coordinates.
pub fn canvas_position(
    client: Point,
    container_origin: Point,
    padding: Point,
    scroll: Point,
    canvas: Size,
) -> Point {
    (client - container_origin - padding + scroll).clamped(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_key_set() {
        let mut state = InputState::new();
        assert!(!state.is_held(Key::Ctrl));

        state.key_down(Key::Ctrl);
        state.key_down(Key::Char('a'));
        assert!(state.is_held(Key::Ctrl));
        assert!(state.is_held(Key::Char('a')));

        state.key_up(Key::Ctrl);
        assert!(!state.is_held(Key::Ctrl));

        state.key_down(Key::Shift);
        state.clear_keys();
        assert!(!state.is_held(Key::Shift));
        assert!(!state.is_held(Key::Char('a')));
    }

    #[test]
    fn test_grab_session_scroll() {
        let mut state = InputState::new();
        assert!(state.grab().is_none());

        state.start_grab(Point::new(100.0, 100.0), Point::new(30.0, 40.0));
        let grab = state.grab().unwrap();
        // Moving the pointer by (dx, dy) scrolls by (-dx, -dy) from start.
        assert_eq!(
            grab.scroll_for(Point::new(110.0, 95.0)),
            Point::new(20.0, 45.0)
        );

        state.end_grab();
        assert!(state.grab().is_none());
    }

    #[test]
    fn test_canvas_position_clamped() {
        let canvas = Size::new(800.0, 600.0);
        let origin = Point::new(10.0, 20.0);

        // Interior point, no padding or scroll.
        let p = canvas_position(Point::new(410.0, 320.0), origin, Point::ZERO, Point::ZERO, canvas);
        assert_eq!(p, Point::new(400.0, 300.0));

        // Scroll shifts the visible window into the canvas.
        let p = canvas_position(
            Point::new(10.0, 20.0),
            origin,
            Point::ZERO,
            Point::new(250.0, 0.0),
            canvas,
        );
        assert_eq!(p, Point::new(250.0, 0.0));

        // Far outside in every direction clamps into bounds.
        for client in [
            Point::new(-1e4, -1e4),
            Point::new(1e4, 1e4),
            Point::new(-50.0, 1e4),
        ] {
            let p = canvas_position(client, origin, Point::new(5.0, 5.0), Point::ZERO, canvas);
            assert!(p.x >= 0.0 && p.x <= canvas.width);
            assert!(p.y >= 0.0 && p.y <= canvas.height);
        }
    }
}
