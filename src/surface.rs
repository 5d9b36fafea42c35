//! Host-side rendering seams.
//!
//! The core never touches a real canvas or window. Hosts hand it surfaces
//! (one visible, one control) through [`crate::canvas::AnnotationCanvas::attach`]
//! and expose container geometry, scroll position, and the cursor through
//! [`SurfaceHost`]. Everything here is object-safe so hosts can be swapped
//! without touching the core.

use crate::geometry::{Point, Rect, Size};
use crate::picker::ControlSource;

/// Mouse cursor shapes the dispatcher requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Whatever the host shows normally.
    #[default]
    Default,
    /// Pan is available (modifier held over an oversized canvas).
    Grab,
    /// A grab-pan session is active.
    Grabbing,
}

/// A resizable, clearable render target.
pub trait Surface {
    /// Apply a new backing-buffer resolution and logical (CSS) layout size.
    /// The buffer is up-res scaled; the layout size never is.
    fn resize(&mut self, buffer_width: u32, buffer_height: u32, css: Size);

    /// Position the surface inside its container (centering padding).
    fn set_offset(&mut self, offset: Point);

    /// Clear the whole buffer to transparent black.
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle (buffer pixel space) with a 24-bit
    /// control color index. The minimal drawing primitive label collaborators
    /// need for control regions; hosts with richer contexts layer their own
    /// drawing on top for the visible surface.
    fn fill_rect(&mut self, origin: Point, size: Size, color_index: u32);
}

/// The invisible control surface: drawable like any [`Surface`] and
/// readable for picking.
pub trait ControlSurface: Surface + ControlSource {}

impl<T: Surface + ControlSource> ControlSurface for T {}

/// Container-level services the core needs from its host.
pub trait SurfaceHost {
    /// Screen-space bounding box of the container (the tracked frame).
    fn container(&self) -> Rect;

    /// Current scroll position of the container.
    fn scroll(&self) -> Point;

    /// Scroll the container. Called during grab-pan and anchor-preserving
    /// rescale.
    fn set_scroll(&mut self, scroll: Point);

    /// Change the mouse cursor.
    fn set_cursor(&mut self, cursor: Cursor);
}
