//! Viewport state and anchor-preserving rescale.
//!
//! `ZoomPanController` owns the mutable viewport state (current scale,
//! logical canvas size, display-to-image ratio, centering padding) and
//! recomputes it whenever the container, the loaded image, or the external
//! view configuration changes. The non-trivial part is the anchor-preserving
//! zoom: the image point the user is zooming at must stay under the same
//! screen pixel while the canvas grows or shrinks around it.

use crate::config::ViewConfig;
use crate::constants::{MAX_SCALE, MIN_SCALE, UP_RES_RATIO};
use crate::geometry::{Point, Size};
use crate::transform::Transformer;

/// Current viewport geometry. Mutated only by [`ZoomPanController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Last committed zoom factor. Always in `[MIN_SCALE, MAX_SCALE)`.
    pub scale: f64,
    /// Logical (CSS) pixel size of the canvases.
    pub canvas: Size,
    /// Pixels of logical canvas per pixel of source image.
    pub display_to_image_ratio: f64,
    /// Centering padding between container and canvas, per axis.
    pub padding: Point,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            canvas: Size::default(),
            display_to_image_ratio: 0.0,
            padding: Point::ZERO,
        }
    }
}

/// Geometry a committed rescale asks the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Backing-buffer resolution (up-res applied).
    pub buffer_width: u32,
    pub buffer_height: u32,
    /// Layout (CSS) size; up-res never applies here.
    pub css: Size,
    /// Absolute centering offset inside the container.
    pub padding: Point,
    /// Container scroll position that keeps the anchor point stationary.
    pub scroll: Point,
}

/// Owns and recomputes the viewport state.
#[derive(Debug, Clone, Default)]
pub struct ZoomPanController {
    state: ViewportState,
}

impl ZoomPanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Converter snapshot for the current ratio.
    pub fn transformer(&self) -> Transformer {
        Transformer::new(self.state.display_to_image_ratio)
    }

    /// Whether the canvas is larger than the container in either dimension
    /// (the precondition for grab-to-pan).
    pub fn canvas_exceeds(&self, container: Size) -> bool {
        self.state.canvas.width > container.width || self.state.canvas.height > container.height
    }

    /// Recompute the viewport for a new view configuration, container size,
    /// or image.
    ///
    /// Returns the layout to apply, or `None` when the request is rejected
    /// (scale out of `[MIN_SCALE, MAX_SCALE)`, or geometry not known yet);
    /// rejection leaves the previous state untouched.
    pub fn rescale(
        &mut self,
        view: &ViewConfig,
        container: Size,
        image: Size,
        scroll: Point,
    ) -> Option<Layout> {
        if !(MIN_SCALE..MAX_SCALE).contains(&view.view_scale) {
            log::debug!(
                "rescale rejected: scale {} outside [{}, {})",
                view.view_scale,
                MIN_SCALE,
                MAX_SCALE
            );
            return None;
        }
        if container.is_empty() || image.is_empty() {
            return None;
        }

        let zoom_ratio = view.view_scale / self.state.scale;

        // Anchor point in (old) canvas coordinates and its screen offset
        // relative to the container. The canvas origin sits at
        // `padding - scroll` inside the container.
        let anchor = if view.view_scale > 1.0 {
            if view.view_offset_x < 0.0 || view.view_offset_y < 0.0 {
                // Negative offsets are the "anchor at viewport center" sentinel.
                let screen = Point::new(container.width / 2.0, container.height / 2.0);
                let canvas = screen - self.state.padding + scroll;
                Some((canvas, screen))
            } else {
                let canvas = self.transformer().image_to_canvas(
                    Point::new(view.view_offset_x, view.view_offset_y),
                    false,
                );
                let screen = canvas + self.state.padding - scroll;
                Some((canvas, screen))
            }
        } else {
            None
        };

        let (canvas, ratio) = fit_canvas(container, image, view.view_scale);
        let padding = Point::new(
            ((container.width - canvas.width) / 2.0).max(0.0),
            ((container.height - canvas.height) / 2.0).max(0.0),
        );

        // Scroll only matters on axes where the canvas exceeds the
        // container; elsewhere the canvas fits and is centered instead.
        let new_scroll = match anchor {
            Some((anchor_canvas, anchor_screen)) => Point::new(
                anchored_scroll(
                    zoom_ratio,
                    anchor_canvas.x,
                    anchor_screen.x,
                    canvas.width,
                    container.width,
                ),
                anchored_scroll(
                    zoom_ratio,
                    anchor_canvas.y,
                    anchor_screen.y,
                    canvas.height,
                    container.height,
                ),
            ),
            None => Point::ZERO,
        };

        self.state = ViewportState {
            scale: view.view_scale,
            canvas,
            display_to_image_ratio: ratio,
            padding,
        };
        log::debug!(
            "rescale committed: scale {:.2}, canvas {:.0}x{:.0}, ratio {:.3}, scroll ({:.0}, {:.0})",
            view.view_scale,
            canvas.width,
            canvas.height,
            ratio,
            new_scroll.x,
            new_scroll.y
        );

        Some(Layout {
            buffer_width: (canvas.width * UP_RES_RATIO).round() as u32,
            buffer_height: (canvas.height * UP_RES_RATIO).round() as u32,
            css: canvas,
            padding,
            scroll: new_scroll,
        })
    }
}

/// Fit the image's aspect ratio inside the container at the requested scale:
/// the dimension that would overflow the container is pinned to container
/// size × scale, the other follows from the image aspect ratio.
fn fit_canvas(container: Size, image: Size, view_scale: f64) -> (Size, f64) {
    if container.aspect() > image.aspect() {
        // Container is relatively wider than the image: height fills first.
        let height = container.height * view_scale;
        let width = height * image.aspect();
        (Size::new(width, height), height / image.height)
    } else {
        let width = container.width * view_scale;
        let height = width / image.aspect();
        (Size::new(width, height), width / image.width)
    }
}

/// Per-axis scroll that keeps the anchor under the same screen offset:
/// `r·anchor_canvas − anchor_screen`, clamped to the scrollable range.
/// Axes where the canvas fits need no scroll at all.
fn anchored_scroll(
    zoom_ratio: f64,
    anchor_canvas: f64,
    anchor_screen: f64,
    canvas: f64,
    container: f64,
) -> f64 {
    if canvas > container {
        (zoom_ratio * anchor_canvas - anchor_screen).clamp(0.0, canvas - container)
    } else {
        0.0
    }
}
