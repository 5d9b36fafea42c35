//! Lockstep redraw of the visible and control canvases.
//!
//! Both buffers are cleared and repainted together on every state change so
//! that what the user sees and what picking decodes can never drift apart.
//! The renderer owns the attached surfaces; the actual shape geometry is
//! drawn by the external [`LabelSink`] collaborator.

use crate::codec::PickId;
use crate::geometry::{Point, Size};
use crate::picker::ControlSource;
use crate::surface::{ControlSurface, Surface};
use crate::viewport::Layout;

/// The external label-list collaborator: draws label geometry into both
/// surfaces and receives picked input events.
pub trait LabelSink {
    /// Repaint all label shapes. `combined_scale` is
    /// `display_to_image_ratio × UP_RES_RATIO`: multiplying image-space
    /// geometry by it lands pixel-aligned on the upscaled buffers.
    fn redraw(&mut self, label: &mut dyn Surface, control: &mut dyn Surface, combined_scale: f64);

    /// Primary-button press at an image position, with the picked identity.
    fn on_mouse_down(&mut self, position: Point, id: PickId);

    /// Pointer move; also receives the current image size.
    fn on_mouse_move(&mut self, position: Point, id: PickId, image: Size);

    /// Button release (or synthesized release on mouse-leave).
    fn on_mouse_up(&mut self, position: Point, id: PickId);
}

/// Owns the visible label surface and the invisible control surface and
/// repaints them in lockstep.
#[derive(Default)]
pub struct DualCanvasRenderer {
    label: Option<Box<dyn Surface>>,
    control: Option<Box<dyn ControlSurface>>,
}

impl DualCanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach both render targets. Until this happens every redraw is a
    /// no-op (expected during mount, not an error).
    pub fn attach(&mut self, label: Box<dyn Surface>, control: Box<dyn ControlSurface>) {
        self.label = Some(label);
        self.control = Some(control);
    }

    pub fn is_attached(&self) -> bool {
        self.label.is_some() && self.control.is_some()
    }

    /// Picking reads of the control buffer.
    pub fn control_source(&self) -> Option<&dyn ControlSource> {
        self.control.as_deref().map(|c| c as &dyn ControlSource)
    }

    /// Apply a committed viewport layout to both surfaces.
    pub fn resize(&mut self, layout: &Layout) {
        if let Some(label) = self.label.as_mut() {
            label.resize(layout.buffer_width, layout.buffer_height, layout.css);
            label.set_offset(layout.padding);
        }
        if let Some(control) = self.control.as_mut() {
            control.resize(layout.buffer_width, layout.buffer_height, layout.css);
            control.set_offset(layout.padding);
        }
    }

    /// Clear both buffers fully and delegate shape drawing to the sink.
    /// Returns false (and does nothing) unless both surfaces are attached.
    pub fn redraw(&mut self, sink: &mut dyn LabelSink, combined_scale: f64) -> bool {
        let (Some(label), Some(control)) = (self.label.as_mut(), self.control.as_mut()) else {
            return false;
        };
        label.clear();
        control.clear();
        sink.redraw(label.as_mut(), control.as_mut(), combined_scale);
        true
    }
}
