//! The annotation canvas facade.
//!
//! `AnnotationCanvas` wires the viewport controller, input dispatch,
//! picking, and the dual-canvas renderer around three injected
//! collaborators: the [`LabelSink`] that draws and edits label geometry,
//! the [`ImageStore`] that knows image dimensions per item, and the
//! [`SurfaceHost`] that owns container geometry, scrolling, and the cursor.
//!
//! Lifecycle is two-phase: `attach` hands over the render targets once,
//! then `layout` is called (idempotently) whenever the container size, the
//! current item, or the view configuration is known to have changed.

use crate::assets::ImageStore;
use crate::codec::PickId;
use crate::config::ViewConfig;
use crate::constants::UP_RES_RATIO;
use crate::event::{Event, MouseButton};
use crate::geometry::{Point, Size};
use crate::input::{self, InputState, KeyBindings};
use crate::picker;
use crate::renderer::{DualCanvasRenderer, LabelSink};
use crate::surface::{ControlSurface, Cursor, Surface, SurfaceHost};
use crate::viewport::ZoomPanController;

/// Interactive coordinate-transform and hit-testing engine for a 2D
/// image-annotation canvas.
pub struct AnnotationCanvas<L, S, H>
where
    L: LabelSink,
    S: ImageStore,
    H: SurfaceHost,
{
    viewport: ZoomPanController,
    input: InputState,
    bindings: KeyBindings,
    renderer: DualCanvasRenderer,
    labels: L,
    store: S,
    host: H,
    view: ViewConfig,
    item: usize,
}

impl<L, S, H> AnnotationCanvas<L, S, H>
where
    L: LabelSink,
    S: ImageStore,
    H: SurfaceHost,
{
    pub fn new(labels: L, store: S, host: H) -> Self {
        Self::with_bindings(labels, store, host, KeyBindings::default())
    }

    pub fn with_bindings(labels: L, store: S, host: H, bindings: KeyBindings) -> Self {
        Self {
            viewport: ZoomPanController::new(),
            input: InputState::new(),
            bindings,
            renderer: DualCanvasRenderer::new(),
            labels,
            store,
            host,
            view: ViewConfig::default(),
            item: 0,
        }
    }

    /// Attach the visible label surface and the invisible control surface.
    pub fn attach(&mut self, label: Box<dyn Surface>, control: Box<dyn ControlSurface>) {
        self.renderer.attach(label, control);
    }

    /// Recompute the viewport from the current view config, container size,
    /// and item image, then repaint. Idempotent; returns false when nothing
    /// could be (re)laid out (image not loaded yet, container not sized,
    /// or view scale out of range), leaving the previous state untouched.
    pub fn layout(&mut self) -> bool {
        let Some(image) = self.store.image_size(self.item) else {
            log::warn!("layout skipped: no image loaded for item {}", self.item);
            return false;
        };
        let container = self.host.container().size();
        let scroll = self.host.scroll();
        match self.viewport.rescale(&self.view, container, image, scroll) {
            Some(layout) => {
                self.renderer.resize(&layout);
                self.host.set_scroll(layout.scroll);
                self.redraw();
                true
            }
            None => false,
        }
    }

    /// Switch to another item and re-layout.
    pub fn set_item(&mut self, item: usize) -> bool {
        self.item = item;
        self.layout()
    }

    /// Apply a new external view configuration and re-layout.
    pub fn set_view(&mut self, view: ViewConfig) -> bool {
        self.view = view;
        self.layout()
    }

    /// Clear and repaint both canvases. Returns false until surfaces are
    /// attached.
    pub fn redraw(&mut self) -> bool {
        let combined = self.viewport.transformer().ratio() * UP_RES_RATIO;
        self.renderer.redraw(&mut self.labels, combined)
    }

    /// Map an image-space point to canvas space.
    pub fn to_canvas_coords(&self, p: Point, up_res: bool) -> Point {
        self.viewport.transformer().image_to_canvas(p, up_res)
    }

    /// Map a canvas-space point back to image space.
    pub fn to_image_coords(&self, p: Point, up_res: bool) -> Point {
        self.viewport.transformer().canvas_to_image(p, up_res)
    }

    /// Pixel dimensions of the current item's image, if loaded.
    pub fn current_image_size(&self) -> Option<Size> {
        self.store.image_size(self.item)
    }

    /// Request a cursor shape from the host.
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.host.set_cursor(cursor);
    }

    /// Restore the host's default cursor.
    pub fn set_default_cursor(&mut self) {
        self.host.set_cursor(Cursor::Default);
    }

    /// Route one input event. All handling is synchronous and bounded.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::KeyPressed { key } => self.input.key_down(key),
            Event::KeyReleased { key } => self.input.key_up(key),
            Event::MousePressed { button, client } => self.on_mouse_down(button, client),
            Event::MouseReleased { client, .. } => self.on_mouse_up(client),
            Event::MouseMoved { client } => self.on_mouse_move(client),
            Event::MouseLeft { client } => self.on_mouse_leave(client),
            Event::MouseWheel { delta, client } => self.on_wheel(delta, client),
            Event::DoubleClick { client } => self.on_double_click(client),
        }
    }

    pub fn viewport(&self) -> &ZoomPanController {
        &self.viewport
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn labels(&self) -> &L {
        &self.labels
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn frame_contains(&self, client: Point) -> bool {
        self.host.container().contains(client)
    }

    /// Shared by every mouse handler: clamped logical canvas position and
    /// the corresponding image position.
    fn mouse_position(&self, client: Point) -> (Point, Point) {
        let state = self.viewport.state();
        let canvas = input::canvas_position(
            client,
            self.host.container().origin(),
            state.padding,
            self.host.scroll(),
            state.canvas,
        );
        let image = self.viewport.transformer().canvas_to_image(canvas, false);
        (image, canvas)
    }

    /// Decode the identity under a logical canvas point. The control buffer
    /// is up-res sized, so the point is scaled into its pixel space first.
    fn pick_at(&self, canvas: Point) -> PickId {
        match self.renderer.control_source() {
            Some(source) => picker::pick(source, canvas.scaled(UP_RES_RATIO)),
            None => PickId::BACKGROUND,
        }
    }

    fn on_mouse_down(&mut self, button: MouseButton, client: Point) {
        if button != MouseButton::Left || !self.frame_contains(client) {
            return;
        }
        let container = self.host.container().size();
        if self.input.is_held(self.bindings.pan) && self.viewport.canvas_exceeds(container) {
            self.input.start_grab(client, self.host.scroll());
            self.host.set_cursor(Cursor::Grabbing);
        } else {
            let (image, canvas) = self.mouse_position(client);
            let id = self.pick_at(canvas);
            self.labels.on_mouse_down(image, id);
        }
        self.redraw();
    }

    fn on_mouse_up(&mut self, client: Point) {
        self.input.end_grab();
        let (image, canvas) = self.mouse_position(client);
        let id = self.pick_at(canvas);
        self.labels.on_mouse_up(image, id);
        self.redraw();
    }

    fn on_mouse_leave(&mut self, client: Point) {
        // Key-up events for this frame may never arrive once the pointer is
        // gone; drop the held set rather than acting on stale modifiers.
        self.input.clear_keys();
        self.host.set_cursor(Cursor::Default);
        self.on_mouse_up(client);
    }

    fn on_mouse_move(&mut self, client: Point) {
        if !self.frame_contains(client) {
            self.on_mouse_leave(client);
            return;
        }
        if self.input.is_held(self.bindings.pan) {
            if let Some(grab) = self.input.grab() {
                self.host.set_scroll(grab.scroll_for(client));
                self.host.set_cursor(Cursor::Grabbing);
                return;
            }
            self.host.set_cursor(Cursor::Grab);
        } else {
            self.host.set_cursor(Cursor::Default);
        }
        let (image, canvas) = self.mouse_position(client);
        let id = self.pick_at(canvas);
        let image_size = self.current_image_size().unwrap_or_default();
        self.labels.on_mouse_move(image, id, image_size);
        self.redraw();
    }

    fn on_wheel(&mut self, _delta: f64, client: Point) {
        // The scale change itself arrives asynchronously through the view
        // configuration; the wheel only forces a repaint.
        if self.frame_contains(client) && self.input.is_held(self.bindings.zoom) {
            self.redraw();
        }
    }

    fn on_double_click(&mut self, client: Point) {
        if !self.frame_contains(client) {
            return;
        }
        // TODO(labels): route double-clicks to per-label actions once the
        // label collaborator grows a handler for them.
    }
}
