//! labelview: interactive viewport and hit-testing core for a 2D
//! image-annotation canvas.
//!
//! Maps between image pixel space, a scaled logical canvas, and the
//! device-upscaled backing buffers, and resolves "what did the user click
//! on" by decoding an invisible control buffer whose pixel colors encode
//! label/handle identities. Everything is synchronous and bounded so it can
//! run inside input-event handlers; shape drawing, label editing, and app
//! state live behind the injected collaborator traits.

pub mod assets;
pub mod buffer;
pub mod canvas;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod picker;
pub mod renderer;
pub mod surface;
pub mod transform;
pub mod viewport;

pub use assets::ImageStore;
pub use buffer::PixelBuffer;
pub use canvas::AnnotationCanvas;
pub use codec::PickId;
pub use config::{CanvasConfig, ViewConfig};
pub use error::CanvasError;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use renderer::LabelSink;
pub use surface::{ControlSurface, Cursor, Surface, SurfaceHost};
