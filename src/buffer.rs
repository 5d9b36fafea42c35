//! In-memory reference surface.
//!
//! `PixelBuffer` backs both canvases for hosts without a native render
//! target (and for the scenario tests): an RGBA image that satisfies
//! [`Surface`] for drawing/layout and [`ControlSource`] for picking.

use image::{Rgba, RgbaImage};

use crate::codec;
use crate::error::CanvasError;
use crate::geometry::{Point, Size};
use crate::picker::ControlSource;
use crate::surface::Surface;

/// An RGBA pixel buffer with the layout bookkeeping a surface carries.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: RgbaImage,
    css: Size,
    offset: Point,
}

impl PixelBuffer {
    /// Create a buffer of the given pixel dimensions, cleared to
    /// transparent black.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::EmptySurface { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::new(width, height),
            css: Size::new(width as f64, height as f64),
            offset: Point::ZERO,
        })
    }

    /// Wrap raw RGBA bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::EmptySurface { width, height });
        }
        let len = data.len();
        let pixels = RgbaImage::from_raw(width, height, data)
            .ok_or(CanvasError::BufferSize { len, width, height })?;
        Ok(Self {
            css: Size::new(width as f64, height as f64),
            offset: Point::ZERO,
            pixels,
        })
    }

    /// The underlying pixel data.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Logical (CSS) size last applied by a resize.
    pub fn css_size(&self) -> Size {
        self.css
    }

    /// Centering offset last applied by the viewport.
    pub fn offset(&self) -> Point {
        self.offset
    }
}

impl Surface for PixelBuffer {
    fn resize(&mut self, buffer_width: u32, buffer_height: u32, css: Size) {
        if (buffer_width, buffer_height) != self.pixels.dimensions() {
            self.pixels = RgbaImage::new(buffer_width.max(1), buffer_height.max(1));
        }
        self.css = css;
    }

    fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn clear(&mut self) {
        for p in self.pixels.pixels_mut() {
            *p = Rgba([0, 0, 0, 0]);
        }
    }

    fn fill_rect(&mut self, origin: Point, size: Size, color_index: u32) {
        let (width, height) = self.pixels.dimensions();
        let x0 = origin.x.floor().max(0.0) as u32;
        let y0 = origin.y.floor().max(0.0) as u32;
        let x1 = ((origin.x + size.width).ceil() as i64).clamp(0, width as i64) as u32;
        let y1 = ((origin.y + size.height).ceil() as i64).clamp(0, height as i64) as u32;
        let (r, g, b) = codec::channels(color_index);
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels.put_pixel(x, y, Rgba([r, g, b, 255]));
            }
        }
    }
}

impl ControlSource for PixelBuffer {
    fn width(&self) -> u32 {
        self.pixels.dimensions().0
    }

    fn height(&self) -> u32 {
        self.pixels.dimensions().1
    }

    fn color_index(&self, x: u32, y: u32) -> u32 {
        let p = self.pixels.get_pixel(x, y);
        codec::from_channels(p[0], p[1], p[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{PickId, decode, encode};
    use crate::picker;

    #[test]
    fn test_zero_area_rejected() {
        assert!(matches!(
            PixelBuffer::new(0, 10),
            Err(CanvasError::EmptySurface { .. })
        ));
        assert!(matches!(
            PixelBuffer::from_raw(2, 2, vec![0; 3]),
            Err(CanvasError::BufferSize { len: 3, .. })
        ));
    }

    #[test]
    fn test_fill_rect_and_read_back() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        let index = encode(6, 2);
        buf.fill_rect(Point::new(8.0, 8.0), Size::new(8.0, 8.0), index);

        assert_eq!(buf.color_index(8, 8), index);
        assert_eq!(buf.color_index(15, 15), index);
        assert_eq!(buf.color_index(7, 8), 0);
        assert_eq!(decode(buf.color_index(10, 10)), PickId::new(6, 2));
    }

    #[test]
    fn test_fill_rect_clips_to_buffer() {
        let mut buf = PixelBuffer::new(8, 8).unwrap();
        buf.fill_rect(Point::new(-4.0, 6.0), Size::new(100.0, 100.0), encode(0, 0));
        assert_eq!(buf.color_index(0, 7), encode(0, 0));
        assert_eq!(buf.color_index(0, 5), 0);
    }

    #[test]
    fn test_clear_resets_to_background() {
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        buf.fill_rect(Point::ZERO, Size::new(16.0, 16.0), encode(3, 3));
        buf.clear();
        assert_eq!(
            picker::pick(&buf, Point::new(4.0, 4.0)),
            PickId::BACKGROUND
        );
    }

    #[test]
    fn test_resize_reallocates_and_tracks_css() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        buf.resize(1600, 1200, Size::new(800.0, 600.0));
        assert_eq!(buf.pixels().dimensions(), (1600, 1200));
        assert_eq!(buf.css_size(), Size::new(800.0, 600.0));

        buf.set_offset(Point::new(250.0, 0.0));
        assert_eq!(buf.offset(), Point::new(250.0, 0.0));
    }
}
