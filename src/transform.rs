//! Image ⇄ canvas coordinate conversions.
//!
//! A `Transformer` is a snapshot of the current display-to-image ratio; it
//! performs pure scaling in both directions, optionally including the
//! backing-buffer up-res factor. No clamping happens here; callers clamp
//! where their operation requires it.

use crate::constants::UP_RES_RATIO;
use crate::geometry::Point;

/// Stateless-per-call coordinate converter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformer {
    /// Pixels of logical canvas per pixel of source image.
    display_to_image_ratio: f64,
}

impl Transformer {
    pub fn new(display_to_image_ratio: f64) -> Self {
        Self { display_to_image_ratio }
    }

    /// The ratio this transformer was built with.
    pub fn ratio(&self) -> f64 {
        self.display_to_image_ratio
    }

    /// Map an image-space point to canvas space. With `up_res` the result is
    /// in backing-buffer pixels (for drawing/querying the sharper upscaled
    /// buffers); without it, in logical canvas pixels.
    pub fn image_to_canvas(&self, p: Point, up_res: bool) -> Point {
        let factor = if up_res { UP_RES_RATIO } else { 1.0 };
        p.scaled(self.display_to_image_ratio * factor)
    }

    /// Inverse of [`Self::image_to_canvas`]. Degrades to the origin when no
    /// layout has produced a ratio yet.
    pub fn canvas_to_image(&self, p: Point, up_res: bool) -> Point {
        if self.display_to_image_ratio <= 0.0 {
            return Point::ZERO;
        }
        let factor = if up_res { UP_RES_RATIO } else { 1.0 };
        p.scaled(1.0 / (self.display_to_image_ratio * factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_image_to_canvas_scaling() {
        let t = Transformer::new(2.0);
        assert_eq!(t.image_to_canvas(Point::new(10.0, 5.0), false), Point::new(20.0, 10.0));
        // up-res doubles the backing-buffer coordinates on top of the ratio
        assert_eq!(t.image_to_canvas(Point::new(10.0, 5.0), true), Point::new(40.0, 20.0));
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(13.37, 42.001),
            Point::new(399.999, 0.25),
            Point::new(1e4, 7.0),
        ];
        for ratio in [0.5, 1.0, 4.0 / 3.0, 2.6180339887] {
            let t = Transformer::new(ratio);
            for p in points {
                assert!(approx_eq(t.canvas_to_image(t.image_to_canvas(p, true), true), p));
                assert!(approx_eq(t.canvas_to_image(t.image_to_canvas(p, false), false), p));
            }
        }
    }

    #[test]
    fn test_zero_ratio_degrades_to_origin() {
        let t = Transformer::new(0.0);
        assert_eq!(t.canvas_to_image(Point::new(50.0, 50.0), true), Point::ZERO);
    }
}
