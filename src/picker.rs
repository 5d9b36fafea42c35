//! Majority-vote pixel picking.
//!
//! Anti-aliasing blends control colors wherever two regions meet, so a
//! single-pixel read near an edge can decode to an identity nobody drew.
//! Sampling a small block and taking the mode of the decoded indices
//! recovers the dominant identity reliably.

use crate::codec::{self, PickId};
use crate::constants::PICK_BLOCK;
use crate::geometry::Point;

/// Read access to a control buffer, in its own (up-res) pixel space.
pub trait ControlSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// 24-bit control color index at `(x, y)`. Caller guarantees bounds.
    fn color_index(&self, x: u32, y: u32) -> u32;
}

impl ControlSource for image::RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn color_index(&self, x: u32, y: u32) -> u32 {
        let p = self.get_pixel(x, y);
        codec::from_channels(p[0], p[1], p[2])
    }
}

/// Sample a `PICK_BLOCK`×`PICK_BLOCK` block with its top-left corner at
/// `point` (control-buffer pixel space) and return the majority identity.
///
/// Ties are broken deterministically: among the values of maximal frequency
/// the numerically largest raw index wins. A block that lies fully outside
/// the buffer returns [`PickId::BACKGROUND`]; a partially clipped block
/// votes over its in-bounds samples only.
pub fn pick(source: &dyn ControlSource, point: Point) -> PickId {
    let x0 = point.x.floor() as i64;
    let y0 = point.y.floor() as i64;
    let width = source.width() as i64;
    let height = source.height() as i64;

    // Tally of (raw index, count); at most 16 distinct samples.
    let mut tally = [(0u32, 0u8); (PICK_BLOCK * PICK_BLOCK) as usize];
    let mut distinct = 0usize;

    for dy in 0..PICK_BLOCK as i64 {
        for dx in 0..PICK_BLOCK as i64 {
            let (x, y) = (x0 + dx, y0 + dy);
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }
            let index = source.color_index(x as u32, y as u32);
            match tally[..distinct].iter_mut().find(|(v, _)| *v == index) {
                Some(entry) => entry.1 += 1,
                None => {
                    tally[distinct] = (index, 1);
                    distinct += 1;
                }
            }
        }
    }

    let mode = tally[..distinct]
        .iter()
        .max_by_key(|&&(value, count)| (count, value));

    match mode {
        Some(&(value, _)) => codec::decode(value),
        None => PickId::BACKGROUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use image::{Rgba, RgbaImage};

    fn buffer_with(indices: &[(u32, u32, u32)], width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for &(x, y, index) in indices {
            let (r, g, b) = codec::channels(index);
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
        img
    }

    #[test]
    fn test_all_black_is_background() {
        let img = RgbaImage::new(32, 32);
        assert_eq!(pick(&img, Point::new(10.0, 10.0)), PickId::BACKGROUND);
        assert_eq!(pick(&img, Point::new(0.0, 0.0)), PickId::BACKGROUND);
    }

    #[test]
    fn test_fully_outside_is_background() {
        let mut img = RgbaImage::new(8, 8);
        let (r, g, b) = codec::channels(encode(3, 1));
        for y in 0..8 {
            for x in 0..8 {
                img.put_pixel(x, y, Rgba([r, g, b, 255]));
            }
        }
        assert_eq!(pick(&img, Point::new(8.0, 0.0)), PickId::BACKGROUND);
        assert_eq!(pick(&img, Point::new(0.0, 100.0)), PickId::BACKGROUND);
        assert_eq!(pick(&img, Point::new(-4.0, -4.0)), PickId::BACKGROUND);
    }

    #[test]
    fn test_clear_majority_wins() {
        // 12 pixels of label 5, 4 fringe pixels of label 9 in one block.
        let a = encode(5, 0);
        let b = encode(9, 2);
        let mut cells = Vec::new();
        for dy in 0..4u32 {
            for dx in 0..4u32 {
                let index = if dx == 0 { b } else { a };
                cells.push((dx, dy, index));
            }
        }
        let img = buffer_with(&cells, 16, 16);
        assert_eq!(pick(&img, Point::new(0.0, 0.0)), PickId::new(5, 0));

        // Same samples in a different spatial arrangement: majority is
        // positional-order independent.
        let mut swapped = Vec::new();
        for dy in 0..4u32 {
            for dx in 0..4u32 {
                let index = if dy == 3 { b } else { a };
                swapped.push((dx, dy, index));
            }
        }
        let img = buffer_with(&swapped, 16, 16);
        assert_eq!(pick(&img, Point::new(0.0, 0.0)), PickId::new(5, 0));
    }

    #[test]
    fn test_exact_tie_breaks_to_larger_index() {
        // 8 samples each of two indices: the larger raw index must win, and
        // repeated calls must agree.
        let low = encode(2, 0);
        let high = encode(7, 0);
        assert!(high > low);
        let mut cells = Vec::new();
        for dy in 0..4u32 {
            for dx in 0..4u32 {
                let index = if dx < 2 { high } else { low };
                cells.push((dx, dy, index));
            }
        }
        let img = buffer_with(&cells, 16, 16);
        for _ in 0..3 {
            assert_eq!(pick(&img, Point::new(0.0, 0.0)), PickId::new(7, 0));
        }
    }

    #[test]
    fn test_partial_block_votes_in_bounds_only() {
        // Block anchored at (6,6) on an 8×8 buffer: only a 2×2 corner is
        // readable, all of it label 4.
        let index = encode(4, 3);
        let cells: Vec<_> = (6..8)
            .flat_map(|y| (6..8).map(move |x| (x, y, index)))
            .collect();
        let img = buffer_with(&cells, 8, 8);
        assert_eq!(pick(&img, Point::new(6.0, 6.0)), PickId::new(4, 3));
    }

    #[test]
    fn test_fractional_point_floors() {
        let index = encode(1, 0);
        let cells: Vec<_> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y, index)))
            .collect();
        let img = buffer_with(&cells, 8, 8);
        assert_eq!(pick(&img, Point::new(0.7, 0.2)), PickId::new(1, 0));
    }
}
