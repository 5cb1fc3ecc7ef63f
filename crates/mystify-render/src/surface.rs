//! The virtual subpixel surface and the line rasterizer.

use mystify_core::Dimensions;

/// Lower bound on the x stride when marching along a steep line.
const MIN_X_STEP: f32 = 0.001;

/// A grid of packed `0xRRGGBB` subpixels; zero means unlit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    dims: Dimensions,
    pixels: Vec<u32>,
}

impl Surface {
    /// Allocate a cleared surface.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            pixels: vec![0; dims.area()],
        }
    }

    /// Reallocate for new dimensions. Contents are cleared.
    pub fn resize(&mut self, dims: Dimensions) {
        self.dims = dims;
        self.pixels.clear();
        self.pixels.resize(dims.area(), 0);
    }

    /// Unlight every subpixel.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Color at `(x, y)`, or 0 outside the surface.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        if x >= self.dims.width || y >= self.dims.height {
            return 0;
        }
        self.pixels[y * self.dims.width + x]
    }

    /// Coordinates of every lit subpixel, row by row.
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.dims.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, pixel)| **pixel != 0)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Write `color` at the subpixel containing `(x, y)`.
    ///
    /// The linear index is clamped into the buffer, so coordinates that
    /// round past the last row or column land on the final subpixel rather
    /// than outside the surface.
    fn plot(&mut self, x: f32, y: f32, color: u32) {
        let Some(last) = self.pixels.len().checked_sub(1) else {
            return;
        };
        let index = (y as isize)
            .saturating_mul(self.dims.width as isize)
            .saturating_add(x as isize)
            .clamp(0, last as isize);
        self.pixels[index as usize] = color;
    }

    /// Draw a line segment between two points.
    ///
    /// The segment is walked along x, left to right. The x stride shrinks
    /// with the slope so steep lines still light one subpixel per row.
    /// Vertical segments take their own path and light every row between
    /// the endpoints in a single column.
    pub fn draw_line(&mut self, xa: f32, ya: f32, xb: f32, yb: f32, color: u32) {
        let (x1, y1, x2, y2) = if xa > xb {
            (xb, yb, xa, ya)
        } else {
            (xa, ya, xb, yb)
        };

        if x1 == x2 {
            self.draw_vertical(x1, y1, y2, color);
            return;
        }

        let slope = (y2 - y1) / (x2 - x1);
        let x_step = (1.0 / slope.abs()).clamp(MIN_X_STEP, 1.0);

        // Sampled from a counter: `x += x_step` stops advancing at large x.
        for i in 0u32.. {
            let x = x1 + i as f32 * x_step;
            if x > x2 {
                break;
            }
            let y = slope * (x - x1) + y1;
            self.plot(x, y, color);
        }
    }

    fn draw_vertical(&mut self, x: f32, ya: f32, yb: f32, color: u32) {
        let top = ya.min(yb).floor();
        let bottom = ya.max(yb).floor();

        let mut y = top;
        while y <= bottom {
            self.plot(x, y, color);
            y += 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    const RED: u32 = 0xff0000;

    fn lit_set(surface: &Surface) -> BTreeSet<(usize, usize)> {
        surface.lit().collect()
    }

    #[test]
    fn test_new_surface_is_clear() {
        let surface = Surface::new(Dimensions::new(8, 6));
        assert_eq!(surface.lit().count(), 0);
        assert_eq!(surface.dims(), Dimensions::new(8, 6));
    }

    #[test]
    fn test_horizontal_line() {
        let mut surface = Surface::new(Dimensions::new(10, 10));
        surface.draw_line(0.0, 5.0, 4.0, 5.0, RED);

        let expected: BTreeSet<_> = (0..=4).map(|x| (x, 5)).collect();
        assert_eq!(lit_set(&surface), expected);
        assert_eq!(surface.get(2, 5), RED);
    }

    #[test]
    fn test_vertical_line() {
        let mut surface = Surface::new(Dimensions::new(10, 10));
        surface.draw_line(3.5, 7.2, 3.5, 1.9, RED);

        let expected: BTreeSet<_> = (1..=7).map(|y| (3, y)).collect();
        assert_eq!(lit_set(&surface), expected);
    }

    #[test]
    fn test_steep_line_far_from_origin_terminates() {
        let x = 40_000.0;
        let mut surface = Surface::new(Dimensions::new(40_001, 4));
        // The x step is finer than the float spacing at this magnitude.
        surface.draw_line(x, 0.0, x + 1.0 / 256.0, 3.5, RED);

        let lit = lit_set(&surface);
        assert!(lit.contains(&(40_000, 0)));
        assert!(lit.contains(&(40_000, 3)));
        assert!(lit.iter().all(|&(px, _)| px == 40_000));
    }

    #[test]
    fn test_zero_length_line_lights_one_pixel() {
        let mut surface = Surface::new(Dimensions::new(10, 10));
        surface.draw_line(2.7, 4.1, 2.7, 4.1, RED);

        assert_eq!(lit_set(&surface), BTreeSet::from([(2, 4)]));
    }

    #[test]
    fn test_diagonal_line() {
        let mut surface = Surface::new(Dimensions::new(10, 10));
        surface.draw_line(0.0, 0.0, 3.0, 3.0, RED);

        let expected: BTreeSet<_> = (0..=3).map(|i| (i, i)).collect();
        assert_eq!(lit_set(&surface), expected);
    }

    #[test]
    fn test_steep_line_has_no_row_gaps() {
        let mut surface = Surface::new(Dimensions::new(20, 40));
        surface.draw_line(2.0, 1.5, 4.0, 37.5, RED);

        let rows: BTreeSet<_> = surface.lit().map(|(_, y)| y).collect();
        for y in 2..37 {
            assert!(rows.contains(&y), "row {y} was skipped");
        }
    }

    #[test]
    fn test_endpoint_order_does_not_matter() {
        let mut forward = Surface::new(Dimensions::new(30, 30));
        let mut backward = Surface::new(Dimensions::new(30, 30));
        forward.draw_line(1.5, 20.25, 25.0, 3.75, RED);
        backward.draw_line(25.0, 3.75, 1.5, 20.25, RED);
        assert_eq!(lit_set(&forward), lit_set(&backward));
    }

    #[test]
    fn test_overflow_clamps_to_last_pixel() {
        let mut surface = Surface::new(Dimensions::new(4, 3));
        surface.draw_line(3.0, 5.0, 3.0, 5.0, RED);
        assert_eq!(lit_set(&surface), BTreeSet::from([(3, 2)]));
    }

    #[test]
    fn test_empty_surface_ignores_lines() {
        let mut surface = Surface::new(Dimensions::new(0, 0));
        surface.draw_line(0.0, 0.0, 5.0, 5.0, RED);
        assert_eq!(surface.lit().count(), 0);
    }

    #[test]
    fn test_last_write_wins() {
        let mut surface = Surface::new(Dimensions::new(10, 10));
        surface.draw_line(0.0, 5.0, 4.0, 5.0, RED);
        surface.draw_line(2.0, 5.0, 2.0, 5.0, 0x00ff00);
        assert_eq!(surface.get(2, 5), 0x00ff00);
        assert_eq!(surface.get(1, 5), RED);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut surface = Surface::new(Dimensions::new(10, 10));
        surface.draw_line(0.0, 0.0, 9.0, 9.0, RED);
        surface.clear();
        assert_eq!(surface.lit().count(), 0);

        surface.draw_line(0.0, 0.0, 9.0, 9.0, RED);
        surface.resize(Dimensions::new(20, 6));
        assert_eq!(surface.dims(), Dimensions::new(20, 6));
        assert_eq!(surface.lit().count(), 0);
        assert_eq!(surface.get(19, 5), 0);
        assert_eq!(surface.get(20, 0), 0);
    }

    proptest! {
        #[test]
        fn draw_line_is_symmetric(
            xa in 0.0f32..60.0,
            ya in 0.0f32..40.0,
            xb in 0.0f32..60.0,
            yb in 0.0f32..40.0,
        ) {
            let mut forward = Surface::new(Dimensions::new(60, 40));
            let mut backward = Surface::new(Dimensions::new(60, 40));
            forward.draw_line(xa, ya, xb, yb, RED);
            backward.draw_line(xb, yb, xa, ya, RED);
            prop_assert_eq!(lit_set(&forward), lit_set(&backward));
        }
    }
}
