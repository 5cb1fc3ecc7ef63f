//! Collapse the subpixel surface into one glyph per terminal cell.

use mystify_core::{CELL_HEIGHT, CELL_WIDTH, Dimensions};

use crate::glyphs::glyph_for_mask;
use crate::surface::Surface;

/// One terminal cell: a sextant glyph and the color to draw it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    /// Packed `0xRRGGBB` foreground; 0 when no subpixel is lit.
    pub color: u32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            color: 0,
        }
    }
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        self.color == 0 && self.glyph == ' '
    }
}

/// A screen-sized grid of cells, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellGrid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::default(); dims.area()],
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Cell at `(x, y)`, if inside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        self.cells.get(y * self.dims.width + x)
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dims.width.max(1))
    }
}

/// Downsample `surface` into a grid of `screen` cells, reusing `grid`.
///
/// Cell `(x, y)` reads the 2x3 subpixel block at `(2x, 3y)`. The glyph
/// comes from which subpixels are lit; the color is that of the last lit
/// subpixel in scan order (columns inner, rows outer). Colors are never
/// blended.
pub fn render_cells_into(grid: &mut CellGrid, surface: &Surface, screen: Dimensions) {
    if grid.dims != screen {
        *grid = CellGrid::new(screen);
    }

    for y in 0..screen.height {
        for x in 0..screen.width {
            grid.cells[y * screen.width + x] = sample_cell(surface, x, y);
        }
    }
}

/// Downsample `surface` into a fresh grid of `screen` cells.
pub fn render_cells(surface: &Surface, screen: Dimensions) -> CellGrid {
    let mut grid = CellGrid::new(screen);
    render_cells_into(&mut grid, surface, screen);
    grid
}

fn sample_cell(surface: &Surface, x: usize, y: usize) -> Cell {
    let mut mask = 0u8;
    let mut color = 0;
    let mut bit = 0;

    for dy in 0..CELL_HEIGHT {
        for dx in 0..CELL_WIDTH {
            let pixel = surface.get(x * CELL_WIDTH + dx, y * CELL_HEIGHT + dy);
            if pixel != 0 {
                color = pixel;
                mask |= 1 << bit;
            }
            bit += 1;
        }
    }

    Cell {
        glyph: glyph_for_mask(mask),
        color,
    }
}
