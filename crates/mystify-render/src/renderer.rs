//! Frame renderer tying the compositor and downsampler together.

use mystify_core::Dimensions;
use mystify_sim::Simulation;

use crate::compositor::render_surface;
use crate::downsample::{CellGrid, render_cells_into};
use crate::surface::Surface;

/// Owns the reusable subpixel surface and cell grid for one screen.
#[derive(Debug, Default)]
pub struct Renderer {
    screen: Dimensions,
    surface: Surface,
    cells: CellGrid,
}

impl Renderer {
    /// Allocate buffers for a screen of `screen` cells.
    pub fn new(screen: Dimensions) -> Self {
        Self {
            screen,
            surface: Surface::new(Dimensions::surface_for_screen(screen)),
            cells: CellGrid::new(screen),
        }
    }

    /// Reallocate for a new screen size.
    pub fn resize(&mut self, screen: Dimensions) {
        self.screen = screen;
        self.surface.resize(Dimensions::surface_for_screen(screen));
        self.cells = CellGrid::new(screen);
    }

    /// Redraw the surface from `simulation` and downsample it.
    pub fn render(&mut self, simulation: &Simulation, trail_incr: usize) -> &CellGrid {
        render_surface(&mut self.surface, simulation, trail_incr);
        render_cells_into(&mut self.cells, &self.surface, self.screen);
        &self.cells
    }

    /// Cells from the most recent render.
    pub fn cells(&self) -> &CellGrid {
        &self.cells
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn screen(&self) -> Dimensions {
        self.screen
    }
}
