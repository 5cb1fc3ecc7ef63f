//! Rendering for the mystify animation.
//!
//! Polygons are rasterized onto a [`Surface`] with twice the terminal's
//! width and three times its height, then each 2x3 block of subpixels is
//! collapsed into a single sextant glyph. [`Renderer`] runs both passes on
//! buffers it keeps between frames and [`CanvasWidget`] hands the result to
//! ratatui.

mod color;
mod compositor;
mod downsample;
mod glyphs;
mod renderer;
mod surface;
mod widget;

pub use color::{hsv_to_rgb, packed_to_color};
pub use compositor::render_surface;
pub use downsample::{Cell, CellGrid, render_cells, render_cells_into};
pub use glyphs::{SEXTANTS, glyph_for_mask};
pub use renderer::Renderer;
pub use surface::Surface;
pub use widget::CanvasWidget;
