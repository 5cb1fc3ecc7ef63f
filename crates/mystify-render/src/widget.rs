//! Ratatui widget that paints a [`CellGrid`] into a frame.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::color::packed_to_color;
use crate::downsample::CellGrid;

/// Paints every cell as its glyph in its foreground color.
///
/// Blank cells are written as a space with the default foreground.
/// Backgrounds are never touched and cells outside `area` are clipped.
#[derive(Debug, Clone, Copy)]
pub struct CanvasWidget<'a> {
    grid: &'a CellGrid,
}

impl<'a> CanvasWidget<'a> {
    pub fn new(grid: &'a CellGrid) -> Self {
        Self { grid }
    }
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in self.grid.rows().enumerate().take(area.height as usize) {
            for (x, cell) in row.iter().enumerate().take(area.width as usize) {
                let fg = if cell.is_blank() {
                    Color::Reset
                } else {
                    packed_to_color(cell.color)
                };
                let position = (area.x + x as u16, area.y + y as u16);
                if let Some(target) = buf.cell_mut(position) {
                    target.set_char(cell.glyph).set_fg(fg);
                }
            }
        }
    }
}
