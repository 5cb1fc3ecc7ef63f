//! Core types shared by the mystify crates.
//!
//! Holds the fixed storage capacities, the [`Dimensions`] helper used for
//! both terminal cells and surface subpixels, and the runtime [`Settings`]
//! that the command line, config file and keyboard all feed into.

mod settings;

pub use settings::Settings;

/// Maximum number of polygons the simulation stores.
pub const MAX_POLYS: usize = 16;

/// Maximum number of points per polygon.
pub const MAX_POINTS: usize = 16;

/// Maximum trail history depth per point.
pub const MAX_TRAILS: usize = 64;

/// Lower bound for the global speed multiplier.
pub const MIN_VELOCITY: f32 = 0.01;

/// Upper bound for the global speed multiplier.
pub const MAX_VELOCITY: f32 = 10.0;

/// Highest frame rate reachable from the keyboard.
pub const MAX_FPS: u32 = 120;

/// Fewest points per polygon reachable from the keyboard.
pub const MIN_INTERACTIVE_POINTS: usize = 3;

/// Horizontal subpixels per terminal cell.
pub const CELL_WIDTH: usize = 2;

/// Vertical subpixels per terminal cell.
pub const CELL_HEIGHT: usize = 3;

/// A width/height pair, in terminal cells or surface subpixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Surface size backing a screen of the given size in cells.
    pub const fn surface_for_screen(screen: Dimensions) -> Self {
        Self {
            width: screen.width * CELL_WIDTH,
            height: screen.height * CELL_HEIGHT,
        }
    }

    /// Total number of elements in a buffer of this size.
    pub const fn area(self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u16, u16)> for Dimensions {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width as usize, height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_for_screen() {
        let surface = Dimensions::surface_for_screen(Dimensions::new(80, 24));
        assert_eq!(surface, Dimensions::new(160, 72));
        assert_eq!(surface.area(), 160 * 72);
    }

    #[test]
    fn test_empty_dimensions() {
        assert!(Dimensions::new(0, 10).is_empty());
        assert!(Dimensions::new(10, 0).is_empty());
        assert!(!Dimensions::from((1u16, 1u16)).is_empty());
    }
}
