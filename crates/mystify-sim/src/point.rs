//! Points, their trail history, and polygons.

use mystify_core::{MAX_POINTS, MAX_TRAILS};

/// A 2D vector in surface subpixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise scale.
    pub fn scaled(self, rx: f32, ry: f32) -> Self {
        Self::new(self.x * rx, self.y * ry)
    }
}

/// Past positions of a point, most recent first.
///
/// Slot `k` holds where the point was `k` steps before its most recent
/// step, or `None` when that much history has not been recorded since the
/// last reset. History is kept to full capacity whatever depth is drawn,
/// so raising the depth only ever reveals real history.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    slots: [Option<Vec2>; MAX_TRAILS],
}

impl Default for Trail {
    fn default() -> Self {
        Self {
            slots: [None; MAX_TRAILS],
        }
    }
}

impl Trail {
    /// Shift every slot one step older and record `position` as the
    /// newest entry; the oldest slot falls off the end.
    pub fn push(&mut self, position: Vec2) {
        debug_assert!(
            position.x >= 0.0 && position.y >= 0.0,
            "trail positions are never negative: {position:?}"
        );
        self.slots.rotate_right(1);
        self.slots[0] = Some(position);
    }

    /// Position recorded at depth `k`, if any.
    pub fn get(&self, k: usize) -> Option<Vec2> {
        self.slots.get(k).copied().flatten()
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        self.slots = [None; MAX_TRAILS];
    }

    /// Rescale every recorded position.
    pub fn scale(&mut self, rx: f32, ry: f32) {
        for slot in self.slots.iter_mut().flatten() {
            *slot = slot.scaled(rx, ry);
        }
    }

    /// Number of leading slots holding a position.
    pub fn len(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }
}

/// A moving polygon vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    /// Current position in subpixels.
    pub position: Vec2,
    /// Direction of travel; both components lie in [-1, 1].
    pub velocity: Vec2,
    /// Recent positions.
    pub trail: Trail,
}

/// A closed polygon: point `i` connects to point `(i + 1) % count`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertex storage; only a prefix is active.
    pub points: [Point; MAX_POINTS],
    /// Hue in [0, 1) shared by every edge and trail of this polygon.
    pub hue: f32,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            points: std::array::from_fn(|_| Point::default()),
            hue: 0.0,
        }
    }
}

impl Polygon {
    /// Endpoint index pairs of the closed outline over the first `count` points.
    pub fn edges(count: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..count).map(move |j| (j, (j + 1) % count))
    }
}
