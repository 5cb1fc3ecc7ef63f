//! Simulation ownership, reset and resize.

use mystify_core::{Dimensions, MAX_POINTS, MAX_POLYS, MAX_TRAILS, Settings};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::point::{Polygon, Vec2};

/// All polygons plus the active counts and surface bounds they move in.
#[derive(Debug)]
pub struct Simulation {
    /// Polygon storage at full capacity.
    pub(crate) polygons: Vec<Polygon>,
    /// Active polygon count.
    pub(crate) polys: usize,
    /// Active points per polygon.
    pub(crate) points: usize,
    /// Active trail depth.
    pub(crate) trails: usize,
    /// Surface size in subpixels.
    pub(crate) surface: Dimensions,
    rng: SmallRng,
}

impl Simulation {
    /// Create a randomized simulation for a surface of the given size.
    ///
    /// A `seed` makes the initial layout reproducible.
    pub fn new(surface: Dimensions, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let defaults = Settings::default();
        let mut simulation = Self {
            polygons: vec![Polygon::default(); MAX_POLYS],
            polys: defaults.polys,
            points: defaults.points,
            trails: defaults.trails,
            surface,
            rng,
        };
        simulation.reset();
        simulation
    }

    /// Take the active counts from `settings`.
    pub fn apply(&mut self, settings: &Settings) {
        self.polys = settings.polys.min(MAX_POLYS);
        self.points = settings.points.min(MAX_POINTS);
        self.trails = settings.trails.min(MAX_TRAILS);
    }

    /// Re-randomize every position, velocity and hue and forget all trails.
    pub fn reset(&mut self) {
        let max_x = self.surface.width.saturating_sub(1) as f32;
        let max_y = self.surface.height.saturating_sub(1) as f32;

        for polygon in &mut self.polygons {
            polygon.hue = self.rng.random_range(0.0..1.0);
            for point in &mut polygon.points {
                point.position = Vec2::new(
                    self.rng.random_range(0.0..=max_x),
                    self.rng.random_range(0.0..=max_y),
                );
                point.velocity = Vec2::new(
                    self.rng.random_range(-1.0..=1.0),
                    self.rng.random_range(-1.0..=1.0),
                );
                point.trail.clear();
            }
        }

        debug!(
            width = self.surface.width,
            height = self.surface.height,
            "randomized polygons"
        );
    }

    /// Move to a surface of a new size, scaling every stored position so
    /// the layout keeps its relative shape.
    pub fn resize(&mut self, surface: Dimensions) {
        let old = std::mem::replace(&mut self.surface, surface);
        if old == surface {
            return;
        }
        if old.is_empty() {
            // Nothing meaningful to scale from.
            self.reset();
            return;
        }

        let rx = surface.width as f32 / old.width as f32;
        let ry = surface.height as f32 / old.height as f32;

        for point in self.polygons.iter_mut().flat_map(|p| p.points.iter_mut()) {
            point.position = point.position.scaled(rx, ry);
            point.trail.scale(rx, ry);
        }

        debug!(
            old_width = old.width,
            old_height = old.height,
            width = surface.width,
            height = surface.height,
            "rescaled polygons"
        );
    }

    /// The active polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons[..self.polys]
    }

    /// Mutable access to the active polygons.
    pub fn polygons_mut(&mut self) -> &mut [Polygon] {
        &mut self.polygons[..self.polys]
    }

    /// Active points per polygon.
    pub fn point_count(&self) -> usize {
        self.points
    }

    /// Active trail depth.
    pub fn trail_depth(&self) -> usize {
        self.trails
    }

    /// Surface size the points move within.
    pub fn surface(&self) -> Dimensions {
        self.surface
    }
}
