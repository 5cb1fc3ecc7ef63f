//! Runtime settings and their clamping rules.

use std::time::Duration;

use crate::{
    MAX_FPS, MAX_POINTS, MAX_POLYS, MAX_TRAILS, MAX_VELOCITY, MIN_INTERACTIVE_POINTS, MIN_VELOCITY,
};

/// Factor applied by a single velocity key press.
const VELOCITY_STEP: f32 = 1.05;

/// User-tunable knobs for the animation.
///
/// Values coming from outside (command line, config file) go through
/// [`Settings::clamped`] before they reach the simulation, so the
/// simulation and renderer can index their fixed-capacity storage
/// without checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Number of active polygons.
    pub polys: usize,
    /// Number of active points per polygon.
    pub points: usize,
    /// Number of trail samples kept per point.
    pub trails: usize,
    /// Render every nth trail sample.
    pub trail_incr: usize,
    /// Target frames per second.
    pub fps: u32,
    /// Global speed multiplier applied to every point's velocity.
    pub max_velocity: f32,
    /// Whether the status overlay is drawn.
    pub show_status: bool,
    /// Fixed RNG seed, if any.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            polys: 2,
            points: 4,
            trails: 20,
            trail_incr: 4,
            fps: 60,
            max_velocity: 1.0,
            show_status: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Force every field into its valid range.
    pub fn clamped(self) -> Self {
        let max_velocity = if self.max_velocity.is_finite() {
            self.max_velocity.clamp(MIN_VELOCITY, MAX_VELOCITY)
        } else {
            Self::default().max_velocity
        };

        Self {
            polys: self.polys.min(MAX_POLYS),
            points: self.points.min(MAX_POINTS),
            trails: self.trails.min(MAX_TRAILS),
            trail_incr: self.trail_incr.clamp(1, MAX_TRAILS),
            fps: self.fps.max(1),
            max_velocity,
            ..self
        }
    }

    /// Time budget for one frame at the current frame rate.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }

    pub fn more_points(&mut self) {
        self.points = (self.points + 1).min(MAX_POINTS);
    }

    pub fn fewer_points(&mut self) {
        self.points = self.points.saturating_sub(1).max(MIN_INTERACTIVE_POINTS);
    }

    pub fn sparser_trails(&mut self) {
        self.trail_incr = (self.trail_incr + 1).min(MAX_TRAILS);
    }

    pub fn denser_trails(&mut self) {
        self.trail_incr = self.trail_incr.saturating_sub(1).max(1);
    }

    pub fn more_polys(&mut self) {
        self.polys = (self.polys + 1).min(MAX_POLYS);
    }

    pub fn fewer_polys(&mut self) {
        self.polys = self.polys.saturating_sub(1);
    }

    pub fn longer_trails(&mut self) {
        self.trails = (self.trails + 1).min(MAX_TRAILS);
    }

    pub fn shorter_trails(&mut self) {
        self.trails = self.trails.saturating_sub(1);
    }

    pub fn faster_frames(&mut self) {
        self.fps = (self.fps + 1).min(MAX_FPS);
    }

    pub fn slower_frames(&mut self) {
        self.fps = self.fps.saturating_sub(1).max(1);
    }

    pub fn speed_up(&mut self) {
        self.max_velocity = (self.max_velocity * VELOCITY_STEP).clamp(MIN_VELOCITY, MAX_VELOCITY);
    }

    pub fn slow_down(&mut self) {
        self.max_velocity = (self.max_velocity / VELOCITY_STEP).clamp(MIN_VELOCITY, MAX_VELOCITY);
    }

    /// Toggle the status overlay.
    pub fn toggle_status(&mut self) {
        self.show_status = !self.show_status;
    }
}
