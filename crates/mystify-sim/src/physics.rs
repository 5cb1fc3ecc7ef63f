//! One simulation tick: trail shift, integration and wall bounces.

use crate::point::Point;
use crate::simulation::Simulation;

impl Simulation {
    /// Advance every active point by one tick.
    ///
    /// `speed` scales the stored unit velocities; it never changes them.
    pub fn step(&mut self, speed: f32) {
        let width = self.surface.width as f32;
        let height = self.surface.height as f32;
        let points = self.points;

        for polygon in &mut self.polygons[..self.polys] {
            for point in &mut polygon.points[..points] {
                advance(point, speed, width, height);
            }
        }
    }
}

fn advance(point: &mut Point, speed: f32, width: f32, height: f32) {
    point.trail.push(point.position);

    let dx = point.velocity.x * speed;
    let dy = point.velocity.y * speed;
    point.position.x += dx;
    point.position.y += dy;

    bounce(&mut point.position.x, &mut point.velocity.x, dx, width);
    bounce(&mut point.position.y, &mut point.velocity.y, dy, height);
}

/// Reflect one axis off the walls of `[0, limit)`.
///
/// The overshoot is mirrored back by undoing the applied delta twice; a
/// final clamp catches deltas too large for one mirror to fix.
fn bounce(position: &mut f32, velocity: &mut f32, applied: f32, limit: f32) {
    if *position < 0.0 || *position >= limit {
        *velocity = -*velocity;
        *position -= 2.0 * applied;
    }

    if *position < 0.0 {
        *position = 0.0;
    } else if *position >= limit {
        *position = (limit - 1.0).max(0.0);
    }
}
