//! Draw polygons and their fading trails onto the surface.

use mystify_sim::{Point, Polygon, Simulation};

use crate::color::hsv_to_rgb;
use crate::surface::Surface;

/// Saturation of trail segments; live edges use full saturation.
const TRAIL_SATURATION: f32 = 0.85;

/// Redraw the whole surface from the simulation.
///
/// The surface is cleared first, so nothing from a previous frame
/// survives. For every edge the trail is drawn oldest-last at depths
/// `0, trail_incr, 2 * trail_incr, ..` and the live edge goes on top.
pub fn render_surface(surface: &mut Surface, simulation: &Simulation, trail_incr: usize) {
    surface.clear();

    let count = simulation.point_count();
    let depth = simulation.trail_depth();

    for polygon in simulation.polygons() {
        for (a, b) in Polygon::edges(count) {
            let a = &polygon.points[a];
            let b = &polygon.points[b];

            draw_trail(surface, a, b, polygon.hue, depth, trail_incr);

            surface.draw_line(
                a.position.x,
                a.position.y,
                b.position.x,
                b.position.y,
                hsv_to_rgb(polygon.hue, 1.0, 1.0),
            );
        }
    }
}

fn draw_trail(surface: &mut Surface, a: &Point, b: &Point, hue: f32, depth: usize, incr: usize) {
    for k in (0..depth).step_by(incr.max(1)) {
        let (Some(ta), Some(tb)) = (a.trail.get(k), b.trail.get(k)) else {
            break;
        };

        let color = hsv_to_rgb(hue, TRAIL_SATURATION, fade(k, depth));
        surface.draw_line(ta.x, ta.y, tb.x, tb.y, color);
    }
}

/// Brightness of the trail sample at depth `k`: 1 for the newest,
/// dimming toward the oldest.
fn fade(k: usize, depth: usize) -> f32 {
    ((depth - k) as f32 / (depth as f32 - 1.0)).min(1.0)
}

#[cfg(test)]
mod tests {
    use mystify_core::{Dimensions, Settings};
    use mystify_sim::Vec2;

    use super::*;

    fn sim_with(points: usize, trails: usize) -> Simulation {
        let mut sim = Simulation::new(Dimensions::new(40, 30), Some(7));
        sim.apply(&Settings {
            polys: 1,
            points,
            trails,
            ..Settings::default()
        });
        sim
    }

    fn place(sim: &mut Simulation, index: usize, x: f32, y: f32) {
        let point = &mut sim.polygons_mut()[0].points[index];
        point.position = Vec2::new(x, y);
        point.trail.clear();
    }

    #[test]
    fn test_fade() {
        assert_eq!(fade(0, 20), 1.0);
        assert!((fade(19, 20) - 1.0 / 19.0).abs() < 1e-6);
        assert!(fade(10, 20) < fade(4, 20));
        // A single-sample trail would divide by zero; it stays at full value.
        assert_eq!(fade(0, 1), 1.0);
    }

    #[test]
    fn test_live_edges_drawn_at_full_color() {
        let mut sim = sim_with(2, 0);
        sim.polygons_mut()[0].hue = 0.0;
        place(&mut sim, 0, 2.0, 5.0);
        place(&mut sim, 1, 8.0, 5.0);

        let mut surface = Surface::new(Dimensions::new(40, 30));
        render_surface(&mut surface, &sim, 1);

        let lit: Vec<_> = surface.lit().collect();
        assert_eq!(lit, (2..=8).map(|x| (x, 5)).collect::<Vec<_>>());
        assert!(lit.iter().all(|&(x, y)| surface.get(x, y) == 0xff0000));
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let sim = sim_with(3, 0);
        let mut surface = Surface::new(Dimensions::new(40, 30));
        surface.draw_line(0.0, 29.0, 39.0, 29.0, 0x123456);

        let mut fresh = Surface::new(Dimensions::new(40, 30));
        render_surface(&mut surface, &sim, 1);
        render_surface(&mut fresh, &sim, 1);

        assert_eq!(surface, fresh);
    }

    #[test]
    fn test_trail_drawn_dimmer_under_live_edge() {
        let mut sim = sim_with(2, 4);
        sim.polygons_mut()[0].hue = 0.0;
        place(&mut sim, 0, 2.0, 10.0);
        place(&mut sim, 1, 8.0, 10.0);
        sim.step(0.0);
        // Move the live edge away from the recorded trail.
        place_keep_trail(&mut sim, 0, 2.0, 20.0);
        place_keep_trail(&mut sim, 1, 8.0, 20.0);

        let mut surface = Surface::new(Dimensions::new(40, 30));
        render_surface(&mut surface, &sim, 1);

        assert_eq!(surface.get(5, 20), 0xff0000);
        assert_eq!(surface.get(5, 10), hsv_to_rgb(0.0, TRAIL_SATURATION, 1.0));
    }

    fn place_keep_trail(sim: &mut Simulation, index: usize, x: f32, y: f32) {
        sim.polygons_mut()[0].points[index].position = Vec2::new(x, y);
    }

    #[test]
    fn test_trail_stops_at_first_empty_slot() {
        let mut sim = sim_with(2, 10);
        place(&mut sim, 0, 2.0, 10.0);
        place(&mut sim, 1, 8.0, 10.0);
        sim.step(0.0);
        place_keep_trail(&mut sim, 0, 2.0, 20.0);
        place_keep_trail(&mut sim, 1, 8.0, 20.0);
        // Slot 0 of one endpoint only; the edge trail must stop immediately.
        sim.polygons_mut()[0].points[1].trail.clear();

        let mut surface = Surface::new(Dimensions::new(40, 30));
        render_surface(&mut surface, &sim, 1);

        assert!(surface.lit().all(|(_, y)| y == 20));
    }

    #[test]
    fn test_trail_stride_skips_samples() {
        let mut sim = sim_with(2, 4);
        sim.polygons_mut()[0].hue = 0.5;
        for step in 0..4 {
            let y = 2.0 + 5.0 * step as f32;
            place_keep_trail(&mut sim, 0, 1.0, y);
            place_keep_trail(&mut sim, 1, 6.0, y);
            sim.step(0.0);
        }
        place_keep_trail(&mut sim, 0, 1.0, 27.0);
        place_keep_trail(&mut sim, 1, 6.0, 27.0);

        // Trail depth 0 is y = 17, depth 1 is y = 12, depth 2 is y = 7, depth 3 is y = 2.
        let mut surface = Surface::new(Dimensions::new(40, 30));
        render_surface(&mut surface, &sim, 2);

        let rows: Vec<usize> = {
            let mut rows: Vec<_> = surface.lit().map(|(_, y)| y).collect();
            rows.dedup();
            rows
        };
        assert_eq!(rows, vec![7, 17, 27]);
    }

    #[test]
    fn test_inactive_polygons_are_not_drawn() {
        let mut sim = sim_with(3, 0);
        sim.apply(&Settings {
            polys: 0,
            ..Settings::default()
        });

        let mut surface = Surface::new(Dimensions::new(40, 30));
        render_surface(&mut surface, &sim, 1);
        assert_eq!(surface.lit().count(), 0);
    }
}
