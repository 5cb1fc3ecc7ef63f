//! Simulation state for the mystify animation.
//!
//! A [`Simulation`] owns a fixed-capacity set of [`Polygon`]s whose
//! [`Point`]s bounce around a virtual subpixel surface, each remembering a
//! short [`Trail`] of where it has been. Only the first `polys` polygons
//! and `points` points per polygon are active at any time; the rest keep
//! their state so that raising the counts later reveals them mid-flight.

mod physics;
mod point;
mod simulation;

pub use point::{Point, Polygon, Trail, Vec2};
pub use simulation::Simulation;
