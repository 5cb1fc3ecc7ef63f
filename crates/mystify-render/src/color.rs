//! Color utility functions for the polygon renderer.

use ratatui::style::Color;

/// Convert HSV (each component in [0, 1]) to a packed `0xRRGGBB` value.
///
/// Channels are truncated, not rounded, to 8 bits.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> u32 {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (channel(r) << 16) | (channel(g) << 8) | channel(b)
}

fn channel(value: f32) -> u32 {
    (value * 255.0) as u32
}

/// Terminal color for a packed `0xRRGGBB` value.
pub fn packed_to_color(packed: u32) -> Color {
    Color::Rgb(
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    )
}
