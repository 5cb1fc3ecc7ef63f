//! Command line options.

use std::path::PathBuf;

use clap::Parser;
use mystify_config::SettingsLayer;

#[derive(Parser, Debug)]
#[command(
    name = "mystify",
    version,
    about = "Bouncing polygons with fading trails, drawn with sextant glyphs",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of polygons (max 16).
    #[arg(short = 'q', long)]
    pub polys: Option<i64>,

    /// Number of points per polygon (max 16).
    #[arg(short = 'p', long)]
    pub points: Option<i64>,

    /// Number of trail lines (max 64).
    #[arg(short = 't', long)]
    pub trails: Option<i64>,

    /// Frames per second.
    #[arg(short = 'f', long)]
    pub fps: Option<i64>,

    /// Speed multiplier for every point (0.01 to 10).
    #[arg(short = 'e', long)]
    pub max_velocity: Option<f32>,

    /// Hide the status text.
    #[arg(short = 's', long)]
    pub no_status: bool,

    /// Render every nth trail (1 to 64).
    #[arg(short = 'i', long)]
    pub trail_incr: Option<i64>,

    /// Seed for the random layout.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read settings from this TOML file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default "info").
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The settings given on the command line. Negative counts become 0;
    /// everything else is clamped later with the other layers.
    pub fn layer(&self) -> SettingsLayer {
        SettingsLayer {
            polys: self.polys.map(non_negative),
            points: self.points.map(non_negative),
            trails: self.trails.map(non_negative),
            trail_incr: self.trail_incr.map(non_negative),
            fps: self.fps.map(|fps| fps.clamp(0, i64::from(u32::MAX)) as u32),
            max_velocity: self.max_velocity,
            show_status: self.no_status.then_some(false),
            seed: self.seed,
        }
    }
}

fn non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}
