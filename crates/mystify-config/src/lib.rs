//! Configuration loading for mystify.
//!
//! Settings are resolved from three layers, later ones winning: built-in
//! defaults, an optional TOML file, and the command line. The merged
//! result is clamped into range before anything else sees it.
//!
//! ```toml
//! polys = 3
//! points = 5
//! trails = 32
//! trail_incr = 2
//! fps = 30
//! max_velocity = 1.5
//! show_status = false
//! seed = 1234
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use mystify_core::Settings;
use serde::Deserialize;
use thiserror::Error;

/// File name looked up inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A partial set of settings; unset fields defer to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsLayer {
    pub polys: Option<usize>,
    pub points: Option<usize>,
    pub trails: Option<usize>,
    pub trail_incr: Option<usize>,
    pub fps: Option<u32>,
    pub max_velocity: Option<f32>,
    pub show_status: Option<bool>,
    pub seed: Option<u64>,
}

impl SettingsLayer {
    /// Parse a layer from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read a layer from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Stack `over` on top of `self`; fields set in `over` win.
    pub fn merge(self, over: SettingsLayer) -> Self {
        Self {
            polys: over.polys.or(self.polys),
            points: over.points.or(self.points),
            trails: over.trails.or(self.trails),
            trail_incr: over.trail_incr.or(self.trail_incr),
            fps: over.fps.or(self.fps),
            max_velocity: over.max_velocity.or(self.max_velocity),
            show_status: over.show_status.or(self.show_status),
            seed: over.seed.or(self.seed),
        }
    }

    /// Apply the set fields to `base`.
    pub fn apply(&self, base: Settings) -> Settings {
        Settings {
            polys: self.polys.unwrap_or(base.polys),
            points: self.points.unwrap_or(base.points),
            trails: self.trails.unwrap_or(base.trails),
            trail_incr: self.trail_incr.unwrap_or(base.trail_incr),
            fps: self.fps.unwrap_or(base.fps),
            max_velocity: self.max_velocity.unwrap_or(base.max_velocity),
            show_status: self.show_status.unwrap_or(base.show_status),
            seed: self.seed.or(base.seed),
        }
    }
}

/// Default location of the config file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mystify").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Where the settings came from, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file was read.
    Defaults,
    /// Settings were read from this file.
    File(PathBuf),
}

/// Resolve the final settings.
///
/// An `explicit` path must exist. Without one the default location is
/// tried and silently skipped when the file is absent.
pub fn resolve(
    explicit: Option<&Path>,
    cli: SettingsLayer,
) -> Result<(Settings, ConfigSource), ConfigError> {
    let (file, source) = match explicit {
        Some(path) => (SettingsLayer::load(path)?, ConfigSource::File(path.to_path_buf())),
        None => match default_config_path() {
            Some(path) if path.is_file() => {
                (SettingsLayer::load(&path)?, ConfigSource::File(path))
            }
            _ => (SettingsLayer::default(), ConfigSource::Defaults),
        },
    };

    let settings = file.merge(cli).apply(Settings::default()).clamped();
    Ok((settings, source))
}
