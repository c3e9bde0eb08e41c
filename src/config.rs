use crate::beam::Direction;
use crate::cast::{Cast, Shape};
use crate::point::Point;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Ways loading a configuration file can fail
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("beam angle must be a number, got {0}")]
    InvalidAngle(f64),
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub cast: CastConfig,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Beam,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct CastConfig {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default = "default_include_origin")]
    pub include_origin: bool,
    #[serde(default = "default_shape")]
    pub shape: ShapeKind,
    /// Only used by beams
    #[serde(default = "default_direction")]
    pub direction: Direction,
    /// Full beam width in degrees; only used by beams
    #[serde(default = "default_angle")]
    pub angle: f64,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default = "default_map_path")]
    pub path: String,
}

// Default values
fn default_radius() -> u32 { 8 }
fn default_include_origin() -> bool { true }
fn default_shape() -> ShapeKind { ShapeKind::Circle }
fn default_direction() -> Direction { Direction::East }
fn default_angle() -> f64 { 90.0 }
fn default_map_path() -> String { "map.txt".to_string() }

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            radius: default_radius(),
            include_origin: default_include_origin(),
            shape: default_shape(),
            direction: default_direction(),
            angle: default_angle(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cast: CastConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration text; `path` is only used in error messages
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, failing if it is missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents, path)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from `path`, or use defaults if it can't be loaded
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io { path, .. }) => {
                log::info!("No {} found, using default configuration", path.display());
                Config::default()
            }
            Err(e) => {
                log::warn!("{}", e);
                log::warn!("Using default configuration");
                Config::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cast.angle.is_nan() {
            return Err(ConfigError::InvalidAngle(self.cast.angle));
        }
        Ok(())
    }

    /// The cast this configuration describes
    pub fn cast(&self) -> Cast {
        let c = &self.cast;
        let shape = match c.shape {
            ShapeKind::Circle => Shape::Circle,
            ShapeKind::Beam => Shape::Beam {
                direction: c.direction,
                angle: c.angle,
            },
        };
        Cast {
            origin: Point::new(c.x, c.y),
            radius: c.radius,
            include_origin: c.include_origin,
            shape,
        }
    }
}
