//! Configuration system
//!
//! World streaming is driven entirely by a small set of tunables. They are
//! validated once, at engine construction, so that every later operation can
//! assume a well-formed configuration (fail fast, no partial state).

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Cell edge length must be a positive number of world units
    #[error("cell_size must be positive, got {0}")]
    NonPositiveCellSize(f32),

    /// Retention ring radius cannot be negative
    #[error("render_distance must be non-negative, got {0}")]
    NegativeRenderDistance(i32),

    /// Object density cannot be negative
    #[error("object_density must be non-negative, got {0}")]
    NegativeObjectDensity(f32),

    /// Push gain must be positive for the resolver to eject overlaps
    #[error("push_gain must be positive, got {0}")]
    NonPositivePushGain(f32),

    /// Push cap must be positive to bound corrective pushes
    #[error("push_cap must be positive, got {0}")]
    NonPositivePushCap(f32),
}

/// World streaming and collision tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// World units per cell edge
    pub cell_size: f32,

    /// Retention ring radius in cells (Chebyshev); the active set is the
    /// `(2 * render_distance + 1)^2` cells around the observer
    pub render_distance: i32,

    /// Expected generated objects per unit of cell area
    pub object_density: f32,

    /// Seed driving all deterministic content generation
    pub world_seed: i64,

    /// Scale applied to penetration depth when computing the corrective push
    pub push_gain: f32,

    /// Upper bound on corrective push magnitude, preventing teleport-like
    /// ejections when a query point is deeply overlapping a collider
    pub push_cap: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            render_distance: 3,
            object_density: 0.002,
            world_seed: 1337,
            push_gain: 1.0,
            push_cap: 0.5,
        }
    }
}

impl Config for WorldConfig {}

impl WorldConfig {
    /// Validate the configuration, rejecting values the streaming and
    /// collision invariants cannot hold under
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        if self.render_distance < 0 {
            return Err(ConfigError::NegativeRenderDistance(self.render_distance));
        }
        if !(self.object_density >= 0.0) {
            return Err(ConfigError::NegativeObjectDensity(self.object_density));
        }
        if !(self.push_gain > 0.0) {
            return Err(ConfigError::NonPositivePushGain(self.push_gain));
        }
        if !(self.push_cap > 0.0) {
            return Err(ConfigError::NonPositivePushCap(self.push_cap));
        }
        Ok(())
    }
}
