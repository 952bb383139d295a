//! Core engine implementation
//!
//! [`WorldCore`] coordinates the streaming and collision subsystems behind
//! the four operations the frame driver consumes: construction, per-tick
//! `update`, read-only `check_collision`/`slide`, and `dispose`.

use crate::config::{ConfigError, WorldConfig};
use crate::foundation::math::{Vec2, Vec3};
use crate::physics::collider::layers;
use crate::physics::resolver::{self, Contact};
use crate::scene::SceneSink;
use crate::world::streaming::CellStreamer;
use crate::worldgen::templates::TemplateSet;
use thiserror::Error;

/// World core errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration was rejected at initialization
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// The world-streaming and collision core
///
/// Owns the active-cell set and the shared content templates. Single
/// caller, single thread: one `update` pass per simulation frame, collision
/// queries in between. The rendering collaborator is reached only through
/// the [`SceneSink`] handed in at construction.
pub struct WorldCore {
    streamer: CellStreamer,
}

impl WorldCore {
    /// Create the core, validating the configuration up front
    ///
    /// Fails fast with no partial state when the configuration is invalid.
    pub fn new(config: WorldConfig, sink: Box<dyn SceneSink>) -> Result<Self, EngineError> {
        config.validate()?;

        log::info!(
            "initializing world core: cell_size={}, render_distance={}, seed={}",
            config.cell_size,
            config.render_distance,
            config.world_seed
        );

        let templates = TemplateSet::shared();
        Ok(Self {
            streamer: CellStreamer::new(config, templates, sink),
        })
    }

    /// Advance cell lifecycle for this frame's observer position
    pub fn update(&mut self, observer: Vec3) {
        self.streamer.update(observer);
    }

    /// Query for the nearest penetrating obstacle around (x, z)
    ///
    /// Read-only; returns `None` when the query circle is clear.
    #[must_use]
    pub fn check_collision(&self, x: f32, z: f32, query_radius: f32) -> Option<Contact> {
        resolver::check_collision(&self.streamer, x, z, query_radius, layers::OBSTACLE)
    }

    /// Apply a desired planar displacement with axis-separated sliding
    ///
    /// `position.y` carries world Z. Returns the adjusted position.
    #[must_use]
    pub fn slide(&self, position: Vec2, desired: Vec2, query_radius: f32) -> Vec2 {
        resolver::slide(&self.streamer, position, desired, query_radius)
    }

    /// Release all active cells, their scene objects, and the shared
    /// templates
    ///
    /// Idempotent. This is teardown; a fresh world takes a new `WorldCore`.
    pub fn dispose(&mut self) {
        log::info!("disposing world core ({} active cells)", self.streamer.active_cell_count());
        self.streamer.release_all();
    }

    /// Access to the underlying streamer, for drivers and diagnostics
    #[must_use]
    pub fn streamer(&self) -> &CellStreamer {
        &self.streamer
    }

    /// Number of currently active cells
    #[must_use]
    pub fn active_cell_count(&self) -> usize {
        self.streamer.active_cell_count()
    }
}
