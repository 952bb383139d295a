//! # Terrain Engine
//!
//! The world-streaming and collision core of a first-person exploration
//! game: an effectively unbounded, deterministically-generated terrain
//! maintained around a moving observer, with planar collision queries
//! against the streamed content.
//!
//! ## Features
//!
//! - **Cell Streaming**: a bounded working set of fixed-size world cells,
//!   created on demand and released the instant they leave the retention
//!   ring around the observer
//! - **Deterministic Generation**: cell content derived purely from the
//!   world seed and cell coordinate, so eviction and recreation reproduce
//!   identical content without persistence
//! - **Planar Collision**: penetration-based resolution against disc
//!   colliders, with axis-separated sliding for movement integration
//! - **Renderer Agnostic**: created content is handed to an opaque
//!   [`scene::SceneSink`]; the core performs no rendering or I/O
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use terrain_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     let config = WorldConfig::default();
//!     let mut core = WorldCore::new(config, Box::new(NullSink::default()))?;
//!
//!     let mut position = Vec2::new(0.0, 0.0);
//!     loop {
//!         core.update(Vec3::new(position.x, 1.7, position.y));
//!         position = core.slide(position, Vec2::new(0.15, 0.0), 1.0);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod scene;
pub mod world;
pub mod worldgen;

mod engine;

pub use engine::{EngineError, WorldCore};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, WorldConfig},
        foundation::math::{Vec2, Vec3},
        physics::{layers, Contact},
        scene::{NullSink, SceneObject, SceneObjectId, SceneSink},
        world::{CellCoord, CellStreamer},
        worldgen::{ContentItem, ContentKind, TemplateId},
        EngineError, WorldCore,
    };
}
