//! Scene registration seam between streaming and the renderer
//!
//! The streaming core does not render. It hands every created floor tile and
//! content item to a [`SceneSink`] and recalls it on eviction. The rendering
//! collaborator supplies the sink implementation; headless drivers and tests
//! use the doubles provided here.

mod sink;

pub use sink::{CountingSink, NullSink, SceneObject, SceneObjectId, SceneSink, SinkCounters};
