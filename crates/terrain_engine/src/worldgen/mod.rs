//! Deterministic procedural content generation
//!
//! Everything a cell contains is derived purely from the world seed and the
//! cell's coordinate, so an evicted cell can be recreated bit-identically
//! without persisting anything.

pub mod generator;
pub mod templates;

pub use generator::{generate_cell_content, seeded_value, ContentItem};
pub use templates::{ContentKind, Template, TemplateId, TemplateSet};
