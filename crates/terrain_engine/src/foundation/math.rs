//! Math utilities and types
//!
//! Provides the fundamental math types for world streaming and planar
//! collision queries. The world is streamed on the XZ ground plane, so most
//! of the engine works with 2D vectors; 3D vectors appear only where the
//! observer position or a placed object's world position is involved.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type (planar XZ coordinates: `x` is world X, `y` is world Z)
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Full turn in radians, used for yaw generation
pub const TAU: f32 = std::f32::consts::TAU;
