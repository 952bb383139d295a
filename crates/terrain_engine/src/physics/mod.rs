//! Planar collision detection against streamed cell content
//!
//! Movement collision is approximated with planar circles: every blocking
//! content item contributes one disc collider, and queries resolve against
//! the 3x3 cell neighborhood of the query point.

pub mod collider;
pub mod resolver;

pub use collider::{layers, Collider};
pub use resolver::{check_collision, nearest_contact, slide, Contact};
