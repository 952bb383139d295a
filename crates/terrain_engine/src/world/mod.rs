//! Cell streaming: the bounded working set of world cells
//!
//! The world is an unbounded plane of fixed-size square cells. Only the
//! retention ring around the observer's current cell is ever materialized;
//! everything else either has not been generated yet or has been released.

pub mod cell;
pub mod streaming;

pub use cell::{Cell, CellCoord, ContentKey};
pub use streaming::CellStreamer;
