//! Foundation utilities shared by all engine subsystems

pub mod logging;
pub mod math;
