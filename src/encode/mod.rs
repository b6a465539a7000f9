//! Frame sinks: turn "array state changed" notifications into image frames.

pub mod gif;
pub mod ppm;
pub mod sink;
