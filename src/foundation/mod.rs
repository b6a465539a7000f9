//! Shared leaf types: the value/color model and the crate error type.

pub mod color;
pub mod error;
