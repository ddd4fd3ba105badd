//! CLI command implementations.

pub mod common;
pub mod histogram;
pub mod plan;
pub mod sample;
