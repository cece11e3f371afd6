//! CLI command implementations

pub mod generate;
pub mod lifecycle;
pub mod seed;
