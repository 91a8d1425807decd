//! CLI subcommand implementations.

pub mod build;
pub mod inspect;
pub mod render;
pub mod stats;
