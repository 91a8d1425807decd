//! Race result report CLI library.
//!
//! This crate provides the CLI interface and the HTML renderer.

mod cli;
pub mod commands;
mod config;
pub mod html;

pub use cli::{Cli, Commands, EventArgs};
pub use config::{Config, EVENT_CONFIG_FILE};
