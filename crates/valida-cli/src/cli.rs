//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use valida_core::Discipline;

/// Race result report generator.
///
/// Reads the per-session result exports of an event and produces a
/// statistics document and a standalone HTML results page.
#[derive(Debug, Parser)]
#[command(name = "valida", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the statistics document.
    Stats {
        #[command(flatten)]
        event: EventArgs,

        /// Print the document to stdout instead of writing the file.
        #[arg(long)]
        stdout: bool,
    },

    /// Write the HTML results page.
    Render {
        #[command(flatten)]
        event: EventArgs,
    },

    /// Write both the statistics document and the results page.
    Build {
        #[command(flatten)]
        event: EventArgs,
    },

    /// Show how each export was classified.
    Inspect {
        #[command(flatten)]
        event: EventArgs,
    },
}

impl Commands {
    pub const fn event(&self) -> &EventArgs {
        match self {
            Self::Stats { event, .. }
            | Self::Render { event }
            | Self::Build { event }
            | Self::Inspect { event } => event,
        }
    }
}

/// Arguments shared by every command that reads an event.
#[derive(Debug, Clone, Args)]
pub struct EventArgs {
    /// Event directory holding the exports folder.
    #[arg(default_value = ".")]
    pub event_dir: PathBuf,

    /// Category ordering preset (motocross or velotierra).
    #[arg(long)]
    pub discipline: Option<Discipline>,
}
