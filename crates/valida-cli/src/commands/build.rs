//! Build command: statistics document and results page in one pass.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use valida_core::Event;

use super::{render, stats};
use crate::Config;

pub fn run<W: Write>(writer: &mut W, event: &Event, config: &Config, event_dir: &Path) -> Result<()> {
    let (stats_path, snapshot) = stats::write(event, config, event_dir)?;
    let report_path = render::write(event, config, event_dir, Local::now())?;

    writeln!(writer, "Statistics written to {}", stats_path.display())?;
    writeln!(writer, "Report written to {}", report_path.display())?;
    writeln!(writer, "{}", stats::format_summary(&snapshot))?;
    Ok(())
}
