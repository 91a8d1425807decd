//! Render command: writes the HTML results page.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use valida_core::Event;

use crate::Config;
use crate::html;

/// Writes the results page to its configured location.
pub fn write(
    event: &Event,
    config: &Config,
    event_dir: &Path,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    let model = event.report();
    if model.is_empty() {
        tracing::warn!("no categories found, rendering an empty page");
    }

    let path = config.report_path(event_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, html::render(&model, config, generated_at))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), categories = model.categories.len(), "wrote report");
    Ok(path)
}

pub fn run<W: Write>(writer: &mut W, event: &Event, config: &Config, event_dir: &Path) -> Result<()> {
    let path = write(event, config, event_dir, Local::now())?;
    writeln!(writer, "Report written to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use valida_core::{Discipline, RawExport, Synonyms};

    #[test]
    fn writes_page_under_configured_path() {
        let temp = tempfile::tempdir().unwrap();
        let event = Event::from_exports(
            vec![RawExport {
                file_name: "MX2 - Final.csv".to_string(),
                records: vec![
                    vec!["Pos".to_string(), "N°".to_string(), "Nombre".to_string()],
                    vec!["1".to_string(), "31".to_string(), "Juan".to_string()],
                ],
            }],
            Discipline::Motocross,
            Synonyms::default(),
        );
        let config = Config {
            report_file: "publicado/mx.html".into(),
            ..Config::default()
        };

        let mut output = Vec::new();
        run(&mut output, &event, &config, temp.path()).unwrap();

        let page = std::fs::read_to_string(temp.path().join("publicado/mx.html")).unwrap();
        assert!(page.contains("id=\"mx2-final\""));
        assert!(page.contains("data-numero=\"31\""));
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Report written to "));
    }
}
