//! Stats command: writes the participation statistics document.

use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use valida_core::{Event, StatsSnapshot};

use crate::Config;

/// Serializes the event statistics as pretty-printed JSON.
pub fn to_json(stats: &StatsSnapshot) -> Result<String> {
    serde_json::to_string_pretty(stats).context("failed to serialize statistics")
}

/// Writes the statistics document to its configured location.
pub fn write(event: &Event, config: &Config, event_dir: &Path) -> Result<(PathBuf, StatsSnapshot)> {
    let stats = event.stats();
    let path = config.stats_path(event_dir);
    let json = to_json(&stats)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, json + "\n")
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote statistics");
    Ok((path, stats))
}

/// Short human-readable digest of a snapshot.
pub fn format_summary(stats: &StatsSnapshot) -> String {
    let mut output = String::new();
    writeln!(output, "Participations: {}", stats.participations).unwrap();
    writeln!(output, "Unique competitors: {}", stats.unique_competitors).unwrap();
    writeln!(output, "Categories: {}", stats.participations_by_category.len()).unwrap();
    writeln!(output, "Leagues: {}", stats.competitors_by_league.len()).unwrap();
    writeln!(output, "Clubs: {}", stats.competitors_by_club.len()).unwrap();
    let brands: Vec<&str> = stats.competitors_by_brand.keys().map(String::as_str).collect();
    write!(output, "Brands: {}", brands.join(", ")).unwrap();
    output
}

pub fn run<W: Write>(
    writer: &mut W,
    event: &Event,
    config: &Config,
    event_dir: &Path,
    to_stdout: bool,
) -> Result<()> {
    if to_stdout {
        writeln!(writer, "{}", to_json(&event.stats())?)?;
        return Ok(());
    }

    let (path, stats) = write(event, config, event_dir)?;
    writeln!(writer, "Statistics written to {}", path.display())?;
    writeln!(writer, "{}", format_summary(&stats))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use valida_core::{Discipline, RawExport, Synonyms};

    fn export(file_name: &str, rows: &[&str]) -> RawExport {
        RawExport {
            file_name: file_name.to_string(),
            records: rows
                .iter()
                .map(|r| r.split(',').map(str::to_string).collect())
                .collect(),
        }
    }

    fn sample_event() -> Event {
        Event::from_exports(
            vec![
                export(
                    "125cc - Final.csv",
                    &[
                        "Pos,N°,Nombre,Liga,Club,Moto",
                        "1,1,Ana,Antioquia,Club A,Yamaha",
                        "2,2,Luis,VALLE,Club B,HONDA",
                    ],
                ),
                export(
                    "MX2 - Final.csv",
                    &["Pos,N°,Nombre,Liga,Club,Moto", "1,1,Ana,ANTIOQUIA,Club A,KTM"],
                ),
            ],
            Discipline::Motocross,
            Synonyms::default(),
        )
    }

    #[test]
    fn stdout_prints_document() {
        let event = sample_event();
        let mut output = Vec::new();
        run(&mut output, &event, &Config::default(), Path::new("."), true).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r#"
        {
          "participaciones_totales": 3,
          "pilotos_unicos": 2,
          "pilotos_por_liga": {
            "Antioquia": 1,
            "Valle del Cauca": 1
          },
          "pilotos_por_club": {
            "Club A": 1,
            "Club B": 1
          },
          "inscripciones_por_marca": {
            "Honda": 1,
            "KTM": 1,
            "Yamaha": 1
          },
          "participaciones_por_categoria": {
            "125cc": 2,
            "MX2": 1
          },
          "pilotos_por_categoria_unicos": {
            "125cc": 2,
            "MX2": 1
          }
        }
        "#);
    }

    #[test]
    fn writes_file_and_summary() {
        let temp = tempfile::tempdir().unwrap();
        let event = sample_event();
        let mut output = Vec::new();
        run(&mut output, &event, &Config::default(), temp.path(), false).unwrap();

        let written =
            std::fs::read_to_string(temp.path().join("datos_informe_valida.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["pilotos_unicos"], 2);

        let output = String::from_utf8(output).unwrap();
        let summary = output.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert_snapshot!(summary, @r"
        Participations: 3
        Unique competitors: 2
        Categories: 2
        Leagues: 2
        Clubs: 2
        Brands: Honda, KTM, Yamaha
        ");
    }
}
