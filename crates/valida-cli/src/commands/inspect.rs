//! Inspect command: lists how each export was classified.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use valida_core::{BestTime, Category, Event};

/// Formats the classification of every category, primary table marked with `*`.
pub fn format_event(event: &Event) -> String {
    let mut output = String::new();
    writeln!(output, "Discipline: {}", event.discipline()).unwrap();

    if event.categories().is_empty() {
        write!(output, "No exports found.").unwrap();
        return output;
    }

    for category in event.categories() {
        writeln!(output).unwrap();
        format_category(&mut output, category);
    }
    output.trim_end().to_string()
}

fn format_category(output: &mut String, category: &Category) {
    writeln!(output, "{}", category.label()).unwrap();
    let primary = &category.primary().source.file_name;
    for session in category.sessions() {
        let marker = if &session.source.file_name == primary { '*' } else { ' ' };
        writeln!(
            output,
            "  {marker} {:<16} {} ({} rows)",
            session.kind().label(),
            session.source.file_name,
            session.table.len()
        )
        .unwrap();
    }
    if let Some(best) = category.best_qualifying() {
        writeln!(output, "    best qualifying: {}", best_time(best)).unwrap();
    }
    if let Some(best) = category.best_race() {
        writeln!(output, "    best race: {}", best_time(best)).unwrap();
    }
}

fn best_time(best: &BestTime) -> String {
    format!("{} #{} {} ({})", best.time, best.number, best.name, best.session)
}

pub fn run<W: Write>(writer: &mut W, event: &Event) -> Result<()> {
    writeln!(writer, "{}", format_event(event))?;
    Ok(())
}
