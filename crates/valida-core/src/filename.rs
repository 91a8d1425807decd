//! File name classification: `"<Category> - <Session>.csv"` into typed parts.

use std::sync::LazyLock;

use regex::Regex;

use crate::discipline::Discipline;
use crate::session::SessionKind;
use crate::text::capitalize;

/// Trailing `- resultados` marker some exports append.
static RE_RESULTS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*-\s*resultados\s*$").expect("valid regex"));

/// Separator between category and session in a file name.
static RE_PART_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-\s+").expect("valid regex"));

/// Separator between words of a category label.
static RE_TOKEN_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-]+").expect("valid regex"));

/// Engine displacement tokens such as `50cc`.
static RE_DISPLACEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+cc$").expect("valid regex"));

/// A classified export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as found on disk.
    pub file_name: String,
    /// Formatted category label.
    pub category: String,
    pub session: SessionKind,
    /// Session part of the name before classification, empty for single-part names.
    pub session_label: String,
}

impl SourceFile {
    #[must_use]
    pub const fn order_key(&self) -> u8 {
        self.session.order_key()
    }
}

/// Classifies an export file name into category and session kind.
pub fn classify(file_name: &str, discipline: Discipline) -> SourceFile {
    let stem = strip_csv_extension(file_name.trim());
    let stem = RE_RESULTS_SUFFIX.replace(stem, "");
    let stem = stem.trim();
    let parts: Vec<&str> = RE_PART_DELIMITER
        .split(stem)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let Some((last, head)) = parts.split_last().filter(|_| parts.len() >= 2) else {
        let whole = parts.first().copied().unwrap_or(stem);
        return SourceFile {
            file_name: file_name.to_string(),
            category: format_category(whole, discipline),
            session: SessionKind::Primary,
            session_label: String::new(),
        };
    };

    let session = SessionKind::recognize(last)
        .unwrap_or_else(|| SessionKind::Other(format_category(last, discipline)));

    SourceFile {
        file_name: file_name.to_string(),
        category: format_category(&head.join(" - "), discipline),
        session,
        session_label: (*last).to_string(),
    }
}

/// Canonical category label: displacement tokens lower-cased, class codes
/// upper-cased, every other word capitalized. Idempotent.
pub fn format_category(name: &str, discipline: Discipline) -> String {
    let upper = discipline.upper_tokens();
    RE_TOKEN_SPLIT
        .split(name)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if RE_DISPLACEMENT.is_match(token) {
                token.to_lowercase()
            } else if upper.contains(&token.to_uppercase().as_str()) {
                token.to_uppercase()
            } else {
                capitalize(token)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_csv_extension(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(".csv") => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MX: Discipline = Discipline::Motocross;

    #[test]
    fn final_file_is_primary_with_key_zero() {
        let file = classify("125cc - Final.csv", MX);
        assert_eq!(file.category, "125cc");
        assert_eq!(file.session, SessionKind::Primary);
        assert_eq!(file.order_key(), 0);
        assert_eq!(file.file_name, "125cc - Final.csv");
    }

    #[test]
    fn race_files_get_race_kinds() {
        let first = classify("MX PRO - 1 Carrera.csv", MX);
        assert_eq!(first.category, "MX Pro");
        assert_eq!(first.session, SessionKind::Race1);
        assert_eq!(first.order_key(), 2);

        let second = classify("mx pro - 2 carrera - resultados.CSV", MX);
        assert_eq!(second.category, "MX Pro");
        assert_eq!(second.session, SessionKind::Race2);
        assert_eq!(second.order_key(), 3);
    }

    #[test]
    fn qualifying_and_practice_are_qualifying() {
        assert_eq!(
            classify("50CC - Clasificatoria.csv", MX).session,
            SessionKind::Qualifying
        );
        assert_eq!(
            classify("Master - Práctica.csv", Discipline::Velotierra).session,
            SessionKind::Qualifying
        );
    }

    #[test]
    fn single_part_name_is_primary() {
        let file = classify("femenina a y b.csv", MX);
        assert_eq!(file.category, "Femenina A Y B");
        assert_eq!(file.session, SessionKind::Primary);
        assert_eq!(file.session_label, "");
    }

    #[test]
    fn results_suffix_is_stripped() {
        let file = classify("85cc Mini - Final - Resultados.csv", MX);
        assert_eq!(file.category, "85cc Mini");
        assert_eq!(file.session, SessionKind::Primary);
    }

    #[test]
    fn unknown_session_keeps_label_and_joins_head() {
        let file = classify("Inicio - Grupo 1 - Superpole.csv", MX);
        assert_eq!(file.category, "Inicio Grupo 1");
        assert_eq!(file.session, SessionKind::Other("Superpole".to_string()));
        assert_eq!(file.session_label, "Superpole");
        assert_eq!(file.order_key(), 4);
    }

    #[test]
    fn discipline_controls_upper_tokens() {
        assert_eq!(format_category("mx2", MX), "MX2");
        assert_eq!(format_category("LIBRE PRO", Discipline::Velotierra), "Libre Pro");
        assert_eq!(format_category("libre pro", MX), "Libre Pro");
    }

    #[test]
    fn format_category_is_idempotent() {
        let inputs = [
            "125CC",
            "85cc   junior",
            "femenina-a-y-b",
            "MX PREEXPERTOS",
            "mx2",
            "Infantil  Mini",
            "Máster Élite",
            "x",
            "",
            " - ",
            "Libre Novatos B",
            "ßx",
            "ﬁnal",
            "STRAßE ǆ",
        ];
        for discipline in [Discipline::Motocross, Discipline::Velotierra] {
            for input in inputs {
                let once = format_category(input, discipline);
                let twice = format_category(&once, discipline);
                assert_eq!(once, twice, "not idempotent for {input:?} ({discipline})");
            }
        }
    }
}
