//! Per-category model handed to report renderers.

use crate::category::{BestTime, Category, Session};
use crate::discipline::Discipline;
use crate::text::{format_header, slugify};

/// Everything a renderer needs, categories in publication order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    pub categories: Vec<ReportCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportCategory {
    pub label: String,
    /// Stable anchor for links and print selection.
    pub id: String,
    pub primary: ReportTable,
    /// Remaining sessions, shown as a per-session breakdown.
    pub breakdown: Vec<ReportTable>,
    pub best_qualifying: Option<BestTime>,
    pub best_race: Option<BestTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub cells: Vec<String>,
    /// Search key: competitor number.
    pub number: String,
    /// Search key: competitor name.
    pub name: String,
    pub annotation: Option<String>,
    /// Podium place (1 to 3) read from the first cell.
    pub podium: Option<u8>,
}

impl ReportModel {
    /// Builds the model, ordering categories by the discipline's published order.
    pub fn build(categories: &[Category], discipline: Discipline) -> Self {
        let mut ordered: Vec<&Category> = categories.iter().collect();
        ordered.sort_by_key(|c| discipline.sort_key(c.label()));
        Self {
            categories: ordered.into_iter().map(ReportCategory::from_category).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl ReportCategory {
    fn from_category(category: &Category) -> Self {
        let primary = category.primary();
        Self {
            label: category.label().to_string(),
            id: slugify(&format!("{} {}", category.label(), primary.kind())),
            primary: ReportTable::from_session(primary),
            breakdown: category.secondary().map(ReportTable::from_session).collect(),
            best_qualifying: category.best_qualifying().cloned(),
            best_race: category.best_race().cloned(),
        }
    }

    /// Whether a best-time summary should be shown.
    pub const fn has_best_times(&self) -> bool {
        self.best_qualifying.is_some() || self.best_race.is_some()
    }
}

impl ReportTable {
    fn from_session(session: &Session) -> Self {
        let table = &session.table;
        let rows = table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, cells)| ReportRow {
                cells: cells.clone(),
                number: table.number(idx).to_string(),
                name: table.name(idx).to_string(),
                annotation: table.annotation(idx).map(str::to_string),
                podium: podium(cells.first().map_or("", String::as_str)),
            })
            .collect();
        Self {
            title: session.kind().to_string(),
            headers: table.headers.iter().map(|h| format_header(h)).collect(),
            rows,
        }
    }
}

fn podium(position: &str) -> Option<u8> {
    match position.trim() {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        _ => None,
    }
}
