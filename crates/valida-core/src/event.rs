//! One event: every export of a results directory, classified and grouped.

use std::path::Path;

use crate::category::{Category, Session, group_sessions};
use crate::competitor::Synonyms;
use crate::discipline::Discipline;
use crate::filename::classify;
use crate::report::ReportModel;
use crate::source::{LoadError, RawExport, read_exports};
use crate::stats::StatsSnapshot;
use crate::table::NormalizedTable;

/// Normalized results of a single event.
#[derive(Debug, Clone)]
pub struct Event {
    discipline: Discipline,
    synonyms: Synonyms,
    categories: Vec<Category>,
}

impl Event {
    /// Reads and normalizes every export in `dir`.
    pub fn load(dir: &Path, discipline: Discipline, synonyms: Synonyms) -> Result<Self, LoadError> {
        let exports = read_exports(dir)?;
        Ok(Self::from_exports(exports, discipline, synonyms))
    }

    /// Classifies and normalizes exports, taken in file name order.
    pub fn from_exports(
        mut exports: Vec<RawExport>,
        discipline: Discipline,
        synonyms: Synonyms,
    ) -> Self {
        exports.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        let sessions: Vec<Session> = exports
            .into_iter()
            .filter_map(|export| {
                let source = classify(&export.file_name, discipline);
                let Some(table) = NormalizedTable::from_records(export.records) else {
                    tracing::warn!(file = %export.file_name, "skipping export without records");
                    return None;
                };
                tracing::debug!(
                    file = %source.file_name,
                    category = %source.category,
                    session = %source.session,
                    rows = table.len(),
                    "classified export"
                );
                Some(Session { source, table })
            })
            .collect();

        let mut categories = group_sessions(sessions);
        categories.sort_by_key(|c| discipline.sort_key(c.label()));
        tracing::info!(categories = categories.len(), %discipline, "normalized event");

        Self {
            discipline,
            synonyms,
            categories,
        }
    }

    pub const fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Categories in publication order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::from_categories(&self.categories, &self.synonyms)
    }

    pub fn report(&self) -> ReportModel {
        ReportModel::build(&self.categories, self.discipline)
    }
}
