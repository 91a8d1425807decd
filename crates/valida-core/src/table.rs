//! Header-driven normalization of a raw result table.
//!
//! Exports from different timing systems disagree on column names and
//! positions, so every semantic column is located by name. Columns that
//! cannot be found are simply absent and read as empty strings.

use crate::text::fold;

/// Purely cosmetic column dropped from every table.
const CLASS_HEADER: &str = "clase";

/// Free-text column moved into per-row annotations.
const COMMENT_HEADER: &str = "comentario";

/// Meaning assigned to a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Number,
    Name,
    League,
    Club,
    Brand,
    BestLap,
}

impl ColumnRole {
    /// Classifies a header cell, ignoring case and diacritics.
    pub fn of_header(header: &str) -> Option<Self> {
        let lower = header.trim().to_lowercase();
        let folded = fold(header);
        if matches!(lower.as_str(), "n°" | "nº") || folded == "numero" {
            Some(Self::Number)
        } else if folded.contains("mejor") && (folded.contains("tm") || folded.contains("tiempo"))
        {
            Some(Self::BestLap)
        } else if folded.contains("nombre") {
            Some(Self::Name)
        } else if folded.contains("liga") {
            Some(Self::League)
        } else if folded.contains("club") {
            Some(Self::Club)
        } else if folded.replace(' ', "") == "moto" {
            Some(Self::Brand)
        } else {
            None
        }
    }
}

/// Positions of the semantic columns within a normalized table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub number: Option<usize>,
    pub name: Option<usize>,
    pub league: Option<usize>,
    pub club: Option<usize>,
    pub brand: Option<usize>,
    pub best_lap: Option<usize>,
}

impl Columns {
    /// Resolves roles from headers; the first header with a role wins it.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut columns = Self::default();
        for (idx, header) in headers.iter().enumerate() {
            let slot = match ColumnRole::of_header(header.as_ref()) {
                Some(ColumnRole::Number) => &mut columns.number,
                Some(ColumnRole::Name) => &mut columns.name,
                Some(ColumnRole::League) => &mut columns.league,
                Some(ColumnRole::Club) => &mut columns.club,
                Some(ColumnRole::Brand) => &mut columns.brand,
                Some(ColumnRole::BestLap) => &mut columns.best_lap,
                None => continue,
            };
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
        columns
    }

    /// Highest column a row must reach to be kept.
    fn widest_required(&self) -> Option<usize> {
        [self.number, self.league, self.club, self.brand]
            .into_iter()
            .flatten()
            .max()
    }
}

/// A result table with cosmetic columns removed and semantic columns located.
///
/// Row order is the ranking order of the session and is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// One entry per row; empty when the row has no comment.
    pub annotations: Vec<String>,
    pub columns: Columns,
}

impl NormalizedTable {
    /// Normalizes raw records whose first record is the header.
    ///
    /// Returns `None` when there are no records at all. Blank rows, rows
    /// too short to hold the semantic columns, and rows without a competitor
    /// number are dropped.
    pub fn from_records(records: Vec<Vec<String>>) -> Option<Self> {
        let mut records = records.into_iter();
        let raw_headers: Vec<String> = records
            .next()?
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let cell = if idx == 0 {
                    cell.trim_start_matches('\u{feff}')
                } else {
                    cell
                };
                cell.trim().to_string()
            })
            .collect();

        let class_idx = find_header(&raw_headers, CLASS_HEADER);
        let comment_idx = find_header(&raw_headers, COMMENT_HEADER);
        let kept: Vec<usize> = (0..raw_headers.len())
            .filter(|idx| Some(*idx) != class_idx && Some(*idx) != comment_idx)
            .collect();

        let headers: Vec<String> = kept.iter().map(|&idx| raw_headers[idx].clone()).collect();
        let columns = Columns::resolve(&headers);
        let min_len = columns.widest_required().map_or(0, |idx| kept[idx] + 1);
        tracing::debug!(?columns, ?headers, "resolved table columns");

        let mut rows = Vec::new();
        let mut annotations = Vec::new();
        for (line, record) in records.enumerate() {
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            if record.len() < min_len {
                tracing::debug!(line = line + 2, len = record.len(), "dropping short row");
                continue;
            }
            let row: Vec<String> = kept
                .iter()
                .map(|&idx| record.get(idx).map_or_else(String::new, |c| c.trim().to_string()))
                .collect();
            if columns.number.is_some_and(|idx| row[idx].is_empty()) {
                tracing::debug!(line = line + 2, "dropping row without competitor number");
                continue;
            }
            let annotation = comment_idx
                .and_then(|idx| record.get(idx))
                .map_or_else(String::new, |c| c.trim().to_string());
            rows.push(row);
            annotations.push(annotation);
        }

        Some(Self {
            headers,
            rows,
            annotations,
            columns,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell of `row` in `column`, or `""` when the column is absent.
    pub fn field(&self, row: usize, column: Option<usize>) -> &str {
        column
            .and_then(|idx| self.rows.get(row)?.get(idx))
            .map_or("", String::as_str)
    }

    pub fn number(&self, row: usize) -> &str {
        self.field(row, self.columns.number)
    }

    pub fn name(&self, row: usize) -> &str {
        self.field(row, self.columns.name)
    }

    /// Comment attached to `row`, if any.
    pub fn annotation(&self, row: usize) -> Option<&str> {
        self.annotations
            .get(row)
            .map(String::as_str)
            .filter(|a| !a.is_empty())
    }
}

fn find_header(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.to_lowercase() == name)
}
