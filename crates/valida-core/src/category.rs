//! Grouping of sessions into categories and selection of the primary table.

use std::collections::BTreeMap;

use crate::filename::SourceFile;
use crate::lap_time::LapTime;
use crate::session::SessionKind;
use crate::table::NormalizedTable;

/// One classified and normalized export file.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub source: SourceFile,
    pub table: NormalizedTable,
}

impl Session {
    #[must_use]
    pub const fn kind(&self) -> &SessionKind {
        &self.source.session
    }
}

/// Fastest lap found in a set of sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTime {
    pub number: String,
    pub name: String,
    pub time: LapTime,
    /// Session the lap was set in.
    pub session: SessionKind,
}

/// A race category with its sessions in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    label: String,
    sessions: Vec<Session>,
    primary: usize,
    best_qualifying: Option<BestTime>,
    best_race: Option<BestTime>,
}

impl Category {
    /// Builds a category from sessions given in arrival (file name) order.
    ///
    /// Returns `None` for an empty session list.
    pub fn new(label: String, sessions: Vec<Session>) -> Option<Self> {
        let chosen = select_primary(&sessions)?;

        let mut indexed: Vec<(usize, Session)> = sessions.into_iter().enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| {
            a.source
                .order_key()
                .cmp(&b.source.order_key())
                .then_with(|| a.source.session_label.cmp(&b.source.session_label))
        });
        let primary = indexed
            .iter()
            .position(|(arrival, _)| *arrival == chosen)
            .unwrap_or_default();
        let sessions: Vec<Session> = indexed.into_iter().map(|(_, s)| s).collect();

        let best_qualifying = fastest_lap(
            sessions
                .iter()
                .filter(|s| *s.kind() == SessionKind::Qualifying),
        );
        // Display order already puts every Race1 table before any Race2 table.
        let best_race = fastest_lap(sessions.iter().filter(|s| s.kind().is_race()));

        Some(Self {
            label,
            sessions,
            primary,
            best_qualifying,
            best_race,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// All sessions, ordered Final, Qualifying, Race 1, Race 2, others.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// The canonical results table of the category.
    pub fn primary(&self) -> &Session {
        &self.sessions[self.primary]
    }

    /// Every session except the primary one, in display order.
    pub fn secondary(&self) -> impl Iterator<Item = &Session> {
        self.sessions
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != self.primary)
            .map(|(_, s)| s)
    }

    pub const fn best_qualifying(&self) -> Option<&BestTime> {
        self.best_qualifying.as_ref()
    }

    pub const fn best_race(&self) -> Option<&BestTime> {
        self.best_race.as_ref()
    }
}

/// Groups sessions by category label, keeping arrival order inside each group.
///
/// Categories come out sorted by label.
pub fn group_sessions(sessions: Vec<Session>) -> Vec<Category> {
    let mut groups: BTreeMap<String, Vec<Session>> = BTreeMap::new();
    for session in sessions {
        groups
            .entry(session.source.category.clone())
            .or_default()
            .push(session);
    }
    groups
        .into_iter()
        .filter_map(|(label, sessions)| Category::new(label, sessions))
        .collect()
}

/// Index of the canonical session: first Final, else first Qualifying, else first.
fn select_primary(sessions: &[Session]) -> Option<usize> {
    if sessions.is_empty() {
        return None;
    }
    let first_of = |kind: &SessionKind| sessions.iter().position(|s| s.kind() == kind);
    first_of(&SessionKind::Primary)
        .or_else(|| first_of(&SessionKind::Qualifying))
        .or(Some(0))
}

/// Minimum best-lap time across sessions; ties keep the first one seen.
fn fastest_lap<'a>(sessions: impl Iterator<Item = &'a Session>) -> Option<BestTime> {
    let mut best: Option<BestTime> = None;
    for session in sessions {
        let table = &session.table;
        let (Some(_), Some(lap_col)) = (table.columns.number, table.columns.best_lap) else {
            continue;
        };
        for row in 0..table.len() {
            let Some(time) = LapTime::parse(table.field(row, Some(lap_col))) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| time < b.time) {
                best = Some(BestTime {
                    number: table.number(row).to_string(),
                    name: table.name(row).to_string(),
                    time,
                    session: session.kind().clone(),
                });
            }
        }
    }
    best
}
