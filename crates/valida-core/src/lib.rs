//! Core pipeline for race result exports.
//!
//! This crate turns a directory of per-session result tables into a typed model:
//! - Filename classification: category and session kind from `"<Category> - <Session>.csv"`
//! - Table normalization: header-driven column discovery, cosmetic column removal
//! - Aggregation: canonical primary table per category, best lap summaries
//! - Statistics and the report model consumed by renderers

pub mod category;
pub mod competitor;
pub mod discipline;
pub mod event;
pub mod filename;
pub mod lap_time;
pub mod report;
pub mod session;
pub mod source;
pub mod stats;
pub mod table;
mod text;

pub use category::{BestTime, Category, Session, group_sessions};
pub use competitor::{CompetitorEntry, Synonyms, competitors};
pub use discipline::{Discipline, UnknownDiscipline};
pub use event::Event;
pub use filename::{SourceFile, classify, format_category};
pub use lap_time::{LapTime, format_lap_time};
pub use report::{ReportCategory, ReportModel, ReportRow, ReportTable};
pub use session::SessionKind;
pub use source::{LoadError, RawExport, read_exports};
pub use stats::StatsSnapshot;
pub use table::{ColumnRole, Columns, NormalizedTable};
