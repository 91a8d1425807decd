//! Reading result exports from an event directory.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Raw records of one export file, header first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExport {
    pub file_name: String,
    pub records: Vec<Vec<String>>,
}

/// Reads every `.csv` file in `dir`, sorted by file name.
///
/// Unreadable and empty files are skipped with a warning; only a failure to
/// list the directory itself is an error.
pub fn read_exports(dir: &Path) -> Result<Vec<RawExport>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                tracing::warn!(dir = ?dir, error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|path| path.is_file() && is_csv(path))
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut exports = Vec::with_capacity(paths.len());
    for path in paths {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match read_records(&path) {
            Ok(records) if records.is_empty() => {
                tracing::warn!(path = ?path, "skipping empty export");
            }
            Ok(records) => {
                tracing::debug!(path = ?path, records = records.len(), "read export");
                exports.push(RawExport { file_name, records });
            }
            Err(err) => {
                tracing::warn!(path = ?path, error = %err, "skipping unreadable export");
            }
        }
    }
    Ok(exports)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn read_records(path: &Path) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        records.push(
            record
                .iter()
                .map(|cell| {
                    let cell = if idx == 0 {
                        cell.trim_start_matches('\u{feff}')
                    } else {
                        cell
                    };
                    cell.trim().to_string()
                })
                .collect(),
        );
    }
    Ok(records)
}
