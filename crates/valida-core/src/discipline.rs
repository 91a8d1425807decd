//! Discipline presets: category display order and label casing rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MOTOCROSS_ORDER: &[&str] = &[
    "50cc",
    "65cc",
    "85cc mini",
    "85cc junior",
    "125cc",
    "femenina a",
    "femenina b",
    "femenina a y b",
    "inicio",
    "mx master",
    "mx preexpertos",
    "mx pro",
    "mx2",
];

const VELOTIERRA_ORDER: &[&str] = &[
    "125cc",
    "infantil mini",
    "infantil",
    "juvenil",
    "novatos",
    "expertos",
    "femenina",
    "libre novatos",
    "libre pro",
    "master",
];

const MOTOCROSS_UPPER: &[&str] = &["A", "B", "MX", "MX2"];
const VELOTIERRA_UPPER: &[&str] = &["A", "B"];

/// Racing discipline an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    #[default]
    Motocross,
    Velotierra,
}

impl Discipline {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motocross => "motocross",
            Self::Velotierra => "velotierra",
        }
    }

    /// Label tokens that are always written in upper case (class codes).
    #[must_use]
    pub const fn upper_tokens(self) -> &'static [&'static str] {
        match self {
            Self::Motocross => MOTOCROSS_UPPER,
            Self::Velotierra => VELOTIERRA_UPPER,
        }
    }

    /// Known categories in the order the federation publishes them.
    #[must_use]
    pub const fn category_order(self) -> &'static [&'static str] {
        match self {
            Self::Motocross => MOTOCROSS_ORDER,
            Self::Velotierra => VELOTIERRA_ORDER,
        }
    }

    /// Position of a category label in the published order, ignoring case.
    pub fn category_rank(self, label: &str) -> Option<usize> {
        let lower = label.trim().to_lowercase();
        self.category_order().iter().position(|known| *known == lower)
    }

    /// Sort key placing known categories first, then unknown ones alphabetically.
    pub fn sort_key(self, label: &str) -> (usize, String) {
        (
            self.category_rank(label).unwrap_or(usize::MAX),
            label.to_string(),
        )
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = UnknownDiscipline;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "motocross" | "mx" => Ok(Self::Motocross),
            "velotierra" | "vt" => Ok(Self::Velotierra),
            _ => Err(UnknownDiscipline(s.to_string())),
        }
    }
}

/// Error returned when a discipline name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown discipline: {0} (expected motocross or velotierra)")]
pub struct UnknownDiscipline(String);
