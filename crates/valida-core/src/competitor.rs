//! Competitor entries read from primary tables, with league/brand synonyms.

use std::collections::HashMap;

use crate::table::NormalizedTable;

const LEAGUE_SYNONYMS: &[(&str, &str)] = &[
    ("ANTIOQUIA", "Antioquia"),
    ("VALLE", "Valle del Cauca"),
    ("VALLE DEL CAUCA", "Valle del Cauca"),
];

const BRAND_SYNONYMS: &[(&str, &str)] = &[
    ("YAMAHA", "Yamaha"),
    ("HONDA", "Honda"),
    ("KAWASAKI", "Kawasaki"),
    ("SUZUKI", "Suzuki"),
    ("HUSQVARNA", "Husqvarna"),
    ("KTM", "KTM"),
];

/// One competitor row of a primary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorEntry {
    pub number: String,
    pub name: String,
    pub league: String,
    pub club: String,
    pub brand: String,
}

/// Canonical spellings for league and brand values.
///
/// Lookup keys are upper-case; values that match no key pass through trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synonyms {
    leagues: HashMap<String, String>,
    brands: HashMap<String, String>,
}

impl Default for Synonyms {
    fn default() -> Self {
        Self {
            leagues: synonym_table(LEAGUE_SYNONYMS),
            brands: synonym_table(BRAND_SYNONYMS),
        }
    }
}

impl Synonyms {
    /// Adds or replaces a league alias.
    #[must_use]
    pub fn with_league(mut self, alias: &str, canonical: &str) -> Self {
        self.leagues
            .insert(alias.trim().to_uppercase(), canonical.trim().to_string());
        self
    }

    /// Adds or replaces a brand alias.
    #[must_use]
    pub fn with_brand(mut self, alias: &str, canonical: &str) -> Self {
        self.brands
            .insert(alias.trim().to_uppercase(), canonical.trim().to_string());
        self
    }

    pub fn league(&self, raw: &str) -> String {
        canonicalize(&self.leagues, raw)
    }

    pub fn brand(&self, raw: &str) -> String {
        canonicalize(&self.brands, raw)
    }
}

fn synonym_table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(alias, canonical)| ((*alias).to_string(), (*canonical).to_string()))
        .collect()
}

fn canonicalize(table: &HashMap<String, String>, raw: &str) -> String {
    let trimmed = raw.trim();
    table
        .get(&trimmed.to_uppercase())
        .cloned()
        .unwrap_or_else(|| trimmed.to_string())
}

/// Reads competitor entries from a table, in ranking order.
///
/// Tables without a competitor-number column yield nothing.
pub fn competitors(table: &NormalizedTable, synonyms: &Synonyms) -> Vec<CompetitorEntry> {
    if table.columns.number.is_none() {
        return Vec::new();
    }
    let columns = table.columns;
    (0..table.len())
        .map(|row| CompetitorEntry {
            number: table.number(row).to_string(),
            name: table.name(row).to_string(),
            league: synonyms.league(table.field(row, columns.league)),
            club: table.field(row, columns.club).to_string(),
            brand: synonyms.brand(table.field(row, columns.brand)),
        })
        .collect()
}
