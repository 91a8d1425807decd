//! Participation statistics folded over every category's primary table.
//!
//! Competitor identity is the race number: two names under one number count
//! as a single competitor.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::category::Category;
use crate::competitor::{Synonyms, competitors};

/// Aggregate counts for one event. Maps are keyed in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Rows across all primary tables.
    #[serde(rename = "participaciones_totales")]
    pub participations: usize,
    /// Distinct competitor numbers across all primary tables.
    #[serde(rename = "pilotos_unicos")]
    pub unique_competitors: usize,
    #[serde(rename = "pilotos_por_liga")]
    pub competitors_by_league: BTreeMap<String, usize>,
    #[serde(rename = "pilotos_por_club")]
    pub competitors_by_club: BTreeMap<String, usize>,
    #[serde(rename = "inscripciones_por_marca")]
    pub competitors_by_brand: BTreeMap<String, usize>,
    #[serde(rename = "participaciones_por_categoria")]
    pub participations_by_category: BTreeMap<String, usize>,
    #[serde(rename = "pilotos_por_categoria_unicos")]
    pub unique_by_category: BTreeMap<String, usize>,
}

impl StatsSnapshot {
    /// Folds the primary table of each category into one snapshot.
    ///
    /// Categories whose primary table has no competitor-number column are
    /// left out entirely.
    pub fn from_categories(categories: &[Category], synonyms: &Synonyms) -> Self {
        let mut stats = Self::default();
        let mut numbers: BTreeSet<&str> = BTreeSet::new();
        let mut by_league: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut by_club: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut by_brand: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for category in categories {
            let table = &category.primary().table;
            if table.columns.number.is_none() {
                tracing::debug!(category = %category.label(), "primary table has no number column");
                continue;
            }

            let entries = competitors(table, synonyms);
            if entries.is_empty() {
                tracing::debug!(category = %category.label(), "primary table has no rows");
                continue;
            }
            let mut category_numbers = BTreeSet::new();
            for entry in &entries {
                category_numbers.insert(entry.number.as_str());
                insert_non_empty(&mut by_league, &entry.league, &entry.number);
                insert_non_empty(&mut by_club, &entry.club, &entry.number);
                insert_non_empty(&mut by_brand, &entry.brand, &entry.number);
            }
            for row in 0..table.len() {
                numbers.insert(table.number(row));
            }

            stats.participations += entries.len();
            stats
                .participations_by_category
                .insert(category.label().to_string(), entries.len());
            stats
                .unique_by_category
                .insert(category.label().to_string(), category_numbers.len());
        }

        stats.unique_competitors = numbers.len();
        stats.competitors_by_league = counts(by_league);
        stats.competitors_by_club = counts(by_club);
        stats.competitors_by_brand = counts(by_brand);
        stats
    }
}

fn insert_non_empty(map: &mut BTreeMap<String, BTreeSet<String>>, key: &str, number: &str) {
    if !key.is_empty() {
        map.entry(key.to_string())
            .or_default()
            .insert(number.to_string());
    }
}

fn counts(sets: BTreeMap<String, BTreeSet<String>>) -> BTreeMap<String, usize> {
    sets.into_iter().map(|(k, v)| (k, v.len())).collect()
}
