//! Configuration loading and management.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use valida_core::{Discipline, Synonyms};

/// Per-event configuration file, looked up in the event directory.
pub const EVENT_CONFIG_FILE: &str = "valida.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the result exports, relative to the event directory.
    pub input_dir: PathBuf,
    /// Statistics document, relative to the event directory.
    pub stats_file: PathBuf,
    /// HTML report, relative to the event directory.
    pub report_file: PathBuf,
    pub discipline: Discipline,
    /// Report heading.
    pub title: String,
    /// Report sub-heading, usually the venue.
    pub subtitle: String,
    /// Relative path to shared site assets; no site scripts are linked when unset.
    pub asset_prefix: Option<String>,
    /// Extra league spellings, alias to canonical name.
    pub league_aliases: BTreeMap<String, String>,
    /// Extra brand spellings, alias to canonical name.
    pub brand_aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("FILES EXPORTED"),
            stats_file: PathBuf::from("datos_informe_valida.json"),
            report_file: PathBuf::from("resultados.html"),
            discipline: Discipline::default(),
            title: "Resultados".to_string(),
            subtitle: String::new(),
            asset_prefix: None,
            league_aliases: BTreeMap::new(),
            brand_aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration for an event directory.
    ///
    /// Layers, later ones winning: defaults, user config, `valida.toml` in the
    /// event directory, the explicit `config_path`, then `VALIDA_*` variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load(event_dir: &Path, config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        figment = figment.merge(Toml::file(event_dir.join(EVENT_CONFIG_FILE)));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("VALIDA_"));

        figment.extract()
    }

    /// League and brand synonyms: built-ins extended by configured aliases.
    pub fn synonyms(&self) -> Synonyms {
        let synonyms = self
            .league_aliases
            .iter()
            .fold(Synonyms::default(), |s, (alias, canonical)| {
                s.with_league(alias, canonical)
            });
        self.brand_aliases
            .iter()
            .fold(synonyms, |s, (alias, canonical)| s.with_brand(alias, canonical))
    }

    pub fn input_path(&self, event_dir: &Path) -> PathBuf {
        event_dir.join(&self.input_dir)
    }

    pub fn stats_path(&self, event_dir: &Path) -> PathBuf {
        event_dir.join(&self.stats_file)
    }

    pub fn report_path(&self, event_dir: &Path) -> PathBuf {
        event_dir.join(&self.report_file)
    }
}

/// Returns the platform-specific config directory for valida.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("valida"))
}
