use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::AcronymError;
use crate::search::SearchOptions;

/// User configuration loaded from `~/.config/acronym/config.toml`.
///
/// All fields have sensible defaults so the config file is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub dictionary_path: Option<PathBuf>,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_true")]
    pub include_compounds: bool,
    #[serde(default = "default_true")]
    pub include_near_matches: bool,
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
    #[serde(default = "default_compound_pool_size")]
    pub compound_pool_size: usize,
    #[serde(default = "default_min_component_length")]
    pub min_component_length: usize,
}

fn default_min_length() -> usize {
    3
}

fn default_max_results() -> usize {
    50
}

fn default_true() -> bool {
    true
}

fn default_max_edit_distance() -> usize {
    2
}

fn default_compound_pool_size() -> usize {
    80
}

fn default_min_component_length() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            min_length: default_min_length(),
            max_results: default_max_results(),
            include_compounds: true,
            include_near_matches: true,
            max_edit_distance: default_max_edit_distance(),
            compound_pool_size: default_compound_pool_size(),
            min_component_length: default_min_component_length(),
        }
    }
}

impl Config {
    pub fn load() -> color_eyre::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                Ok(Self::parse(&content)?)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Self, AcronymError> {
        toml::from_str(content).map_err(|e| AcronymError::ConfigRead(Box::new(e)))
    }

    /// `None` when the platform has no notion of a home directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "acronym").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Search options seeded from this config; the search term starts empty.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            min_length: self.min_length,
            max_results: self.max_results,
            search_term: String::new(),
            include_compounds: self.include_compounds,
            include_near_matches: self.include_near_matches,
            max_edit_distance: self.max_edit_distance,
            compound_pool_size: self.compound_pool_size,
            min_component_length: self.min_component_length,
        }
    }
}
