//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a pilcrow.toml, and if present we load settings from there.
//! This provides the store location, export target, and wrapping width.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from pilcrow.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "pilcrow.json".to_string())]
    /// JSON document holding the section collection.
    pub store_path: String,
    #[facet(default = "help.html".to_string())]
    /// Destination for the `:export` command when no path is given.
    pub export_path: String,
    #[facet(default = 100)]
    /// Maximum line width for editor text wrapping.
    pub wrap_width: usize,
}

impl Config {
    #[must_use]
    /// Load configuration from pilcrow.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("pilcrow.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
