// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file and combines it
//! with the process arguments into the [`Settings`] used for a single run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "itunes-music-export";

pub(crate) const DEFAULT_DATABASE_FILE: &str = "iTunesMusic.s3db";

/// Placeholder argument that keeps the configured database file.
const KEEP_DATABASE_FILE: &str = "null";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub database_file: String,
    pub player_snapshot: Option<PathBuf>,
    pub wait_for_keypress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            player_snapshot: None,
            wait_for_keypress: true,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        log::warn!("Using default configuration: {e}");
        AppConfig::default()
    })
}

/// Immutable settings for one export run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) database_file: PathBuf,
    /// Restricts the export to the source with exactly this name.
    pub(crate) single_source: Option<String>,
}

impl Settings {
    /// Builds the run settings from the configuration and the process
    /// arguments, excluding the program name.
    ///
    /// Arguments are only honoured as the pair `(database_file, source_name)`,
    /// any other count leaves the configuration untouched. A database file of
    /// `"null"` keeps the configured file, an empty source name selects all
    /// sources.
    pub(crate) fn from_args(config: &AppConfig, args: &[String]) -> Self {
        let mut settings = Self {
            database_file: PathBuf::from(&config.database_file),
            single_source: None,
        };

        if let [database_file, source_name] = args {
            if database_file != KEEP_DATABASE_FILE {
                settings.database_file = PathBuf::from(database_file);
            }
            if !source_name.is_empty() {
                settings.single_source = Some(source_name.clone());
            }
        }

        settings
    }

    /// Returns `true` if the source with the given name takes part in the run.
    pub(crate) fn selects_source(&self, name: &str) -> bool {
        self.single_source.as_deref().is_none_or(|single| single == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn null_and_empty_keep_defaults() {
        let settings = Settings::from_args(&AppConfig::default(), &args(&["null", ""]));

        assert_eq!(settings.database_file, PathBuf::from(DEFAULT_DATABASE_FILE));
        assert_eq!(settings.single_source, None);
        assert!(settings.selects_source("Library"));
        assert!(settings.selects_source("Bob's iPod"));
    }

    #[test]
    fn argument_pair_overrides() {
        let settings =
            Settings::from_args(&AppConfig::default(), &args(&["export.db", "Library"]));

        assert_eq!(settings.database_file, PathBuf::from("export.db"));
        assert_eq!(settings.single_source.as_deref(), Some("Library"));
    }

    #[test]
    fn other_argument_counts_are_ignored() {
        let config = AppConfig {
            database_file: "configured.db".to_string(),
            ..AppConfig::default()
        };

        for values in [
            &[][..],
            &["export.db"][..],
            &["export.db", "Library", "extra"][..],
        ] {
            let settings = Settings::from_args(&config, &args(values));
            assert_eq!(settings.database_file, PathBuf::from("configured.db"));
            assert_eq!(settings.single_source, None);
        }
    }

    #[test]
    fn source_filter_is_exact_and_case_sensitive() {
        let settings = Settings::from_args(&AppConfig::default(), &args(&["null", "Library"]));

        assert!(settings.selects_source("Library"));
        assert!(!settings.selects_source("library"));
        assert!(!settings.selects_source("Library "));
        assert!(!settings.selects_source("Lib"));
    }
}
