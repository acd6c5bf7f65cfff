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

//! # iTunes Music Export.
//!
//! Copies the track metadata of a media player's library into a SQLite
//! database.
//!
//! Every run replaces the `iTunesLibrary` table with the contents of the
//! "Music" playlist of the local library and of each attached device, each
//! row tagged with the name of the source it came from.
//!
//! ## Usage
//!
//! ```text
//! itunes-music-export [<database file> <source name>]
//! ```
//!
//! The two arguments are only recognised together. A database file of `null`
//! keeps the configured file, an empty source name exports all sources.
//!
//! ## Architecture
//!
//! The export is a strictly sequential pipeline, see [`export`]. Progress and
//! failures are printed to the console, diagnostic detail is logged and can be
//! enabled with `RUST_LOG=debug`. The process exit status does not reflect the
//! outcome of the export.

mod config;
mod db;
mod error;
mod export;
mod model;
mod player;
mod util;

use std::env;

use anyhow::Result;
use log::{info, warn};

use crate::config::Settings;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let config = config::load_config();

    let args: Vec<String> = env::args().skip(1).collect();
    let settings = Settings::from_args(&config, &args);

    info!(
        "Exporting to {} from {}",
        settings.database_file.display(),
        settings.single_source.as_deref().unwrap_or("all sources")
    );

    let connect = || player::snapshot::connect(config.player_snapshot.as_deref());
    if let Err(e) = export::run(&settings, connect) {
        e.report();
    }

    println!("Processing finished. Press any key to quit.");

    if config.wait_for_keypress
        && let Err(e) = util::term::wait_for_keypress()
    {
        warn!("{e:#}");
    }

    Ok(())
}
