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

//! Data access layer.
//!
//! This module handles all interactions with the SQLite export database.
//!
//! # Tables
//!
//! * `iTunesLibrary` - One row per exported track, tagged with the name of the
//!   source it was read from. Dropped and recreated on every run.
//! * `TestTable` - Throwaway table used only to probe write access, never left
//!   behind.
//!
//! Every caller opens its own connection with [`open`] and lets it go when
//! done, no connection outlives a single pipeline step.

pub(crate) mod model;

use std::{fs, path::Path};

use rusqlite::{Connection, OpenFlags, Result, params};

use crate::{db::model::SqlTimestamp, model::TrackMetadata};

pub(crate) const TRACKS_TABLE: &str = "iTunesLibrary";

pub(crate) const PROBE_TABLE: &str = "TestTable";

/// Opens a connection to the SQLite database, creating the file if absent.
///
/// A file marked read-only on disk is opened without write access, so any
/// statement that modifies it fails with `SQLITE_READONLY`.
///
/// # Errors
///
/// Returns a [`rusqlite::Error`] if the file cannot be opened or created.
pub(crate) fn open(path: &Path) -> Result<Connection> {
    let read_only = fs::metadata(path).is_ok_and(|m| m.permissions().readonly());

    if read_only {
        log::debug!("Opening read-only database {}", path.display());
        return Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        );
    }

    log::debug!("Opening database {}", path.display());
    Connection::open(path)
}

/// Confirms the database at `path` is writable.
///
/// A throwaway table is created and immediately dropped again, so a
/// successful probe leaves the database as it found it.
///
/// # Errors
///
/// Returns a [`rusqlite::Error`] if the database cannot be opened or either
/// statement fails, e.g. because the location is read-only.
pub(crate) fn probe_storage(path: &Path) -> Result<()> {
    let conn = open(path)?;

    conn.execute(
        &format!("CREATE TABLE IF NOT EXISTS {PROBE_TABLE} (id INTEGER PRIMARY KEY, string TEXT)"),
        [],
    )?;
    conn.execute(&format!("DROP TABLE IF EXISTS {PROBE_TABLE}"), [])?;

    log::debug!("Test table created and dropped");

    Ok(())
}

/// Drops and recreates the export table.
///
/// Always leaves an empty table with the fixed column set, regardless of what
/// was there before. Any rows from a previous run are lost.
///
/// # Errors
///
/// Returns a [`rusqlite::Error`] if the database cannot be opened or the
/// schema statements fail.
pub(crate) fn create_tracks_table(path: &Path) -> Result<()> {
    let conn = open(path)?;

    conn.execute_batch(
        "
        DROP TABLE IF EXISTS iTunesLibrary;

        CREATE TABLE IF NOT EXISTS iTunesLibrary (
            id INTEGER PRIMARY KEY,
            Name TEXT,
            Album TEXT,
            Artist TEXT,
            Compilation TEXT,
            DateAdded TEXT,
            DiscCount INTEGER,
            DiscNumber INTEGER,
            Genre TEXT,
            Kind TEXT,
            PlayedCount INTEGER,
            PlayedDate TEXT,
            Rating INTEGER,
            Time TEXT,
            TrackCount INTEGER,
            TrackNumber INTEGER,
            Year INTEGER,
            Source TEXT
        );",
    )
}

/// Inserts a single track row tagged with `source_name`.
///
/// Intended to be called on an open [`rusqlite::Transaction`], the statement
/// is cached so repeated inserts only parse the SQL once.
///
/// # Errors
///
/// Returns a [`rusqlite::Error`] if the insert fails.
pub(crate) fn insert_track(
    conn: &Connection,
    track: &TrackMetadata,
    source_name: &str,
) -> Result<()> {
    let sql = "
        INSERT INTO iTunesLibrary (
            Name, Album, Artist, Compilation, DateAdded, DiscCount, DiscNumber, Genre, Kind,
            PlayedCount, PlayedDate, Rating, Time, TrackCount, TrackNumber, Year, Source
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

    let mut stmt = conn.prepare_cached(sql)?;
    stmt.execute(params![
        track.name,
        track.album,
        track.artist,
        track.compilation,
        track.date_added.map(SqlTimestamp),
        track.disc_count,
        track.disc_number,
        track.genre,
        track.kind,
        track.played_count,
        track.played_date.map(SqlTimestamp),
        track.rating,
        track.time,
        track.track_count,
        track.track_number,
        track.year,
        source_name,
    ])?;

    Ok(())
}
