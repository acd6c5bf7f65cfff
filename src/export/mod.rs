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

//! The export pipeline.
//!
//! A run is a fixed sequence of steps, each of which must succeed before the
//! next one starts:
//!
//! 1. [`verify_database_file`] - probe that the database is writable.
//! 2. [`connect_to_player`] - attach to the media player.
//! 3. [`get_source_listing`] - enumerate the player's sources.
//! 4. [`setup_tracks_table`] - drop and recreate the export table.
//! 5. [`export_source`] - copy the "Music" playlist of every selected source.
//!
//! The first four steps are fail-fast, their error ends the run. The last step
//! is isolated per source: a source that fails is reported and the remaining
//! sources are still exported.
//!
//! Steps do not share a connection or a transaction. Each playlist is written
//! in its own transaction, which is rolled back if any of its tracks cannot be
//! read or written.

use log::{debug, info};

use crate::{
    config::Settings,
    db,
    error::ExportError,
    model::{MUSIC_PLAYLIST, is_exported_kind},
    player::{LibrarySource, MediaPlayer, Playlist, PlayerError, Track},
};

/// Outcome of a run that got past the fail-fast steps.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct ExportSummary {
    pub(crate) sources_exported: usize,
    pub(crate) tracks_written: usize,
    /// Names of the sources whose export failed.
    pub(crate) failed_sources: Vec<String>,
}

/// Runs the whole export.
///
/// `connect` attaches to the media player, it is only invoked once the
/// database has been verified.
///
/// # Errors
///
/// Returns the error of the first fail-fast step that failed. Per-source
/// failures are reported as they happen and collected in the summary.
pub(crate) fn run<P, F>(settings: &Settings, connect: F) -> Result<ExportSummary, ExportError>
where
    P: MediaPlayer,
    F: FnOnce() -> Result<P, PlayerError>,
{
    verify_database_file(settings)?;
    let player = connect_to_player(connect)?;
    let sources = get_source_listing(&player)?;
    setup_tracks_table(settings)?;

    let mut summary = ExportSummary::default();

    for source in sources
        .iter()
        .filter(|source| settings.selects_source(source.name()))
    {
        match export_source(settings, source) {
            Ok(written) => {
                summary.sources_exported += 1;
                summary.tracks_written += written;
            }
            Err(e) => {
                e.report();
                summary.failed_sources.push(source.name().to_string());
            }
        }
    }

    info!(
        "Exported {} track(s) from {} source(s), {} source(s) failed",
        summary.tracks_written,
        summary.sources_exported,
        summary.failed_sources.len()
    );

    Ok(summary)
}

pub(crate) fn verify_database_file(settings: &Settings) -> Result<(), ExportError> {
    db::probe_storage(&settings.database_file).map_err(ExportError::StorageUnavailable)
}

pub(crate) fn connect_to_player<P, F>(connect: F) -> Result<P, ExportError>
where
    P: MediaPlayer,
    F: FnOnce() -> Result<P, PlayerError>,
{
    connect().map_err(ExportError::PlayerUnreachable)
}

/// Reads the player's sources, failing if there are none.
pub(crate) fn get_source_listing<P: MediaPlayer>(player: &P) -> Result<Vec<P::Source>, ExportError> {
    let sources = player.sources().map_err(ExportError::SourceListingFailed)?;

    if sources.is_empty() {
        return Err(ExportError::NoSourcesFound);
    }

    debug!("Found {} source(s)", sources.len());

    Ok(sources)
}

pub(crate) fn setup_tracks_table(settings: &Settings) -> Result<(), ExportError> {
    db::create_tracks_table(&settings.database_file).map_err(ExportError::SchemaSetupFailed)?;

    debug!("Recreated table {}", db::TRACKS_TABLE);

    Ok(())
}

/// Exports every playlist named "Music" of a single source.
///
/// Sources other than the local library and attached devices are skipped
/// without error. Several "Music" playlists in one source are each written in
/// their own transaction, appending to the rows already written.
///
/// # Returns
///
/// The number of rows written for the source.
///
/// # Errors
///
/// Returns [`ExportError::SourceReadFailed`] if the player fails to provide a
/// playlist or track property, or [`ExportError::WriteFailed`] if the database
/// rejects a write. Rows of the playlist being written are rolled back, rows
/// of playlists written earlier are kept.
pub(crate) fn export_source<S: LibrarySource>(
    settings: &Settings,
    source: &S,
) -> Result<usize, ExportError> {
    if !source.kind().is_exported() {
        debug!("Skipping source {} of kind {:?}", source.name(), source.kind());
        return Ok(0);
    }

    let read_failed = |cause: PlayerError| ExportError::SourceReadFailed {
        name: source.name().to_string(),
        cause,
    };

    let playlists = source.playlists().map_err(read_failed)?;

    let mut written = 0;

    for playlist in playlists
        .iter()
        .filter(|playlist| playlist.name() == MUSIC_PLAYLIST)
    {
        let tracks = playlist.tracks().map_err(read_failed)?;
        if tracks.is_empty() {
            continue;
        }

        written += write_tracks(settings, &tracks, source.name())?;

        println!("{} tracks written.", source.name());
    }

    Ok(written)
}

/// Writes the given tracks in a single transaction.
fn write_tracks<T: Track>(
    settings: &Settings,
    tracks: &[T],
    source_name: &str,
) -> Result<usize, ExportError> {
    let read_failed = |cause: PlayerError| ExportError::SourceReadFailed {
        name: source_name.to_string(),
        cause,
    };

    let mut conn = db::open(&settings.database_file).map_err(ExportError::WriteFailed)?;
    let tx = conn.transaction().map_err(ExportError::WriteFailed)?;

    let mut written = 0;

    for track in tracks {
        let kind = track.kind_as_string().map_err(read_failed)?;
        if !is_exported_kind(&kind) {
            debug!("Skipping track of kind {kind}");
            continue;
        }

        let metadata = track.metadata().map_err(read_failed)?;
        db::insert_track(&tx, &metadata, source_name).map_err(ExportError::WriteFailed)?;
        written += 1;
    }

    tx.commit().map_err(ExportError::WriteFailed)?;

    debug!("Wrote {written} of {} track(s) for {source_name}", tracks.len());

    Ok(written)
}
