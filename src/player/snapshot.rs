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

//! Player bridge backed by a JSON snapshot of the player's object model.
//!
//! The snapshot mirrors the automation object model one to one:
//!
//! ```json
//! {
//!   "sources": [
//!     {
//!       "name": "Library",
//!       "kind": "Library",
//!       "playlists": [
//!         {
//!           "name": "Music",
//!           "tracks": [
//!             { "name": "Song", "kindAsString": "MPEG audio file", "time": "3:45" }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Missing track properties take their default value. Tracks are kept as raw
//! JSON and only read on demand, so a malformed track fails the read of its
//! own source instead of the whole snapshot.

use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::{SourceKind, TrackMetadata},
    player::{LibrarySource, MediaPlayer, Playlist, PlayerError, Track},
};

const KIND_PROPERTY: &str = "kindAsString";

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct Snapshot {
    pub(crate) sources: Vec<SnapshotSource>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct SnapshotSource {
    pub(crate) name: String,
    pub(crate) kind: SourceKind,
    #[serde(default)]
    pub(crate) playlists: Vec<SnapshotPlaylist>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct SnapshotPlaylist {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) tracks: Vec<SnapshotTrack>,
}

/// A track as recorded in the snapshot, read property by property.
#[derive(Deserialize, Debug, Clone)]
#[serde(transparent)]
pub(crate) struct SnapshotTrack(pub(crate) Value);

/// Attaches to the player through a snapshot file.
///
/// # Errors
///
/// Returns [`PlayerError::NoBridge`] if no snapshot is configured, otherwise
/// an error if the file cannot be opened or is not a valid snapshot.
pub(crate) fn connect(path: Option<&Path>) -> Result<Snapshot, PlayerError> {
    let path = path.ok_or(PlayerError::NoBridge)?;

    let file = File::open(path).map_err(|cause| PlayerError::SnapshotUnreadable {
        path: path.to_path_buf(),
        cause,
    })?;

    let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|cause| {
        PlayerError::SnapshotMalformed {
            path: path.to_path_buf(),
            cause,
        }
    })?;

    log::debug!(
        "Attached to player snapshot {} with {} source(s)",
        path.display(),
        snapshot.sources.len()
    );

    Ok(snapshot)
}

impl MediaPlayer for Snapshot {
    type Source = SnapshotSource;

    fn sources(&self) -> Result<Vec<SnapshotSource>, PlayerError> {
        Ok(self.sources.clone())
    }
}

impl LibrarySource for SnapshotSource {
    type Playlist = SnapshotPlaylist;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn playlists(&self) -> Result<Vec<SnapshotPlaylist>, PlayerError> {
        Ok(self.playlists.clone())
    }
}

impl Playlist for SnapshotPlaylist {
    type Track = SnapshotTrack;

    fn name(&self) -> &str {
        &self.name
    }

    fn tracks(&self) -> Result<Vec<SnapshotTrack>, PlayerError> {
        Ok(self.tracks.clone())
    }
}

impl Track for SnapshotTrack {
    fn kind_as_string(&self) -> Result<String, PlayerError> {
        match self.0.get(KIND_PROPERTY) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(kind)) => Ok(kind.clone()),
            Some(other) => Err(PlayerError::Unreadable {
                what: "track property kindAsString",
                reason: format!("expected a string, found {other}"),
            }),
        }
    }

    fn metadata(&self) -> Result<TrackMetadata, PlayerError> {
        TrackMetadata::deserialize(&self.0).map_err(|e| PlayerError::Unreadable {
            what: "track properties",
            reason: e.to_string(),
        })
    }
}
