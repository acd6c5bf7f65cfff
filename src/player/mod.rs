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

//! Read-only access to the media player's library.
//!
//! The exporter never talks to a particular player directly. It walks the
//! player's object model through the traits in this module:
//!
//! * [`MediaPlayer`] - the attached application, exposing its sources.
//! * [`LibrarySource`] - the local library or an attached device.
//! * [`Playlist`] - a named, ordered collection of tracks.
//! * [`Track`] - a single media item and its metadata.
//!
//! Names and kinds of sources and playlists are captured when the collection
//! is enumerated. Collections and track properties are read on demand and may
//! fail, mirroring an automation bridge where every call crosses into the
//! running application.
//!
//! None of these operations mutate player state.

pub(crate) mod snapshot;

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::model::{SourceKind, TrackMetadata};

#[derive(Debug, Error)]
pub(crate) enum PlayerError {
    #[error("No media player automation bridge is configured")]
    NoBridge,

    #[error("Failed to open player snapshot {}", path.display())]
    SnapshotUnreadable {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    #[error("Malformed player snapshot {}", path.display())]
    SnapshotMalformed {
        path: PathBuf,
        #[source]
        cause: serde_json::Error,
    },

    /// A collection or property could not be read from the player.
    #[error("Failed to read {what}: {reason}")]
    Unreadable { what: &'static str, reason: String },
}

/// A handle to the running media player.
pub(crate) trait MediaPlayer {
    type Source: LibrarySource;

    /// Enumerates every source currently known to the player, in the order
    /// the player reports them.
    fn sources(&self) -> Result<Vec<Self::Source>, PlayerError>;
}

pub(crate) trait LibrarySource {
    type Playlist: Playlist;

    fn name(&self) -> &str;

    fn kind(&self) -> SourceKind;

    fn playlists(&self) -> Result<Vec<Self::Playlist>, PlayerError>;
}

pub(crate) trait Playlist {
    type Track: Track;

    fn name(&self) -> &str;

    fn tracks(&self) -> Result<Vec<Self::Track>, PlayerError>;
}

pub(crate) trait Track {
    /// The free-text media type of the track, e.g. `"MPEG audio file"`.
    fn kind_as_string(&self) -> Result<String, PlayerError>;

    /// Reads every exported metadata property of the track.
    fn metadata(&self) -> Result<TrackMetadata, PlayerError>;
}
