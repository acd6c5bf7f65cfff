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

//! Domain models and core data structures.
//!
//! This module defines the entities read from the media player, sources and
//! track metadata, and the rules deciding which of them are exported.

use jiff::civil::DateTime;
use serde::Deserialize;

/// Name of the playlist whose tracks are exported from each source.
pub(crate) const MUSIC_PLAYLIST: &str = "Music";

/// Track kinds that are never exported.
pub(crate) const EXCLUDED_KINDS: [&str; 2] = ["QuickTime movie file", "PDF document"];

/// The kind of a music-holding location exposed by the player.
#[derive(Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum SourceKind {
    Library,
    /// An attached portable device.
    Device,
    AudioCd,
    Mp3Cd,
    RadioTuner,
    SharedLibrary,
    /// Any kind not listed above.
    #[serde(other)]
    Unknown,
}

impl SourceKind {
    /// Only the local library and attached devices carry exportable tracks.
    pub(crate) fn is_exported(self) -> bool {
        matches!(self, SourceKind::Library | SourceKind::Device)
    }
}

/// The metadata of a single track, as read from the player.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct TrackMetadata {
    pub(crate) name: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    pub(crate) compilation: bool,
    pub(crate) date_added: Option<DateTime>,
    pub(crate) disc_count: i64,
    pub(crate) disc_number: i64,
    pub(crate) genre: String,
    #[serde(rename = "kindAsString")]
    pub(crate) kind: String,
    pub(crate) played_count: i64,
    pub(crate) played_date: Option<DateTime>,
    /// Rating in the range `0..=100`.
    pub(crate) rating: i64,
    /// Display duration, e.g. `"3:45"`.
    pub(crate) time: String,
    pub(crate) track_count: i64,
    pub(crate) track_number: i64,
    pub(crate) year: i64,
}

/// Returns `true` if a track of the given kind should be written out.
pub(crate) fn is_exported_kind(kind: &str) -> bool {
    !EXCLUDED_KINDS.contains(&kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_kinds_are_matched_exactly() {
        assert!(!is_exported_kind("QuickTime movie file"));
        assert!(!is_exported_kind("PDF document"));

        assert!(is_exported_kind("MPEG audio file"));
        assert!(is_exported_kind("pdf document"));
        assert!(is_exported_kind("PDF document "));
        assert!(is_exported_kind(""));
    }

    #[test]
    fn only_library_and_device_sources_are_exported() {
        assert!(SourceKind::Library.is_exported());
        assert!(SourceKind::Device.is_exported());

        for kind in [
            SourceKind::AudioCd,
            SourceKind::Mp3Cd,
            SourceKind::RadioTuner,
            SourceKind::SharedLibrary,
            SourceKind::Unknown,
        ] {
            assert!(!kind.is_exported(), "{kind:?}");
        }
    }
}
