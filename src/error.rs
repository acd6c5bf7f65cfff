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

//! Export pipeline failures.
//!
//! Every step of the export maps its failure onto exactly one variant. The
//! display text is the line printed to the console, the underlying cause is
//! available through [`std::error::Error::source`].

use thiserror::Error;

use crate::player::PlayerError;

#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("Unable to create and drop a test table.")]
    StorageUnavailable(#[source] rusqlite::Error),

    #[error("Unable to connect to the media player.")]
    PlayerUnreachable(#[source] PlayerError),

    #[error("There are no sources available.")]
    NoSourcesFound,

    #[error("Unable to get a listing of sources from the media player.")]
    SourceListingFailed(#[source] PlayerError),

    #[error("Unable to create tracks table.")]
    SchemaSetupFailed(#[source] rusqlite::Error),

    #[error("Unable to get a track listing for source {name}.")]
    SourceReadFailed {
        name: String,
        #[source]
        cause: PlayerError,
    },

    #[error("Unable to write tracks.")]
    WriteFailed(#[source] rusqlite::Error),
}

impl ExportError {
    /// Prints the failure the way every step reports it: the failure itself
    /// followed by the underlying error message, if any.
    pub(crate) fn report(&self) {
        println!("{self}");
        if let Some(cause) = std::error::Error::source(self) {
            println!("Error message: {cause}");
        }
    }
}
