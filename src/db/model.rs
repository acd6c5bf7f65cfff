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

//! Conversions between domain values and SQLite values.

use jiff::civil::DateTime;
use rusqlite::{
    Result, ToSql,
    types::{ToSqlOutput, Value},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A civil timestamp stored as `YYYY-MM-DD HH:MM:SS` text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SqlTimestamp(pub(crate) DateTime);

impl ToSql for SqlTimestamp {
    fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
        let text = self.0.strftime(TIMESTAMP_FORMAT).to_string();
        Ok(ToSqlOutput::Owned(Value::Text(text)))
    }
}

/// A row of the export table, as read back for verification.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExportedTrack {
    pub(crate) name: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    pub(crate) compilation: String,
    pub(crate) date_added: Option<String>,
    pub(crate) disc_count: i64,
    pub(crate) disc_number: i64,
    pub(crate) genre: String,
    pub(crate) kind: String,
    pub(crate) played_count: i64,
    pub(crate) played_date: Option<String>,
    pub(crate) rating: i64,
    pub(crate) time: String,
    pub(crate) track_count: i64,
    pub(crate) track_number: i64,
    pub(crate) year: i64,
    pub(crate) source: String,
}

#[cfg(test)]
impl ExportedTrack {
    pub(crate) fn from_row(row: &rusqlite::Row) -> Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            album: row.get(1)?,
            artist: row.get(2)?,
            compilation: row.get(3)?,
            date_added: row.get(4)?,
            disc_count: row.get(5)?,
            disc_number: row.get(6)?,
            genre: row.get(7)?,
            kind: row.get(8)?,
            played_count: row.get(9)?,
            played_date: row.get(10)?,
            rating: row.get(11)?,
            time: row.get(12)?,
            track_count: row.get(13)?,
            track_number: row.get(14)?,
            year: row.get(15)?,
            source: row.get(16)?,
        })
    }
}
