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

//! Terminal interaction utilities.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};

/// Blocks until a key is pressed.
///
/// Raw mode is enabled for the duration of the wait so that any single key
/// press is delivered, not just a completed line. Raw mode is always disabled
/// again before returning, even if reading the event fails.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed or if raw mode cannot be
/// enabled, e.g. when stdin is not a terminal.
pub(crate) fn wait_for_keypress() -> Result<()> {
    io::stdout().flush().context("Failed to flush stdout")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = read_key_press();
    disable_raw_mode().ok();

    res
}

fn read_key_press() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read().context("Failed to read terminal event")?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}
