/*
player_input.rs

Copyright 2025 Hervé Quatremain

This file is part of Discography.

Discography is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Discography is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Discography. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Scripted player input.
//!
//! A command is a string in the `input <actions>` format, where `input` can be shortened to `i`
//! or `in`, and `<actions>` is a sequence of `l` (move left), `r` (move right), and `s` (submit)
//! letters. Case is ignored.
//!
//! ```text
//! input rrrs
//! ```

use log::debug;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

use crate::controller::{Action, Controller, Signal};
use crate::error::{CommandError, GenerationError};

static COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:i|in|input)\s+([lrs]+)\s*$").expect("Invalid command regex")
});

/// Parse a command and return its actions.
///
/// # Errors
///
/// Return an error if the command does not have the expected format.
pub fn parse_command(command: &str) -> Result<Vec<Action>, CommandError> {
    let caps = COMMAND
        .captures(command)
        .ok_or_else(|| CommandError::Syntax(command.to_string()))?;
    Ok(caps[1]
        .chars()
        .filter_map(|c| match c.to_ascii_lowercase() {
            'l' => Some(Action::Left),
            'r' => Some(Action::Right),
            's' => Some(Action::Submit),
            _ => None,
        })
        .collect())
}

/// Apply the actions one after the other, waiting `pacing` between two actions.
///
/// `on_signal` is called after each action, so that the host can refresh the display.
/// Processing stops at the first strike.
/// Return the signals of the actions that were applied.
///
/// # Errors
///
/// Return an error if a skipped album cannot be replaced.
pub fn run_actions<R, F>(
    controller: &mut Controller<R>,
    actions: &[Action],
    pacing: Duration,
    mut on_signal: F,
) -> Result<Vec<Signal>, GenerationError>
where
    R: Rng,
    F: FnMut(&Controller<R>, &Signal),
{
    let mut signals: Vec<Signal> = Vec::with_capacity(actions.len());
    for (i, action) in actions.iter().enumerate() {
        if i > 0 && !pacing.is_zero() {
            thread::sleep(pacing);
        }
        let signal: Signal = controller.apply(*action)?;
        debug!("{action:?} -> {signal:?}");
        on_signal(controller, &signal);
        let strike: bool = signal.is_strike();
        signals.push(signal);
        if strike {
            break;
        }
    }
    Ok(signals)
}
