/*
input_errors.rs

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

//! Manage the skip counter and the strike counter.
//!
//! Moving right from the last word of the list is a skip attempt.
//! After [`SKIP_THRESHOLD`] consecutive attempts, the album is skipped if it has a zero star
//! rating. Otherwise, the player gets a strike.
//! Any move in the list resets the skip counter.

use log::debug;
use crate::config::SKIP_THRESHOLD;

/// Skip and strike counters.
#[derive(Debug, Default, Clone)]
pub struct InputErrors {
    /// Consecutive skip attempts.
    skips: usize,

    /// Number of strikes since the controller was created.
    strikes: usize,
}

impl InputErrors {
    /// Create an [`InputErrors`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the skip counter.
    pub fn reset_skips(&mut self) {
        self.skips = 0;
    }

    /// Count a skip attempt and return whether the threshold is reached.
    ///
    /// The counter is reset when the threshold is reached.
    pub fn add_skip(&mut self) -> bool {
        self.skips += 1;
        debug!("Skip attempt {}/{SKIP_THRESHOLD}", self.skips);
        if self.skips < SKIP_THRESHOLD {
            return false;
        }
        self.skips = 0;
        true
    }

    /// Return the number of consecutive skip attempts.
    pub fn get_skips(&self) -> usize {
        self.skips
    }

    /// Count a strike. The skip counter is reset.
    pub fn add_strike(&mut self) {
        self.strikes += 1;
        self.skips = 0;
        debug!("Strike count + 1 = {}", self.strikes);
    }

    /// Return the number of strikes.
    pub fn get_strikes(&self) -> usize {
        self.strikes
    }
}
