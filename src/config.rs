/*
config.rs

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

//! Build-time settings.

use std::time::Duration;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Number of consecutive attempts to move past the last word before the album is skipped.
pub const SKIP_THRESHOLD: usize = 3;

/// Minimum number of song occurrences in an ordered sequence (rating 0 excepted).
pub const MIN_SEQUENCE_LENGTH: usize = 10;

/// Highest album rating (number of stars).
pub const MAX_RATING: u8 = 5;

/// Number of generation attempts before the controller gives up.
/// Each attempt re-rolls the rating, the explicit flag, and the album.
pub const MAX_GENERATION_ATTEMPTS: usize = 1000;

/// Delay between two actions of a scripted command.
pub const COMMAND_PACING: Duration = Duration::from_millis(500);

/// How long the first frame of the scrolling display stays still.
pub const SCROLL_HOLD: Duration = Duration::from_secs(1);

/// Delay between two frames of the scrolling display.
pub const SCROLL_INTERVAL: Duration = Duration::from_millis(150);

/// Number of blank characters between two copies of the scrolling word.
pub const SCROLL_GAP: usize = 3;
