/*
offset.rs

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

//! Derive the step count between the starting song and the target song.

use crate::error::GenerationError;

/// Return the first ASCII letter of the seed identifier.
///
/// # Errors
///
/// The identifier must contain at least one letter.
pub fn seed_letter(identifier: &str) -> Result<char, GenerationError> {
    identifier
        .chars()
        .find(char::is_ascii_alphabetic)
        .ok_or_else(|| GenerationError::NoSeedLetter(identifier.to_string()))
}

/// Derive the signed offset from the seed letter.
///
/// The magnitude is the position of the letter in the alphabet (`A` is 1, `Z` is 26), ignoring
/// case. The offset is negative for explicit albums.
///
/// # Errors
///
/// The seed must be an ASCII letter.
pub fn derive_offset(letter: char, is_explicit: bool) -> Result<i32, GenerationError> {
    if !letter.is_ascii_alphabetic() {
        return Err(GenerationError::NoSeedLetter(letter.to_string()));
    }
    let magnitude: i32 = i32::from(letter.to_ascii_uppercase() as u8 - b'A') + 1;
    Ok(if is_explicit { -magnitude } else { magnitude })
}
