/*
artwork.rs

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

//! Parse album artwork identifiers.
//!
//! Artworks are named after their album: `<artist> - <album title>`, optionally followed by a
//! file extension.

/// File extensions of artwork images and album documents.
const EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "json"];

/// Remove a known file extension from an identifier.
fn strip_extension(identifier: &str) -> &str {
    match identifier.rsplit_once('.') {
        Some((name, ext)) if EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)) => name,
        _ => identifier,
    }
}

/// Split an artwork identifier into the artist and the album title.
///
/// The identifier is split at the first ` - ` separator, or at its first hyphen when there is no
/// such separator. The file extension, if any, is removed first.
/// Return `None` when the identifier has no hyphen.
pub fn parse_artwork(identifier: &str) -> Option<(String, String)> {
    let name: &str = strip_extension(identifier.trim());
    let (artist, title) = name.split_once(" - ").or_else(|| name.split_once('-'))?;
    Some((artist.trim().to_string(), title.trim().to_string()))
}
