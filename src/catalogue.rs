/*
catalogue.rs

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

//! Catalogue of albums the puzzles are drawn from.
//!
//! The catalogue is pure data: a list of [`album::Album`] objects, each with its songs in track
//! order, and for each song the list of words that appear in no other song of the album.
//! It is loaded once, from one JSON document per album (see [`loader`]), and never modified.
//!
//! The [`lyrics`] module builds these documents from lyrics files.

pub mod album;
pub mod loader;
pub mod lyrics;

use std::path::Path;

use crate::error::CatalogueError;
use album::Album;

/// Immutable list of albums.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    albums: Vec<Album>,
}

impl Catalogue {
    /// Create a [`Catalogue`] object from already loaded albums.
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// Load all the album documents from the given directory.
    ///
    /// # Errors
    ///
    /// Any unreadable or malformed document is fatal.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogueError> {
        Ok(Self::new(loader::load_dir(dir)?))
    }

    /// Return the albums.
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Get the number of albums.
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// Whether the catalogue has no album.
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Look up an album by artist and title, ignoring case on both fields.
    pub fn find(&self, artist: &str, title: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.matches(artist, title))
    }

    /// Return the artwork identifier of every album, in catalogue order.
    pub fn artworks(&self) -> Vec<String> {
        self.albums.iter().map(Album::artwork).collect()
    }
}
