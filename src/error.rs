/*
error.rs

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

//! Error types.
//!
//! Only the errors that stop the caller are represented here.
//! Album lookup misses and exhausted pair searches are recovered inside
//! [`crate::controller::Controller::generate`], and wrong submissions are reported as
//! [`crate::controller::Strike`] signals.

use std::path::PathBuf;

use thiserror::Error;

/// Errors while loading or building the catalogue. They are fatal: no catalogue, no puzzle.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed album document {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No album document found in {0:?}")]
    Empty(PathBuf),

    #[error("Album {artist} - {title} has no songs")]
    InvalidAlbum { artist: String, title: String },
}

/// Errors that prevent the controller from producing a puzzle.
#[derive(Error, Debug, PartialEq)]
pub enum GenerationError {
    #[error("The catalogue is empty")]
    EmptyCatalogue,

    #[error("No artwork to pick an album from")]
    NoArtwork,

    #[error("No letter in the seed identifier {0:?}")]
    NoSeedLetter(String),

    #[error("No valid puzzle after {0} attempts")]
    AttemptsExhausted(usize),
}

/// Errors in the scripted command interface.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unrecognized command {0:?}, expected `input <l|r|s...>`")]
    Syntax(String),
}
