/*
loader.rs

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

//! Load and save album documents.
//!
//! Each album is stored in its own JSON document, named after the album artwork:
//! `<artist> - <album title>.json`.
//!
//! ```json
//! {
//!   "artist": "Daft Punk",
//!   "album_title": "Discovery",
//!   "songs": [
//!     { "song_title": "One More Time", "unique_words": ["celebrate", "music"] }
//!   ]
//! }
//! ```

use log::debug;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::album::Album;
use crate::error::CatalogueError;

/// Extension of the album documents.
const EXTENSION: &str = "json";

/// Load one album document.
///
/// # Errors
///
/// Return an error if the file cannot be read, if it is not a valid album document, or if the
/// album has no songs.
pub fn load_album(path: &Path) -> Result<Album, CatalogueError> {
    let file: File = File::open(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader: BufReader<File> = BufReader::new(file);
    let album: Album = serde_json::from_reader(reader).map_err(|source| CatalogueError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if album.songs.is_empty() {
        return Err(CatalogueError::InvalidAlbum {
            artist: album.artist,
            title: album.title,
        });
    }
    debug!(
        "Loaded {} - {} ({} songs) from {path:?}",
        album.artist,
        album.title,
        album.songs.len()
    );
    Ok(album)
}

/// Load all the album documents in a directory, in file name order.
///
/// # Errors
///
/// Return an error if the directory cannot be read, if it has no album document, or if any of
/// the documents cannot be loaded.
pub fn load_dir(dir: &Path) -> Result<Vec<Album>, CatalogueError> {
    let io_error = |source| CatalogueError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path: PathBuf = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == EXTENSION) {
            paths.push(path);
        }
    }
    if paths.is_empty() {
        return Err(CatalogueError::Empty(dir.to_path_buf()));
    }
    paths.sort();
    paths.iter().map(|p| load_album(p)).collect()
}

/// Save an album document in the given directory and return the path to the new file.
pub fn save_album(dir: &Path, album: &Album) -> Result<PathBuf, CatalogueError> {
    let path: PathBuf = dir.join(format!("{}.{EXTENSION}", album.artwork()));
    let io_error = |source| CatalogueError::Io {
        path: path.clone(),
        source,
    };
    let file: File = File::create(&path).map_err(io_error)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, album).map_err(|source| CatalogueError::Json {
        path: path.clone(),
        source,
    })?;
    writer.flush().map_err(io_error)?;
    Ok(path)
}
