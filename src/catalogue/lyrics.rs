/*
lyrics.rs

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

//! Build album documents from lyrics files.
//!
//! The source directory contains one sub-directory per album, named `<artist> - <album title>`.
//! Each album directory contains one text file per song, named `<track number> <title>.txt`,
//! with the song lyrics.
//! A line that ends with a `(xN)` marker is repeated N times.
//!
//! For each song, the builder keeps the words of at least five letters that no other song of
//! the album uses. When a dictionary is provided, only the dictionary words are kept.

use log::{debug, info, warn};
use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::album::{Album, Song};
use super::loader;
use crate::error::CatalogueError;

/// Minimum number of letters in a candidate word.
const MIN_WORD_LEN: usize = 5;

static REPEAT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(x(\d+)\)\s*$").expect("Invalid repeat marker regex"));
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b[a-z]{{{MIN_WORD_LEN},}}\b")).expect("Invalid word regex")
});
static TRACK_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*").expect("Invalid track number regex"));
static TRACK_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s+").expect("Invalid track prefix regex"));

/// Expand the `(xN)` repetition markers and drop the blank lines.
pub fn expand_repetitions(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        match REPEAT_MARKER.captures(line) {
            Some(caps) => {
                let count: usize = caps[1].parse().unwrap_or(1);
                let line: String = REPEAT_MARKER.replace(line, "").trim().to_string();
                lines.extend(std::iter::repeat_n(line, count));
            }
            None => lines.push(line.trim().to_string()),
        }
    }
    lines.retain(|l| !l.is_empty());
    lines
}

/// Extract the candidate words from lyrics.
///
/// Non-ASCII characters and punctuation are removed, and the words are lowercased.
pub fn clean_words(text: &str, dictionary: Option<&HashSet<String>>) -> BTreeSet<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_punctuation())
        .collect::<String>()
        .to_ascii_lowercase();
    WORD.find_iter(&cleaned)
        .map(|m| m.as_str())
        .filter(|w| dictionary.is_none_or(|d| d.contains(*w)))
        .map(str::to_string)
        .collect()
}

/// Return the track number at the beginning of a file name.
fn track_number(name: &str) -> Option<u32> {
    TRACK_NUMBER
        .captures(name)
        .and_then(|caps| caps[1].parse().ok())
}

/// Return the song title from a lyrics file stem, without the track number.
/// A stem made of a number only is a title.
fn song_title(stem: &str) -> String {
    TRACK_PREFIX.replace(stem, "").trim().to_string()
}

/// Keep, for each song, the words that no other song uses. The words are sorted.
pub fn unique_words(songs: &[(String, BTreeSet<String>)]) -> Vec<Song> {
    let mut usage: HashMap<&str, usize> = HashMap::new();
    for (_, words) in songs {
        for word in words {
            *usage.entry(word.as_str()).or_insert(0) += 1;
        }
    }
    songs
        .iter()
        .map(|(title, words)| Song {
            title: title.clone(),
            candidate_words: words
                .iter()
                .filter(|w| usage.get(w.as_str()) == Some(&1))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Load a dictionary file (one word per line).
pub fn load_dictionary(path: &Path) -> Result<HashSet<String>, CatalogueError> {
    let text: String = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect())
}

/// Build an album from its lyrics directory.
///
/// Return `None` if the directory name is not in the `<artist> - <album title>` format.
pub fn build_album(
    dir: &Path,
    dictionary: Option<&HashSet<String>>,
) -> Result<Option<Album>, CatalogueError> {
    let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
        return Ok(None);
    };
    let Some((artist, title)) = name.split_once(" - ") else {
        return Ok(None);
    };
    info!("Processing album: {name}");

    let io_error = |source| CatalogueError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path: PathBuf = entry.map_err(io_error)?.path();
        if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
        {
            files.push(path);
        }
    }
    // Files without a track number go last
    files.sort_by_key(|p| {
        let stem: &str = p.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        (track_number(stem).unwrap_or(u32::MAX), stem.to_string())
    });

    let mut songs: Vec<(String, BTreeSet<String>)> = Vec::with_capacity(files.len());
    for path in &files {
        let text: String = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.clone(),
            source,
        })?;
        let stem: &str = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let lyrics: String = expand_repetitions(&text).join("\n");
        let words: BTreeSet<String> = clean_words(&lyrics, dictionary);
        debug!("{stem}: {} words", words.len());
        songs.push((song_title(stem), words));
    }

    Ok(Some(Album::new(
        artist.trim(),
        title.trim(),
        unique_words(&songs),
    )))
}

/// Build the album documents for every album directory in `source` and save them in `target`.
///
/// Albums that cannot be built are reported and skipped.
/// Return the paths to the saved documents.
pub fn build_catalogue(
    source: &Path,
    target: &Path,
    dictionary: Option<&HashSet<String>>,
) -> Result<Vec<PathBuf>, CatalogueError> {
    fs::create_dir_all(target).map_err(|source| CatalogueError::Io {
        path: target.to_path_buf(),
        source,
    })?;
    let io_error = |e| CatalogueError::Io {
        path: source.to_path_buf(),
        source: e,
    };
    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(source).map_err(io_error)? {
        let path: PathBuf = entry.map_err(io_error)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();

    let mut saved: Vec<PathBuf> = Vec::new();
    for dir in dirs {
        match build_album(&dir, dictionary) {
            Ok(Some(album)) if album.songs.is_empty() => {
                warn!("No lyrics in {dir:?}");
            }
            Ok(Some(album)) => {
                let path: PathBuf = loader::save_album(target, &album)?;
                info!("Album document written to {path:?}");
                saved.push(path);
            }
            Ok(None) => debug!("Skipping {dir:?}"),
            Err(e) => warn!("Error processing {dir:?}: {e}"),
        }
    }
    Ok(saved)
}
