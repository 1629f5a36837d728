/*
album.rs

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

//! Albums and songs.
//!
//! Songs are identified by their slot in the album ([`SongId`]), not by their title: two songs
//! can share a title, and the ordered sequences built for a puzzle can hold the same song
//! several times.

use serde::{Deserialize, Serialize};

/// Position of a song in its album track list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongId(pub usize);

/// A song and the words that only this song uses in its album.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Song {
    /// Song title.
    #[serde(rename = "song_title")]
    pub title: String,

    /// Candidate words. Might be empty.
    #[serde(rename = "unique_words")]
    pub candidate_words: Vec<String>,
}

impl Song {
    /// Create a [`Song`] object.
    pub fn new(title: &str, words: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            candidate_words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Whether the song has at least one candidate word.
    pub fn is_valid(&self) -> bool {
        !self.candidate_words.is_empty()
    }
}

/// An album and its songs in track order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Album {
    /// Artist name.
    pub artist: String,

    /// Album title.
    #[serde(rename = "album_title")]
    pub title: String,

    /// Songs in track order.
    pub songs: Vec<Song>,
}

impl Album {
    /// Create an [`Album`] object.
    pub fn new(artist: &str, title: &str, songs: Vec<Song>) -> Self {
        Self {
            artist: artist.to_string(),
            title: title.to_string(),
            songs,
        }
    }

    /// Return the song at the given slot.
    pub fn song(&self, id: SongId) -> Option<&Song> {
        self.songs.get(id.0)
    }

    /// Return the title of the song at the given slot, or an empty string.
    pub fn song_title(&self, id: SongId) -> &str {
        self.song(id).map_or("", |s| s.title.as_str())
    }

    /// Return the identifiers of all the songs, in track order.
    pub fn song_ids(&self) -> Vec<SongId> {
        (0..self.songs.len()).map(SongId).collect()
    }

    /// Return the identifiers of the songs that have at least one candidate word, in track
    /// order.
    pub fn valid_songs(&self) -> Vec<SongId> {
        self.songs
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_valid())
            .map(|(i, _)| SongId(i))
            .collect()
    }

    /// Return the artwork identifier: `<artist> - <album title>`.
    pub fn artwork(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    /// Whether the album has the given artist and title, ignoring case.
    pub fn matches(&self, artist: &str, title: &str) -> bool {
        self.artist.to_lowercase() == artist.to_lowercase()
            && self.title.to_lowercase() == title.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_songs_skip_songs_without_words() {
        let album = Album::new(
            "Artist",
            "Album",
            vec![
                Song::new("One", &["first"]),
                Song::new("Two", &[]),
                Song::new("Three", &["third", "thirds"]),
            ],
        );
        assert_eq!(album.valid_songs(), vec![SongId(0), SongId(2)]);
        assert_eq!(album.song_title(SongId(1)), "Two");
        assert_eq!(album.song_title(SongId(7)), "");
    }

    #[test]
    fn deserialize_document() {
        let doc = r#"{
            "artist": "Daft Punk",
            "album_title": "Discovery",
            "songs": [
                {"song_title": "One More Time", "unique_words": ["celebrate"]},
                {"song_title": "Aerodynamic", "unique_words": []}
            ]
        }"#;
        let album: Album = serde_json::from_str(doc).expect("valid document");
        assert_eq!(album.artwork(), "Daft Punk - Discovery");
        assert_eq!(album.songs.len(), 2);
        assert!(album.songs[0].is_valid());
        assert!(!album.songs[1].is_valid());
    }
}
