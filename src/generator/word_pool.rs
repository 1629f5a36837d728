/*
word_pool.rs

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

//! Assign a word to each song and build the list of words the player chooses from.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::BTreeMap;

use crate::catalogue::album::{Album, SongId};

/// Words of a generated puzzle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordPool {
    /// Word of the starting song.
    pub starting_word: String,

    /// Word of the target song. This is the answer.
    pub target_word: String,

    /// Word selected for each valid song.
    pub mapping: BTreeMap<SongId, String>,

    /// Words the player chooses from. The first word is always the starting word.
    pub words: Vec<String>,
}

/// Pick one random word for each valid song.
pub fn pick_words<R: Rng>(
    album: &Album,
    valid_songs: &[SongId],
    rng: &mut R,
) -> BTreeMap<SongId, String> {
    valid_songs
        .iter()
        .filter_map(|id| {
            let word: &String = album.song(*id)?.candidate_words.choose(rng)?;
            Some((*id, word.clone()))
        })
        .collect()
}

/// Build the word list for the given starting and target songs.
///
/// The list starts with the starting word, followed by the words of the other valid songs and
/// the target word, in random order.
/// The target word is added exactly once.
///
/// Return `None` if the starting or the target song has no word.
pub fn assemble_words<R: Rng>(
    album: &Album,
    valid_songs: &[SongId],
    starting: SongId,
    target: SongId,
    rng: &mut R,
) -> Option<WordPool> {
    let mapping: BTreeMap<SongId, String> = pick_words(album, valid_songs, rng);
    let starting_word: String = mapping.get(&starting)?.clone();
    let target_word: String = mapping.get(&target)?.clone();

    let mut other_words: Vec<String> = valid_songs
        .iter()
        .filter(|id| **id != starting && **id != target)
        .filter_map(|id| mapping.get(id).cloned())
        .collect();
    other_words.push(target_word.clone());
    other_words.shuffle(rng);

    let mut words: Vec<String> = Vec::with_capacity(other_words.len() + 1);
    words.push(starting_word.clone());
    words.append(&mut other_words);

    Some(WordPool {
        starting_word,
        target_word,
        mapping,
        words,
    })
}
