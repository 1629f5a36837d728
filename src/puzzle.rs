/*
puzzle.rs

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

//! State of one generated puzzle.
//!
//! A [`PuzzleState`] is created for each generation attempt. Attempts that fail are dropped
//! entirely, and the controller starts over with a new album.

use log::debug;
use rand::Rng;

use crate::catalogue::album::{Album, SongId};
use crate::error::GenerationError;
use crate::generator::offset::derive_offset;
use crate::generator::ordering::{OrderedSequence, Rating, build_ordered_sequence};
use crate::generator::pair_search::{SongPair, find_pair};
use crate::generator::word_pool::{WordPool, assemble_words};

/// Generated puzzle and the player's selection.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    /// Album rating.
    pub rating: Rating,

    /// Whether the album shows the explicit sticker.
    pub is_explicit: bool,

    /// Selected album.
    pub album: Album,

    /// Ordered sequence derived from the album and the rating.
    pub sequence: OrderedSequence,

    /// Signed step count between the starting song and the target song.
    pub offset: i32,

    /// Starting song and target song.
    pub pair: SongPair,

    /// Words of the puzzle.
    pub pool: WordPool,

    /// Position of the selected word in [`WordPool::words`].
    selected_index: usize,
}

impl PuzzleState {
    /// Run one generation attempt for the given album.
    ///
    /// Return `None` when the album has no valid starting and target song pair for this rating
    /// and offset.
    ///
    /// # Errors
    ///
    /// The seed must be an ASCII letter.
    pub fn generate<R: Rng>(
        album: &Album,
        rating: Rating,
        is_explicit: bool,
        seed_letter: char,
        rng: &mut R,
    ) -> Result<Option<Self>, GenerationError> {
        let offset: i32 = derive_offset(seed_letter, is_explicit)?;
        let valid_songs: Vec<SongId> = album.valid_songs();
        let sequence: OrderedSequence = build_ordered_sequence(&album.song_ids(), rating);
        debug!(
            "Rating {rating}, offset {offset}, {} valid songs, {} occurrences",
            valid_songs.len(),
            sequence.len()
        );

        let Some(pair) = find_pair(&valid_songs, &sequence, offset, rng) else {
            return Ok(None);
        };
        let Some(pool) = assemble_words(album, &valid_songs, pair.starting, pair.target, rng)
        else {
            return Ok(None);
        };

        Ok(Some(Self {
            rating,
            is_explicit,
            album: album.clone(),
            sequence,
            offset,
            pair,
            pool,
            selected_index: 0,
        }))
    }

    /// Return the starting song.
    pub fn starting_song(&self) -> SongId {
        self.pair.starting
    }

    /// Return the target song.
    pub fn target_song(&self) -> SongId {
        self.pair.target
    }

    /// Return the word of the starting song.
    pub fn starting_word(&self) -> &str {
        &self.pool.starting_word
    }

    /// Return the word to submit.
    pub fn target_word(&self) -> &str {
        &self.pool.target_word
    }

    /// Return the words the player chooses from.
    pub fn words(&self) -> &[String] {
        &self.pool.words
    }

    /// Return the position of the selected word.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Return the selected word.
    pub fn selected_word(&self) -> &str {
        self.pool
            .words
            .get(self.selected_index)
            .map_or("", String::as_str)
    }

    /// Whether the last word of the list is selected.
    pub fn is_last_selected(&self) -> bool {
        self.selected_index + 1 >= self.pool.words.len()
    }

    /// Select the previous word. Return `false` if the first word is already selected.
    pub fn select_previous(&mut self) -> bool {
        if self.selected_index == 0 {
            return false;
        }
        self.selected_index -= 1;
        true
    }

    /// Select the next word. Return `false` if the last word is already selected.
    pub fn select_next(&mut self) -> bool {
        if self.is_last_selected() {
            return false;
        }
        self.selected_index += 1;
        true
    }

    /// Whether the given word is the answer.
    pub fn is_answer(&self, word: &str) -> bool {
        word == self.pool.target_word
    }

    /// Describe the word of each song, in ordered sequence order.
    pub fn mapping_report(&self) -> Vec<String> {
        self.sequence
            .get()
            .iter()
            .map(|id| {
                let title: &str = self.album.song_title(*id);
                match self.pool.mapping.get(id) {
                    Some(word) => {
                        let marker: &str = if *word == self.pool.target_word {
                            " [TARGET]"
                        } else if *word == self.pool.starting_word {
                            " [START]"
                        } else {
                            ""
                        };
                        format!("{title} -> {word}{marker}")
                    }
                    None => format!("{title} -> [No unique words]"),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::album::Song;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn album() -> Album {
        Album::new(
            "Artist",
            "Album",
            vec![
                Song::new("One", &["alpha"]),
                Song::new("Two", &["bravo"]),
                Song::new("Three", &[]),
                Song::new("Four", &["delta"]),
            ],
        )
    }

    #[test]
    fn selection_is_clamped() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = PuzzleState::generate(&album(), Rating::Four, false, 'b', &mut rng)
            .expect("valid seed")
            .expect("puzzle");
        assert_eq!(p.words().len(), 3);
        assert_eq!(p.selected_word(), p.starting_word());
        assert!(!p.select_previous());
        assert!(p.select_next());
        assert!(p.select_next());
        assert!(p.is_last_selected());
        assert!(!p.select_next());
        assert_eq!(p.selected_index(), 2);
    }

    #[test]
    fn report_marks_start_and_target() {
        let mut rng = StdRng::seed_from_u64(2);
        let p = PuzzleState::generate(&album(), Rating::Three, true, 'a', &mut rng)
            .expect("valid seed")
            .expect("puzzle");
        let report = p.mapping_report();
        assert_eq!(report.len(), p.sequence.len());
        assert!(report.iter().any(|l| l.ends_with("[TARGET]")));
        assert!(report.contains(&"Three -> [No unique words]".to_string()));
    }

    #[test]
    fn invalid_seed() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(PuzzleState::generate(&album(), Rating::One, false, '4', &mut rng).is_err());
    }
}
