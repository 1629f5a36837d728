/*
pair_search.rs

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

//! Find the starting song and the target song.
//!
//! Starting from any occurrence of the starting song in the ordered sequence, the target song is
//! reached by walking `offset` steps around the sequence, forward for positive offsets and
//! backward for negative ones.
//! Landing on another occurrence of the starting song does not count as a step.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::ordering::OrderedSequence;
use crate::catalogue::album::SongId;

/// Starting song and target song, with the positions of the occurrences that were used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongPair {
    /// Starting song.
    pub starting: SongId,

    /// Position of the starting occurrence in the ordered sequence.
    pub starting_index: usize,

    /// Target song.
    pub target: SongId,

    /// Position of the target occurrence in the ordered sequence.
    pub target_index: usize,
}

/// Walk `offset` valid steps from `start_index` and return the landing position.
///
/// A step is valid when it lands on a song other than the song at `start_index`.
/// Return `None` when the offset is zero or when the sequence holds no other song, because no
/// valid step can then be made.
pub fn walk(sequence: &OrderedSequence, start_index: usize, offset: i32) -> Option<usize> {
    let start: SongId = sequence.at(start_index)?;
    if offset == 0 || sequence.get().iter().all(|s| *s == start) {
        return None;
    }
    let steps: u32 = offset.unsigned_abs();
    let forward: bool = offset > 0;
    let mut index: usize = start_index;
    let mut valid_steps: u32 = 0;
    while valid_steps < steps {
        index = sequence.step(index, forward);
        if sequence.at(index) != Some(start) {
            valid_steps += 1;
        }
    }
    Some(index)
}

/// Search for a starting song and a target song separated by `offset` valid steps.
///
/// The candidate starting songs are the `valid_songs`, tried in random order, from every one of
/// their occurrences. The target song must also be a valid song.
/// The scan does not stop at the first match: the last matching pair is returned, so the
/// shuffle decides which pair is selected when several exist.
///
/// Return `None` if there is no such pair. The puzzle must then be generated again.
pub fn find_pair<R: Rng>(
    valid_songs: &[SongId],
    sequence: &OrderedSequence,
    offset: i32,
    rng: &mut R,
) -> Option<SongPair> {
    let mut candidates: Vec<SongId> = valid_songs.to_vec();
    candidates.shuffle(rng);

    let mut pair: Option<SongPair> = None;
    for starting in candidates {
        for starting_index in sequence.positions(starting) {
            let Some(target_index) = walk(sequence, starting_index, offset) else {
                debug!("    No valid step from song {} at {starting_index}", starting.0);
                continue;
            };
            let Some(target) = sequence.at(target_index) else {
                continue;
            };
            if !valid_songs.contains(&target) {
                debug!(
                    "    Song {} at {starting_index} leads to song {} without words",
                    starting.0, target.0
                );
                continue;
            }
            debug!(
                "    Pair found: song {} at {starting_index} -> song {} at {target_index}",
                starting.0, target.0
            );
            pair = Some(SongPair {
                starting,
                starting_index,
                target,
                target_index,
            });
        }
    }
    pair
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ordering::{Rating, build_ordered_sequence};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ids(v: &[usize]) -> Vec<SongId> {
        v.iter().map(|i| SongId(*i)).collect()
    }

    #[test]
    fn walk_wraps_around() {
        let seq = OrderedSequence::from_vec(ids(&[0, 1, 2, 3]));
        assert_eq!(walk(&seq, 3, 2), Some(1));
        assert_eq!(walk(&seq, 0, -1), Some(3));
        assert_eq!(walk(&seq, 1, 26), Some(3));
    }

    #[test]
    fn walk_skips_starting_song() {
        let seq = build_ordered_sequence(&ids(&[0, 1, 2]), Rating::Five);
        // 0 0 1 1 2 2 0 0 1 1 2 2
        assert_eq!(walk(&seq, 0, 1), Some(2));
        assert_eq!(walk(&seq, 1, 4), Some(5));
        assert_eq!(walk(&seq, 0, -1), Some(11));
        // Steps over the second occurrence of song 0
        assert_eq!(walk(&seq, 4, 3), Some(8));
    }

    #[test]
    fn walk_without_other_song() {
        let seq = OrderedSequence::from_vec(ids(&[0, 0, 0]));
        assert_eq!(walk(&seq, 0, 3), None);
        let seq = OrderedSequence::from_vec(ids(&[0, 1]));
        assert_eq!(walk(&seq, 0, 0), None);
    }

    #[test]
    fn target_must_have_words() {
        // Song 1 has no words: from song 0, one step forward always lands on it
        let seq = OrderedSequence::from_vec(ids(&[0, 1]));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(find_pair(&ids(&[0]), &seq, 1, &mut rng), None);
    }

    #[test]
    fn pair_is_offset_apart() {
        let seq = build_ordered_sequence(&ids(&[0, 1, 2, 3, 4]), Rating::Two);
        let valid = ids(&[0, 1, 2, 3, 4]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pair = find_pair(&valid, &seq, -7, &mut rng).expect("pair");
            assert_ne!(pair.starting, pair.target);
            assert_eq!(walk(&seq, pair.starting_index, -7), Some(pair.target_index));
            assert_eq!(seq.at(pair.target_index), Some(pair.target));
        }
    }

    #[test]
    fn last_occurrence_wins() {
        // Only song 0 can start. Its last occurrence is the one that is kept.
        let seq = build_ordered_sequence(&ids(&[0, 1, 2]), Rating::Four);
        let mut rng = StdRng::seed_from_u64(3);
        let pair = find_pair(&ids(&[0]), &seq, 3, &mut rng);
        assert_eq!(pair, None);

        let mut rng = StdRng::seed_from_u64(3);
        let pair = find_pair(&ids(&[0, 2]), &seq, 2, &mut rng).expect("pair");
        assert_eq!(pair.starting, SongId(0));
        assert_eq!(pair.starting_index, 9);
        assert_eq!(pair.target, SongId(2));
    }
}
