/*
ordering.rs

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

//! Reorder the album songs according to the album rating.

use rand::Rng;
use std::fmt;
use strum_macros::FromRepr;

use crate::catalogue::album::SongId;
use crate::config::{MAX_RATING, MIN_SEQUENCE_LENGTH};

/// Album rating, from zero to five stars.
#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, FromRepr, Default)]
#[repr(u8)]
pub enum Rating {
    /// Zero star albums must be skipped.
    #[default]
    Zero,
    /// Even tracks first, then odd tracks.
    One,
    /// First track, last track, second track, second to last track...
    Two,
    /// Reverse track order.
    Three,
    /// Track order.
    Four,
    /// Each track twice.
    Five,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.stars())
    }
}

impl Rating {
    /// Return the number of stars.
    pub fn stars(self) -> u8 {
        self as u8
    }

    /// Roll a random rating. All ratings have the same probability.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_repr(rng.random_range(0..=MAX_RATING)).unwrap_or_default()
    }
}

/// Song occurrences in the order used by the pair search.
///
/// The same song can occur several times, either because of the rating or because the sequence
/// is repeated to reach [`MIN_SEQUENCE_LENGTH`] occurrences.
/// The sequence is cyclic: the step after the last occurrence is the first occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderedSequence {
    songs: Vec<SongId>,
}

impl OrderedSequence {
    /// Create an [`OrderedSequence`] object from a vector.
    pub fn from_vec(songs: Vec<SongId>) -> Self {
        Self { songs }
    }

    /// Return a reference to the sequence vector.
    pub fn get(&self) -> &Vec<SongId> {
        &self.songs
    }

    /// Get the number of occurrences.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the sequence has no occurrence.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Return the song at the given position.
    pub fn at(&self, index: usize) -> Option<SongId> {
        self.songs.get(index).copied()
    }

    /// Return all the positions of the given song.
    pub fn positions(&self, song: SongId) -> Vec<usize> {
        self.songs
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == song)
            .map(|(i, _)| i)
            .collect()
    }

    /// Return the position one step away from `index`, forward if `forward` is true, wrapping
    /// around at both ends.
    pub fn step(&self, index: usize, forward: bool) -> usize {
        let len: usize = self.songs.len();
        if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        }
    }
}

/// Build the rating-dependent base order, before repetition.
pub fn base_order(songs: &[SongId], rating: Rating) -> Vec<SongId> {
    let n: usize = songs.len();
    match rating {
        Rating::Zero | Rating::Four => songs.to_vec(),
        Rating::One => songs
            .iter()
            .step_by(2)
            .chain(songs.iter().skip(1).step_by(2))
            .copied()
            .collect(),
        Rating::Two => {
            let mut result: Vec<SongId> = Vec::with_capacity(n);
            for i in 0..n.div_ceil(2) {
                result.push(songs[i]);
                // The middle track of an odd-length album is only added once
                if i != n - 1 - i {
                    result.push(songs[n - 1 - i]);
                }
            }
            result
        }
        Rating::Three => songs.iter().rev().copied().collect(),
        Rating::Five => songs.iter().flat_map(|s| [*s, *s]).collect(),
    }
}

/// Build the ordered sequence for the given songs and rating.
///
/// For ratings other than [`Rating::Zero`], the base order is repeated as a whole until the
/// sequence has at least [`MIN_SEQUENCE_LENGTH`] occurrences.
/// For [`Rating::Zero`], the songs are returned unchanged.
pub fn build_ordered_sequence(songs: &[SongId], rating: Rating) -> OrderedSequence {
    if rating == Rating::Zero {
        return OrderedSequence::from_vec(songs.to_vec());
    }
    let base: Vec<SongId> = base_order(songs, rating);
    if base.is_empty() {
        return OrderedSequence::default();
    }
    let repeat: usize = MIN_SEQUENCE_LENGTH.div_ceil(base.len()).max(1);
    OrderedSequence::from_vec(base.repeat(repeat))
}
