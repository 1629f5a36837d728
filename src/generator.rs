/*
generator.rs

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

//! Generate random puzzles.
//!
//! A puzzle is built from one album in several steps:
//!
//! * The album songs are reordered according to the album [`ordering::Rating`].
//!   [`ordering::build_ordered_sequence`] returns an [`ordering::OrderedSequence`], which is the
//!   search space for the next step.
//!
//! * An offset is derived from the seed identifier and the explicit flag by
//!   [`offset::derive_offset`].
//!
//! * [`pair_search::find_pair`] looks for a starting song and a target song that are separated by
//!   exactly `offset` steps in the ordered sequence.
//!   If no such pair exists, then the puzzle must be generated again from scratch.
//!
//! * [`word_pool::assemble_words`] picks one word for each song and builds the list of words the
//!   player chooses from.
//!
//! The album is selected from its artwork identifier, parsed with [`artwork::parse_artwork`].

pub mod artwork;
pub mod offset;
pub mod ordering;
pub mod pair_search;
pub mod word_pool;
