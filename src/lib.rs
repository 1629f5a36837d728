/*
lib.rs

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

//! Discography: find the song word.
//!
//! A puzzle shows an album, its star rating, and whether it is explicit. The player browses a
//! list of words, one per song, and must submit the word of the target song: the song that is
//! `offset` steps away from the song of the first word, in an order that depends on the rating.
//! Zero star albums must be skipped instead.
//!
//! See [`generator`] for how the puzzles are built, and [`controller`] for how they are played.

pub mod catalogue;
pub mod cli_options;
pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod input_errors;
pub mod player_input;
pub mod puzzle;
pub mod scroller;
