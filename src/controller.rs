/*
controller.rs

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

//! Puzzle controller.
//!
//! The controller owns the catalogue, the random source, and the current [`PuzzleState`].
//! It goes through three states:
//!
//! * [`Status::Generating`]: a rating, an explicit flag, and an album are picked at random, and
//!   a puzzle is generated. When the album has no valid song pair, everything is picked again.
//! * [`Status::AwaitingInput`]: the player moves through the words and submits one.
//! * [`Status::Solved`]: the correct word was submitted. The controller ignores any further
//!   input.
//!
//! Every operation returns a [`Signal`] that the host uses to update the display and to
//! report strikes.

use log::{debug, info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::catalogue::Catalogue;
use crate::config::MAX_GENERATION_ATTEMPTS;
use crate::error::GenerationError;
use crate::generator::artwork::parse_artwork;
use crate::generator::offset::{derive_offset, seed_letter};
use crate::generator::ordering::Rating;
use crate::input_errors::InputErrors;
use crate::puzzle::PuzzleState;

/// Controller status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Generating,
    AwaitingInput,
    Solved,
}

/// Reason for a strike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strike {
    /// The submitted word is not the answer. `zero_rated` is set when the album should have
    /// been skipped instead.
    InvalidSubmission { word: String, zero_rated: bool },

    /// The player tried to skip an album that has at least one star.
    InvalidSkipAttempt,
}

/// Outcome of a player operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The puzzle is solved or not generated: the operation was ignored.
    Ignored,

    /// Another word is selected.
    Moved,

    /// The selection was already at the end of the list.
    Unchanged,

    /// A skip attempt was counted. The value is the number of consecutive attempts.
    SkipCounted(usize),

    /// A new puzzle replaced the skipped zero star album.
    Regenerated,

    /// The correct word was submitted.
    Solved,

    /// The player made a mistake.
    Strike(Strike),
}

impl Signal {
    /// Whether the signal is a strike.
    pub fn is_strike(&self) -> bool {
        matches!(self, Signal::Strike(_))
    }

    /// Whether the displayed word changed, in which case the display must be restarted.
    pub fn word_changed(&self) -> bool {
        matches!(self, Signal::Moved | Signal::Regenerated)
    }
}

/// Player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Submit,
}

/// Puzzle controller.
pub struct Controller<R: Rng> {
    /// Instance identifier, used in the log messages.
    id: usize,

    /// Albums to pick from.
    catalogue: Catalogue,

    /// Artwork identifiers (`<artist> - <album title>`) the album is picked from.
    artworks: Vec<String>,

    /// Identifier the offset is derived from.
    serial: String,

    /// Random source for every random choice.
    rng: R,

    /// Maximum number of generation attempts.
    max_attempts: usize,

    /// Current puzzle.
    puzzle: Option<PuzzleState>,

    /// Controller status.
    status: Status,

    /// Skip and strike counters.
    input_errors: InputErrors,
}

impl<R: Rng> Controller<R> {
    /// Create a [`Controller`] object. No puzzle is generated yet.
    ///
    /// The artworks default to the catalogue albums.
    pub fn new(id: usize, catalogue: Catalogue, serial: &str, rng: R) -> Self {
        Self {
            id,
            artworks: catalogue.artworks(),
            catalogue,
            serial: serial.to_string(),
            rng,
            max_attempts: MAX_GENERATION_ATTEMPTS,
            puzzle: None,
            status: Status::Generating,
            input_errors: InputErrors::new(),
        }
    }

    /// Use the given artwork identifiers instead of the catalogue albums.
    pub fn with_artworks(mut self, artworks: Vec<String>) -> Self {
        self.artworks = artworks;
        self
    }

    /// Change the maximum number of generation attempts.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Return the instance identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Return the controller status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Return the current puzzle.
    pub fn puzzle(&self) -> Option<&PuzzleState> {
        self.puzzle.as_ref()
    }

    /// Return the selected word, or an empty string if there is no puzzle.
    pub fn selected_word(&self) -> &str {
        self.puzzle.as_ref().map_or("", PuzzleState::selected_word)
    }

    /// Return the position of the selected word.
    pub fn selected_index(&self) -> usize {
        self.puzzle.as_ref().map_or(0, PuzzleState::selected_index)
    }

    /// Return the number of strikes.
    pub fn strikes(&self) -> usize {
        self.input_errors.get_strikes()
    }

    /// Replace the current puzzle with a prepared one.
    pub fn install(&mut self, puzzle: PuzzleState) {
        self.log_puzzle(&puzzle);
        self.puzzle = Some(puzzle);
        self.input_errors.reset_skips();
        self.status = Status::AwaitingInput;
    }

    /// Generate a new puzzle.
    ///
    /// Each attempt rolls a new rating, a new explicit flag, and a new album. Attempts for which
    /// the album cannot be found or has no valid song pair are dropped.
    ///
    /// # Errors
    ///
    /// Return an error if the catalogue or the artwork list is empty, if the serial has no
    /// letter, or if no puzzle could be generated after the maximum number of attempts.
    pub fn generate(&mut self) -> Result<(), GenerationError> {
        self.status = Status::Generating;
        self.puzzle = None;
        self.input_errors.reset_skips();

        if self.catalogue.is_empty() {
            return Err(GenerationError::EmptyCatalogue);
        }
        let letter: char = seed_letter(&self.serial)?;

        for attempt in 1..=self.max_attempts {
            info!("[Discography #{}] New generation...", self.id);
            debug!("Attempt {attempt}/{}", self.max_attempts);

            let rating: Rating = Rating::random(&mut self.rng);
            info!("[Discography #{}] Album Rating: {rating}", self.id);
            let is_explicit: bool = self.rng.random_bool(0.5);
            info!("[Discography #{}] Is Explicit: {is_explicit}", self.id);
            let offset: i32 = derive_offset(letter, is_explicit)?;
            info!("[Discography #{}] Serial # Offset: {letter}->{offset}", self.id);

            let artwork: &String = self
                .artworks
                .choose(&mut self.rng)
                .ok_or(GenerationError::NoArtwork)?;
            let Some(album) = parse_artwork(artwork)
                .and_then(|(artist, title)| self.catalogue.find(&artist, &title))
            else {
                warn!("[Discography #{}] Album not found! {artwork}", self.id);
                continue;
            };
            info!(
                "[Discography #{}] Selected Album: {} by {}",
                self.id, album.title, album.artist
            );

            match PuzzleState::generate(album, rating, is_explicit, letter, &mut self.rng)? {
                Some(puzzle) => {
                    self.install(puzzle);
                    return Ok(());
                }
                None => info!(
                    "[Discography #{}] No valid starting/target song pair found, regenerating...",
                    self.id
                ),
            }
        }
        Err(GenerationError::AttemptsExhausted(self.max_attempts))
    }

    /// Log the song words and the answer.
    fn log_puzzle(&self, puzzle: &PuzzleState) {
        if puzzle.rating == Rating::Zero {
            info!(
                "[Discography #{}] Album has 0 star rating. Skip.",
                self.id
            );
            return;
        }
        info!("[Discography #{}] Song Word Mappings (In Order)", self.id);
        for line in puzzle.mapping_report() {
            info!("[Discography #{}] {line}", self.id);
        }
        info!(
            "[Discography #{}] Correct word to input: {}",
            self.id,
            puzzle.target_word()
        );
    }

    /// Select the previous word.
    pub fn move_left(&mut self) -> Signal {
        if self.status != Status::AwaitingInput {
            return Signal::Ignored;
        }
        let Some(puzzle) = self.puzzle.as_mut() else {
            return Signal::Ignored;
        };
        self.input_errors.reset_skips();
        if puzzle.select_previous() {
            Signal::Moved
        } else {
            Signal::Unchanged
        }
    }

    /// Select the next word, or count a skip attempt when the last word is already selected.
    ///
    /// After three consecutive skip attempts, a zero star album is replaced by a new puzzle.
    /// For other albums, the player gets a strike.
    ///
    /// # Errors
    ///
    /// Return an error if the replacement puzzle cannot be generated.
    pub fn move_right(&mut self) -> Result<Signal, GenerationError> {
        if self.status != Status::AwaitingInput {
            return Ok(Signal::Ignored);
        }
        let Some(puzzle) = self.puzzle.as_mut() else {
            return Ok(Signal::Ignored);
        };
        if puzzle.select_next() {
            self.input_errors.reset_skips();
            return Ok(Signal::Moved);
        }
        let rating: Rating = puzzle.rating;
        if !self.input_errors.add_skip() {
            return Ok(Signal::SkipCounted(self.input_errors.get_skips()));
        }
        if rating == Rating::Zero {
            self.generate()?;
            return Ok(Signal::Regenerated);
        }
        info!(
            "[Discography #{}] Strike! Tried to skip album with more than zero stars!",
            self.id
        );
        self.input_errors.add_strike();
        Ok(Signal::Strike(Strike::InvalidSkipAttempt))
    }

    /// Submit the selected word.
    pub fn submit(&mut self) -> Signal {
        if self.status != Status::AwaitingInput {
            return Signal::Ignored;
        }
        let Some(puzzle) = self.puzzle.as_ref() else {
            return Signal::Ignored;
        };
        let word: String = puzzle.selected_word().to_string();
        if puzzle.is_answer(&word) {
            info!("[Discography #{}] Module solved with {word}", self.id);
            self.status = Status::Solved;
            return Signal::Solved;
        }
        let zero_rated: bool = puzzle.rating == Rating::Zero;
        if zero_rated {
            info!(
                "[Discography #{}] Strike! Submitted word on 0 star album. Should have skipped.",
                self.id
            );
        } else {
            info!(
                "[Discography #{}] Strike! Submitted incorrect word: {word}",
                self.id
            );
        }
        self.input_errors.add_strike();
        Signal::Strike(Strike::InvalidSubmission { word, zero_rated })
    }

    /// Apply a player action.
    ///
    /// # Errors
    ///
    /// See [`Controller::move_right`].
    pub fn apply(&mut self, action: Action) -> Result<Signal, GenerationError> {
        match action {
            Action::Left => Ok(self.move_left()),
            Action::Right => self.move_right(),
            Action::Submit => Ok(self.submit()),
        }
    }
}
