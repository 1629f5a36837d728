/*
scenarios.rs

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

use discography::catalogue::Catalogue;
use discography::catalogue::album::{Album, Song, SongId};
use discography::controller::{Action, Controller, Signal, Status, Strike};
use discography::error::GenerationError;
use discography::generator::artwork::parse_artwork;
use discography::generator::offset::derive_offset;
use discography::generator::ordering::Rating;
use discography::generator::pair_search::walk;
use discography::player_input::{parse_command, run_actions};
use discography::puzzle::PuzzleState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

const WORDS: [&str; 4] = ["amber", "breeze", "canyon", "dusk"];

fn four_songs() -> Album {
    Album::new(
        "The Testers",
        "Four Tracks",
        WORDS
            .iter()
            .enumerate()
            .map(|(i, w)| Song::new(&format!("Track {i}"), &[*w]))
            .collect(),
    )
}

fn controller(seed: u64) -> Controller<StdRng> {
    Controller::new(
        7,
        Catalogue::new(vec![four_songs()]),
        "1B2C3",
        StdRng::seed_from_u64(seed),
    )
}

/// Install a puzzle with the given rating and offset +2 ('B').
fn prepared(seed: u64, rating: Rating) -> Controller<StdRng> {
    let mut c = controller(seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let puzzle = PuzzleState::generate(&four_songs(), rating, false, 'B', &mut rng)
        .expect("valid seed")
        .expect("puzzle");
    c.install(puzzle);
    c
}

fn move_to_last(c: &mut Controller<StdRng>) {
    let len = c.puzzle().unwrap().words().len();
    for _ in 1..len {
        assert_eq!(c.move_right(), Ok(Signal::Moved));
    }
}

#[test]
fn target_is_two_tracks_after_start() {
    for seed in 0..20 {
        let mut c = prepared(seed, Rating::Four);
        let p = c.puzzle().unwrap().clone();
        let start = p.starting_song().0;
        assert_eq!(p.offset, 2);
        assert_eq!(p.target_song(), SongId((start + 2) % 4));
        assert_eq!(p.starting_word(), WORDS[start]);
        assert_eq!(p.target_word(), WORDS[(start + 2) % 4]);
        assert_eq!(p.words()[0], WORDS[start]);
        assert_eq!(p.words().len(), 4);

        // The starting word is never the answer
        assert_eq!(
            c.submit(),
            Signal::Strike(Strike::InvalidSubmission {
                word: WORDS[start].to_string(),
                zero_rated: false
            })
        );
        assert_eq!(c.status(), Status::AwaitingInput);
        assert_eq!(c.strikes(), 1);

        let target = p
            .words()
            .iter()
            .position(|w| w == p.target_word())
            .unwrap();
        for _ in 0..target {
            assert_eq!(c.move_right(), Ok(Signal::Moved));
        }
        assert_eq!(c.selected_word(), p.target_word());
        assert_eq!(c.submit(), Signal::Solved);
        assert_eq!(c.status(), Status::Solved);

        // Input is ignored once solved
        assert_eq!(c.move_left(), Signal::Ignored);
        assert_eq!(c.submit(), Signal::Ignored);
    }
}

#[test]
fn navigation_is_clamped() {
    let mut c = prepared(3, Rating::Four);
    assert_eq!(c.move_left(), Signal::Unchanged);
    assert_eq!(c.selected_index(), 0);
    move_to_last(&mut c);
    assert_eq!(c.selected_index(), 3);
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(1)));
    assert_eq!(c.selected_index(), 3);
}

#[test]
fn zero_star_album_is_skipped() {
    let mut c = prepared(4, Rating::Zero);
    move_to_last(&mut c);
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(1)));
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(2)));
    assert_eq!(c.move_right(), Ok(Signal::Regenerated));
    assert_eq!(c.status(), Status::AwaitingInput);
    assert_eq!(c.selected_index(), 0);
    assert_eq!(c.strikes(), 0);
}

#[test]
fn rated_album_cannot_be_skipped() {
    let mut c = prepared(5, Rating::Two);
    move_to_last(&mut c);
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(1)));
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(2)));
    assert_eq!(
        c.move_right(),
        Ok(Signal::Strike(Strike::InvalidSkipAttempt))
    );
    assert_eq!(c.strikes(), 1);
    // The skip counter starts over
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(1)));
}

#[test]
fn moving_resets_skip_counter() {
    let mut c = prepared(6, Rating::Four);
    move_to_last(&mut c);
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(1)));
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(2)));
    assert_eq!(c.move_left(), Signal::Moved);
    assert_eq!(c.move_right(), Ok(Signal::Moved));
    assert_eq!(c.move_right(), Ok(Signal::SkipCounted(1)));
}

#[test]
fn submitting_on_zero_star_album() {
    let mut c = prepared(8, Rating::Zero);
    let p = c.puzzle().unwrap().clone();
    assert_eq!(
        c.submit(),
        Signal::Strike(Strike::InvalidSubmission {
            word: p.starting_word().to_string(),
            zero_rated: true
        })
    );
}

#[test]
fn generated_puzzles_are_consistent() {
    let catalogue = Catalogue::new(vec![
        four_songs(),
        Album::new(
            "Other",
            "Sparse",
            vec![
                Song::new("A", &["anchor", "arrow"]),
                Song::new("B", &[]),
                Song::new("C", &["cobalt"]),
                Song::new("D", &[]),
                Song::new("E", &["ember", "echo"]),
            ],
        ),
    ]);
    for seed in 0..50 {
        let mut c = Controller::new(1, catalogue.clone(), "x9", StdRng::seed_from_u64(seed));
        c.generate().expect("puzzle");
        assert_eq!(c.status(), Status::AwaitingInput);
        let p = c.puzzle().unwrap();
        assert_eq!(p.offset.abs(), 24);
        assert_eq!(p.words()[0], p.starting_word());
        assert_eq!(
            p.words().iter().filter(|w| *w == p.target_word()).count(),
            1
        );
        assert_ne!(p.starting_song(), p.target_song());
        assert_eq!(
            walk(&p.sequence, p.pair.starting_index, p.offset),
            Some(p.pair.target_index)
        );
    }
}

#[test]
fn same_seed_same_puzzle() {
    let mut a = controller(42);
    let mut b = controller(42);
    a.generate().unwrap();
    b.generate().unwrap();
    assert_eq!(a.puzzle().unwrap().words(), b.puzzle().unwrap().words());
    assert_eq!(a.puzzle().unwrap().rating, b.puzzle().unwrap().rating);
}

#[test]
fn impossible_album_gives_up() {
    // A single song never has a target song
    let album = Album::new("Solo", "Single", vec![Song::new("Only", &["lonely"])]);
    let mut c = Controller::new(
        2,
        Catalogue::new(vec![album]),
        "Q",
        StdRng::seed_from_u64(0),
    )
    .with_max_attempts(25);
    assert_eq!(c.generate(), Err(GenerationError::AttemptsExhausted(25)));
    assert_eq!(c.status(), Status::Generating);
    assert!(c.puzzle().is_none());
}

#[test]
fn missing_albums_are_rerolled() {
    let mut c = controller(9).with_artworks(vec![
        "Nobody - Nothing.png".to_string(),
        "no separator".to_string(),
        "the testers - FOUR TRACKS.png".to_string(),
    ]);
    c.generate().expect("puzzle");
    assert_eq!(c.puzzle().unwrap().album.title, "Four Tracks");

    let mut c = controller(9)
        .with_artworks(vec!["Nobody - Nothing".to_string()])
        .with_max_attempts(5);
    assert_eq!(c.generate(), Err(GenerationError::AttemptsExhausted(5)));

    let mut c = controller(9).with_artworks(Vec::new());
    assert_eq!(c.generate(), Err(GenerationError::NoArtwork));
}

#[test]
fn dotted_album_titles_are_found() {
    let album = Album::new(
        "Artist",
        "Hits Vol.2",
        vec![
            Song::new("First", &["anchor"]),
            Song::new("Second", &["bridge"]),
            Song::new("Third", &["copper"]),
        ],
    );
    let catalogue = Catalogue::new(vec![album, four_songs()]);
    for album in catalogue.albums() {
        let (artist, title) = parse_artwork(&album.artwork()).expect("artwork name");
        assert_eq!(catalogue.find(&artist, &title), Some(album));
    }

    let mut c = Controller::new(
        4,
        Catalogue::new(vec![catalogue.albums()[0].clone()]),
        "B",
        StdRng::seed_from_u64(0),
    )
    .with_max_attempts(50);
    c.generate().expect("puzzle");
    assert_eq!(c.puzzle().unwrap().album.title, "Hits Vol.2");
}

#[test]
fn offset_sign_follows_explicit_roll() {
    for seed in 0..20 {
        let mut c = controller(seed);
        c.generate().expect("puzzle");
        let p = c.puzzle().unwrap();
        assert_eq!(Ok(p.offset), derive_offset('B', p.is_explicit));
        assert_eq!(p.offset.abs(), 2);
    }
}

#[test]
fn precondition_errors() {
    let mut c = Controller::new(1, Catalogue::new(vec![four_songs()]), "123", StdRng::seed_from_u64(0));
    assert_eq!(
        c.generate(),
        Err(GenerationError::NoSeedLetter("123".to_string()))
    );
    let mut c = Controller::new(1, Catalogue::default(), "ABC", StdRng::seed_from_u64(0));
    assert_eq!(c.generate(), Err(GenerationError::EmptyCatalogue));
}

#[test]
fn command_stops_at_first_strike() {
    let mut c = prepared(10, Rating::Four);
    let actions = parse_command("input srr").unwrap();
    let mut seen = 0;
    let signals = run_actions(&mut c, &actions, Duration::ZERO, |_, _| seen += 1).unwrap();
    assert_eq!(signals.len(), 1);
    assert!(signals[0].is_strike());
    assert_eq!(seen, 1);
    assert_eq!(c.selected_index(), 0);
}

#[test]
fn command_solves_puzzle() {
    let mut c = prepared(11, Rating::Three);
    let p = c.puzzle().unwrap().clone();
    let target = p.words().iter().position(|w| w == p.target_word()).unwrap();
    let command = format!("i {}s", "r".repeat(target));
    let actions = parse_command(&command).unwrap();
    assert_eq!(actions.last(), Some(&Action::Submit));
    let signals = run_actions(&mut c, &actions, Duration::from_millis(1), |_, _| ()).unwrap();
    assert_eq!(signals.last(), Some(&Signal::Solved));
    assert_eq!(c.status(), Status::Solved);
}
