/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line plays a puzzle from a catalogue directory, or builds the catalogue from
//! lyrics files.
//!
//! # Examples
//!
//! Build the album documents from the lyrics directories in `lyrics/`:
//!
//! ```text
//! $ discography --build lyrics --dictionary words.txt --catalogue json
//! ```
//!
//! List the albums:
//!
//! ```text
//! $ discography --catalogue json --ls
//! Daft Punk - Discovery
//! Radiohead - OK Computer
//! ```
//!
//! Play a puzzle. Each line read from the standard input is a command such as `input rrs`:
//!
//! ```text
//! $ discography --catalogue json --serial AB3CD4
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::catalogue::Catalogue;
use crate::catalogue::lyrics;
use crate::config::{COMMAND_PACING, COPYRIGHT_NOTICE};
use crate::controller::{Controller, Signal, Status, Strike};
use crate::player_input::{parse_command, run_actions};
use crate::scroller::Scroller;

/// Generate and play Discography puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Directory with the album documents
    #[arg(short, long, default_value = "json")]
    catalogue: PathBuf,

    /// List the albums
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Identifier the offset is derived from (its first letter is used)
    #[arg(short, long, default_value = "AB3CD4")]
    serial: String,

    /// Seed for the random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Instance identifier used in the log messages
    #[arg(long, default_value_t = 1)]
    id: usize,

    /// Run a single command (for example `input rrs`) and exit
    #[arg(short = 'x', long)]
    command: Option<String>,

    /// Delay in milliseconds between the actions of a command
    #[arg(long, default_value_t = COMMAND_PACING.as_millis() as u64)]
    pacing: u64,

    /// Scroll the selected word in a display of the given width
    #[arg(short, long)]
    marquee: Option<usize>,

    /// Build the album documents from the lyrics directories in this directory
    #[arg(short, long, group = "builder")]
    build: Option<PathBuf>,

    /// Word list used to filter the candidate words when building the documents
    #[arg(long, requires = "builder")]
    dictionary: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Display scroller driven by the signals of the controller.
struct Marquee {
    width: usize,
    frames: async_channel::Sender<String>,
    scroller: Option<Scroller>,
}

impl Marquee {
    /// Start printing the frames on the standard error.
    fn new(width: usize) -> Self {
        let (frames, receiver) = async_channel::unbounded::<String>();
        thread::spawn(move || {
            while let Ok(frame) = receiver.recv_blocking() {
                eprint!("\r[{frame}]");
            }
        });
        Self {
            width,
            frames,
            scroller: None,
        }
    }

    /// Cancel the running scroller and start a new one for the given word.
    fn restart(&mut self, word: &str) {
        if let Some(mut s) = self.scroller.take() {
            s.cancel();
        }
        self.scroller = Some(Scroller::spawn(word, self.width, self.frames.clone()));
    }
}

/// Print the outcome of an action.
fn print_signal(signal: &Signal, word: &str) {
    match signal {
        Signal::Moved | Signal::Unchanged => println!("> {word}"),
        Signal::SkipCounted(n) => println!("> {word} (end of list, {n})"),
        Signal::Regenerated => println!("New album. > {word}"),
        Signal::Solved => println!("Solved!"),
        Signal::Strike(Strike::InvalidSubmission { word, zero_rated }) => {
            if *zero_rated {
                println!("Strike! {word}: this album should have been skipped.");
            } else {
                println!("Strike! {word} is not the answer.");
            }
        }
        Signal::Strike(Strike::InvalidSkipAttempt) => {
            println!("Strike! This album cannot be skipped.")
        }
        Signal::Ignored => (),
    }
}

/// Print the album that the player sees.
fn print_puzzle<R: rand::Rng>(controller: &Controller<R>) {
    if let Some(p) = controller.puzzle() {
        println!(
            "{} - {} {}{}",
            p.album.artist,
            p.album.title,
            "*".repeat(p.rating.stars() as usize),
            if p.is_explicit { " [EXPLICIT]" } else { "" }
        );
        println!("{} words. > {}", p.words().len(), p.selected_word());
    }
}

/// Run one command. Return whether the puzzle is solved.
fn run_command<R: rand::Rng>(
    controller: &mut Controller<R>,
    command: &str,
    pacing: Duration,
    marquee: &mut Option<Marquee>,
) -> Result<bool, String> {
    let actions = parse_command(command).map_err(|e| e.to_string())?;
    run_actions(controller, &actions, pacing, |c, signal| {
        if signal == &Signal::Regenerated {
            print_puzzle(c);
        } else {
            print_signal(signal, c.selected_word());
        }
        if signal.word_changed()
            && let Some(m) = marquee.as_mut()
        {
            m.restart(c.selected_word());
        }
    })
    .map_err(|e| e.to_string())?;
    Ok(controller.status() == Status::Solved)
}

/// Parse and process command-line options. Return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Build the catalogue from lyrics files
    //
    if let Some(source) = &args.build {
        let dictionary: Option<HashSet<String>> = match &args.dictionary {
            Some(path) => match lyrics::load_dictionary(path) {
                Ok(d) => Some(d),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            },
            None => None,
        };
        return match lyrics::build_catalogue(source, &args.catalogue, dictionary.as_ref()) {
            Ok(paths) => {
                for p in paths {
                    println!("{}", p.display());
                }
                0
            }
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    let catalogue: Catalogue = match Catalogue::load_dir(&args.catalogue) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    //
    // List the albums
    //
    if args.ls {
        for artwork in catalogue.artworks() {
            println!("{artwork}");
        }
        return 0;
    }

    //
    // Play
    //
    let rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut controller: Controller<StdRng> =
        Controller::new(args.id, catalogue, &args.serial, rng);
    if let Err(e) = controller.generate() {
        eprintln!("Error: {e}");
        return 1;
    }
    print_puzzle(&controller);

    let pacing: Duration = Duration::from_millis(args.pacing);
    let mut marquee: Option<Marquee> = args.marquee.map(Marquee::new);
    if let Some(m) = marquee.as_mut() {
        m.restart(controller.selected_word());
    }

    if let Some(command) = &args.command {
        return match run_command(&mut controller, command, pacing, &mut marquee) {
            Ok(_) => 0,
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let line: &str = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            break;
        }
        match run_command(&mut controller, line, pacing, &mut marquee) {
            Ok(true) => return 0,
            Ok(false) => (),
            Err(e) => eprintln!("Error: {e}"),
        }
        let _ = io::stdout().flush();
    }
    debug!("Strikes: {}", controller.strikes());
    0
}
