/*
scroller.rs

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

//! Scroll the selected word across a fixed-width display.
//!
//! The scroller runs in its own thread and sends the frames to the host through an
//! [`async_channel`] channel. It only reads its own copy of the word, so the puzzle state is
//! never accessed from the scroller thread.
//! When the selected word changes, the host cancels the scroller and spawns a new one.

use log::debug;
use std::iter;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::{SCROLL_GAP, SCROLL_HOLD, SCROLL_INTERVAL};

/// Return the frame for the given shift: `width` characters of the word followed by the gap,
/// read circularly from position `shift`.
pub fn frame(word: &str, width: usize, shift: usize) -> String {
    let text: Vec<char> = word
        .chars()
        .chain(iter::repeat_n(' ', SCROLL_GAP))
        .collect();
    text.iter()
        .cycle()
        .skip(shift % text.len())
        .take(width)
        .collect()
}

/// Handle on a running scroller thread.
pub struct Scroller {
    /// Closing this channel stops the thread.
    stop: async_channel::Sender<()>,

    /// Scroller thread.
    handle: Option<JoinHandle<()>>,
}

impl Scroller {
    /// Start scrolling `word` with the default pacing.
    pub fn spawn(word: &str, width: usize, frames: async_channel::Sender<String>) -> Self {
        Self::spawn_with(word, width, SCROLL_HOLD, SCROLL_INTERVAL, frames)
    }

    /// Start scrolling `word`. The first frame is shown for `hold`, then the word moves by one
    /// character every `interval`.
    pub fn spawn_with(
        word: &str,
        width: usize,
        hold: Duration,
        interval: Duration,
        frames: async_channel::Sender<String>,
    ) -> Self {
        let (stop, stopped) = async_channel::bounded::<()>(1);
        let word: String = word.to_string();

        let handle: JoinHandle<()> = thread::spawn(move || {
            debug!("Scrolling {word:?}");
            let period: usize = word.chars().count() + SCROLL_GAP;
            let mut shift: usize = 0;
            let mut delay: Duration = hold;
            loop {
                if stopped.is_closed() {
                    break;
                }
                if frames.send_blocking(frame(&word, width, shift)).is_err() {
                    break;
                }
                thread::sleep(delay);
                delay = interval;
                shift = (shift + 1) % period;
            }
            debug!("Stopped scrolling {word:?}");
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the scroller. The thread exits at its next tick.
    pub fn cancel(&mut self) {
        self.stop.close();
    }

    /// Stop the scroller and wait for its thread to exit.
    pub fn join(mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Whether the scroller thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Scroller {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_wrap_around() {
        assert_eq!(frame("hello", 5, 0), "hello");
        assert_eq!(frame("hello", 5, 2), "llo  ");
        assert_eq!(frame("hello", 5, 6), "  hel");
        assert_eq!(frame("hello", 5, 8), "hello");
        assert_eq!(frame("ab", 7, 1), "b   ab ");
        assert_eq!(frame("", 2, 0), "  ");
    }

    #[test]
    fn scroller_sends_frames_until_cancelled() {
        let (sender, receiver) = async_channel::unbounded::<String>();
        let scroller = Scroller::spawn_with(
            "word",
            4,
            Duration::ZERO,
            Duration::from_millis(1),
            sender,
        );
        assert_eq!(receiver.recv_blocking().as_deref(), Ok("word"));
        assert_eq!(receiver.recv_blocking().as_deref(), Ok("ord "));
        scroller.join();

        // The thread is gone, so the channel is closed once drained
        while receiver.recv_blocking().is_ok() {}
        assert!(receiver.is_closed());
    }

    #[test]
    fn scroller_stops_when_receiver_is_dropped() {
        let (sender, receiver) = async_channel::bounded::<String>(1);
        let scroller =
            Scroller::spawn_with("x", 1, Duration::ZERO, Duration::from_millis(1), sender);
        drop(receiver);
        let handle_done = {
            let mut done = false;
            for _ in 0..1000 {
                if !scroller.is_running() {
                    done = true;
                    break;
                }
                thread::sleep(Duration::from_millis(1));
            }
            done
        };
        assert!(handle_done);
    }
}
