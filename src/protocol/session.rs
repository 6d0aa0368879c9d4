// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte-stream state machine for one host session.

use crate::protocol::{FIRST_PRINTED, START_TOKEN};

/// Something the firmware has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The start token was just completed.
    Connected,
    /// Print this character.
    Print(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// `matched` bytes of the token have been seen.
    Handshake { matched: usize },
    Ready,
}

pub struct Session {
    token: &'static [u8],
    state: State,
    printed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::with_token(START_TOKEN)
    }

    /// Session that opens on `token` instead of [`START_TOKEN`]. An empty token opens at once.
    pub fn with_token(token: &'static [u8]) -> Self {
        let state = if token.is_empty() {
            State::Ready
        } else {
            State::Handshake { matched: 0 }
        };
        Self {
            token,
            state,
            printed: false,
        }
    }

    /// Process a single incoming byte.
    pub fn push(&mut self, byte: u8) -> Option<Event> {
        match self.state {
            State::Handshake { matched } => {
                let matched = self.advance_match(matched, byte);
                if matched == self.token.len() {
                    log::info!("host connected");
                    self.state = State::Ready;
                    return Some(Event::Connected);
                }
                self.state = State::Handshake { matched };
                None
            }
            State::Ready => {
                if byte < FIRST_PRINTED {
                    log::trace!("dropping control byte {:#04x}", byte);
                    return None;
                }
                self.printed = true;
                Some(Event::Print(byte))
            }
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    /// Close the current batch. Returns whether anything was printed since the last call.
    pub fn finish_batch(&mut self) -> bool {
        core::mem::take(&mut self.printed)
    }

    /// Length of the longest token prefix that ends the input seen so far.
    fn advance_match(&self, matched: usize, byte: u8) -> usize {
        if self.token[matched] == byte {
            return matched + 1;
        }

        // Fall back to the longest shorter prefix that is still a suffix of the input.
        let seen = &self.token[..matched];
        let mut len = matched;
        while len > 0 {
            let start = matched + 1 - len;
            let candidate = &self.token[..len];
            if candidate[..len - 1] == seen[start..] && candidate[len - 1] == byte {
                return len;
            }
            len -= 1;
        }
        0
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
