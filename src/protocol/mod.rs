// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host line protocol.
//!
//! The host talks to the printer over a plain 115 200 baud serial line. Nothing is framed: the
//! device waits for the word `begin`, announces itself, and from then on prints every byte it
//! receives. Status lines flow back to the host as CRLF-terminated ASCII, and a single
//! [`READY_BYTE`] tells the host the printer is idle.
//!
//! [`Session`] tracks this conversation one byte at a time. Incoming bytes wait in an [`RxQueue`]
//! filled by the receive interrupt, and [`print_batch`] prints them for as long as they keep
//! coming.

pub mod batch;
pub mod rx;
pub mod session;

pub use batch::print_batch;
pub use rx::{RxFaults, RxQueue};
pub use session::{Event, Session};

pub const BAUD_RATE: u32 = 115_200;

/// Token the host sends to open a session.
pub const START_TOKEN: &[u8] = b"begin";

/// Blank cells fed after the handshake so the first character starts on fresh tape.
pub const STARTUP_LEADER: &[u8] = b"   ";

/// Pause between the leader and [`READY_BANNER`].
pub const STARTUP_PAUSE_MS: u32 = 3_000;

pub const READY_BANNER: &str = "miniTelegram Ready!";

/// Prefix of the echo line sent before each character is printed.
pub const NOW_PRINTING: &str = "Now printing: ";

/// Sent after a batch that printed at least one character.
pub const COMPLETED: &str = "Completed!";

/// Written once per idle pass.
pub const READY_BYTE: u8 = 0x01;

/// Length of one idle pass.
pub const IDLE_POLL_MS: u32 = 1_500;

/// Bytes the receive queue holds while a batch is printing.
pub const RX_CAPACITY: usize = 256;

/// Lowest byte that is printed; anything below is a control byte and dropped.
pub const FIRST_PRINTED: u8 = 0x1F;
