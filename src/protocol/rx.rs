// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Receive queue between the serial interrupt and the main loop.
//!
//! The interrupt pushes every byte as it arrives, so input keeps flowing while a character is
//! being printed. When the queue is full the new byte is dropped and counted; line errors
//! reported by the receiver are counted too. The main loop collects both counts with
//! [`RxQueue::take_faults`] and reports them.

use heapless::Deque;

/// Receive losses since the last [`RxQueue::take_faults`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RxFaults {
    /// Bytes that arrived while the queue was full.
    pub dropped: u32,
    /// Overrun, framing, noise and parity errors.
    pub line_errors: u32,
}

impl RxFaults {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.dropped == 0 && self.line_errors == 0
    }
}

pub struct RxQueue<const N: usize> {
    bytes: Deque<u8, N>,
    faults: RxFaults,
}

impl<const N: usize> RxQueue<N> {
    pub const fn new() -> Self {
        Self {
            bytes: Deque::new(),
            faults: RxFaults {
                dropped: 0,
                line_errors: 0,
            },
        }
    }

    /// Queue a received byte, or count it as dropped if the queue is full.
    pub fn push(&mut self, byte: u8) {
        if self.bytes.push_back(byte).is_err() {
            self.faults.dropped = self.faults.dropped.saturating_add(1);
        }
    }

    pub fn line_error(&mut self) {
        self.faults.line_errors = self.faults.line_errors.saturating_add(1);
    }

    /// Oldest queued byte.
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Return the fault counts and reset them.
    pub fn take_faults(&mut self) -> RxFaults {
        core::mem::take(&mut self.faults)
    }
}

impl<const N: usize> Default for RxQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
