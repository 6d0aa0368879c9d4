// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # miniTelegraph Firmware
//!
//! This crate drives a tape printer that writes characters as dot-matrix glyphs: a pen servo
//! sweeps across the tape, a paper-lift servo presses the tape onto the pen for every dot, and a
//! 28BYJ-48 stepper feeds the tape one column at a time. Characters arrive from a host over a
//! serial line.
//!
//! The library is hardware independent and runs its tests on the host. The `firmware` feature
//! adds the NUCLEO-F767ZI board layer in [`hw`] and the `minitelegraph` binary.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Printer geometry and timing, validated into a [`config::Geometry`] |
//! | [`font`] | Glyph tables (built-in 5×7 ASCII face) |
//! | [`render`] | Dot, column and glyph encoders, print jobs |
//! | [`motors`] | The [`motors::Actuators`] seam and the servo/stepper mechanism |
//! | [`drivers`] | Device-level drivers (hobby servo, ULN2003 stepper) |
//! | [`protocol`] | Host line protocol |
//! | [`error`] | Configuration, actuator and render errors |
//! | `hw` | MCU-level wrappers around USART, timers and GPIO (`firmware` only) |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod drivers;
pub mod error;
pub mod font;
pub mod motors;
pub mod protocol;
pub mod render;

#[cfg(feature = "firmware")]
pub mod hw;
