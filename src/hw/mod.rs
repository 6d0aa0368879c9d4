// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers for the NUCLEO-F767ZI build of the printer.
//!
//! | Module | Purpose |
//! | ------ | ------- |
//! | [`pins`] | pin assignment and alternate-function setup |
//! | [`usart`] | blocking USART wrapper |
//! | [`console`] | USART3 host console: output, `log` backend, receive queue |
//! | [`servo_pwm`] | TIM4 as a 50 Hz servo timer |
//! | [`coil`] | GPIO outputs for the stepper coils |
//! | [`delay`] | blocking delays |

pub mod coil;
pub mod console;
pub mod delay;
pub mod pins;
pub mod servo_pwm;
pub mod usart;

pub use coil::Coil;
pub use delay::{CycleDelay, SysDelay};
pub use pins::BoardPins;
pub use servo_pwm::{ServoChannel, ServoTimer};
pub use usart::Usart;
