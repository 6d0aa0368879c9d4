// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the `embedded-hal` traits and
//! below the actuator layer in `motors`. Nothing here knows about glyphs or paper.
//!
//! ## Existing drivers
//!
//! - [`hobby_servo`] – 50 Hz RC servo on a PWM channel (pen and paper-lift)
//! - [`uln2003`] – 28BYJ-48 stepper through a ULN2003 array (paper feed)

pub mod hobby_servo;
pub mod uln2003;

pub use hobby_servo::HobbyServo;
pub use uln2003::Uln2003;

/// Relative-move stepper motor.
pub trait Stepper {
    type Error;

    /// Move `steps` steps; the sign selects the direction.
    fn step(&mut self, steps: i32) -> Result<(), Self::Error>;

    /// Stop driving the coils so the motor neither holds nor heats.
    fn release(&mut self) -> Result<(), Self::Error>;
}
