// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! This module contains the actuator layer the encoder in `render` talks to, sitting above the
//! device-level drivers in `drivers`.
//!
//! ## Modules
//!
//! - [`mechanism`] - Pen servo, paper-lift servo and feed stepper bundled behind [`Actuators`].

use crate::error::{Actuator, ActuatorError};

pub mod mechanism;

pub use mechanism::Mechanism;

/// The three actuators of the printer, addressed as one context.
///
/// Implementations are not reentrant; the renderer owns its `Actuators` and issues one command
/// at a time.
pub trait Actuators {
    type Error: core::fmt::Debug;

    /// Move the pen servo to an absolute angle inside the pen range.
    fn set_pen_angle(&mut self, angle: u8) -> Result<(), Self::Error>;

    /// Move the paper-lift servo to an absolute angle inside the lift range.
    fn set_paper_lift_angle(&mut self, angle: u8) -> Result<(), Self::Error>;

    /// Advance the paper tape by `steps` feed steps.
    fn advance_feed(&mut self, steps: u16) -> Result<(), Self::Error>;

    /// Power the actuators for a print job.
    fn attach(&mut self) -> Result<(), Self::Error>;

    /// Let the actuators go limp between jobs.
    fn detach(&mut self) -> Result<(), Self::Error>;
}

/// Inclusive range of angles an actuator may be commanded to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AngleRange {
    pub min: u8,
    pub max: u8,
}

impl AngleRange {
    /// Build a range from two bounds given in either order.
    pub const fn new(a: u8, b: u8) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    #[inline]
    pub const fn contains(&self, angle: u8) -> bool {
        angle >= self.min && angle <= self.max
    }

    /// Reject `angle` with [`ActuatorError::OutOfRange`] when it falls outside the range.
    pub fn check(&self, actuator: Actuator, angle: u8) -> Result<(), ActuatorError> {
        if self.contains(angle) {
            Ok(())
        } else {
            Err(ActuatorError::OutOfRange {
                actuator,
                angle,
                min: self.min,
                max: self.max,
            })
        }
    }
}
