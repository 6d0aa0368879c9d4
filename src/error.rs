// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Error Types
//!
//! Configuration errors are fatal at start-up. Actuator errors are contract violations or
//! hardware faults raised while a job is running; the renderer wraps them in [`RenderError`],
//! propagates them and stops.

use core::fmt;

use embedded_hal::{digital, pwm};
use thiserror::Error;

/// Identifies one of the three actuators in error reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Actuator {
    Pen,
    PaperLift,
    Feed,
}

impl fmt::Display for Actuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Actuator::Pen => "pen servo",
            Actuator::PaperLift => "paper-lift servo",
            Actuator::Feed => "feed stepper",
        })
    }
}

/// Rejected printer configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pen range is empty: min {min} >= max {max}")]
    EmptyPenRange { min: u8, max: u8 },

    #[error("angle {angle} is beyond the 180 degree servo travel")]
    AngleBeyondServo { angle: u8 },

    #[error("paper up and paper down are both {angle} degrees")]
    LiftPositionsEqual { angle: u8 },

    #[error("{rows} dot rows cannot be stored in an 8-bit column")]
    UnsupportedDotRows { rows: u8 },

    #[error("pen_steps must be non-zero")]
    ZeroPenSteps,

    /// `(max - min) / pen_steps` rounds down to zero degrees.
    #[error("pen span of {span} degrees cannot be split into {pen_steps} steps")]
    PenStepTooSmall { span: u8, pen_steps: u8 },

    /// The pre-roll sits two increments below the baseline and would leave the pen range.
    #[error("base line {base_line} leaves no room for the pre-roll")]
    BaseLineBelowPreroll { base_line: u8 },

    #[error("base line {base_line} plus {max_dot_rows} rows does not fit in {pen_steps} pen steps")]
    RowsExceedPenSteps {
        base_line: u8,
        max_dot_rows: u8,
        pen_steps: u8,
    },

    #[error("paper_steps must be non-zero")]
    ZeroPaperSteps,

    #[error("glyph table needs {rows} dot rows but only {max_dot_rows} are configured")]
    GlyphTooTall { rows: u8, max_dot_rows: u8 },
}

/// Failure reported by [`Mechanism`](crate::motors::Mechanism).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ActuatorError {
    #[error("{actuator} angle {angle} outside [{min}, {max}]")]
    OutOfRange {
        actuator: Actuator,
        angle: u8,
        min: u8,
        max: u8,
    },

    #[error("{actuator} PWM fault: {kind:?}")]
    Pwm {
        actuator: Actuator,
        kind: pwm::ErrorKind,
    },

    #[error("feed coil fault: {0:?}")]
    Coil(digital::ErrorKind),
}

impl ActuatorError {
    pub(crate) fn pwm<E: pwm::Error>(actuator: Actuator, err: E) -> Self {
        ActuatorError::Pwm {
            actuator,
            kind: err.kind(),
        }
    }

    pub(crate) fn coil<E: digital::Error>(err: E) -> Self {
        ActuatorError::Coil(err.kind())
    }
}

/// Failure of a column, glyph or string render.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError<E> {
    /// The column has dots above the configured rows. Nothing was moved.
    #[error("column {mask:#010b} needs more than {max_dot_rows} dot rows")]
    ColumnTooTall { mask: u8, max_dot_rows: u8 },

    #[error("actuator fault: {0:?}")]
    Actuator(E),
}

impl<E> From<E> for RenderError<E> {
    fn from(err: E) -> Self {
        RenderError::Actuator(err)
    }
}
