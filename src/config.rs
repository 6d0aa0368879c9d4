// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Printer geometry and timing constants.
//!
//! A [`PrinterConfig`] is plain data. It only reaches the encoder after [`PrinterConfig::validate`]
//! has turned it into a [`Geometry`], which guarantees that every pen position the encoder can
//! compute lies inside `[pen_min, pen_max]`. Because `validate` is a `const fn`, firmware can
//! reject a bad configuration at compile time:
//!
//! ```
//! use minitelegraph::config::{Geometry, PrinterConfig};
//!
//! const GEOMETRY: Geometry = match PrinterConfig::DEFAULT.validate() {
//!     Ok(geometry) => geometry,
//!     Err(_) => panic!("invalid printer configuration"),
//! };
//! assert_eq!(GEOMETRY.pen_step(), 4);
//! ```

use crate::error::ConfigError;
use crate::motors::AngleRange;

/// Largest angle a hobby servo accepts.
pub const SERVO_MAX_ANGLE: u8 = 180;

/// Column masks are `u8`, so no glyph can be taller than this.
pub const COLUMN_BITS: u8 = 8;

/// Raw printer constants.
///
/// Pen angles grow toward the bottom of the writing area: `pen_max` is the lowest point the pen
/// reaches on the tape, `pen_min` the highest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Pen angle at the top of the writing area.
    pub pen_min: u8,
    /// Pen angle at the bottom of the writing area.
    pub pen_max: u8,
    /// Lift angle that presses the tape against the pen tip.
    pub paper_up: u8,
    /// Lift angle that lays the tape flat, clear of the pen.
    pub paper_down: u8,
    /// Number of increments the pen range is divided into. Fewer steps give taller characters.
    pub pen_steps: u8,
    /// Increment (counted from `pen_max`) of the first row after the pre-roll.
    pub base_line: u8,
    /// Tallest glyph column the encoder accepts.
    pub max_dot_rows: u8,
    /// Feed steps per glyph column. Larger values give wider characters.
    pub paper_steps: u16,
    pub paper_up_delay_ms: u32,
    pub paper_down_delay_ms: u32,
    /// Pen settle time per degree of one pen increment.
    pub pen_delay_per_degree_ms: u32,
    /// The pre-roll is held for this many pen delays before the first dot of a column.
    pub preroll_settle_factor: u32,
}

impl PrinterConfig {
    /// Calibration of the reference printer.
    pub const DEFAULT: Self = Self {
        pen_min: 55,
        pen_max: 105,
        paper_up: 89,
        paper_down: 102,
        pen_steps: 12,
        base_line: 4,
        max_dot_rows: COLUMN_BITS,
        paper_steps: 9,
        paper_up_delay_ms: 80,
        paper_down_delay_ms: 80,
        pen_delay_per_degree_ms: 5,
        preroll_settle_factor: 20,
    };

    /// Check every constraint the encoder relies on and derive the pen step.
    pub const fn validate(&self) -> Result<Geometry, ConfigError> {
        if self.pen_min >= self.pen_max {
            return Err(ConfigError::EmptyPenRange {
                min: self.pen_min,
                max: self.pen_max,
            });
        }

        let angles = [self.pen_max, self.paper_up, self.paper_down];
        let mut i = 0;
        while i < angles.len() {
            if angles[i] > SERVO_MAX_ANGLE {
                return Err(ConfigError::AngleBeyondServo { angle: angles[i] });
            }
            i += 1;
        }

        if self.paper_up == self.paper_down {
            return Err(ConfigError::LiftPositionsEqual {
                angle: self.paper_up,
            });
        }

        if self.max_dot_rows == 0 || self.max_dot_rows > COLUMN_BITS {
            return Err(ConfigError::UnsupportedDotRows {
                rows: self.max_dot_rows,
            });
        }

        if self.pen_steps == 0 {
            return Err(ConfigError::ZeroPenSteps);
        }

        let span = self.pen_max - self.pen_min;
        let pen_step = span / self.pen_steps;
        if pen_step == 0 {
            return Err(ConfigError::PenStepTooSmall {
                span,
                pen_steps: self.pen_steps,
            });
        }

        if self.base_line < 2 {
            return Err(ConfigError::BaseLineBelowPreroll {
                base_line: self.base_line,
            });
        }

        // Highest row index the sweep visits; below `pen_steps` keeps it above `pen_min`.
        let top_row = self.base_line as u16 + self.max_dot_rows as u16 - 1;
        if top_row >= self.pen_steps as u16 {
            return Err(ConfigError::RowsExceedPenSteps {
                base_line: self.base_line,
                max_dot_rows: self.max_dot_rows,
                pen_steps: self.pen_steps,
            });
        }

        if self.paper_steps == 0 {
            return Err(ConfigError::ZeroPaperSteps);
        }

        Ok(Geometry {
            config: *self,
            pen_step,
        })
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A validated [`PrinterConfig`] with its derived quantities.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Geometry {
    config: PrinterConfig,
    pen_step: u8,
}

impl Geometry {
    #[inline]
    pub const fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Degrees per pen increment.
    #[inline]
    pub const fn pen_step(&self) -> u8 {
        self.pen_step
    }

    /// Hold after each pen increment.
    #[inline]
    pub const fn pen_delay_ms(&self) -> u32 {
        self.pen_step as u32 * self.config.pen_delay_per_degree_ms
    }

    /// Hold after the pre-roll of a column that has dots.
    #[inline]
    pub const fn preroll_settle_ms(&self) -> u32 {
        self.pen_delay_ms() * self.config.preroll_settle_factor
    }

    /// Pen rest position at the start of every column.
    #[inline]
    pub const fn preroll_angle(&self) -> u8 {
        self.pen_angle_at(self.config.base_line as u16 - 2)
    }

    /// Pen position after dot `row` of a column has been rendered.
    ///
    /// The renderer never asks for rows at or above `max_dot_rows`; such columns are rejected
    /// before any motion. Out-of-range rows saturate toward zero instead of wrapping.
    #[inline]
    pub const fn row_angle(&self, row: u8) -> u8 {
        self.pen_angle_at(self.config.base_line as u16 + row as u16)
    }

    /// Pen parking position between jobs, mid-way through its range.
    #[inline]
    pub const fn pen_rest_angle(&self) -> u8 {
        ((self.config.pen_min as u16 + self.config.pen_max as u16) / 2) as u8
    }

    #[inline]
    pub const fn pen_range(&self) -> AngleRange {
        AngleRange::new(self.config.pen_min, self.config.pen_max)
    }

    #[inline]
    pub const fn lift_range(&self) -> AngleRange {
        AngleRange::new(self.config.paper_up, self.config.paper_down)
    }

    const fn pen_angle_at(&self, increment: u16) -> u8 {
        let offset = increment * self.pen_step as u16;
        (self.config.pen_max as u16).saturating_sub(offset) as u8
    }
}
