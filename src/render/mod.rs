// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Dot-Matrix Encoder
//!
//! Turns characters into timed actuator motion. The encoder has three levels, each in its own
//! file:
//!
//! | Level | Operation | Motion |
//! | ----- | --------- | ------ |
//! | [`dot`] | [`Renderer::render_dot`] | one paper-lift move and its settle |
//! | [`column`] | [`Renderer::render_column`] | pen sweep over one column, then one feed advance |
//! | [`glyph`] | [`Renderer::render_char`] | eight columns, blank ones as bare feed advances |
//!
//! Every command is issued in strict order and every delay blocks. Nothing is overlapped, even
//! though the servos and the stepper could in principle move together.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut job = renderer.begin_job()?;
//! job.render_string(b"HELLO")?;
//! job.finish()?;
//! ```

use core::ops::{Deref, DerefMut};

use embedded_hal::delay::DelayNs;

use crate::config::Geometry;
use crate::error::ConfigError;
use crate::font::GlyphTable;
use crate::motors::Actuators;

pub mod column;
pub mod dot;
pub mod glyph;

/// Encoder state: the validated geometry and exclusive ownership of the actuators.
pub struct Renderer<A, D, G> {
    actuators: A,
    delay: D,
    glyphs: G,
    geometry: Geometry,
}

impl<A, D, G> Renderer<A, D, G>
where
    A: Actuators,
    D: DelayNs,
    G: GlyphTable,
{
    /// Build a renderer, rejecting glyph tables taller than the configured dot rows.
    pub fn new(geometry: Geometry, actuators: A, delay: D, glyphs: G) -> Result<Self, ConfigError> {
        let max_dot_rows = geometry.config().max_dot_rows;
        let rows = glyphs.dot_rows();
        if rows > max_dot_rows {
            return Err(ConfigError::GlyphTooTall { rows, max_dot_rows });
        }

        log::info!(
            "renderer ready: pen step {} deg, pen delay {} ms, pre-roll at {} deg",
            geometry.pen_step(),
            geometry.pen_delay_ms(),
            geometry.preroll_angle()
        );

        Ok(Self {
            actuators,
            delay,
            glyphs,
            geometry,
        })
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn actuators(&self) -> &A {
        &self.actuators
    }

    /// Direct access to the actuators, e.g. for calibration moves outside a job.
    #[inline]
    pub fn actuators_mut(&mut self) -> &mut A {
        &mut self.actuators
    }

    /// Attach the actuators and bring them to a known state.
    ///
    /// The lift is retracted (with its settle delay) and the pen parked mid-range. The returned
    /// guard detaches the actuators when it is finished or dropped.
    pub fn begin_job(&mut self) -> Result<PrintJob<'_, A, D, G>, A::Error> {
        log::debug!("attaching actuators");
        self.actuators.attach()?;

        // From here on a failure drops the guard, which detaches again.
        let mut job = PrintJob {
            renderer: self,
            finished: false,
        };
        job.render_dot(false)?;
        let rest = job.geometry.pen_rest_angle();
        job.actuators.set_pen_angle(rest)?;
        Ok(job)
    }

    /// Give back the actuators, delay and glyph table.
    pub fn into_parts(self) -> (A, D, G) {
        (self.actuators, self.delay, self.glyphs)
    }
}

/// Scope in which the actuators are attached.
///
/// Dereferences to the [`Renderer`]. Leaving the scope detaches the actuators; use
/// [`finish`](PrintJob::finish) to observe a detach failure.
pub struct PrintJob<'r, A, D, G>
where
    A: Actuators,
{
    renderer: &'r mut Renderer<A, D, G>,
    finished: bool,
}

impl<A, D, G> PrintJob<'_, A, D, G>
where
    A: Actuators,
{
    /// Detach the actuators and end the job.
    pub fn finish(mut self) -> Result<(), A::Error> {
        self.finished = true;
        log::debug!("detaching actuators");
        self.renderer.actuators.detach()
    }
}

impl<A, D, G> Deref for PrintJob<'_, A, D, G>
where
    A: Actuators,
{
    type Target = Renderer<A, D, G>;

    fn deref(&self) -> &Self::Target {
        self.renderer
    }
}

impl<A, D, G> DerefMut for PrintJob<'_, A, D, G>
where
    A: Actuators,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.renderer
    }
}

impl<A, D, G> Drop for PrintJob<'_, A, D, G>
where
    A: Actuators,
{
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(e) = self.renderer.actuators.detach() {
            log::warn!("failed to detach actuators: {:?}", e);
        }
    }
}
