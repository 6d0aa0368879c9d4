// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Column level: one bitmask becomes a bottom-to-top pen sweep.
//!
//! The pen always starts a column at the pre-roll position, two increments below the first row.
//! Rows are visited LSB first and the sweep stops after the highest set bit, so short columns are
//! also fast ones. Every column ends with the tape lowered and one feed advance.

use embedded_hal::delay::DelayNs;

use crate::error::RenderError;
use crate::motors::Actuators;
use crate::render::Renderer;

impl<A, D, G> Renderer<A, D, G>
where
    A: Actuators,
    D: DelayNs,
{
    /// Render one column of dots and advance the tape to the next column.
    ///
    /// An empty mask only re-issues the pre-roll position before feeding; the pen does not sweep.
    /// A mask with bits above `max_dot_rows` is rejected with [`RenderError::ColumnTooTall`]
    /// before anything moves.
    pub fn render_column(&mut self, mask: u8) -> Result<(), RenderError<A::Error>> {
        let max_dot_rows = self.geometry.config().max_dot_rows;
        if u16::from(mask) >> max_dot_rows != 0 {
            return Err(RenderError::ColumnTooTall { mask, max_dot_rows });
        }

        let preroll = self.geometry.preroll_angle();
        self.actuators.set_pen_angle(preroll)?;

        if mask != 0 {
            log::trace!("column {:#010b}", mask);

            self.actuators.set_pen_angle(preroll)?;
            self.delay.delay_ms(self.geometry.preroll_settle_ms());

            let pen_delay_ms = self.geometry.pen_delay_ms();
            let mut remaining = mask;
            let mut row = 0;
            while remaining != 0 {
                self.render_dot(remaining & 1 != 0)?;
                remaining >>= 1;
                self.actuators
                    .set_pen_angle(self.geometry.row_angle(row))?;
                self.delay.delay_ms(pen_delay_ms);
                row += 1;
            }

            self.render_dot(false)?;
        }

        self.feed_column()?;
        Ok(())
    }

    /// Advance the tape by one column width without moving the pen.
    #[inline]
    pub fn feed_column(&mut self) -> Result<(), A::Error> {
        self.actuators
            .advance_feed(self.geometry.config().paper_steps)
    }
}
