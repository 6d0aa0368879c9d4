// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Dot level: one bit of a column becomes one paper-lift position.
//!
//! Raising the lift presses the tape against the pen tip, which leaves a dot; lowering it lets the
//! pen pass over the tape. This is the only place the lift is moved during rendering, and every
//! move is followed by its settle delay so the pen never travels while the tape is still moving.

use embedded_hal::delay::DelayNs;

use crate::motors::Actuators;
use crate::render::Renderer;

impl<A, D, G> Renderer<A, D, G>
where
    A: Actuators,
    D: DelayNs,
{
    /// Raise (`present`) or lower the paper lift and hold for the matching settle time.
    pub fn render_dot(&mut self, present: bool) -> Result<(), A::Error> {
        let config = self.geometry.config();
        let (angle, settle_ms) = if present {
            (config.paper_up, config.paper_up_delay_ms)
        } else {
            (config.paper_down, config.paper_down_delay_ms)
        };

        self.actuators.set_paper_lift_angle(angle)?;
        self.delay.delay_ms(settle_ms);
        Ok(())
    }
}
