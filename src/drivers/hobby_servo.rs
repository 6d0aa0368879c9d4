// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver for hobby RC servos (SG90, MG90S and similar) on any PWM channel.
//!
//! Standard servos expect one pulse every 20 ms. The pulse width selects the horn angle, from
//! 544 µs at 0° to 2400 µs at 180° for the common SG90 calibration. Stopping the pulse train
//! leaves the servo unpowered ("detached"), which is how the printer lets the servos rest between
//! jobs.

use embedded_hal::pwm::SetDutyCycle;

use crate::config::SERVO_MAX_ANGLE;

/// Servo frame length.
pub const FRAME_US: u32 = 20_000;

/// Pulse width at 0°.
pub const DEFAULT_MIN_PULSE_US: u16 = 544;

/// Pulse width at 180°.
pub const DEFAULT_MAX_PULSE_US: u16 = 2_400;

/// Hobby servo bound to one PWM channel.
///
/// The channel must already run at a 50 Hz period; only the duty cycle is touched here.
pub struct HobbyServo<P> {
    pwm: P,
    min_pulse_us: u16,
    max_pulse_us: u16,
    angle: Option<u8>,
    attached: bool,
}

impl<P: SetDutyCycle> HobbyServo<P> {
    /// Wrap a PWM channel. The servo starts detached and no pulse is emitted until [`attach`].
    ///
    /// [`attach`]: HobbyServo::attach
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            min_pulse_us: DEFAULT_MIN_PULSE_US,
            max_pulse_us: DEFAULT_MAX_PULSE_US,
            angle: None,
            attached: false,
        }
    }

    /// Override the pulse widths that correspond to 0° and 180°.
    pub fn with_pulse_range(mut self, min_us: u16, max_us: u16) -> Self {
        self.min_pulse_us = min_us.min(max_us);
        self.max_pulse_us = max_us.max(min_us);
        self
    }

    /// Pulse width for `angle`, clamped to 180°.
    pub fn pulse_width_us(&self, angle: u8) -> u16 {
        let angle = angle.min(SERVO_MAX_ANGLE) as u32;
        let span = (self.max_pulse_us - self.min_pulse_us) as u32;
        self.min_pulse_us + (angle * span / SERVO_MAX_ANGLE as u32) as u16
    }

    /// Start emitting pulses, resuming the last commanded angle if there is one.
    pub fn attach(&mut self) -> Result<(), P::Error> {
        self.attached = true;
        match self.angle {
            Some(angle) => self.apply(angle),
            None => Ok(()),
        }
    }

    /// Stop the pulse train. The last angle is kept for the next [`attach`](HobbyServo::attach).
    pub fn detach(&mut self) -> Result<(), P::Error> {
        self.attached = false;
        self.pwm.set_duty_cycle_fully_off()
    }

    /// Command a new angle. While detached the angle is only remembered.
    pub fn write(&mut self, angle: u8) -> Result<(), P::Error> {
        let angle = angle.min(SERVO_MAX_ANGLE);
        self.angle = Some(angle);
        if self.attached {
            self.apply(angle)
        } else {
            Ok(())
        }
    }

    /// Last commanded angle.
    #[inline]
    pub fn angle(&self) -> Option<u8> {
        self.angle
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn free(self) -> P {
        self.pwm
    }

    fn apply(&mut self, angle: u8) -> Result<(), P::Error> {
        let pulse = self.pulse_width_us(angle) as u32;
        let max = self.pwm.max_duty_cycle() as u32;
        self.pwm.set_duty_cycle((max * pulse / FRAME_US) as u16)
    }
}
