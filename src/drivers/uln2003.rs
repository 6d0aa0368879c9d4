// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver for the 28BYJ-48 unipolar stepper through a ULN2003 Darlington array.
//!
//! Wiring:
//! - IN1..IN4 of the ULN2003 board to four push-pull GPIO outputs
//! - Motor connector straight into the board (blue, pink, yellow, orange)
//!
//! One [`step`](Stepper::step) walks the whole eight-phase half-step sequence, i.e. one electrical
//! cycle of the motor. Each phase is held for the phase interval before the next one is driven.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::drivers::Stepper;

/// Coil pattern (IN1, IN2, IN3, IN4) for each half-step phase.
pub const HALF_STEP_SEQUENCE: [[bool; 4]; 8] = [
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
    [false, false, false, true],
    [true, false, false, true],
];

/// Default hold time per phase. Shorter intervals make the 28BYJ-48 skip.
pub const DEFAULT_PHASE_INTERVAL_US: u32 = 1_000;

/// 28BYJ-48 on a ULN2003 board.
pub struct Uln2003<IN1, IN2, IN3, IN4, D> {
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,
    delay: D,
    phase_interval_us: u32,
}

impl<IN1, IN2, IN3, IN4, D> Uln2003<IN1, IN2, IN3, IN4, D>
where
    IN1: OutputPin,
    IN2: OutputPin<Error = IN1::Error>,
    IN3: OutputPin<Error = IN1::Error>,
    IN4: OutputPin<Error = IN1::Error>,
    D: DelayNs,
{
    pub fn new(in1: IN1, in2: IN2, in3: IN3, in4: IN4, delay: D) -> Self {
        Self {
            in1,
            in2,
            in3,
            in4,
            delay,
            phase_interval_us: DEFAULT_PHASE_INTERVAL_US,
        }
    }

    pub fn with_phase_interval_us(mut self, interval_us: u32) -> Self {
        self.phase_interval_us = interval_us;
        self
    }

    /// Drive one coil pattern.
    fn energize(&mut self, coils: [bool; 4]) -> Result<(), IN1::Error> {
        set(&mut self.in1, coils[0])?;
        set(&mut self.in2, coils[1])?;
        set(&mut self.in3, coils[2])?;
        set(&mut self.in4, coils[3])
    }

    fn cycle(&mut self, forward: bool) -> Result<(), IN1::Error> {
        for i in 0..HALF_STEP_SEQUENCE.len() {
            let phase = if forward {
                HALF_STEP_SEQUENCE[i]
            } else {
                HALF_STEP_SEQUENCE[HALF_STEP_SEQUENCE.len() - 1 - i]
            };
            self.energize(phase)?;
            self.delay.delay_us(self.phase_interval_us);
        }
        Ok(())
    }

    pub fn free(self) -> (IN1, IN2, IN3, IN4, D) {
        (self.in1, self.in2, self.in3, self.in4, self.delay)
    }
}

impl<IN1, IN2, IN3, IN4, D> Stepper for Uln2003<IN1, IN2, IN3, IN4, D>
where
    IN1: OutputPin,
    IN2: OutputPin<Error = IN1::Error>,
    IN3: OutputPin<Error = IN1::Error>,
    IN4: OutputPin<Error = IN1::Error>,
    D: DelayNs,
{
    type Error = IN1::Error;

    fn step(&mut self, steps: i32) -> Result<(), Self::Error> {
        let forward = steps >= 0;
        for _ in 0..steps.unsigned_abs() {
            self.cycle(forward)?;
        }
        Ok(())
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        self.energize([false; 4])
    }
}

#[inline]
fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), P::Error> {
    if high {
        pin.set_high()
    } else {
        pin.set_low()
    }
}
