// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Printer mechanism built from two hobby servos and a feed stepper.
//!
//! This is the hardware-facing implementation of [`Actuators`]. It owns the drivers, enforces the
//! configured angle ranges before any pulse changes, and folds driver errors into
//! [`ActuatorError`].

use embedded_hal::{digital, pwm::SetDutyCycle};

use crate::config::Geometry;
use crate::drivers::{HobbyServo, Stepper};
use crate::error::{Actuator, ActuatorError};
use crate::motors::{Actuators, AngleRange};

/// Pen servo, paper-lift servo and feed stepper of one printer.
pub struct Mechanism<Pen, Lift, Feed> {
    pen: HobbyServo<Pen>,
    lift: HobbyServo<Lift>,
    feed: Feed,
    pen_range: AngleRange,
    lift_range: AngleRange,
}

impl<Pen, Lift, Feed> Mechanism<Pen, Lift, Feed>
where
    Pen: SetDutyCycle,
    Lift: SetDutyCycle,
    Feed: Stepper,
    Feed::Error: digital::Error,
{
    /// Bundle the drivers, taking the permitted angle ranges from `geometry`.
    pub fn new(
        geometry: &Geometry,
        pen: HobbyServo<Pen>,
        lift: HobbyServo<Lift>,
        feed: Feed,
    ) -> Self {
        Self {
            pen,
            lift,
            feed,
            pen_range: geometry.pen_range(),
            lift_range: geometry.lift_range(),
        }
    }

    #[inline]
    pub fn pen_range(&self) -> AngleRange {
        self.pen_range
    }

    #[inline]
    pub fn lift_range(&self) -> AngleRange {
        self.lift_range
    }

    /// Access the pen servo driver.
    #[inline]
    pub fn pen(&mut self) -> &mut HobbyServo<Pen> {
        &mut self.pen
    }

    /// Access the paper-lift servo driver.
    #[inline]
    pub fn lift(&mut self) -> &mut HobbyServo<Lift> {
        &mut self.lift
    }

    /// Access the feed stepper driver.
    #[inline]
    pub fn feed(&mut self) -> &mut Feed {
        &mut self.feed
    }

    pub fn free(self) -> (HobbyServo<Pen>, HobbyServo<Lift>, Feed) {
        (self.pen, self.lift, self.feed)
    }
}

impl<Pen, Lift, Feed> Actuators for Mechanism<Pen, Lift, Feed>
where
    Pen: SetDutyCycle,
    Lift: SetDutyCycle,
    Feed: Stepper,
    Feed::Error: digital::Error,
{
    type Error = ActuatorError;

    fn set_pen_angle(&mut self, angle: u8) -> Result<(), ActuatorError> {
        self.pen_range.check(Actuator::Pen, angle)?;
        self.pen
            .write(angle)
            .map_err(|e| ActuatorError::pwm(Actuator::Pen, e))
    }

    fn set_paper_lift_angle(&mut self, angle: u8) -> Result<(), ActuatorError> {
        self.lift_range.check(Actuator::PaperLift, angle)?;
        self.lift
            .write(angle)
            .map_err(|e| ActuatorError::pwm(Actuator::PaperLift, e))
    }

    fn advance_feed(&mut self, steps: u16) -> Result<(), ActuatorError> {
        self.feed
            .step(i32::from(steps))
            .map_err(ActuatorError::coil)
    }

    fn attach(&mut self) -> Result<(), ActuatorError> {
        self.lift
            .attach()
            .map_err(|e| ActuatorError::pwm(Actuator::PaperLift, e))?;
        self.pen
            .attach()
            .map_err(|e| ActuatorError::pwm(Actuator::Pen, e))
    }

    /// Every actuator is released even if an earlier one fails; the first failure is returned.
    fn detach(&mut self) -> Result<(), ActuatorError> {
        let lift = self
            .lift
            .detach()
            .map_err(|e| ActuatorError::pwm(Actuator::PaperLift, e));
        let pen = self
            .pen
            .detach()
            .map_err(|e| ActuatorError::pwm(Actuator::Pen, e));
        let feed = self.feed.release().map_err(ActuatorError::coil);
        lift.and(pen).and(feed)
    }
}
