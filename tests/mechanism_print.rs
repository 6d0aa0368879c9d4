// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The encoder driving the real servo and stepper drivers on fake pins.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use minitelegraph::config::PrinterConfig;
use minitelegraph::drivers::{HobbyServo, Uln2003};
use minitelegraph::font::{BitmapFont, ASCII};
use minitelegraph::motors::Mechanism;
use minitelegraph::render::Renderer;
use pretty_assertions::assert_eq;

/// 1 µs-tick PWM channel; `None` while fully off.
#[derive(Clone, Default)]
struct Pwm(Rc<RefCell<Option<u16>>>);

impl pwm::ErrorType for Pwm {
    type Error = Infallible;
}

impl SetDutyCycle for Pwm {
    fn max_duty_cycle(&self) -> u16 {
        20_000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        *self.0.borrow_mut() = (duty != 0).then_some(duty);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Pin(Rc<RefCell<bool>>);

impl digital::ErrorType for Pin {
    type Error = Infallible;
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        *self.0.borrow_mut() = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        *self.0.borrow_mut() = true;
        Ok(())
    }
}

/// Delay that only adds up the requested time.
#[derive(Clone, Default)]
struct Clock(Rc<RefCell<u64>>);

impl DelayNs for Clock {
    fn delay_ns(&mut self, ns: u32) {
        *self.0.borrow_mut() += u64::from(ns);
    }
}

struct Rig {
    pen: Pwm,
    lift: Pwm,
    coils: [Pin; 4],
    clock: Clock,
}

type Feed = Uln2003<Pin, Pin, Pin, Pin, Clock>;
type TestRenderer = Renderer<Mechanism<Pwm, Pwm, Feed>, Clock, &'static BitmapFont>;

fn rig() -> (TestRenderer, Rig) {
    let geometry = PrinterConfig::DEFAULT.validate().unwrap();
    let rig = Rig {
        pen: Pwm::default(),
        lift: Pwm::default(),
        coils: Default::default(),
        clock: Clock::default(),
    };
    let [in1, in2, in3, in4] = rig.coils.clone();
    let mechanism = Mechanism::new(
        &geometry,
        HobbyServo::new(rig.pen.clone()),
        HobbyServo::new(rig.lift.clone()),
        Uln2003::new(in1, in2, in3, in4, rig.clock.clone()),
    );
    let renderer = Renderer::new(geometry, mechanism, rig.clock.clone(), &ASCII).unwrap();
    (renderer, rig)
}

#[test]
fn whole_ascii_range_prints_without_range_errors() {
    let (mut renderer, _rig) = rig();
    let text: Vec<u8> = (0x20..0x7F).collect();

    let mut job = renderer.begin_job().unwrap();
    job.render_string(&text).unwrap();
    job.finish().unwrap();
}

#[test]
fn job_powers_the_servos_and_releases_everything_after() {
    let (mut renderer, rig) = rig();

    let mut job = renderer.begin_job().unwrap();
    // Pen parked at 80°, lift down at 102°: 544 + angle * 1856 / 180 µs.
    assert_eq!(*rig.pen.0.borrow(), Some(1368));
    assert_eq!(*rig.lift.0.borrow(), Some(1595));

    job.render_char(b'I').unwrap();
    assert_eq!(*rig.lift.0.borrow(), Some(1595));
    job.finish().unwrap();

    assert_eq!(*rig.pen.0.borrow(), None);
    assert_eq!(*rig.lift.0.borrow(), None);
    assert!(rig.coils.iter().all(|coil| !*coil.0.borrow()));
}

#[test]
fn feed_time_follows_the_phase_interval() {
    let (mut renderer, rig) = rig();

    // A blank cell is 8 columns * 9 steps * 8 phases of 1 ms, with no other waits.
    renderer.render_char(b' ').unwrap();
    assert_eq!(*rig.clock.0.borrow(), 8 * 9 * 8 * 1_000_000);
}
