// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TIM4 as a two-channel servo timer.
//!
//! The timer is set up by register writes: a 1 µs tick and a 20 000-tick period give the 50 Hz
//! servo frame, and CH1/CH2 run in PWM mode 1 with preloaded compare registers. With this setup a
//! duty value is the pulse width in microseconds.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use stm32f7xx_hal::pac;

use crate::drivers::hobby_servo::FRAME_US;
use crate::hw::pins::ServoPins;

/// Tick rate of the servo timer.
const TICK_HZ: u32 = 1_000_000;

// CCMR1: OCxM = PWM mode 1, OCxPE preload, for CH1 and CH2.
const CCMR1_PWM1_CH1_CH2: u32 = (0b110 << 4) | (1 << 3) | (0b110 << 12) | (1 << 11);
const CCER_CC1E_CC2E: u32 = (1 << 0) | (1 << 4);
const CR1_ARPE: u32 = 1 << 7;
const CR1_CEN: u32 = 1 << 0;
const EGR_UG: u32 = 1 << 0;

/// Owns TIM4 and the two output pins while the channels are in use.
pub struct ServoTimer {
    tim: pac::TIM4,
    pins: ServoPins,
}

impl ServoTimer {
    /// Configure TIM4 and return its two servo channels.
    ///
    /// `timer_clock_hz` is the TIM4 kernel clock. It must be a whole multiple of 1 MHz.
    pub fn tim4(
        tim4: pac::TIM4,
        pins: ServoPins,
        timer_clock_hz: u32,
    ) -> (Self, ServoChannel<1>, ServoChannel<2>) {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

        let tim = tim4;

        // Disable counter while configuring
        tim.cr1.write(|w| unsafe { w.bits(0) });

        tim.psc
            .write(|w| unsafe { w.bits(timer_clock_hz / TICK_HZ - 1) });
        tim.arr.write(|w| unsafe { w.bits(FRAME_US - 1) });

        // Both outputs start low
        tim.ccr1.write(|w| unsafe { w.bits(0) });
        tim.ccr2.write(|w| unsafe { w.bits(0) });

        tim.ccmr1_output()
            .write(|w| unsafe { w.bits(CCMR1_PWM1_CH1_CH2) });
        tim.ccer.write(|w| unsafe { w.bits(CCER_CC1E_CC2E) });

        // Load PSC/ARR, then start
        tim.egr.write(|w| unsafe { w.bits(EGR_UG) });
        tim.cr1.write(|w| unsafe { w.bits(CR1_ARPE | CR1_CEN) });

        (Self { tim, pins }, ServoChannel { _private: () }, ServoChannel { _private: () })
    }

    /// Stop the counter and return the timer and its pins.
    pub fn free(self) -> (pac::TIM4, ServoPins) {
        self.tim.cr1.write(|w| unsafe { w.bits(0) });
        (self.tim, self.pins)
    }
}

/// One compare channel of the servo timer. `C` is the TIM4 channel number (1 = pen, 2 = lift).
pub struct ServoChannel<const C: u8> {
    _private: (),
}

impl<const C: u8> ErrorType for ServoChannel<C> {
    type Error = Infallible;
}

impl<const C: u8> SetDutyCycle for ServoChannel<C> {
    fn max_duty_cycle(&self) -> u16 {
        FRAME_US as u16
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        // Each channel only ever writes its own compare register.
        let tim = unsafe { &*pac::TIM4::ptr() };
        match C {
            1 => tim.ccr1.write(|w| unsafe { w.bits(duty as u32) }),
            _ => tim.ccr2.write(|w| unsafe { w.bits(duty as u32) }),
        }
        Ok(())
    }
}
