// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Stepper coil outputs as `embedded-hal` 1.0 output pins.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use stm32f7xx_hal::{
    gpio::{gpiof, Output, PushPull},
    prelude::*,
};

/// One ULN2003 input driven by a push-pull GPIO.
pub struct Coil<PIN> {
    pin: PIN,
}

impl<PIN> Coil<PIN> {
    pub fn new(pin: PIN) -> Self {
        Self { pin }
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

macro_rules! coil_pins {
    ($($pin:ty),+ $(,)?) => {
        $(
            impl ErrorType for Coil<$pin> {
                type Error = Infallible;
            }

            impl OutputPin for Coil<$pin> {
                fn set_low(&mut self) -> Result<(), Infallible> {
                    let _ = self.pin.set_low();
                    Ok(())
                }

                fn set_high(&mut self) -> Result<(), Infallible> {
                    let _ = self.pin.set_high();
                    Ok(())
                }
            }
        )+
    };
}

coil_pins!(
    gpiof::PF12<Output<PushPull>>,
    gpiof::PF13<Output<PushPull>>,
    gpiof::PF14<Output<PushPull>>,
    gpiof::PF15<Output<PushPull>>,
);
