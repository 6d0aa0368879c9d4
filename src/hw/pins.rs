// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the printer on a NUCLEO-F767ZI.

use stm32f7xx_hal::{
    gpio::{gpiod, gpiof, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```rust,ignore
/// let pins = BoardPins::new(dp.GPIOD, dp.GPIOF);
/// ```
pub struct BoardPins {
    pub usart3: Usart3Pins,
    pub servos: ServoPins,
    pub feed: FeedPins,
}

/// ST-LINK virtual COM port.
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

pub struct ServoPins {
    pub pen: gpiod::PD12<Alternate<2>>,  // TIM4_CH1
    pub lift: gpiod::PD13<Alternate<2>>, // TIM4_CH2
}

/// ULN2003 inputs of the feed stepper.
pub struct FeedPins {
    pub in1: gpiof::PF12<Output<PushPull>>,
    pub in2: gpiof::PF13<Output<PushPull>>,
    pub in3: gpiof::PF14<Output<PushPull>>,
    pub in4: gpiof::PF15<Output<PushPull>>,
}

impl BoardPins {
    pub fn new(gpiod: pac::GPIOD, gpiof: pac::GPIOF) -> Self {
        let gpiod = gpiod.split();
        let gpiof = gpiof.split();

        Self {
            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            servos: ServoPins {
                pen: gpiod.pd12.into_alternate::<2>(),
                lift: gpiod.pd13.into_alternate::<2>(),
            },

            feed: FeedPins {
                in1: gpiof.pf12.into_push_pull_output(),
                in2: gpiof.pf13.into_push_pull_output(),
                in3: gpiof.pf14.into_push_pull_output(),
                in4: gpiof.pf15.into_push_pull_output(),
            },
        }
    }
}
