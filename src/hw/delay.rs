// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking delays as `embedded-hal` 1.0 [`DelayNs`].

use embedded_hal::delay::DelayNs;

/// SysTick delay. There is only one SysTick, so this goes to the renderer.
pub struct SysDelay(cortex_m::delay::Delay);

impl SysDelay {
    pub fn new(syst: cortex_m::peripheral::SYST, sysclk_hz: u32) -> Self {
        Self(cortex_m::delay::Delay::new(syst, sysclk_hz))
    }
}

impl DelayNs for SysDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

/// Busy-wait delay counted in core cycles. Cheap to copy; used for stepper phase timing.
#[derive(Copy, Clone)]
pub struct CycleDelay {
    cycles_per_us: u32,
}

impl CycleDelay {
    pub fn new(sysclk_hz: u32) -> Self {
        Self {
            cycles_per_us: (sysclk_hz / 1_000_000).max(1),
        }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = u64::from(ns) * u64::from(self.cycles_per_us) / 1_000;
        cortex_m::asm::delay(cycles.min(u64::from(u32::MAX)) as u32);
    }

    fn delay_us(&mut self, us: u32) {
        let cycles = u64::from(us) * u64::from(self.cycles_per_us);
        cortex_m::asm::delay(cycles.min(u64::from(u32::MAX)) as u32);
    }
}
