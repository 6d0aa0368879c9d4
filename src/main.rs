// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Printer firmware for the NUCLEO-F767ZI.
//!
//! Waits for the host handshake, feeds a short leader and then prints whatever the host sends.
//! Between batches the servos and the stepper are released.

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use log::LevelFilter;
use panic_halt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use minitelegraph::{
    config::{Geometry, PrinterConfig},
    drivers::{HobbyServo, Uln2003},
    font::{GlyphTable, ASCII},
    hw::{console, BoardPins, Coil, CycleDelay, ServoTimer, SysDelay, Usart},
    motors::{Actuators, Mechanism},
    protocol::{
        print_batch, Event, Session, BAUD_RATE, COMPLETED, IDLE_POLL_MS, NOW_PRINTING,
        READY_BANNER, READY_BYTE, STARTUP_LEADER, STARTUP_PAUSE_MS,
    },
    render::Renderer,
};

const GEOMETRY: Geometry = match PrinterConfig::DEFAULT.validate() {
    Ok(geometry) => geometry,
    Err(_) => panic!("invalid printer configuration"),
};

/// Interval at which the idle loop looks at the receive queue.
const POLL_MS: u32 = 1;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks (HSI, no APB prescaler, so the TIM4 kernel clock equals PCLK1)
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let sysclk_hz = clocks.sysclk().raw();

    let pins = BoardPins::new(dp.GPIOD, dp.GPIOF);

    // USART3 (host console)
    let usart_cfg = Config {
        baud_rate: BAUD_RATE.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    console::init(Usart::new(serial), LevelFilter::Info);

    // Actuators
    let (_servo_timer, pen_pwm, lift_pwm) =
        ServoTimer::tim4(dp.TIM4, pins.servos, clocks.pclk1().raw());
    let mut pause = CycleDelay::new(sysclk_hz);
    let feed = Uln2003::new(
        Coil::new(pins.feed.in1),
        Coil::new(pins.feed.in2),
        Coil::new(pins.feed.in3),
        Coil::new(pins.feed.in4),
        pause,
    );
    let mechanism = Mechanism::new(
        &GEOMETRY,
        HobbyServo::new(pen_pwm),
        HobbyServo::new(lift_pwm),
        feed,
    );

    let mut renderer = match Renderer::new(
        GEOMETRY,
        mechanism,
        SysDelay::new(cp.SYST, sysclk_hz),
        &ASCII,
    ) {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!("{}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    // Handshake
    log::info!("waiting for host");
    let mut session = Session::new();
    loop {
        match console::read_byte() {
            Some(byte) if session.push(byte) == Some(Event::Connected) => break,
            Some(_) => {}
            None => cortex_m::asm::wfi(),
        }
    }

    print_leader(&mut renderer);
    pause.delay_ms(STARTUP_PAUSE_MS);
    console::println(READY_BANNER);

    loop {
        console::write_byte(READY_BYTE);
        report_rx_faults();

        let Some(first) = wait_for_byte(&mut pause, IDLE_POLL_MS) else {
            continue;
        };
        let echo = |code| {
            console::write_str(NOW_PRINTING);
            console::write_byte(code);
            console::write_str("\r\n");
        };
        let printed = print_batch(&mut renderer, &mut session, first, console::read_byte, echo);
        if let Err(e) = printed {
            log::error!("batch abandoned: {}", e);
        }

        if session.finish_batch() {
            console::println(COMPLETED);
        }
    }
}

#[interrupt]
fn USART3() {
    console::on_receive();
}

/// Poll the receive queue for up to `timeout_ms`.
fn wait_for_byte(pause: &mut CycleDelay, timeout_ms: u32) -> Option<u8> {
    for _ in 0..timeout_ms / POLL_MS {
        if let Some(byte) = console::read_byte() {
            return Some(byte);
        }
        pause.delay_ms(POLL_MS);
    }
    console::read_byte()
}

fn report_rx_faults() {
    let faults = console::take_rx_faults();
    if !faults.is_clean() {
        log::warn!(
            "input lost: {} bytes dropped on a full queue, {} line errors",
            faults.dropped,
            faults.line_errors
        );
    }
}

fn print_leader<A, D, G>(renderer: &mut Renderer<A, D, G>)
where
    A: Actuators,
    D: DelayNs,
    G: GlyphTable,
{
    let mut job = match renderer.begin_job() {
        Ok(job) => job,
        Err(e) => {
            log::error!("could not attach actuators: {:?}", e);
            return;
        }
    };
    if let Err(e) = job.render_string(STARTUP_LEADER) {
        log::error!("leader failed: {:?}", e);
    }
    if let Err(e) = job.finish() {
        log::error!("could not detach actuators: {:?}", e);
    }
}
