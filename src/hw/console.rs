// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host console on USART3: protocol output, the `log` backend and the receive queue.
//!
//! The USART lives in a critical-section mutex shared by the main loop and the USART3 interrupt.
//! Writes take the lock one byte at a time, so the receiver is never masked for longer than one
//! character and incoming bytes reach the [`RxQueue`] while text is going out. Log records are
//! written as `[LEVEL] message` followed by CRLF.

use core::cell::RefCell;
use core::fmt::{self, Write};

use cortex_m::interrupt::{self, Mutex};
use cortex_m::peripheral::NVIC;
use log::{LevelFilter, Log, Metadata, Record};
use stm32f7xx_hal::pac;

use crate::hw::Usart;
use crate::protocol::{RxFaults, RxQueue, RX_CAPACITY};

pub type Console = Usart<pac::USART3>;

static CONSOLE: Mutex<RefCell<Option<Console>>> = Mutex::new(RefCell::new(None));

static RX: Mutex<RefCell<RxQueue<RX_CAPACITY>>> = Mutex::new(RefCell::new(RxQueue::new()));

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = write!(Writer, "[{}] {}\r\n", record.level(), record.args());
    }

    fn flush(&self) {
        flush();
    }
}

/// `fmt::Write` over the console.
pub struct Writer;

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_str(s);
        Ok(())
    }
}

/// Hand the console over, start receiving into the queue and install the logger.
pub fn init(console: Console, level: LevelFilter) {
    interrupt::free(|cs| CONSOLE.borrow(cs).replace(Some(console)));

    // RXNEIE also raises the interrupt on overrun.
    let usart = unsafe { &*pac::USART3::ptr() };
    usart.cr1.modify(|_, w| w.rxneie().set_bit());
    unsafe { NVIC::unmask(pac::Interrupt::USART3) };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Move everything the receiver holds into the queue. Runs in the USART3 interrupt.
pub fn on_receive() {
    interrupt::free(|cs| {
        let mut console = CONSOLE.borrow(cs).borrow_mut();
        let Some(console) = console.as_mut() else {
            return;
        };
        let mut rx = RX.borrow(cs).borrow_mut();
        loop {
            match console.read() {
                Ok(byte) => rx.push(byte),
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(_)) => rx.line_error(),
            }
        }
    });
}

/// Oldest received byte not yet handed out.
pub fn read_byte() -> Option<u8> {
    interrupt::free(|cs| RX.borrow(cs).borrow_mut().pop())
}

/// Receive losses since the last call.
pub fn take_rx_faults() -> RxFaults {
    interrupt::free(|cs| RX.borrow(cs).borrow_mut().take_faults())
}

pub fn write_byte(b: u8) {
    interrupt::free(|cs| {
        if let Some(console) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
            console.write_byte(b);
        }
    });
}

pub fn write_str(s: &str) {
    for &b in s.as_bytes() {
        write_byte(b);
    }
}

/// Write string and CRLF terminator.
pub fn println(s: &str) {
    write_str(s);
    write_str("\r\n");
}

pub fn flush() {
    interrupt::free(|cs| {
        if let Some(console) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
            console.flush();
        }
    });
}
