// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Recording mocks shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use minitelegraph::config::{Geometry, PrinterConfig};
use minitelegraph::font::{BitmapFont, Glyph, GlyphTable, ASCII};
use minitelegraph::motors::Actuators;
use minitelegraph::render::Renderer;

/// One command seen by the mocks, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Pen(u8),
    Lift(u8),
    Feed(u16),
    DelayMs(u32),
    DelayNs(u32),
    Attach,
    Detach,
}

pub type Recording = Rc<RefCell<Vec<Call>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault;

/// Actuators that record every command and can be told to fail.
pub struct MockActuators {
    calls: Recording,
    /// Motion commands (pen, lift, feed) accepted before every further one fails.
    pub fail_after: Option<usize>,
    pub fail_detach: bool,
    moves: usize,
}

impl MockActuators {
    pub fn new(calls: Recording) -> Self {
        Self {
            calls,
            fail_after: None,
            fail_detach: false,
            moves: 0,
        }
    }

    fn motion(&mut self, call: Call) -> Result<(), Fault> {
        if self.fail_after.is_some_and(|limit| self.moves >= limit) {
            return Err(Fault);
        }
        self.moves += 1;
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Actuators for MockActuators {
    type Error = Fault;

    fn set_pen_angle(&mut self, angle: u8) -> Result<(), Fault> {
        self.motion(Call::Pen(angle))
    }

    fn set_paper_lift_angle(&mut self, angle: u8) -> Result<(), Fault> {
        self.motion(Call::Lift(angle))
    }

    fn advance_feed(&mut self, steps: u16) -> Result<(), Fault> {
        self.motion(Call::Feed(steps))
    }

    fn attach(&mut self) -> Result<(), Fault> {
        self.calls.borrow_mut().push(Call::Attach);
        Ok(())
    }

    fn detach(&mut self) -> Result<(), Fault> {
        self.calls.borrow_mut().push(Call::Detach);
        if self.fail_detach {
            Err(Fault)
        } else {
            Ok(())
        }
    }
}

/// Delay that returns at once and records how long it was asked to wait.
pub struct MockDelay {
    calls: Recording,
}

impl MockDelay {
    pub fn new(calls: Recording) -> Self {
        Self { calls }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls.borrow_mut().push(Call::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.borrow_mut().push(Call::DelayMs(ms));
    }
}

/// Glyph table built from a handful of entries.
#[derive(Default)]
pub struct TestFont {
    glyphs: BTreeMap<u8, Glyph>,
}

impl TestFont {
    pub fn with(mut self, code: u8, columns: [u8; 8]) -> Self {
        self.glyphs.insert(code, Glyph::new(columns));
        self
    }
}

impl GlyphTable for TestFont {
    fn lookup(&self, code: u8) -> Option<Glyph> {
        self.glyphs.get(&code).copied()
    }

    fn dot_rows(&self) -> u8 {
        self.glyphs.values().map(Glyph::dot_rows).max().unwrap_or(0)
    }
}

pub type TestRenderer<G> = Renderer<MockActuators, MockDelay, G>;

pub fn default_geometry() -> Geometry {
    PrinterConfig::DEFAULT.validate().unwrap()
}

pub fn renderer_with<G: GlyphTable>(
    geometry: Geometry,
    glyphs: G,
) -> (TestRenderer<G>, Recording) {
    let calls = Recording::default();
    let renderer = Renderer::new(
        geometry,
        MockActuators::new(calls.clone()),
        MockDelay::new(calls.clone()),
        glyphs,
    )
    .unwrap();
    (renderer, calls)
}

/// Renderer over the built-in ASCII font and the default geometry.
pub fn ascii_renderer() -> (TestRenderer<&'static BitmapFont>, Recording) {
    renderer_with(default_geometry(), &ASCII)
}

/// Take everything recorded so far.
pub fn drain(calls: &Recording) -> Vec<Call> {
    std::mem::take(&mut *calls.borrow_mut())
}

pub fn pen_angles(calls: &[Call]) -> Vec<u8> {
    calls
        .iter()
        .filter_map(|c| match c {
            Call::Pen(a) => Some(*a),
            _ => None,
        })
        .collect()
}

pub fn lift_angles(calls: &[Call]) -> Vec<u8> {
    calls
        .iter()
        .filter_map(|c| match c {
            Call::Lift(a) => Some(*a),
            _ => None,
        })
        .collect()
}

pub fn feeds(calls: &[Call]) -> usize {
    calls.iter().filter(|c| matches!(c, Call::Feed(_))).count()
}
