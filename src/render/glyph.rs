// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Glyph level: characters become columns.

use embedded_hal::delay::DelayNs;

use crate::error::RenderError;
use crate::font::{Glyph, GlyphTable};
use crate::motors::Actuators;
use crate::render::Renderer;

impl<A, D, G> Renderer<A, D, G>
where
    A: Actuators,
    D: DelayNs,
    G: GlyphTable,
{
    /// Render the eight columns of `code`, left to right.
    ///
    /// Codes missing from the glyph table print as a blank cell. Empty columns skip the pen
    /// entirely and only feed the tape.
    pub fn render_char(&mut self, code: u8) -> Result<(), RenderError<A::Error>> {
        log::debug!("character {:#04x}", code);
        let glyph = self.glyphs.lookup(code).unwrap_or_else(|| {
            log::debug!("no glyph for {:#04x}, printing blank", code);
            Glyph::BLANK
        });

        for &mask in glyph.columns() {
            if mask == 0 {
                self.feed_column()?;
            } else {
                self.render_column(mask)?;
            }
        }
        Ok(())
    }

    /// Render each byte of `text` in order, stopping at the first error.
    pub fn render_string(&mut self, text: &[u8]) -> Result<(), RenderError<A::Error>> {
        for &code in text {
            self.render_char(code)?;
        }
        Ok(())
    }
}
