// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Glyph Tables
//!
//! A glyph is eight column bitmasks. Bit 0 of a column is the bottom dot row, which is the row the
//! pen visits first; higher bits are rows further up the tape.
//!
//! The encoder only sees the [`GlyphTable`] trait. [`ASCII`] is the built-in table for the
//! printable ASCII range.

mod ascii5x7;

/// Columns per glyph.
pub const GLYPH_COLUMNS: usize = 8;

/// Immutable column bitmap of one character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph([u8; GLYPH_COLUMNS]);

impl Glyph {
    /// Eight empty columns. Printed as a space.
    pub const BLANK: Self = Self([0; GLYPH_COLUMNS]);

    pub const fn new(columns: [u8; GLYPH_COLUMNS]) -> Self {
        Self(columns)
    }

    #[inline]
    pub const fn columns(&self) -> &[u8; GLYPH_COLUMNS] {
        &self.0
    }

    /// Number of dot rows needed by the tallest column.
    pub const fn dot_rows(&self) -> u8 {
        let mut all = 0u8;
        let mut i = 0;
        while i < GLYPH_COLUMNS {
            all |= self.0[i];
            i += 1;
        }
        (u8::BITS - all.leading_zeros()) as u8
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&column| column == 0)
    }
}

/// Lookup from a single-byte character code to its glyph.
pub trait GlyphTable {
    /// Glyph for `code`, or `None` when the table does not define it.
    fn lookup(&self, code: u8) -> Option<Glyph>;

    /// Dot rows needed by the tallest glyph in the table.
    fn dot_rows(&self) -> u8;
}

impl<T: GlyphTable + ?Sized> GlyphTable for &T {
    #[inline]
    fn lookup(&self, code: u8) -> Option<Glyph> {
        (**self).lookup(code)
    }

    #[inline]
    fn dot_rows(&self) -> u8 {
        (**self).dot_rows()
    }
}

/// Contiguous table of glyphs starting at character code `first`.
#[derive(Copy, Clone, Debug)]
pub struct BitmapFont {
    first: u8,
    glyphs: &'static [Glyph],
    dot_rows: u8,
}

impl BitmapFont {
    pub const fn new(first: u8, glyphs: &'static [Glyph]) -> Self {
        let mut dot_rows = 0;
        let mut i = 0;
        while i < glyphs.len() {
            let rows = glyphs[i].dot_rows();
            if rows > dot_rows {
                dot_rows = rows;
            }
            i += 1;
        }
        Self {
            first,
            glyphs,
            dot_rows,
        }
    }

    /// First character code covered by the table.
    #[inline]
    pub const fn first(&self) -> u8 {
        self.first
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphTable for BitmapFont {
    fn lookup(&self, code: u8) -> Option<Glyph> {
        let index = code.checked_sub(self.first)?;
        self.glyphs.get(index as usize).copied()
    }

    #[inline]
    fn dot_rows(&self) -> u8 {
        self.dot_rows
    }
}

/// 5×7 face for codes 0x20..=0x7E.
pub static ASCII: BitmapFont = BitmapFont::new(ascii5x7::FIRST, &ascii5x7::GLYPHS);
