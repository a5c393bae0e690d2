//! Full-field countdown glyphs shown before a game starts.
//!
//! Each glyph is one byte per column; bit `r` lights row `r`.

use super::colour::PixelColour;
use super::{Display, FIELD_ROWS};
use crate::timing::FIELD_COLUMNS;

type GlyphColumns = [u8; FIELD_COLUMNS as usize];

const THREE: GlyphColumns = [0, 0, 0, 0, 60, 102, 96, 28, 96, 102, 60, 0, 0, 0, 0, 0];
const TWO: GlyphColumns = [0, 0, 0, 0, 60, 102, 96, 28, 12, 6, 126, 0, 0, 0, 0, 0];
const ONE: GlyphColumns = [0, 0, 0, 0, 24, 28, 24, 24, 24, 24, 60, 0, 0, 0, 0, 0];
const GO: GlyphColumns = [0, 0, 0, 0, 70, 161, 161, 165, 165, 165, 70, 0, 0, 0, 0, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Three,
    Two,
    One,
    Go,
}

impl Countdown {
    /// Glyphs in the order they are shown.
    pub const SEQUENCE: [Countdown; 4] = [Countdown::Three, Countdown::Two, Countdown::One, Countdown::Go];

    /// The glyph after this one, `None` after "GO".
    pub fn next(self) -> Option<Self> {
        match self {
            Countdown::Three => Some(Countdown::Two),
            Countdown::Two => Some(Countdown::One),
            Countdown::One => Some(Countdown::Go),
            Countdown::Go => None,
        }
    }

    fn columns(self) -> &'static GlyphColumns {
        match self {
            Countdown::Three => &THREE,
            Countdown::Two => &TWO,
            Countdown::One => &ONE,
            Countdown::Go => &GO,
        }
    }

    pub fn draw<D: Display + ?Sized>(self, display: &mut D) {
        display.clear();
        for (column, &bits) in self.columns().iter().enumerate() {
            for row in (0..FIELD_ROWS).filter(|row| (bits >> row) & 1 == 1) {
                display.set_pixel(column, row, PixelColour::GREEN);
            }
        }
    }
}
