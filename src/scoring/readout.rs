//! Two-digit seven-segment score readout.

/// Segment patterns for 0-9 (bit 0 = segment a ... bit 6 = segment g).
const DIGIT_SEGMENTS: [u8; 10] = [63, 6, 91, 79, 102, 109, 125, 7, 127, 111];
/// Segment g alone, used as a minus sign.
const DASH_SEGMENTS: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digit {
    Blank,
    Value(u8),
    Dash,
}

impl Digit {
    pub fn segments(self) -> u8 {
        match self {
            Digit::Blank => 0,
            Digit::Value(d) => DIGIT_SEGMENTS[(d % 10) as usize],
            Digit::Dash => DASH_SEGMENTS,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Digit::Blank => ' ',
            Digit::Value(d) => char::from(b'0' + d % 10),
            Digit::Dash => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReadout {
    pub tens: Digit,
    pub ones: Digit,
}

impl ScoreReadout {
    /// Scores below -9 show `--`, other negatives `-d`. Leading zeros are
    /// blank, and scores of 100 or more overflow to a lone `0`.
    pub fn from_score(score: i32) -> Self {
        let (tens, ones) = match score {
            i32::MIN..=-10 => (Digit::Dash, Digit::Dash),
            -9..=-1 => (Digit::Dash, Digit::Value((-score) as u8)),
            0..=9 => (Digit::Blank, Digit::Value(score as u8)),
            10..=99 => (Digit::Value((score / 10) as u8), Digit::Value((score % 10) as u8)),
            _ => (Digit::Blank, Digit::Value(0)),
        };
        Self { tens, ones }
    }

    /// Segment bytes, tens digit first.
    pub fn segments(&self) -> [u8; 2] {
        [self.tens.segments(), self.ones.segments()]
    }
}

impl std::fmt::Display for ScoreReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tens.as_char(), self.ones.as_char())
    }
}
