use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SpeedParseError;

use super::SUB_RESOLUTION;

/// Scroll speed tier. Each tier fixes how long one track slot takes to move
/// past a column; the beat clock ticks `SUB_RESOLUTION` times per slot.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameSpeed {
    #[default]
    Normal,
    Fast,
    Extreme,
}

impl GameSpeed {
    pub const ALL: [GameSpeed; 3] = [GameSpeed::Normal, GameSpeed::Fast, GameSpeed::Extreme];

    pub fn slot_period(self) -> Duration {
        match self {
            GameSpeed::Normal => Duration::from_millis(1000),
            GameSpeed::Fast => Duration::from_millis(500),
            GameSpeed::Extreme => Duration::from_millis(250),
        }
    }

    /// Interval between beat clock ticks.
    pub fn tick_interval(self) -> Duration {
        self.slot_period() / SUB_RESOLUTION
    }

    pub fn label(self) -> &'static str {
        match self {
            GameSpeed::Normal => "Normal",
            GameSpeed::Fast => "Fast",
            GameSpeed::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for GameSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameSpeed {
    type Err = SpeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "1" => Ok(GameSpeed::Normal),
            "fast" | "2" => Ok(GameSpeed::Fast),
            "extreme" | "3" => Ok(GameSpeed::Extreme),
            _ => Err(SpeedParseError(s.to_string())),
        }
    }
}
