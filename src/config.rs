//! Session configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```toml
//! speed = "fast"
//! volume = 0.2
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::audio::{DEFAULT_BRIDGE_RATE_HZ, DEFAULT_REFERENCE_CLOCK_HZ};
use crate::error::ConfigError;
use crate::timing::GameSpeed;

/// Highest supported bridge update rate.
pub const MAX_BRIDGE_RATE_HZ: u32 = 48_000;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub speed: GameSpeed,
    /// Start in manual mode: the beat clock only advances on request.
    pub manual_mode: bool,
    /// Timer clock the PWM period and compare values are counted in.
    pub reference_clock_hz: u32,
    /// How often the audio bridge re-reads the pitch and duty.
    pub bridge_rate_hz: u32,
    /// Output level of the pulse wave, 0.0-1.0.
    pub volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: GameSpeed::Normal,
            manual_mode: false,
            reference_clock_hz: DEFAULT_REFERENCE_CLOCK_HZ,
            bridge_rate_hz: DEFAULT_BRIDGE_RATE_HZ,
            volume: 0.25,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_clock_hz == 0 {
            return Err(ConfigError::ReferenceClock(self.reference_clock_hz));
        }
        if !(1..=MAX_BRIDGE_RATE_HZ).contains(&self.bridge_rate_hz) {
            return Err(ConfigError::BridgeRate {
                got: self.bridge_rate_hz,
                max: MAX_BRIDGE_RATE_HZ,
            });
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::Volume(self.volume));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = GameConfig {
            bridge_rate_hz: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::BridgeRate { got: 0, .. })));

        let config = GameConfig {
            volume: 1.5,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Volume(1.5)));

        let config = GameConfig {
            reference_clock_hz: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ReferenceClock(0)));
    }

    #[test]
    fn nan_volume_is_rejected() {
        let config = GameConfig {
            volume: f32::NAN,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
