//! Error types for the few fallible entry points of the crate.
//!
//! Gameplay itself never fails: mistimed or duplicate presses are scoring
//! outcomes, and out-of-range slots are skipped. Errors only arise when
//! building values from untrusted input (lane indices, packed chart data,
//! speed names, configuration files).

use thiserror::Error;

/// A lane index outside `0..LANE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lane index {0} is out of range (expected 0..4)")]
pub struct LaneError(pub u8);

/// Errors raised while decoding a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// A chart must contain at least one slot.
    #[error("track has no slots")]
    Empty,
    /// The chart is longer than the beat counter can address.
    #[error("track has {len} slots, at most {max} are supported")]
    TooLong { len: usize, max: usize },
}

/// Unknown speed tier name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game speed '{0}' (expected normal, fast or extreme)")]
pub struct SpeedParseError(pub String);

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("reference clock must be positive, got {0} Hz")]
    ReferenceClock(u32),
    #[error("bridge rate must be between 1 Hz and {max} Hz, got {got} Hz")]
    BridgeRate { got: u32, max: u32 },
    #[error("volume must be within 0.0..=1.0, got {0}")]
    Volume(f32),
}
