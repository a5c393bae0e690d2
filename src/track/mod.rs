//! Track store: the immutable note chart.
//!
//! A [`Track`] is decoded once from packed chart bytes and then shared
//! read-only by every session. Per-game state never lives here.

mod chart;
pub mod lane;
pub mod slot;

use crate::error::TrackError;
use crate::timing::SUB_RESOLUTION;

pub use lane::{Lane, LaneSet};
pub use slot::TrackSlot;

/// Number of slots in the built-in chart.
pub const TRACK_LENGTH: usize = chart::BUILTIN_CHART.len();

/// Upper bound on chart length so that `len * SUB_RESOLUTION` beats fit the
/// beat counter.
pub const MAX_TRACK_LENGTH: usize = (u32::MAX / SUB_RESOLUTION) as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    slots: Vec<TrackSlot>,
}

impl Track {
    /// The chart compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            slots: chart::BUILTIN_CHART
                .iter()
                .map(|&byte| TrackSlot::from_packed(byte))
                .collect(),
        }
    }

    /// Decode a chart from packed bytes (low nibble short, high nibble sustain).
    pub fn from_packed(bytes: &[u8]) -> Result<Self, TrackError> {
        Self::from_slots(bytes.iter().map(|&byte| TrackSlot::from_packed(byte)).collect())
    }

    pub fn from_slots(slots: Vec<TrackSlot>) -> Result<Self, TrackError> {
        if slots.is_empty() {
            return Err(TrackError::Empty);
        }
        if slots.len() > MAX_TRACK_LENGTH {
            return Err(TrackError::TooLong {
                len: slots.len(),
                max: MAX_TRACK_LENGTH,
            });
        }
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; empty charts are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `None` past the end of the chart.
    pub fn slot(&self, index: usize) -> Option<&TrackSlot> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[TrackSlot] {
        &self.slots
    }

    /// Number of slots carrying note heads; each one left unhit costs a miss.
    pub fn note_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !slot.short_lanes.is_empty())
            .count()
    }

    /// Total beats until the chart is exhausted.
    pub fn total_beats(&self) -> u32 {
        self.slots.len() as u32 * SUB_RESOLUTION
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::builtin()
    }
}
