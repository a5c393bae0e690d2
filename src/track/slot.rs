use super::lane::{Lane, LaneSet};

/*
Packed Slot Encoding
====================

Charts are authored as one byte per slot:

    bit  7 6 5 4 | 3 2 1 0
         sustain | short
         lanes   | lanes

  - Low nibble: short notes. Bit i set means lane i has a note that must be
    hit as the slot crosses the hit line.
  - High nibble: sustain lanes. Bit i set means the note in lane i is held
    from the previous slot through this one. The tail is drawn (and can be
    hit) on every column between the two slots, not only on aligned ones.

Example: 0x08, 0x80 is a short note in lane 3 whose tail runs into the
following slot. 0x12 is a short note in lane 1 while lane 0 keeps sustaining.

The bytes are decoded once when the track is built so the hot path works
with lane sets instead of shifting nibbles.
*/

/// One authored unit of the note chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackSlot {
    /// Lanes with a note to hit at this slot.
    pub short_lanes: LaneSet,
    /// Lanes whose note is held from the previous slot into this one.
    pub sustain_lanes: LaneSet,
}

impl TrackSlot {
    pub const EMPTY: TrackSlot = TrackSlot {
        short_lanes: LaneSet::empty(),
        sustain_lanes: LaneSet::empty(),
    };

    pub fn from_packed(byte: u8) -> Self {
        Self {
            short_lanes: LaneSet::from_bits_truncate(byte & 0x0f),
            sustain_lanes: LaneSet::from_bits_truncate(byte >> 4),
        }
    }

    /// A slot with short notes in the given lanes.
    pub fn short(lanes: LaneSet) -> Self {
        Self {
            short_lanes: lanes,
            sustain_lanes: LaneSet::empty(),
        }
    }

    /// Add sustain lanes to this slot.
    pub fn with_sustain(mut self, lanes: LaneSet) -> Self {
        self.sustain_lanes = lanes;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.short_lanes.is_empty() && self.sustain_lanes.is_empty()
    }

    pub fn has_short_note(&self, lane: Lane) -> bool {
        self.short_lanes.contains_lane(lane)
    }

    /// Every lane drawn on this slot's aligned column: short heads plus the
    /// ends of tails arriving from the previous slot.
    pub fn aligned_lanes(&self) -> LaneSet {
        self.short_lanes | self.sustain_lanes
    }
}
