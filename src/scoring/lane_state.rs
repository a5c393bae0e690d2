use crate::track::{Lane, LaneSet};

/// Transient per-group input state. Cleared whenever a beat group closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneState {
    pressed: bool,
    hit_lanes: LaneSet,
    hit_slot: Option<usize>,
}

impl LaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any lane was pressed in this group.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether a note was already matched in this group.
    pub fn has_match(&self) -> bool {
        self.hit_slot.is_some()
    }

    pub fn hit_lanes(&self) -> LaneSet {
        self.hit_lanes
    }

    pub fn hit_slot(&self) -> Option<usize> {
        self.hit_slot
    }

    /// True when `lane` of `slot` was hit in this group; drawn as matched.
    pub fn is_hit(&self, slot: usize, lane: Lane) -> bool {
        self.hit_slot == Some(slot) && self.hit_lanes.contains_lane(lane)
    }

    pub(crate) fn mark_pressed(&mut self) {
        self.pressed = true;
    }

    pub(crate) fn record_hit(&mut self, lane: Lane, slot: usize) {
        self.hit_lanes |= lane.mask();
        self.hit_slot = Some(slot);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
