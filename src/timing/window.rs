//! Mapping between display columns, chart positions and scoring buckets.
//!
//! `future` is a column's offset from the far edge of the hit line: the hit
//! window spans `future` 0..=4 with the centre at 2. A note at `future` 4 is
//! still approaching (early), a note at 0 is about to leave (late).
//!
//! The chart position under a column is `future + beat - HIT_CENTER`, which
//! puts slot `s` on the centre of the hit line exactly at `beat == 5 * s`.

use crate::track::{LaneSet, Track};

use super::SUB_RESOLUTION;

/// Offset of the centre column within the hit window.
pub const HIT_CENTER: u32 = 2;

/// Columns with `future < SCORE_WINDOW` can score.
pub const SCORE_WINDOW: u32 = 5;

/// Width of the play field in columns.
pub const FIELD_COLUMNS: u32 = 16;

/// Columns of the hit window in evaluation order. Nearest to the centre
/// first; between equally distant columns the approaching note wins.
pub const SCAN_ORDER: [u32; SCORE_WINDOW as usize] = [2, 3, 1, 4, 0];

/// Display column (0 = far left, where notes enter) for an offset.
pub const fn column_for(future: u32) -> u32 {
    FIELD_COLUMNS - 1 - future
}

/// Offset for a display column.
pub const fn future_for(column: u32) -> u32 {
    FIELD_COLUMNS - 1 - column
}

/// Where a column lands on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPosition {
    /// Slot at or immediately before the column.
    pub slot: usize,
    /// Beats past that slot; 0 means the column is aligned with it.
    pub phase: u32,
}

impl ChartPosition {
    /// `None` for columns before the start of the chart.
    pub fn at(future: u32, beat: u32) -> Option<Self> {
        let position = (future + beat).checked_sub(HIT_CENTER)?;
        Some(Self {
            slot: (position / SUB_RESOLUTION) as usize,
            phase: position % SUB_RESOLUTION,
        })
    }

    pub fn is_aligned(&self) -> bool {
        self.phase == 0
    }
}

/// The notes occupying one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnNotes {
    /// Slot the notes belong to.
    pub slot: usize,
    /// Note heads (only on aligned columns).
    pub short_lanes: LaneSet,
    /// Held tails passing through the column.
    pub sustain_lanes: LaneSet,
}

impl ColumnNotes {
    /// Resolve the notes in column `future` at `beat`. `None` when the
    /// column lies before the chart or past its end.
    ///
    /// Aligned columns carry the slot's heads plus the ends of tails
    /// arriving from the previous slot. Columns between slot `s` and `s+1`
    /// carry the tails that `s+1` sustains.
    pub fn at(track: &Track, future: u32, beat: u32) -> Option<Self> {
        let position = ChartPosition::at(future, beat)?;
        if position.is_aligned() {
            let slot = track.slot(position.slot)?;
            Some(Self {
                slot: position.slot,
                short_lanes: slot.short_lanes,
                sustain_lanes: slot.sustain_lanes,
            })
        } else {
            let owner = position.slot + 1;
            let slot = track.slot(owner)?;
            Some(Self {
                slot: owner,
                short_lanes: LaneSet::empty(),
                sustain_lanes: slot.sustain_lanes,
            })
        }
    }

    pub fn lanes(&self) -> LaneSet {
        self.short_lanes | self.sustain_lanes
    }

    pub fn is_empty(&self) -> bool {
        self.lanes().is_empty()
    }
}

/// Timing bucket of a hit, by distance from the centre column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitGrade {
    /// `future` 0 or 4.
    Edge,
    /// `future` 1 or 3.
    Near,
    /// `future` 2.
    Center,
}

impl HitGrade {
    /// `None` outside the scoring window.
    pub fn from_future(future: u32) -> Option<Self> {
        match future {
            0 | 4 => Some(HitGrade::Edge),
            1 | 3 => Some(HitGrade::Near),
            2 => Some(HitGrade::Center),
            _ => None,
        }
    }

    /// Points for a hit. A centre hit earns a bonus point while the streak
    /// already exceeds three.
    pub fn points(self, combo_before: u32) -> i32 {
        match self {
            HitGrade::Edge => 1,
            HitGrade::Near => 2,
            HitGrade::Center if combo_before > 3 => 4,
            HitGrade::Center => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HitGrade::Edge => "OK",
            HitGrade::Near => "GOOD",
            HitGrade::Center => "PERFECT",
        }
    }
}

/// Duty cycle (percent) announcing the accuracy of a hit at `future`.
/// Late hits lean towards a full pulse, early hits towards an empty one.
pub fn duty_for_future(future: u32) -> Option<u8> {
    match future {
        0 => Some(98),
        1 => Some(90),
        2 => Some(50),
        3 => Some(10),
        4 => Some(2),
        _ => None,
    }
}
