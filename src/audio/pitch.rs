use crate::track::Lane;

/// Fixed tone per lane: C5, D#5, F5, G5 (MIDI notes 72, 75, 77, 79).
pub const LANE_PITCHES_HZ: [f32; Lane::COUNT] = [523.2511, 622.2540, 698.4565, 783.9909];

pub fn lane_pitch(lane: Lane) -> f32 {
    LANE_PITCHES_HZ[lane.index()]
}
