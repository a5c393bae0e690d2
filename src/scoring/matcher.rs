//! Note matcher: turns a lane press into a score event.
//!
//! Rules, per beat group (the beats one slot spends in the hit window):
//!
//!   - Only the first press of a group may score. It is matched against the
//!     window columns in [`SCAN_ORDER`]; the first column carrying a note in
//!     the pressed lane wins and is graded by its distance from the centre.
//!   - A first press that matches nothing costs [`NO_MATCH_PENALTY`].
//!   - Every later press costs [`DUPLICATE_PENALTY`], plus the no-match
//!     penalty while the group still has no hit.
//!
//! A hit publishes the lane's pitch and a duty cycle encoding the timing, so
//! the audio output tells the player how early or late they were.

use tracing::{debug, trace};

use crate::audio::{lane_pitch, AudioParams};
use crate::game::GameState;
use crate::timing::window::{duty_for_future, HitGrade, SCAN_ORDER};
use crate::timing::ColumnNotes;
use crate::track::{Lane, Track};

use super::ledger::{DUPLICATE_PENALTY, NO_MATCH_PENALTY};

/// A matched note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub lane: Lane,
    /// Slot the note belongs to.
    pub slot: usize,
    /// Column offset the note was hit at (0..=4).
    pub future: u32,
    pub grade: HitGrade,
    pub duty_percentage: u8,
    /// The press landed on a held tail rather than a note head.
    pub sustain: bool,
}

/// Outcome of one press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEvent {
    /// Net score change caused by the press.
    pub delta: i32,
    pub combo_extended: bool,
    /// Duty cycle published after the press.
    pub duty_percentage: u8,
    /// Pitch published after the press.
    pub pitch: Option<f32>,
    pub hit: Option<Hit>,
}

impl ScoreEvent {
    /// A press that changed nothing (e.g. after the track ended).
    pub fn unchanged(params: AudioParams) -> Self {
        Self {
            delta: 0,
            combo_extended: false,
            duty_percentage: params.duty_percentage,
            pitch: params.pitch,
            hit: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoteMatcher;

impl NoteMatcher {
    pub fn new() -> Self {
        Self
    }

    /// The note `lane` would hit at `beat`, ignoring group state.
    ///
    /// Note heads anywhere in the window are tried before held tails, so a
    /// head is always graded by its own timing even when its tail already
    /// covers a column nearer the centre.
    pub fn find_match(&self, track: &Track, beat: u32, lane: Lane) -> Option<Hit> {
        self.scan(track, beat, lane, false)
            .or_else(|| self.scan(track, beat, lane, true))
    }

    fn scan(&self, track: &Track, beat: u32, lane: Lane, sustain: bool) -> Option<Hit> {
        SCAN_ORDER.into_iter().find_map(|future| {
            let notes = ColumnNotes::at(track, future, beat)?;
            let lanes = if sustain {
                notes.sustain_lanes
            } else {
                notes.short_lanes
            };
            if !lanes.contains_lane(lane) {
                return None;
            }
            Some(Hit {
                lane,
                slot: notes.slot,
                future,
                grade: HitGrade::from_future(future)?,
                duty_percentage: duty_for_future(future)?,
                sustain,
            })
        })
    }

    pub fn on_lane_pressed(&self, track: &Track, state: &mut GameState, lane: Lane) -> ScoreEvent {
        if state.clock.is_game_over() {
            return ScoreEvent::unchanged(state.audio.current());
        }

        let beat = state.clock.beat();
        let mut delta = 0;
        let mut hit = None;

        if state.lanes.is_pressed() {
            trace!(beat, %lane, "duplicate press");
            state.ledger.apply(DUPLICATE_PENALTY, false);
            delta += DUPLICATE_PENALTY;
        } else {
            hit = self.find_match(track, beat, lane);
        }

        match hit {
            Some(hit) => {
                let points = hit.grade.points(state.ledger.combo());
                state.ledger.apply(points, true);
                delta += points;
                state.lanes.record_hit(lane, hit.slot);
                state.audio.publish(AudioParams {
                    pitch: Some(lane_pitch(lane)),
                    duty_percentage: hit.duty_percentage,
                });
                debug!(
                    beat,
                    %lane,
                    slot = hit.slot,
                    future = hit.future,
                    grade = hit.grade.label(),
                    points,
                    "note hit"
                );
            }
            None if !state.lanes.has_match() => {
                state.ledger.apply(NO_MATCH_PENALTY, false);
                delta += NO_MATCH_PENALTY;
                trace!(beat, %lane, "press matched no note");
            }
            None => {}
        }

        state.lanes.mark_pressed();

        let params = state.audio.current();
        ScoreEvent {
            delta,
            combo_extended: hit.is_some(),
            duty_percentage: params.duty_percentage,
            pitch: params.pitch,
            hit,
        }
    }
}
