//! Play session: the game state aggregate and the operations the drivers
//! call on it.
//!
//! ```
//! use std::sync::Arc;
//! use hitline::{audio::audio_params, game::Game, track::{Lane, Track}};
//!
//! let (writer, _reader) = audio_params();
//! let mut game = Game::new(Arc::new(Track::builtin()), writer);
//! while let Some(_report) = game.advance() {
//!     // draw, poll input, ...
//! }
//! assert!(game.is_game_over());
//! assert_eq!(game.on_lane_pressed(Lane::ALL[0]).delta, 0);
//! ```

mod state;

use std::sync::Arc;

use tracing::{debug, info};

use crate::audio::{AudioParams, AudioParamsWriter};
use crate::scoring::{FeedbackLevel, NoteMatcher, ScoreEvent};
use crate::timing::{ClockStep, TickReceiver};
use crate::track::{Lane, Track};

pub use state::GameState;

/// Result of one beat clock advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceReport {
    pub step: ClockStep,
    /// Slot whose note left the hit window unhit (a miss penalty was applied).
    pub missed_slot: Option<usize>,
    /// The advance exhausted the track.
    pub game_over: bool,
}

impl AdvanceReport {
    /// A beat group closed, so every pixel of the field needs redrawing.
    pub fn closed_group(&self) -> bool {
        self.step.closed_slot.is_some()
    }
}

pub struct Game {
    track: Arc<Track>,
    state: GameState,
    matcher: NoteMatcher,
}

impl Game {
    pub fn new(track: Arc<Track>, audio: AudioParamsWriter) -> Self {
        let state = GameState::new(track.len(), audio);
        Self {
            track,
            state,
            matcher: NoteMatcher::new(),
        }
    }

    /// Throw away the session and start over from beat 0.
    pub fn restart(&mut self) {
        self.state.reset();
        debug!("game restarted");
    }

    /// Beat clock tick. `None` once the track is exhausted.
    pub fn advance(&mut self) -> Option<AdvanceReport> {
        let step = self.state.clock.advance()?;
        let mut missed_slot = None;

        if let Some(slot) = step.closed_slot {
            let has_note = self
                .track
                .slot(slot)
                .is_some_and(|s| !s.short_lanes.is_empty());
            // A hit on another slot (a neighbouring tail) does not save this one.
            if has_note && self.state.lanes.hit_slot() != Some(slot) {
                self.state.ledger.penalize_miss();
                missed_slot = Some(slot);
                debug!(slot, score = self.state.ledger.score(), "note missed");
            }
            self.state.lanes.reset();
        }

        let game_over = self.state.clock.is_game_over();
        if game_over {
            info!(
                score = self.state.ledger.score(),
                beats = step.beat,
                "track finished"
            );
        }

        Some(AdvanceReport {
            step,
            missed_slot,
            game_over,
        })
    }

    /// Apply every pending clock tick in order. Ticks that arrive after the
    /// track has ended are discarded.
    pub fn advance_pending<R: TickReceiver + ?Sized>(&mut self, ticks: &mut R) -> Vec<AdvanceReport> {
        let mut reports = Vec::new();
        while ticks.pop().is_some() {
            if let Some(report) = self.advance() {
                reports.push(report);
            }
        }
        reports
    }

    pub fn on_lane_pressed(&mut self, lane: Lane) -> ScoreEvent {
        self.matcher.on_lane_pressed(&self.track, &mut self.state, lane)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.clock.is_game_over()
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn beat(&self) -> u32 {
        self.state.beat()
    }

    pub fn score(&self) -> i32 {
        self.state.ledger.score()
    }

    pub fn combo(&self) -> u32 {
        self.state.ledger.combo()
    }

    pub fn feedback(&self) -> FeedbackLevel {
        self.state.ledger.feedback()
    }

    pub fn audio_params(&self) -> AudioParams {
        self.state.audio_params()
    }
}
