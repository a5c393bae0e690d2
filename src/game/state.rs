use crate::audio::{AudioParams, AudioParamsWriter};
use crate::scoring::{LaneState, ScoreLedger};
use crate::timing::BeatClock;

/// Everything one play session mutates. Created fresh per game and passed
/// by reference into each component.
#[derive(Debug)]
pub struct GameState {
    pub clock: BeatClock,
    pub ledger: ScoreLedger,
    pub lanes: LaneState,
    /// Written only by the note matcher (and cleared on restart).
    pub(crate) audio: AudioParamsWriter,
}

impl GameState {
    pub fn new(track_len: usize, audio: AudioParamsWriter) -> Self {
        let mut state = Self {
            clock: BeatClock::new(track_len),
            ledger: ScoreLedger::new(),
            lanes: LaneState::new(),
            audio,
        };
        state.audio.publish(AudioParams::SILENT);
        state
    }

    pub fn beat(&self) -> u32 {
        self.clock.beat()
    }

    pub fn audio_params(&self) -> AudioParams {
        self.audio.current()
    }

    pub fn reset(&mut self) {
        self.clock.reset();
        self.ledger.reset();
        self.lanes.reset();
        self.audio.publish(AudioParams::SILENT);
    }
}
