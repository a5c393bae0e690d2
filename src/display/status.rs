use crate::game::Game;
use crate::scoring::{FeedbackLevel, ScoreReadout};
use crate::timing::GameSpeed;

/// Snapshot of everything the status panel shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReport {
    pub score: i32,
    pub combo: u32,
    pub feedback: FeedbackLevel,
    pub readout: ScoreReadout,
    pub speed: GameSpeed,
    pub manual_mode: bool,
    pub paused: bool,
    pub game_over: bool,
    /// Show the "COMBO!" banner.
    pub combo_banner: bool,
}

impl StatusReport {
    pub fn new(game: &Game, speed: GameSpeed, manual_mode: bool, paused: bool) -> Self {
        let ledger = &game.state().ledger;
        Self {
            score: ledger.score(),
            combo: ledger.combo(),
            feedback: ledger.feedback(),
            readout: ScoreReadout::from_score(ledger.score()),
            speed,
            manual_mode,
            paused,
            game_over: game.is_game_over(),
            combo_banner: ledger.on_streak(),
        }
    }

    pub fn score_line(&self) -> String {
        format!("Game Score: {:5}", self.score)
    }

    pub fn combo_line(&self) -> String {
        format!("Combo Count: {:4}", self.combo)
    }

    pub fn speed_line(&self) -> String {
        format!("Game Speed: {}", self.speed)
    }

    pub fn manual_line(&self) -> &'static str {
        if self.manual_mode {
            "Manual Mode ON"
        } else {
            "Manual Mode OFF"
        }
    }
}

/// Receives status updates; the terminal panel in the front end, a log, or
/// a `Vec` in tests.
pub trait StatusSink {
    fn report(&mut self, status: &StatusReport);
}

impl StatusSink for Vec<StatusReport> {
    fn report(&mut self, status: &StatusReport) {
        self.push(*status);
    }
}

/// Forwards a report to a sink only when it differs from the last one sent.
#[derive(Debug, Default)]
pub struct StatusReporter {
    last: Option<StatusReport>,
}

impl StatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the sink was called.
    pub fn update<S: StatusSink + ?Sized>(&mut self, status: StatusReport, sink: &mut S) -> bool {
        if self.last.as_ref() == Some(&status) {
            return false;
        }
        sink.report(&status);
        self.last = Some(status);
        true
    }

    pub fn last(&self) -> Option<&StatusReport> {
        self.last.as_ref()
    }

    /// Forget the last report so the next update is always forwarded.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
