/// Penalty for a second press within one beat group.
pub const DUPLICATE_PENALTY: i32 = -1;
/// Penalty for a press that matches no note in the hit window.
pub const NO_MATCH_PENALTY: i32 = -1;
/// Penalty for a note that leaves the hit window unhit.
pub const MISS_PENALTY: i32 = -1;
/// Streak length from which the field turns orange and the banner shows.
pub const COMBO_THRESHOLD: u32 = 3;

/// Three-light streak indicator derived from the combo counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeedbackLevel(u8);

impl FeedbackLevel {
    pub const MAX: u8 = 3;

    pub fn from_combo(combo: u32) -> Self {
        Self(combo.min(Self::MAX as u32) as u8)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Indicator light bits, lights on outputs 1..=3.
    pub fn indicator_mask(self) -> u8 {
        match self.0 {
            0 => 0,
            1 => 0b0010,
            2 => 0b0110,
            _ => 0b1110,
        }
    }

    /// Which of the three lights are lit, left to right.
    pub fn lights(self) -> [bool; 3] {
        [self.0 >= 1, self.0 >= 2, self.0 >= 3]
    }
}

/// Score and combo bookkeeping. The only writer of either value.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    score: i32,
    combo: u32,
    feedback: FeedbackLevel,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to the score (no clamping). Extends the streak when
    /// `combo_extended`, otherwise breaks it.
    pub fn apply(&mut self, delta: i32, combo_extended: bool) -> FeedbackLevel {
        self.score += delta;
        if combo_extended {
            self.combo += 1;
        } else {
            self.combo = 0;
        }
        self.feedback = FeedbackLevel::from_combo(self.combo);
        self.feedback
    }

    /// A note passed the hit window without being hit.
    pub fn penalize_miss(&mut self) -> FeedbackLevel {
        self.apply(MISS_PENALTY, false)
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn feedback(&self) -> FeedbackLevel {
        self.feedback
    }

    pub fn on_streak(&self) -> bool {
        self.combo >= COMBO_THRESHOLD
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
