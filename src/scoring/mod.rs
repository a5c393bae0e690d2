//! Note matching and score bookkeeping.

pub mod lane_state;
pub mod ledger;
pub mod matcher;
pub mod readout;

pub use lane_state::LaneState;
pub use ledger::{
    FeedbackLevel, ScoreLedger, COMBO_THRESHOLD, DUPLICATE_PENALTY, MISS_PENALTY, NO_MATCH_PENALTY,
};
pub use matcher::{Hit, NoteMatcher, ScoreEvent};
pub use readout::{Digit, ScoreReadout};
