//! Beat clock, hit-window geometry and speed tiers.
//!
//! Time advances in discrete beats. Five beats of on-screen motion make one
//! track slot, so a note scrolls one matrix column per beat and consecutive
//! slots sit five columns apart.

pub mod clock;
#[cfg(feature = "rtrb")]
pub mod driver;
pub mod message;
pub mod speed;
pub mod window;

pub use clock::{BeatClock, ClockStep};
#[cfg(feature = "rtrb")]
pub use driver::BeatDriver;
pub use message::{ClockTick, TickReceiver};
pub use speed::GameSpeed;
pub use window::{ChartPosition, ColumnNotes, HitGrade, FIELD_COLUMNS, HIT_CENTER, SCORE_WINDOW};

/// Beats of on-screen motion per track slot (sub-pixel scroll resolution).
pub const SUB_RESOLUTION: u32 = 5;

/// True exactly when every slot of a `track_len`-slot chart has scrolled past.
pub fn is_game_over(beat: u32, track_len: usize) -> bool {
    (beat / SUB_RESOLUTION) as usize == track_len
}
