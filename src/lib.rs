pub mod audio; // Pitch/duty hand-off and PWM bridge
pub mod config;
pub mod display; // LED matrix play field and status output
pub mod error;
pub mod game;
pub mod scoring; // Note matching, score and combo
pub mod timing; // Beat clock and hit window
pub mod track;

pub use config::GameConfig;
pub use error::{ConfigError, LaneError, SpeedParseError, TrackError};
pub use game::{AdvanceReport, Game, GameState};
