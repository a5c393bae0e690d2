//! Audio feedback: the shared pitch/duty pair, the bridge that turns it
//! into PWM timer values, and a square-wave output stage.
//!
//! Threads involved:
//!   - the game loop writes pitch and duty (through [`AudioParamsWriter`])
//!   - the audio callback runs the [`AudioBridge`] at a fixed high rate and
//!     renders the resulting pulse wave
//!
//! Every cross-thread value is a single packed atomic with exactly one
//! writer, so a reader always sees a consistent pair.

pub mod bridge;
pub mod params;
pub mod pitch;
pub mod pulse;

pub use bridge::{waveform, AudioBridge, PwmFrame, WaveformReader, WaveformWriter, DEFAULT_REFERENCE_CLOCK_HZ};
pub use params::{audio_params, AudioParams, AudioParamsReader, AudioParamsWriter};
pub use pitch::lane_pitch;
pub use pulse::{AudioOutputStage, PulseOscillator, DEFAULT_BRIDGE_RATE_HZ};
