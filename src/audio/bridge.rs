//! Audio parameter bridge: pitch and duty in, PWM period and pulse width out.
//!
//! The bridge models a timer running from a fixed reference clock. A tone of
//! `pitch` Hz needs a counter period of `reference / pitch` clock cycles, and
//! a duty cycle of `d` percent keeps the output high for `d * period / 100`
//! of them. The transform is stateless, so calling it again with the same
//! inputs republishes the same frame.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::params::{AudioParams, AudioParamsReader};

/// Timer reference clock (1 MHz).
pub const DEFAULT_REFERENCE_CLOCK_HZ: u32 = 1_000_000;

/// Instantaneous waveform parameters, in reference clock cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PwmFrame {
    pub period: u32,
    pub pulse_width: u32,
}

impl PwmFrame {
    pub const SILENT: PwmFrame = PwmFrame {
        period: 0,
        pulse_width: 0,
    };

    /// Derive the frame for `params`. Unset or non-positive pitch is silent.
    pub fn derive(params: AudioParams, reference_clock_hz: u32) -> Self {
        let Some(pitch) = params.pitch.filter(|p| *p > 0.0) else {
            return Self::SILENT;
        };

        let period = (reference_clock_hz as f64 / pitch as f64).round();
        if !(1.0..=u32::MAX as f64).contains(&period) {
            return Self::SILENT;
        }
        let period = period as u32;

        let duty = params.duty_percentage.min(100) as u64;
        // Integer round-half-up of duty * period / 100.
        let pulse_width = ((duty * period as u64 + 50) / 100) as u32;

        Self {
            period,
            pulse_width,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.period == 0 || self.pulse_width == 0
    }

    /// Timer register values: counter top is one less than the period, the
    /// compare value one less than the pulse width (0 when there is no pulse).
    pub fn compare_values(&self) -> (u32, u32) {
        (
            self.period.saturating_sub(1),
            self.pulse_width.saturating_sub(1),
        )
    }

    /// Output tone for this frame, `None` when silent.
    pub fn frequency_hz(&self, reference_clock_hz: u32) -> Option<f32> {
        (!self.is_silent()).then(|| reference_clock_hz as f32 / self.period as f32)
    }

    /// Fraction of the period spent high.
    pub fn duty(&self) -> f32 {
        if self.period == 0 {
            0.0
        } else {
            (self.pulse_width as f32 / self.period as f32).min(1.0)
        }
    }

    fn pack(self) -> u64 {
        ((self.period as u64) << 32) | self.pulse_width as u64
    }

    fn unpack(word: u64) -> Self {
        Self {
            period: (word >> 32) as u32,
            pulse_width: word as u32,
        }
    }
}

/// Create the cell the bridge publishes frames into.
pub fn waveform() -> (WaveformWriter, WaveformReader) {
    let shared = Arc::new(AtomicU64::new(PwmFrame::SILENT.pack()));
    (
        WaveformWriter {
            shared: shared.clone(),
        },
        WaveformReader { shared },
    )
}

/// Write end, owned by the bridge.
#[derive(Debug)]
pub struct WaveformWriter {
    shared: Arc<AtomicU64>,
}

impl WaveformWriter {
    fn publish(&mut self, frame: PwmFrame) {
        self.shared.store(frame.pack(), Ordering::Release);
    }
}

#[derive(Debug, Clone)]
pub struct WaveformReader {
    shared: Arc<AtomicU64>,
}

impl WaveformReader {
    pub fn load(&self) -> PwmFrame {
        PwmFrame::unpack(self.shared.load(Ordering::Acquire))
    }
}

/// Free-running transform from shared audio parameters to waveform frames.
pub struct AudioBridge {
    params: AudioParamsReader,
    output: WaveformWriter,
    reference_clock_hz: u32,
}

impl AudioBridge {
    pub fn new(params: AudioParamsReader, output: WaveformWriter, reference_clock_hz: u32) -> Self {
        Self {
            params,
            output,
            reference_clock_hz,
        }
    }

    pub fn reference_clock_hz(&self) -> u32 {
        self.reference_clock_hz
    }

    /// Read the current parameters, derive the frame and publish it.
    pub fn tick(&mut self) -> PwmFrame {
        let frame = PwmFrame::derive(self.params.load(), self.reference_clock_hz);
        self.output.publish(frame);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::params::audio_params;

    fn params(pitch: f32, duty: u8) -> AudioParams {
        AudioParams {
            pitch: Some(pitch),
            duty_percentage: duty,
        }
    }

    #[test]
    fn derives_period_and_pulse() {
        let frame = PwmFrame::derive(params(523.2511, 50), DEFAULT_REFERENCE_CLOCK_HZ);
        // 1e6 / 523.2511 = 1911.13
        assert_eq!(frame.period, 1911);
        // 50 * 1911 / 100 = 955.5
        assert_eq!(frame.pulse_width, 956);
        assert_eq!(frame.compare_values(), (1910, 955));
    }

    #[test]
    fn unset_pitch_is_silent() {
        let frame = PwmFrame::derive(AudioParams::SILENT, DEFAULT_REFERENCE_CLOCK_HZ);
        assert_eq!(frame, PwmFrame::SILENT);
        assert!(frame.is_silent());
        assert_eq!(frame.compare_values(), (0, 0));
        assert_eq!(frame.frequency_hz(DEFAULT_REFERENCE_CLOCK_HZ), None);
    }

    #[test]
    fn zero_duty_forces_empty_pulse() {
        let frame = PwmFrame::derive(params(783.9909, 0), DEFAULT_REFERENCE_CLOCK_HZ);
        assert_eq!(frame.period, 1276);
        assert_eq!(frame.pulse_width, 0);
        assert!(frame.is_silent());
    }

    #[test]
    fn tick_is_idempotent() {
        let (mut writer, reader) = audio_params();
        let (out, frames) = waveform();
        let mut bridge = AudioBridge::new(reader, out, DEFAULT_REFERENCE_CLOCK_HZ);

        writer.publish(params(698.4565, 10));
        let first = bridge.tick();
        let second = bridge.tick();
        assert_eq!(first, second);
        assert_eq!(frames.load(), first);
        assert_eq!(first.period, 1432);
        assert_eq!(first.pulse_width, 143);
    }

    #[test]
    fn bridge_follows_new_parameters() {
        let (mut writer, reader) = audio_params();
        let (out, frames) = waveform();
        let mut bridge = AudioBridge::new(reader, out, DEFAULT_REFERENCE_CLOCK_HZ);

        assert_eq!(bridge.tick(), PwmFrame::SILENT);
        writer.publish(params(622.2540, 98));
        let frame = bridge.tick();
        assert_eq!(frame.period, 1607);
        assert_eq!(frame.pulse_width, 1575);
        assert_eq!(frames.load(), frame);
    }
}
