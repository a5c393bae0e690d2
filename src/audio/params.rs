use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The pitch/duty pair the note matcher publishes on every hit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AudioParams {
    /// Tone in Hz. `None` until the first hit of a session.
    pub pitch: Option<f32>,
    /// Pulse on-time, 0-100.
    pub duty_percentage: u8,
}

impl AudioParams {
    pub const SILENT: AudioParams = AudioParams {
        pitch: None,
        duty_percentage: 0,
    };

    // Layout: pitch f32 bits in the high word, duty in the low byte.
    fn pack(self) -> u64 {
        let pitch_bits = self.pitch.unwrap_or(0.0).to_bits() as u64;
        (pitch_bits << 32) | self.duty_percentage.min(100) as u64
    }

    fn unpack(word: u64) -> Self {
        let pitch = f32::from_bits((word >> 32) as u32);
        Self {
            pitch: (pitch.is_finite() && pitch > 0.0).then_some(pitch),
            duty_percentage: (word & 0xff) as u8,
        }
    }
}

/// Create the single-writer, many-reader cell for audio parameters.
pub fn audio_params() -> (AudioParamsWriter, AudioParamsReader) {
    let shared = Arc::new(AtomicU64::new(AudioParams::SILENT.pack()));
    (
        AudioParamsWriter {
            shared: shared.clone(),
            current: AudioParams::SILENT,
        },
        AudioParamsReader { shared },
    )
}

/// Write end. Not `Clone`: whoever holds it is the only writer.
#[derive(Debug)]
pub struct AudioParamsWriter {
    shared: Arc<AtomicU64>,
    current: AudioParams,
}

impl AudioParamsWriter {
    pub fn publish(&mut self, params: AudioParams) {
        let params = AudioParams {
            duty_percentage: params.duty_percentage.min(100),
            ..params
        };
        self.current = params;
        self.shared.store(params.pack(), Ordering::Release);
    }

    /// Last published value.
    pub fn current(&self) -> AudioParams {
        self.current
    }

    /// A new reader attached to this writer.
    pub fn reader(&self) -> AudioParamsReader {
        AudioParamsReader {
            shared: self.shared.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioParamsReader {
    shared: Arc<AtomicU64>,
}

impl AudioParamsReader {
    pub fn load(&self) -> AudioParams {
        AudioParams::unpack(self.shared.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_silent() {
        let (_writer, reader) = audio_params();
        assert_eq!(reader.load(), AudioParams::SILENT);
    }

    #[test]
    fn reader_sees_published_pair() {
        let (mut writer, reader) = audio_params();
        let params = AudioParams {
            pitch: Some(523.2511),
            duty_percentage: 90,
        };
        writer.publish(params);
        assert_eq!(reader.load(), params);
        assert_eq!(writer.reader().load(), params);
        assert_eq!(writer.current(), params);
    }

    #[test]
    fn duty_is_clamped() {
        let (mut writer, reader) = audio_params();
        writer.publish(AudioParams {
            pitch: Some(440.0),
            duty_percentage: 250,
        });
        assert_eq!(reader.load().duty_percentage, 100);
    }
}
