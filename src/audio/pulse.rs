use super::bridge::{AudioBridge, PwmFrame};

/// How often the output stage re-runs the bridge (1 kHz).
pub const DEFAULT_BRIDGE_RATE_HZ: u32 = 1_000;

/// Square-wave oscillator driven by PWM frames.
///
/// While high the output sits at `+level`, while low at `-level`. A silent
/// frame outputs 0.0 and rewinds the phase so the next tone starts cleanly.
#[derive(Debug, Clone, Default)]
pub struct PulseOscillator {
    phase: f32,
}

impl PulseOscillator {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    pub fn next_sample(
        &mut self,
        frame: PwmFrame,
        reference_clock_hz: u32,
        sample_rate: f32,
        level: f32,
    ) -> f32 {
        let Some(frequency) = frame.frequency_hz(reference_clock_hz) else {
            self.phase = 0.0;
            return 0.0;
        };

        let high = self.phase < frame.duty();
        self.phase += frequency / sample_rate;
        self.phase -= self.phase.floor();

        if high {
            level
        } else {
            -level
        }
    }

    pub fn render(
        &mut self,
        out: &mut [f32],
        frame: PwmFrame,
        reference_clock_hz: u32,
        sample_rate: f32,
        level: f32,
    ) {
        for sample in out.iter_mut() {
            *sample = self.next_sample(frame, reference_clock_hz, sample_rate, level);
        }
    }
}

/// Runs inside the audio callback: re-derives the waveform at the bridge
/// rate and renders the pulse wave in between.
pub struct AudioOutputStage {
    bridge: AudioBridge,
    oscillator: PulseOscillator,
    sample_rate: f32,
    samples_per_tick: u32,
    until_tick: u32,
    frame: PwmFrame,
    level: f32,
}

impl AudioOutputStage {
    pub fn new(bridge: AudioBridge, sample_rate: f32, bridge_rate_hz: u32, level: f32) -> Self {
        let samples_per_tick = (sample_rate / bridge_rate_hz.max(1) as f32).round().max(1.0) as u32;
        Self {
            bridge,
            oscillator: PulseOscillator::new(),
            sample_rate,
            samples_per_tick,
            until_tick: 0,
            frame: PwmFrame::SILENT,
            level: level.clamp(0.0, 1.0),
        }
    }

    pub fn samples_per_tick(&self) -> u32 {
        self.samples_per_tick
    }

    /// Frame used for the most recent samples.
    pub fn frame(&self) -> PwmFrame {
        self.frame
    }

    /// Fill an interleaved buffer, writing the same sample to every channel.
    pub fn process_interleaved(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let reference = self.bridge.reference_clock_hz();

        for frame_samples in data.chunks_mut(channels) {
            if self.until_tick == 0 {
                self.frame = self.bridge.tick();
                self.until_tick = self.samples_per_tick;
            }
            self.until_tick -= 1;

            let sample =
                self.oscillator
                    .next_sample(self.frame, reference, self.sample_rate, self.level);
            frame_samples.fill(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::bridge::{waveform, DEFAULT_REFERENCE_CLOCK_HZ};
    use crate::audio::params::{audio_params, AudioParams};

    #[test]
    fn silent_frame_renders_zeros() {
        let mut osc = PulseOscillator::new();
        let mut buffer = vec![1.0f32; 64];
        osc.render(&mut buffer, PwmFrame::SILENT, DEFAULT_REFERENCE_CLOCK_HZ, 48_000.0, 0.5);
        assert!(buffer.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn half_duty_is_balanced() {
        let frame = PwmFrame {
            period: 2000, // 500 Hz at 1 MHz
            pulse_width: 1000,
        };
        let mut osc = PulseOscillator::new();
        let mut buffer = vec![0.0f32; 48_000];
        osc.render(&mut buffer, frame, DEFAULT_REFERENCE_CLOCK_HZ, 48_000.0, 0.5);

        let high = buffer.iter().filter(|s| **s > 0.0).count();
        let ratio = high as f32 / buffer.len() as f32;
        assert!((ratio - 0.5).abs() < 0.01, "high ratio {ratio}");
        assert!(buffer.iter().all(|s| s.abs() == 0.5));
    }

    #[test]
    fn stage_picks_up_published_parameters() {
        let (mut writer, reader) = audio_params();
        let (out, frames) = waveform();
        let bridge = AudioBridge::new(reader, out, DEFAULT_REFERENCE_CLOCK_HZ);
        let mut stage = AudioOutputStage::new(bridge, 48_000.0, DEFAULT_BRIDGE_RATE_HZ, 0.25);
        assert_eq!(stage.samples_per_tick(), 48);

        let mut data = vec![0.0f32; 96 * 2];
        stage.process_interleaved(&mut data, 2);
        assert!(data.iter().all(|s| *s == 0.0));

        writer.publish(AudioParams {
            pitch: Some(523.2511),
            duty_percentage: 50,
        });
        stage.process_interleaved(&mut data, 2);
        assert_eq!(stage.frame().period, 1911);
        assert_eq!(frames.load(), stage.frame());
        assert!(data.iter().any(|s| *s != 0.0));
        assert!(data.chunks(2).all(|pair| pair[0] == pair[1]));
    }
}
