//! cpal output stream driving the pulse wave.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tracing::{info, warn};

use hitline::audio::{AudioBridge, AudioOutputStage, AudioParamsReader, WaveformWriter};
use hitline::GameConfig;

/// Open the default output device and start rendering. The stream stops
/// when the returned value is dropped.
pub fn start_output(
    config: &GameConfig,
    params: AudioParamsReader,
    waveform: WaveformWriter,
) -> EyreResult<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let supported = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = supported.sample_rate().0 as f32;
    let channels = supported.channels() as usize;
    info!(
        device = %device.name().unwrap_or_default(),
        sample_rate,
        channels,
        "audio output"
    );

    let bridge = AudioBridge::new(params, waveform, config.reference_clock_hz);
    let mut stage = AudioOutputStage::new(bridge, sample_rate, config.bridge_rate_hz, config.volume);

    let stream = device.build_output_stream(
        &supported.into(),
        move |data: &mut [f32], _| stage.process_interleaved(data, channels),
        |err| warn!(%err, "audio stream error"),
        None,
    )?;
    stream.play()?;
    Ok(stream)
}
