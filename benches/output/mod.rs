//! Benchmarks for the audio bridge and the pulse output stage.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use hitline::audio::{
    audio_params, waveform, AudioBridge, AudioOutputStage, AudioParams, DEFAULT_BRIDGE_RATE_HZ,
    DEFAULT_REFERENCE_CLOCK_HZ,
};

use crate::BLOCK_SIZES;

const TONE: AudioParams = AudioParams {
    pitch: Some(622.2540),
    duty_percentage: 90,
};

pub fn bench_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("output/bridge");
    let (mut writer, reader) = audio_params();
    let (wave_writer, _wave_reader) = waveform();
    writer.publish(TONE);
    let mut bridge = AudioBridge::new(reader, wave_writer, DEFAULT_REFERENCE_CLOCK_HZ);

    group.bench_function("tick", |b| b.iter(|| black_box(bridge.tick())));
    group.finish();
}

pub fn bench_output_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("output/stage");

    for &size in BLOCK_SIZES {
        let (mut writer, reader) = audio_params();
        let (wave_writer, _wave_reader) = waveform();
        writer.publish(TONE);
        let bridge = AudioBridge::new(reader, wave_writer, DEFAULT_REFERENCE_CLOCK_HZ);
        let mut stage = AudioOutputStage::new(bridge, 48_000.0, DEFAULT_BRIDGE_RATE_HZ, 0.5);
        let mut buffer = vec![0.0f32; size * 2];

        // Stereo interleaved, same sample on both channels
        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, _| {
            b.iter(|| {
                stage.process_interleaved(black_box(&mut buffer), 2);
            })
        });
    }

    group.finish();
}
