//! Low-rate periodic driver for the beat clock.
//!
//! The driver thread only produces ticks; it never touches game state. The
//! main loop owns the [`crate::game::Game`] and applies ticks as it drains
//! them, so every field keeps a single writer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rtrb::{Consumer, Producer, RingBuffer};
use tracing::{debug, warn};

use super::message::ClockTick;

/// Pending ticks the main loop may fall behind by before ticks are dropped.
pub const TICK_QUEUE_CAPACITY: usize = 64;

pub struct BeatDriver {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl BeatDriver {
    /// Start ticking every `interval`. Returns the driver and the consumer
    /// end of its tick queue.
    pub fn spawn(interval: Duration) -> std::io::Result<(Self, Consumer<ClockTick>)> {
        let (producer, consumer) = RingBuffer::new(TICK_QUEUE_CAPACITY);
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let handle = thread::Builder::new()
            .name("beat-driver".into())
            .spawn(move || run(interval, producer, flag))?;

        debug!(?interval, "beat driver started");
        Ok((
            Self {
                running,
                handle: Some(handle),
            },
            consumer,
        ))
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Stop the thread and wait for it to exit.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("beat driver thread panicked");
            }
        }
    }
}

impl Drop for BeatDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(interval: Duration, mut producer: Producer<ClockTick>, running: Arc<AtomicBool>) {
    let mut index = 0u64;
    let mut deadline = Instant::now() + interval;

    while running.load(Ordering::Acquire) {
        let now = Instant::now();
        if now < deadline {
            // Sleep in short slices so stop() never waits a whole interval.
            thread::sleep((deadline - now).min(Duration::from_millis(5)));
            continue;
        }

        if producer.push(ClockTick { index }).is_err() {
            warn!(index, "tick queue full, dropping beat");
        }
        index += 1;
        deadline += interval;
    }
}
