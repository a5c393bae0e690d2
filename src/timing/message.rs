use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// One beat clock tick, numbered from the start of the driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockTick {
    pub index: u64,
}

/// Source of ticks for the main loop.
pub trait TickReceiver {
    fn pop(&mut self) -> Option<ClockTick>;
}

#[cfg(feature = "rtrb")]
impl TickReceiver for Consumer<ClockTick> {
    fn pop(&mut self) -> Option<ClockTick> {
        Consumer::pop(self).ok()
    }
}

impl TickReceiver for VecDeque<ClockTick> {
    fn pop(&mut self) -> Option<ClockTick> {
        self.pop_front()
    }
}
