use super::{is_game_over, HIT_CENTER, SUB_RESOLUTION};

/// What one call to [`BeatClock::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockStep {
    /// The beat that was completed.
    pub completed: u32,
    /// The beat the clock now shows.
    pub beat: u32,
    /// Set when the completed beat was the last one of a slot's beat group.
    /// The slot has left the hit window and its group must be settled.
    pub closed_slot: Option<usize>,
}

/// Monotonic beat counter. Knows nothing about lanes or scoring; the caller
/// reacts to the [`ClockStep`] it returns.
#[derive(Debug, Clone)]
pub struct BeatClock {
    beat: u32,
    track_len: usize,
}

impl BeatClock {
    pub fn new(track_len: usize) -> Self {
        Self { beat: 0, track_len }
    }

    pub fn beat(&self) -> u32 {
        self.beat
    }

    pub fn track_len(&self) -> usize {
        self.track_len
    }

    pub fn is_game_over(&self) -> bool {
        is_game_over(self.beat, self.track_len)
    }

    /// Complete the current beat and move to the next one. Returns `None`
    /// without touching anything once the track is exhausted.
    pub fn advance(&mut self) -> Option<ClockStep> {
        if self.is_game_over() {
            return None;
        }

        let completed = self.beat;
        let closed_slot = (completed % SUB_RESOLUTION == HIT_CENTER)
            .then_some((completed / SUB_RESOLUTION) as usize);
        self.beat += 1;

        Some(ClockStep {
            completed,
            beat: self.beat,
            closed_slot,
        })
    }

    pub fn reset(&mut self) {
        self.beat = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_one() {
        let mut clock = BeatClock::new(4);
        let step = clock.advance().unwrap();
        assert_eq!(step.completed, 0);
        assert_eq!(step.beat, 1);
        assert_eq!(clock.beat(), 1);
    }

    #[test]
    fn closes_each_group_once() {
        let mut clock = BeatClock::new(3);
        let mut closed = Vec::new();
        while let Some(step) = clock.advance() {
            if let Some(slot) = step.closed_slot {
                closed.push((step.completed, slot));
            }
        }
        assert_eq!(closed, vec![(2, 0), (7, 1), (12, 2)]);
        assert_eq!(clock.beat(), 15);
    }

    #[test]
    fn exhausted_clock_is_a_no_op() {
        let mut clock = BeatClock::new(1);
        for _ in 0..SUB_RESOLUTION {
            assert!(clock.advance().is_some());
        }
        assert!(clock.is_game_over());
        assert_eq!(clock.advance(), None);
        assert_eq!(clock.beat(), SUB_RESOLUTION);
        assert!(clock.is_game_over());
    }
}
