use bitflags::bitflags;

use crate::error::LaneError;

/// One of the four input channels. Each lane has a fixed pitch and owns two
/// rows of the LED matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lane(u8);

impl Lane {
    pub const COUNT: usize = 4;

    pub const ALL: [Lane; Lane::COUNT] = [Lane(0), Lane(1), Lane(2), Lane(3)];

    /// Returns `None` for indices outside `0..4`.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The single-lane set containing this lane.
    pub fn mask(self) -> LaneSet {
        LaneSet::from_bits_truncate(1 << self.0)
    }
}

impl TryFrom<u8> for Lane {
    type Error = LaneError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Lane::new(index).ok_or(LaneError(index))
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lane {}", self.0)
    }
}

bitflags! {
    /// A set of lanes. Bit `i` stands for lane `i`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LaneSet: u8 {
        const LANE0 = 0b0001;
        const LANE1 = 0b0010;
        const LANE2 = 0b0100;
        const LANE3 = 0b1000;
    }
}

impl LaneSet {
    pub fn contains_lane(self, lane: Lane) -> bool {
        self.contains(lane.mask())
    }

    /// Lanes in ascending index order.
    pub fn lanes(self) -> impl Iterator<Item = Lane> {
        Lane::ALL.into_iter().filter(move |lane| self.contains_lane(*lane))
    }
}

impl From<Lane> for LaneSet {
    fn from(lane: Lane) -> Self {
        lane.mask()
    }
}

impl FromIterator<Lane> for LaneSet {
    fn from_iter<I: IntoIterator<Item = Lane>>(iter: I) -> Self {
        iter.into_iter().fold(LaneSet::empty(), |set, lane| set | lane.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_lane() {
        assert_eq!(Lane::try_from(4), Err(LaneError(4)));
        assert_eq!(Lane::try_from(3).map(Lane::index), Ok(3));
    }

    #[test]
    fn lane_set_iterates_in_order() {
        let set = LaneSet::LANE3 | LaneSet::LANE0;
        let lanes: Vec<_> = set.lanes().map(Lane::index).collect();
        assert_eq!(lanes, vec![0, 3]);
        assert!(set.contains_lane(Lane::ALL[3]));
        assert!(!set.contains_lane(Lane::ALL[1]));
    }

    #[test]
    fn collects_lanes_into_set() {
        let set: LaneSet = [Lane::ALL[1], Lane::ALL[2]].into_iter().collect();
        assert_eq!(set, LaneSet::LANE1 | LaneSet::LANE2);
    }
}
