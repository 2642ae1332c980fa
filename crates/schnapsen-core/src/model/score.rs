use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Points of one player: points already banked and marriage points waiting for the
/// player's next trick win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub direct_points: u32,
    pub pending_points: u32,
}

impl Score {
    pub const fn new(direct_points: u32, pending_points: u32) -> Self {
        Self {
            direct_points,
            pending_points,
        }
    }

    pub const fn direct(points: u32) -> Self {
        Self::new(points, 0)
    }

    pub const fn pending(points: u32) -> Self {
        Self::new(0, points)
    }

    pub const fn redeem_pending_points(self) -> Self {
        Self::new(self.direct_points + self.pending_points, 0)
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, other: Score) -> Score {
        Score::new(
            self.direct_points + other.direct_points,
            self.pending_points + other.pending_points,
        )
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, other: Score) {
        *self = *self + other;
    }
}
