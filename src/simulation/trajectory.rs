//! Bounded history of a body's past positions, used for trail rendering
//!
//! Retention is two-phase: the buffer grows freely up to [`GROWTH_LIMIT`]
//! entries, after which the oldest points are dropped whenever the length
//! reaches [`EVICTION_LIMIT`]. Once full it never holds more than
//! [`EVICTION_LIMIT`] points.

use std::collections::VecDeque;

use super::states::NVec2;

/// Below this length points are appended without any eviction check
pub const GROWTH_LIMIT: usize = 100;

/// Upper bound on the buffer length
pub const EVICTION_LIMIT: usize = 500;

#[derive(Debug, Clone, Default)]
pub struct TrajectoryBuffer {
    points: VecDeque<NVec2>,
}

impl TrajectoryBuffer {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(GROWTH_LIMIT),
        }
    }

    /// Record a position snapshot
    pub fn push(&mut self, p: NVec2) {
        if self.points.len() >= GROWTH_LIMIT {
            while self.points.len() >= EVICTION_LIMIT {
                self.points.pop_front();
            }
        }
        self.points.push_back(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points oldest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    /// Most recently recorded point
    pub fn latest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn to_vec(&self) -> Vec<NVec2> {
        self.points.iter().copied().collect()
    }
}
