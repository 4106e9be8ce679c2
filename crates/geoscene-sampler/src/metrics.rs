//! Per-scene sampling metrics.
//!
//! [`SamplingMetrics`] records how much work one call to a sampler took,
//! so callers can spot scene specs that sit close to infeasibility long
//! before they start exhausting their attempt budgets.

use geoscene_core::ObjectId;

/// Timing and rejection counters collected while sampling one scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SamplingMetrics {
    /// Wall-clock time for the whole sampling call, in microseconds.
    pub total_us: u64,
    /// Number of collision-oracle queries issued.
    pub oracle_queries: u64,
    /// Candidates rejected for lying on or outside the world boundary.
    pub boundary_rejections: u64,
    /// Candidates rejected by the collision oracle.
    pub collision_rejections: u64,
    /// Attempts taken by each rejection-sampled object: `(id, attempts)`.
    pub attempts: Vec<(ObjectId, usize)>,
}

impl SamplingMetrics {
    /// Attempts recorded for `id`, if it was rejection-sampled.
    pub fn attempts_for(&self, id: &ObjectId) -> Option<usize> {
        self.attempts
            .iter()
            .find(|(object, _)| object == id)
            .map(|(_, n)| *n)
    }

    /// Sum of attempts over every rejection-sampled object.
    pub fn total_attempts(&self) -> usize {
        self.attempts.iter().map(|(_, n)| n).sum()
    }

    /// Total rejected candidates of either cause.
    pub fn rejections(&self) -> u64 {
        self.boundary_rejections + self.collision_rejections
    }
}
