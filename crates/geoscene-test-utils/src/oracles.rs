//! Mock collision oracles.
//!
//! - [`NeverCollide`]: every query is clear.
//! - [`AlwaysCollide`]: every query collides.
//! - [`CountingOracle`]: wraps another oracle and counts queries.
//! - [`ScriptedOracle`]: replays a fixed list of answers.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use geoscene_core::{ObjectId, WorldState};
use geoscene_geom::{CollisionOracle, Universe};

/// Reports no collisions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCollide;

impl CollisionOracle for NeverCollide {
    fn has_collision(&self, _: &WorldState, _: &[ObjectId], _: Universe<'_>, _: &[ObjectId]) -> bool {
        false
    }
}

/// Reports a collision for every query.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCollide;

impl CollisionOracle for AlwaysCollide {
    fn has_collision(&self, _: &WorldState, _: &[ObjectId], _: Universe<'_>, _: &[ObjectId]) -> bool {
        true
    }
}

/// Forwards to an inner oracle, counting queries.
#[derive(Debug, Default)]
pub struct CountingOracle<O> {
    pub inner: O,
    calls: AtomicUsize,
}

impl<O> CountingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of queries answered so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<O: CollisionOracle> CollisionOracle for CountingOracle<O> {
    fn has_collision(
        &self,
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
    ) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner
            .has_collision(state, of_interest, universe, exclusions)
    }

    fn has_overlap(
        &self,
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
    ) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner
            .has_overlap(state, of_interest, universe, exclusions)
    }
}

/// Answers queries from a fixed script, then reports clear.
///
/// Useful for driving a rejection loop through a known number of
/// attempts.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    answers: Mutex<VecDeque<bool>>,
}

impl ScriptedOracle {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
        }
    }

    /// Scripted answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or(0)
    }
}

impl CollisionOracle for ScriptedOracle {
    fn has_collision(&self, _: &WorldState, _: &[ObjectId], _: Universe<'_>, _: &[ObjectId]) -> bool {
        self.answers
            .lock()
            .ok()
            .and_then(|mut a| a.pop_front())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_oracle_counts_and_forwards() {
        let state = WorldState::default();
        let oracle = CountingOracle::new(AlwaysCollide);
        assert!(oracle.has_collision(&state, &[], Universe::All, &[]));
        assert!(oracle.has_collision(&state, &[], Universe::All, &[]));
        assert!(oracle.has_overlap(&state, &[], Universe::All, &[]));
        assert_eq!(oracle.calls(), 3);
    }

    #[test]
    fn scripted_oracle_runs_out() {
        let state = WorldState::default();
        let oracle = ScriptedOracle::new([true, false, true]);
        let answers: Vec<bool> = (0..4)
            .map(|_| oracle.has_collision(&state, &[], Universe::All, &[]))
            .collect();
        assert_eq!(answers, [true, false, true, false]);
        assert_eq!(oracle.remaining(), 0);
        assert!(!NeverCollide.has_collision(&state, &[], Universe::All, &[]));
    }
}
