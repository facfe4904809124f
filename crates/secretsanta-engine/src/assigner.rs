//! Engine instance: a random source plus the last computed result.
//!
//! Each `Assigner` owns its RNG, so independent instances can run on
//! separate threads without sharing generator state.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use secretsanta_types::{Assignment, EngineConfig, Participant, ParticipantId, Result};

use crate::search;

/// Runs draws and remembers the most recent successful one.
pub struct Assigner<R = StdRng> {
    rng: R,
    max_search_steps: u64,
    last: Option<Assignment>,
}

impl Assigner<StdRng> {
    /// Engine seeded from `config.seed`, or from OS entropy when unset.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config)
    }

    /// Deterministic engine with the default step budget.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(&EngineConfig::seeded(seed))
    }
}

impl<R: Rng> Assigner<R> {
    #[must_use]
    pub fn with_rng(rng: R, config: &EngineConfig) -> Self {
        Self {
            rng,
            max_search_steps: config.max_search_steps,
            last: None,
        }
    }

    /// Run a fresh draw over `participants`.
    ///
    /// On success the result replaces the previous one and a copy is
    /// returned. On failure any previous result is discarded, so the
    /// accessors never report pairings for a different group.
    pub fn attempt_assignment(&mut self, participants: &[Participant]) -> Result<Assignment> {
        self.last = None;
        let assignment =
            search::attempt_assignment(participants, &mut self.rng, self.max_search_steps)?;
        self.last = Some(assignment.clone());
        Ok(assignment)
    }

    /// Recipient of `giver` in the last successful draw.
    #[must_use]
    pub fn recipient_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.last.as_ref().and_then(|a| a.recipient_of(giver))
    }

    /// Copy of the full mapping; empty when nothing has been drawn.
    #[must_use]
    pub fn assignments(&self) -> BTreeMap<ParticipantId, ParticipantId> {
        self.last.as_ref().map(Assignment::to_map).unwrap_or_default()
    }

    #[must_use]
    pub fn last_assignment(&self) -> Option<&Assignment> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use secretsanta_types::SantaError;

    use super::*;

    fn couples() -> Vec<Participant> {
        vec![
            Participant::dummy(1, "Smith"),
            Participant::dummy(2, "Smith"),
            Participant::dummy(3, "Jones"),
            Participant::dummy(4, "Jones"),
        ]
    }

    #[test]
    fn accessors_empty_before_draw() {
        let assigner = Assigner::seeded(1);
        assert!(assigner.assignments().is_empty());
        assert!(assigner.recipient_of(ParticipantId(1)).is_none());
        assert!(assigner.last_assignment().is_none());
    }

    #[test]
    fn accessors_reflect_last_draw() {
        let mut assigner = Assigner::seeded(1);
        let a = assigner.attempt_assignment(&couples()).unwrap();
        assert_eq!(assigner.assignments(), a.to_map());
        for (giver, recipient) in a.iter() {
            assert_eq!(assigner.recipient_of(giver), Some(recipient));
        }
    }

    #[test]
    fn returned_copy_is_independent() {
        let mut assigner = Assigner::seeded(4);
        assigner.attempt_assignment(&couples()).unwrap();
        let mut copy = assigner.assignments();
        copy.clear();
        assert_eq!(assigner.assignments().len(), 4);
    }

    #[test]
    fn failure_discards_previous_result() {
        let mut assigner = Assigner::seeded(2);
        assigner.attempt_assignment(&couples()).unwrap();

        let infeasible = vec![Participant::dummy(1, "Smith"), Participant::dummy(2, "Smith")];
        let err = assigner.attempt_assignment(&infeasible).unwrap_err();
        assert!(matches!(err, SantaError::NoSolution { .. }));
        assert!(assigner.assignments().is_empty());
        assert!(assigner.recipient_of(ParticipantId(1)).is_none());
    }

    #[test]
    fn custom_step_budget_applies() {
        let cfg = EngineConfig {
            max_search_steps: 1,
            seed: Some(0),
        };
        let mut assigner = Assigner::from_config(&cfg);
        let people = Participant::dummy_groups(&[3, 3]);
        let err = assigner.attempt_assignment(&people).unwrap_err();
        assert!(matches!(err, SantaError::SearchBudgetExhausted { steps: 1 }));
    }

    #[test]
    fn independent_instances_on_threads() {
        let people = Participant::dummy_groups(&[2, 2, 2, 2]);
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let people = people.clone();
                std::thread::spawn(move || {
                    let mut assigner = Assigner::seeded(seed);
                    let a = assigner.attempt_assignment(&people).unwrap();
                    crate::validate_assignment(&people, &a).map(|()| a.len())
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().unwrap(), 8);
        }
    }
}
