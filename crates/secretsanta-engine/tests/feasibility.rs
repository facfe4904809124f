//! Property tests: feasibility detection and result validity.
//!
//! A group is feasible exactly when no household holds more than half of
//! the participants. Feasible groups must always produce a valid draw;
//! groups with a strict-majority household must always fail.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use secretsanta_engine::{Assigner, attempt_assignment, validate_assignment};
use secretsanta_types::{EngineConfig, Participant, ParticipantId, SantaError, constants};

fn draw(people: &[Participant], seed: u64) -> Result<secretsanta_types::Assignment, SantaError> {
    let mut rng = StdRng::seed_from_u64(seed);
    attempt_assignment(people, &mut rng, constants::DEFAULT_MAX_SEARCH_STEPS)
}

/// Pad with singles until the largest household is at most half.
fn pad_to_feasible(mut sizes: Vec<usize>) -> Vec<usize> {
    let total: usize = sizes.iter().sum();
    let max = sizes.iter().copied().max().unwrap_or(0);
    if max * 2 > total {
        sizes.extend(std::iter::repeat_n(1, max * 2 - total));
    }
    sizes
}

prop_compose! {
    /// Households of up to 8 people, none holding a majority, registered
    /// in any order.
    fn arb_feasible_people()(
        sizes in prop::collection::vec(1usize..=8, 2..=6),
    )(
        people in Just(Participant::dummy_groups(&pad_to_feasible(sizes))).prop_shuffle(),
    ) -> Vec<Participant> {
        people
    }
}

prop_compose! {
    /// A household holding a strict majority, registered in any order.
    fn arb_infeasible_people()(
        others in prop::collection::vec(1usize..=3, 0..=4),
        extra in 1usize..=3,
    )(
        people in {
            let rest: usize = others.iter().sum();
            let mut sizes = vec![rest + extra];
            sizes.extend(others);
            Just(Participant::dummy_groups(&sizes)).prop_shuffle()
        },
    ) -> Vec<Participant> {
        people
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn feasible_groups_always_draw(people in arb_feasible_people(), seed in any::<u64>()) {
        let assignment = draw(&people, seed).unwrap();
        prop_assert!(validate_assignment(&people, &assignment).is_ok());
        prop_assert_eq!(assignment.len(), people.len());
    }

    #[test]
    fn majority_household_never_draws(people in arb_infeasible_people(), seed in any::<u64>()) {
        let is_no_solution = matches!(draw(&people, seed), Err(SantaError::NoSolution { .. }));
        prop_assert!(is_no_solution);
    }

    #[test]
    fn one_household_never_draws(n in 2usize..=20, seed in any::<u64>()) {
        let people = Participant::dummy_groups(&[n]);
        let is_no_solution = matches!(draw(&people, seed), Err(SantaError::NoSolution { .. }));
        prop_assert!(is_no_solution);
    }
}

#[test]
fn literal_single_participant() {
    let people = vec![Participant::dummy(1, "Smith")];
    assert!(draw(&people, 0).is_err());
}

#[test]
fn literal_two_same_key() {
    let people = vec![Participant::dummy(1, "Smith"), Participant::dummy(2, "Smith")];
    let err = draw(&people, 0).unwrap_err();
    assert!(matches!(err, SantaError::NoSolution { participants: 2 }));
}

#[test]
fn literal_two_different_keys() {
    let people = vec![Participant::dummy(1, "Smith"), Participant::dummy(2, "Jones")];
    let a = draw(&people, 0).unwrap();
    let map = a.to_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map[&ParticipantId(1)], ParticipantId(2));
    assert_eq!(map[&ParticipantId(2)], ParticipantId(1));
}

#[test]
fn literal_two_couples() {
    let people = vec![
        Participant::dummy(1, "Smith"),
        Participant::dummy(2, "Smith"),
        Participant::dummy(3, "Jones"),
        Participant::dummy(4, "Jones"),
    ];
    // Valid draws are the cross pairings and the 4-cycles alternating
    // households: every Smith gives to a Jones and vice versa.
    for seed in 0..25 {
        let a = draw(&people, seed).unwrap();
        validate_assignment(&people, &a).unwrap();
        let pairs: Vec<(u64, u64)> = a.iter().map(|(g, r)| (g.0, r.0)).collect();
        for (g, r) in &pairs {
            let giver_smith = *g <= 2;
            let recipient_smith = *r <= 2;
            assert_ne!(giver_smith, recipient_smith, "pairs={pairs:?}");
        }
    }
}

#[test]
fn revalidation_is_idempotent() {
    let people = Participant::dummy_groups(&[3, 2, 2, 1]);
    let mut assigner = Assigner::from_config(&EngineConfig::seeded(17));
    let a = assigner.attempt_assignment(&people).unwrap();
    for _ in 0..3 {
        validate_assignment(&people, &a).unwrap();
    }
}

#[test]
fn every_participant_gives_once() {
    let people = Participant::dummy_groups(&[1, 1, 1, 1, 1]);
    for seed in 0..10 {
        let a = draw(&people, seed).unwrap();
        let givers: Vec<u64> = a.iter().map(|(g, _)| g.0).collect();
        assert_eq!(givers, vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn half_household_registered_last() {
    // Everyone outside the big household must give to it, so earlier
    // givers may not use up its recipients.
    let mut sizes = vec![1; 10];
    sizes.push(10);
    let people = Participant::dummy_groups(&sizes);
    for seed in 0..20 {
        let a = draw(&people, seed).unwrap();
        validate_assignment(&people, &a).unwrap();
        for (giver, recipient) in a.iter() {
            assert_ne!(giver.0 > 10, recipient.0 > 10);
        }
    }
}
