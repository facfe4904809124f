//! Input checks and result re-validation.
//!
//! [`can_assign`] is the single acceptability rule the search uses.
//! [`validate_assignment`] re-checks a finished assignment against the same
//! rule plus the bijection property; running it twice gives the same answer.

use std::collections::{HashMap, HashSet};

use secretsanta_types::{Assignment, Participant, ParticipantId, Result, SantaError, constants};

/// Whether `giver` may draw `recipient`.
#[must_use]
pub fn can_assign(giver: &Participant, recipient: &Participant) -> bool {
    giver.id != recipient.id && !giver.shares_household(recipient)
}

/// Reject inputs the search cannot run on.
///
/// # Errors
/// - `InsufficientParticipants` for fewer than two entries
/// - `DuplicateIdentifier` for the first repeated id, in input order
pub fn check_participants(participants: &[Participant]) -> Result<()> {
    if participants.len() < constants::MIN_PARTICIPANTS {
        return Err(SantaError::InsufficientParticipants {
            count: participants.len(),
        });
    }
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.id) {
            return Err(SantaError::DuplicateIdentifier(p.id));
        }
    }
    Ok(())
}

/// Check that `assignment` is a valid draw over `participants`.
///
/// # Errors
/// `InvalidAssignment` naming the first violated invariant.
pub fn validate_assignment(participants: &[Participant], assignment: &Assignment) -> Result<()> {
    let by_id: HashMap<ParticipantId, &Participant> =
        participants.iter().map(|p| (p.id, p)).collect();
    if by_id.len() != participants.len() {
        return Err(invalid("participant ids are not unique".to_string()));
    }

    if assignment.len() != participants.len() {
        return Err(invalid(format!(
            "{} pairings for {} participants",
            assignment.len(),
            participants.len()
        )));
    }

    let mut received = HashSet::with_capacity(participants.len());
    for (giver_id, recipient_id) in assignment.iter() {
        let Some(giver) = by_id.get(&giver_id) else {
            return Err(invalid(format!("unknown giver {giver_id}")));
        };
        let Some(recipient) = by_id.get(&recipient_id) else {
            return Err(invalid(format!("unknown recipient {recipient_id}")));
        };
        if giver.id == recipient.id {
            return Err(invalid(format!("{giver_id} draws themselves")));
        }
        if giver.shares_household(recipient) {
            return Err(invalid(format!(
                "{giver_id} and {recipient_id} share household {}",
                giver.exclusion_key
            )));
        }
        if !received.insert(recipient_id) {
            return Err(invalid(format!("{recipient_id} receives twice")));
        }
    }

    // Equal sizes plus unique known recipients already imply full coverage;
    // givers are map keys, so they are unique by construction.
    Ok(())
}

fn invalid(reason: String) -> SantaError {
    SantaError::InvalidAssignment { reason }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn pairs(list: &[(u64, u64)]) -> Assignment {
        let map: BTreeMap<ParticipantId, ParticipantId> = list
            .iter()
            .map(|&(g, r)| (ParticipantId(g), ParticipantId(r)))
            .collect();
        Assignment::from_pairs(map)
    }

    fn two_couples() -> Vec<Participant> {
        vec![
            Participant::dummy(1, "Smith"),
            Participant::dummy(2, "Smith"),
            Participant::dummy(3, "Jones"),
            Participant::dummy(4, "Jones"),
        ]
    }

    #[test]
    fn can_assign_rules() {
        let a = Participant::dummy(1, "Smith");
        let b = Participant::dummy(2, "Smith");
        let c = Participant::dummy(3, "Jones");
        assert!(!can_assign(&a, &a));
        assert!(!can_assign(&a, &b));
        assert!(can_assign(&a, &c));
        assert!(can_assign(&c, &a));
    }

    #[test]
    fn single_participant_rejected() {
        let err = check_participants(&[Participant::dummy(1, "Smith")]).unwrap_err();
        assert!(matches!(err, SantaError::InsufficientParticipants { count: 1 }));
    }

    #[test]
    fn empty_input_rejected() {
        let err = check_participants(&[]).unwrap_err();
        assert!(matches!(err, SantaError::InsufficientParticipants { count: 0 }));
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = check_participants(&[
            Participant::dummy(1, "Smith"),
            Participant::dummy(2, "Jones"),
            Participant::dummy(1, "Brown"),
        ])
        .unwrap_err();
        assert!(matches!(err, SantaError::DuplicateIdentifier(ParticipantId(1))));
    }

    #[test]
    fn cross_pairing_is_valid() {
        let people = two_couples();
        let a = pairs(&[(1, 3), (3, 1), (2, 4), (4, 2)]);
        assert!(validate_assignment(&people, &a).is_ok());
        // Idempotent.
        assert!(validate_assignment(&people, &a).is_ok());
    }

    #[test]
    fn four_cycle_is_valid() {
        let people = two_couples();
        let a = pairs(&[(1, 3), (3, 2), (2, 4), (4, 1)]);
        assert!(validate_assignment(&people, &a).is_ok());
    }

    #[test]
    fn same_household_rejected() {
        let people = two_couples();
        let a = pairs(&[(1, 2), (2, 1), (3, 4), (4, 3)]);
        let err = validate_assignment(&people, &a).unwrap_err();
        assert!(matches!(
            err,
            SantaError::InvalidAssignment { ref reason } if reason.contains("household")
        ));
    }

    #[test]
    fn self_assignment_rejected() {
        let people = vec![Participant::dummy(1, "A"), Participant::dummy(2, "B")];
        let a = pairs(&[(1, 1), (2, 2)]);
        let err = validate_assignment(&people, &a).unwrap_err();
        assert!(matches!(
            err,
            SantaError::InvalidAssignment { ref reason } if reason.contains("themselves")
        ));
    }

    #[test]
    fn double_receive_rejected() {
        let people = vec![
            Participant::dummy(1, "A"),
            Participant::dummy(2, "B"),
            Participant::dummy(3, "C"),
        ];
        let a = pairs(&[(1, 2), (2, 1), (3, 1)]);
        let err = validate_assignment(&people, &a).unwrap_err();
        assert!(matches!(
            err,
            SantaError::InvalidAssignment { ref reason } if reason.contains("twice")
        ));
    }

    #[test]
    fn missing_giver_rejected() {
        let people = two_couples();
        let a = pairs(&[(1, 3), (3, 1), (2, 4)]);
        assert!(validate_assignment(&people, &a).is_err());
    }

    #[test]
    fn unknown_recipient_rejected() {
        let people = vec![Participant::dummy(1, "A"), Participant::dummy(2, "B")];
        let a = pairs(&[(1, 2), (2, 9)]);
        let err = validate_assignment(&people, &a).unwrap_err();
        assert!(matches!(
            err,
            SantaError::InvalidAssignment { ref reason } if reason.contains("unknown recipient")
        ));
    }
}
