//! Draw results.
//!
//! An [`Assignment`] is only ever built from a complete search result; callers
//! receive it by value and cannot mutate the pairings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{DrawId, ParticipantId};

/// Complete giver → recipient mapping produced by one engine run.
///
/// For a valid assignment over participant set P:
/// - givers and recipients are both exactly the ids in P,
/// - nobody maps to themselves,
/// - giver and recipient never share an exclusion key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pairs: BTreeMap<ParticipantId, ParticipantId>,
}

impl Assignment {
    /// Wrap a finished mapping. Does not validate; see
    /// `secretsanta_engine::validate_assignment`.
    #[must_use]
    pub fn from_pairs(pairs: BTreeMap<ParticipantId, ParticipantId>) -> Self {
        Self { pairs }
    }

    /// Who `giver` buys a gift for.
    #[must_use]
    pub fn recipient_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.pairs.get(&giver).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(giver, recipient)` pairs in ascending giver order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, ParticipantId)> + '_ {
        self.pairs.iter().map(|(g, r)| (*g, *r))
    }

    /// Flat copy of the mapping for an output collaborator.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<ParticipantId, ParticipantId> {
        self.pairs.clone()
    }
}

/// A stored draw: the assignment plus the metadata the result store keeps.
#[derive(Debug, Clone, Serialize)]
pub struct DrawRecord {
    pub id: DrawId,
    pub assignment: Assignment,
    /// SHA-256 fingerprint of the ordered pairs.
    pub digest: [u8; 32],
    pub participant_count: usize,
    pub drawn_at: DateTime<Utc>,
}
