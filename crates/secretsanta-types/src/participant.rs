//! Participant model.
//!
//! A participant is an immutable input to a single draw. The engine only
//! looks at `id` and `exclusion_key`; `name` exists for display.

use serde::{Deserialize, Serialize};

use crate::{ExclusionKey, ParticipantId};

/// One person taking part in the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Household / surname. Equal keys are never paired.
    pub exclusion_key: ExclusionKey,
}

impl Participant {
    #[must_use]
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        exclusion_key: impl Into<ExclusionKey>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            exclusion_key: exclusion_key.into(),
        }
    }

    /// `"<name> <household>"`, as shown on the admin listing.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.exclusion_key)
    }

    /// Whether `self` and `other` belong to the same household.
    #[must_use]
    pub fn shares_household(&self, other: &Participant) -> bool {
        self.exclusion_key == other.exclusion_key
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Participant {
    pub fn dummy(id: u64, exclusion_key: &str) -> Self {
        Self {
            id: ParticipantId(id),
            name: format!("Person{id}"),
            exclusion_key: ExclusionKey::from(exclusion_key),
        }
    }

    /// Build a roster where group `g` has `sizes[g]` members keyed `"Group{g}"`.
    /// Ids start at 1 and follow group order.
    pub fn dummy_groups(sizes: &[usize]) -> Vec<Self> {
        let mut next = 1u64;
        let mut out = Vec::new();
        for (group, &size) in sizes.iter().enumerate() {
            for _ in 0..size {
                out.push(Self::dummy(next, &format!("Group{group}")));
                next += 1;
            }
        }
        out
    }
}
