//! Draw store: the output side of a draw.
//!
//! Holds at most one [`DrawRecord`]. A new draw replaces the previous one
//! in full; partial redraws are not possible. Failed draws never reach the
//! store.

use secretsanta_types::{DrawRecord, ParticipantId};

/// Keeps the current draw.
pub struct DrawStore {
    current: Option<DrawRecord>,
    /// Number of successful replacements since creation.
    generation: u64,
}

impl DrawStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Swap in a new draw, returning the one it replaced.
    pub fn replace(&mut self, record: DrawRecord) -> Option<DrawRecord> {
        self.generation += 1;
        self.current.replace(record)
    }

    #[must_use]
    pub fn current(&self) -> Option<&DrawRecord> {
        self.current.as_ref()
    }

    /// Recipient for `giver` in the current draw.
    #[must_use]
    pub fn recipient_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.current
            .as_ref()
            .and_then(|record| record.assignment.recipient_of(giver))
    }

    #[must_use]
    pub fn has_draw(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop the current draw. Returns it, if any.
    pub fn clear(&mut self) -> Option<DrawRecord> {
        self.current.take()
    }
}

impl Default for DrawStore {
    fn default() -> Self {
        Self::new()
    }
}
