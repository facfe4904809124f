//! Participant roster: the input side of a draw.
//!
//! Hands out ids, validates names, and produces the ordered snapshot the
//! engine runs on. Ids are never reused, even after [`Roster::clear`].

use std::collections::HashSet;

use secretsanta_types::{
    ExclusionKey, Participant, ParticipantId, Result, SantaError, constants,
};

/// Ordered list of people registered for the exchange.
pub struct Roster {
    /// Participants in registration order.
    participants: Vec<Participant>,
    /// Ids currently on the roster.
    ids: HashSet<ParticipantId>,
    /// Next id to hand out.
    next_id: ParticipantId,
    /// Maximum number of participants.
    max_participants: usize,
}

impl Roster {
    /// Create an empty roster with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(constants::DEFAULT_MAX_PARTICIPANTS)
    }

    /// Create an empty roster holding at most `max_participants`.
    #[must_use]
    pub fn with_capacity(max_participants: usize) -> Self {
        Self {
            participants: Vec::new(),
            ids: HashSet::new(),
            next_id: ParticipantId(constants::FIRST_PARTICIPANT_ID),
            max_participants,
        }
    }

    /// Register a person. Surrounding whitespace is trimmed from both parts;
    /// the surname becomes the exclusion key.
    ///
    /// # Errors
    /// - `InvalidParticipant` if either part is empty or too long
    /// - `RosterFull` at capacity
    pub fn add_participant(&mut self, name: &str, surname: &str) -> Result<Participant> {
        let name = clean_field("name", name)?;
        let surname = clean_field("surname", surname)?;
        self.ensure_capacity()?;

        let id = self.next_id;
        self.next_id = id.next();
        let participant = Participant::new(id, name, ExclusionKey::new(surname));
        self.ids.insert(id);
        self.participants.push(participant.clone());
        Ok(participant)
    }

    /// Insert a participant whose id was assigned elsewhere.
    ///
    /// # Errors
    /// - `DuplicateIdentifier` if the id is already on the roster
    /// - `RosterFull` at capacity
    pub fn insert(&mut self, participant: Participant) -> Result<()> {
        if self.ids.contains(&participant.id) {
            return Err(SantaError::DuplicateIdentifier(participant.id));
        }
        self.ensure_capacity()?;
        if participant.id >= self.next_id {
            self.next_id = participant.id.next();
        }
        self.ids.insert(participant.id);
        self.participants.push(participant);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        if !self.ids.contains(&id) {
            return None;
        }
        self.participants.iter().find(|p| p.id == id)
    }

    /// Participants in registration order.
    #[must_use]
    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    /// Owned copy of the roster for one engine run.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Participant> {
        self.participants.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Remove everyone. Id allocation continues where it left off.
    pub fn clear(&mut self) {
        self.participants.clear();
        self.ids.clear();
    }

    fn ensure_capacity(&self) -> Result<()> {
        if self.participants.len() >= self.max_participants {
            return Err(SantaError::RosterFull {
                max: self.max_participants,
            });
        }
        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

fn clean_field(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SantaError::InvalidParticipant {
            reason: format!("{field} required"),
        });
    }
    if trimmed.chars().count() > constants::MAX_NAME_LEN {
        return Err(SantaError::InvalidParticipant {
            reason: format!("{field} longer than {} characters", constants::MAX_NAME_LEN),
        });
    }
    Ok(trimmed.to_string())
}
