//! Draw service: wires the roster, the engine, and the draw store.
//!
//! ```text
//! Roster.snapshot() -> Assigner.attempt_assignment() -> validate -> digest
//!     -> DrawStore.replace()
//! ```
//!
//! The store is only touched after a complete, re-validated assignment
//! exists; any failure leaves the previous draw in place.

use chrono::Utc;
use secretsanta_engine::{Assigner, compute_assignment_digest, short_hex, validate_assignment};
use secretsanta_types::{
    DrawId, DrawRecord, Participant, ParticipantId, Result, SantaError, ServiceConfig, constants,
};
use serde::Serialize;

use crate::{AdminGate, AdminToken, DrawStore, Roster};

/// What a successful draw reports back. Contains no pairings.
#[derive(Debug, Clone, Serialize)]
pub struct DrawSummary {
    pub draw_id: DrawId,
    pub participant_count: usize,
    /// Hex SHA-256 of the assignment.
    pub digest: String,
}

/// One line of the admin listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairingView {
    pub giver: String,
    pub recipient: String,
}

/// In-memory Secret Santa service.
pub struct DrawService {
    roster: Roster,
    store: DrawStore,
    gate: AdminGate,
    assigner: Assigner,
}

impl DrawService {
    /// Build a service from validated configuration.
    ///
    /// # Errors
    /// `Configuration` if `config` fails validation.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            roster: Roster::with_capacity(config.max_participants),
            store: DrawStore::new(),
            assigner: Assigner::from_config(&config.engine),
            gate: AdminGate::new(config.admin),
        })
    }

    // ----- roster -----------------------------------------------------------

    pub fn add_participant(&mut self, name: &str, surname: &str) -> Result<Participant> {
        let participant = self.roster.add_participant(name, surname)?;
        tracing::debug!(id = %participant.id, "Participant added");
        Ok(participant)
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        self.roster.list()
    }

    /// Remove everyone. The stored draw goes too, since it would refer to
    /// people who are no longer registered.
    pub fn clear_participants(&mut self) {
        let removed = self.roster.len();
        self.roster.clear();
        let had_draw = self.store.clear().is_some();
        tracing::info!(removed, had_draw, "Roster cleared");
    }

    // ----- drawing ----------------------------------------------------------

    /// Draw the whole group and replace any previous result.
    ///
    /// # Errors
    /// - `InsufficientParticipants` with fewer than two registered
    /// - `NoSolution` when the households make a draw impossible
    /// - `SearchBudgetExhausted` when the search hits its step cap
    pub fn draw(&mut self) -> Result<DrawSummary> {
        let participants = self.roster.snapshot();
        if participants.len() < constants::MIN_PARTICIPANTS {
            return Err(SantaError::InsufficientParticipants {
                count: participants.len(),
            });
        }

        let assignment = match self.assigner.attempt_assignment(&participants) {
            Ok(assignment) => assignment,
            Err(err) => {
                tracing::warn!(
                    participants = participants.len(),
                    error = %err,
                    "Draw failed, previous draw kept"
                );
                return Err(err);
            }
        };
        validate_assignment(&participants, &assignment)?;

        let digest = compute_assignment_digest(&assignment);
        let record = DrawRecord {
            id: DrawId::new(),
            assignment,
            digest,
            participant_count: participants.len(),
            drawn_at: Utc::now(),
        };
        let summary = DrawSummary {
            draw_id: record.id,
            participant_count: record.participant_count,
            digest: hex::encode(digest),
        };

        let replaced = self.store.replace(record);
        tracing::info!(
            draw = %summary.draw_id,
            participants = summary.participant_count,
            digest = short_hex(&digest),
            replaced = replaced.is_some(),
            "Draw complete"
        );
        Ok(summary)
    }

    #[must_use]
    pub fn has_draw(&self) -> bool {
        self.store.has_draw()
    }

    #[must_use]
    pub fn current_draw(&self) -> Option<&DrawRecord> {
        self.store.current()
    }

    // ----- queries ----------------------------------------------------------

    /// Who `giver` buys a gift for.
    ///
    /// # Errors
    /// - `NoDraw` if nothing has been drawn
    /// - `NoAssignment` if `giver` has no pairing in the current draw
    /// - `ParticipantNotFound` if the recipient left the roster
    pub fn recipient_for(&self, giver: ParticipantId) -> Result<&Participant> {
        if !self.store.has_draw() {
            return Err(SantaError::NoDraw);
        }
        let recipient = self
            .store
            .recipient_of(giver)
            .ok_or(SantaError::NoAssignment(giver))?;
        self.roster
            .get(recipient)
            .ok_or(SantaError::ParticipantNotFound(recipient))
    }

    /// Full listing in roster order. Admin only.
    ///
    /// Givers without a pairing (registered after the draw) are skipped.
    ///
    /// # Errors
    /// - `Unauthorized` if `token` was not issued by this service
    /// - `NoDraw` if nothing has been drawn
    pub fn admin_pairings(&self, token: &AdminToken) -> Result<Vec<PairingView>> {
        self.gate.authorize(token)?;
        let record = self.store.current().ok_or(SantaError::NoDraw)?;
        let pairings = self
            .roster
            .list()
            .iter()
            .filter_map(|giver| {
                let recipient_id = record.assignment.recipient_of(giver.id)?;
                let recipient = self.roster.get(recipient_id).map_or_else(
                    || constants::UNKNOWN_RECIPIENT.to_string(),
                    Participant::full_name,
                );
                Some(PairingView {
                    giver: giver.full_name(),
                    recipient,
                })
            })
            .collect();
        Ok(pairings)
    }

    /// Check an admin password.
    pub fn admin_login(&self, password: &str) -> Result<AdminToken> {
        self.gate.login(password)
    }
}
