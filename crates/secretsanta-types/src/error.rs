//! Error types for the Secret Santa draw.
//!
//! All errors use the `SS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Participant / roster errors
//! - 2xx: Draw and search errors
//! - 8xx: Security errors
//! - 9xx: Configuration and I/O errors

use thiserror::Error;

use crate::ParticipantId;

/// Central error enum for all draw operations.
#[derive(Debug, Error)]
pub enum SantaError {
    // =================================================================
    // Participant Errors (1xx)
    // =================================================================
    /// A draw needs at least two people.
    #[error("SS_ERR_100: Need at least 2 participants, got {count}")]
    InsufficientParticipants { count: usize },

    /// The same identifier appears twice in the input.
    #[error("SS_ERR_101: Duplicate participant identifier: {0}")]
    DuplicateIdentifier(ParticipantId),

    /// The requested participant is not on the roster.
    #[error("SS_ERR_102: Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    /// The participant failed validation (empty name, too long, etc.).
    #[error("SS_ERR_103: Invalid participant: {reason}")]
    InvalidParticipant { reason: String },

    /// The roster is at capacity.
    #[error("SS_ERR_104: Roster full ({max} participants)")]
    RosterFull { max: usize },

    // =================================================================
    // Draw Errors (2xx)
    // =================================================================
    /// The exclusion constraints cannot be satisfied for this group.
    #[error(
        "SS_ERR_200: No valid assignment possible for {participants} participants. \
         Check for invalid group configuration."
    )]
    NoSolution { participants: usize },

    /// The search gave up after the configured number of steps.
    #[error("SS_ERR_201: Search budget exhausted after {steps} steps")]
    SearchBudgetExhausted { steps: u64 },

    /// An assignment failed re-validation.
    #[error("SS_ERR_202: Invalid assignment: {reason}")]
    InvalidAssignment { reason: String },

    /// The giver has no pairing in the current draw.
    #[error("SS_ERR_203: No assignment found for {0}")]
    NoAssignment(ParticipantId),

    /// Nothing has been drawn yet.
    #[error("SS_ERR_204: No draw has been made")]
    NoDraw,

    // =================================================================
    // Security Errors (8xx)
    // =================================================================
    /// Admin credentials were missing or wrong.
    #[error("SS_ERR_800: Unauthorized")]
    Unauthorized,

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Configuration error (invalid values, missing fields, etc.).
    #[error("SS_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("SS_ERR_901: I/O error: {0}")]
    Io(String),
}

impl SantaError {
    /// Expected negative outcomes of a draw, as opposed to faults.
    ///
    /// Callers report these to the user ("check your group configuration")
    /// instead of treating them as internal errors.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Self::NoSolution { .. } | Self::InsufficientParticipants { .. }
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SantaError>;

// Conversion from std::io::Error
impl From<std::io::Error> for SantaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
