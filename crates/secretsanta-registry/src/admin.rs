//! Admin gate.
//!
//! The admin password is explicit configuration handed to the gate, never
//! process-wide state. Admin-only operations take an [`AdminToken`], which
//! only [`AdminGate::login`] can mint and which only the issuing gate
//! accepts.

use secretsanta_types::{AdminConfig, Result, SantaError};
use uuid::Uuid;

/// Proof that the caller presented the admin password to one gate.
#[derive(Debug)]
pub struct AdminToken {
    gate: Uuid,
}

/// Checks admin credentials. Without a configured password every login
/// is rejected.
pub struct AdminGate {
    config: Option<AdminConfig>,
    /// Stamped into every token this gate mints.
    id: Uuid,
}

impl AdminGate {
    #[must_use]
    pub fn new(config: Option<AdminConfig>) -> Self {
        Self {
            config,
            id: Uuid::now_v7(),
        }
    }

    /// Exchange a password for an admin token.
    ///
    /// # Errors
    /// `Unauthorized` if no password is configured or it does not match.
    pub fn login(&self, password: &str) -> Result<AdminToken> {
        let Some(config) = &self.config else {
            tracing::warn!("Admin login attempted with admin access disabled");
            return Err(SantaError::Unauthorized);
        };
        if constant_time_eq(password.as_bytes(), config.password.as_bytes()) {
            Ok(AdminToken { gate: self.id })
        } else {
            tracing::warn!("Admin login rejected");
            Err(SantaError::Unauthorized)
        }
    }

    /// Accept a token only if this gate minted it and admin access is
    /// still enabled.
    ///
    /// # Errors
    /// `Unauthorized` for a token from another gate, or when no password
    /// is configured.
    pub fn authorize(&self, token: &AdminToken) -> Result<()> {
        if self.config.is_some() && token.gate == self.id {
            Ok(())
        } else {
            tracing::warn!("Admin token rejected");
            Err(SantaError::Unauthorized)
        }
    }
}

/// Compares every byte regardless of where the first mismatch is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
