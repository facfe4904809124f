//! Configuration types for the engine and the draw service.

use serde::{Deserialize, Serialize};

use crate::{Result, SantaError, constants};

/// Search configuration for one engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum candidate evaluations before giving up.
    pub max_search_steps: u64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_search_steps: constants::DEFAULT_MAX_SEARCH_STEPS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Default config with a fixed seed (tests, reproducible draws).
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_search_steps == 0 {
            return Err(SantaError::Configuration(
                "max_search_steps must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Admin credentials, passed explicitly into the service.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub password: String,
}

impl AdminConfig {
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.password.is_empty() {
            return Err(SantaError::Configuration(
                "admin password must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configuration for a `DrawService`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    /// `None` disables admin-only operations.
    #[serde(default)]
    pub admin: Option<AdminConfig>,
    /// Roster capacity.
    #[serde(default = "default_max_participants")]
    pub max_participants: usize,
}

fn default_max_participants() -> usize {
    constants::DEFAULT_MAX_PARTICIPANTS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            admin: None,
            max_participants: constants::DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

impl ServiceConfig {
    #[must_use]
    pub fn new(admin: AdminConfig) -> Self {
        Self {
            admin: Some(admin),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        if let Some(admin) = &self.admin {
            admin.validate()?;
        }
        if self.max_participants < constants::MIN_PARTICIPANTS {
            return Err(SantaError::Configuration(format!(
                "max_participants must be >= {}",
                constants::MIN_PARTICIPANTS
            )));
        }
        Ok(())
    }
}
