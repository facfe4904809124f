//! System-wide constants for the Secret Santa draw.

/// Smallest group a draw can succeed for.
pub const MIN_PARTICIPANTS: usize = 2;

/// Default cap on candidate evaluations in one search. Bounds the worst case
/// for adversarial exclusion structures.
pub const DEFAULT_MAX_SEARCH_STEPS: u64 = 2_000_000;

/// Default roster capacity.
pub const DEFAULT_MAX_PARTICIPANTS: usize = 500;

/// Maximum length of a name or surname, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// First id handed out by a fresh roster.
pub const FIRST_PARTICIPANT_ID: u64 = 1;

/// Environment variable the CLI reads the admin password from.
pub const ADMIN_PASSWORD_ENV: &str = "SANTA_ADMIN_PASSWORD";

/// Label used on the admin listing when a recipient is no longer on the roster.
pub const UNKNOWN_RECIPIENT: &str = "Unknown";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "SecretSanta";
