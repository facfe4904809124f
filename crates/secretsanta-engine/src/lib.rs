//! # secretsanta-engine
//!
//! **Constrained perfect-matching engine for the Secret Santa draw.**
//!
//! Given an ordered list of participants, the engine produces a bijection
//! from givers to recipients such that nobody draws themselves and nobody
//! draws a member of their own household, or reports that none exists.
//!
//! - **Zero side effects**: no I/O, no persistence, only randomness
//! - **Injectable randomness**: every engine owns its own `Rng`, so seeded
//!   runs are reproducible and parallel runs share nothing
//! - **Bounded**: an explicit step budget caps adversarial inputs

pub mod assigner;
pub mod digest;
pub mod search;
pub mod validation;

pub use assigner::Assigner;
pub use digest::{compute_assignment_digest, short_hex, verify_assignment_digest};
pub use search::attempt_assignment;
pub use validation::{can_assign, check_participants, validate_assignment};
