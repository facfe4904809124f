//! # secretsanta-types
//!
//! Shared types, errors, and configuration for the **Secret Santa** draw.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`ExclusionKey`], [`DrawId`]
//! - **Participant model**: [`Participant`]
//! - **Result model**: [`Assignment`], [`DrawRecord`]
//! - **Configuration**: [`EngineConfig`], [`AdminConfig`], [`ServiceConfig`]
//! - **Errors**: [`SantaError`] with `SS_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod assignment;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod participant;

// Re-export all primary types at crate root for ergonomic imports:
//   use secretsanta_types::{Participant, Assignment, SantaError, ...};

pub use assignment::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use participant::*;

// Constants are accessed via `secretsanta_types::constants::FOO`
// (not re-exported to avoid name collisions).
