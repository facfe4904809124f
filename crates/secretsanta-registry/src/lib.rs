//! # secretsanta-registry
//!
//! **Collaborators around the assignment engine**: the participant roster,
//! the draw store, and the admin gate, wired together by [`DrawService`].
//!
//! ## Flow
//!
//! ```text
//! add_participant() -> Roster
//! draw()            -> Roster.snapshot() -> engine -> validate -> DrawStore.replace()
//! recipient_for()   -> DrawStore + Roster
//! admin_pairings()  -> AdminToken required
//! ```
//!
//! Everything is in memory. A draw either replaces the stored result in
//! full or leaves it untouched.

pub mod admin;
pub mod draw_store;
pub mod roster;
pub mod service;

pub use admin::{AdminGate, AdminToken};
pub use draw_store::DrawStore;
pub use roster::Roster;
pub use service::{DrawService, DrawSummary, PairingView};
