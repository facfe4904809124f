//! Assignment fingerprints.
//!
//! The digest lets the result store and the logs identify a draw without
//! revealing who gives to whom. It is a SHA-256 over the pairs in ascending
//! giver order, so the same mapping always hashes the same.

use secretsanta_types::Assignment;
use sha2::{Digest, Sha256};

/// Compute the digest of an assignment.
#[must_use]
pub fn compute_assignment_digest(assignment: &Assignment) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"secretsanta:assignment:v1:");
    hasher.update((assignment.len() as u64).to_le_bytes());

    for (giver, recipient) in assignment.iter() {
        hasher.update(giver.0.to_le_bytes());
        hasher.update(recipient.0.to_le_bytes());
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Recompute the digest and compare with `expected`.
#[must_use]
pub fn verify_assignment_digest(assignment: &Assignment, expected: &[u8; 32]) -> bool {
    compute_assignment_digest(assignment) == *expected
}

/// Short hex form for log fields.
#[must_use]
pub fn short_hex(digest: &[u8; 32]) -> String {
    hex::encode(&digest[..8])
}
