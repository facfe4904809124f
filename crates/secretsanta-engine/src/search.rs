//! Randomized backtracking search for a valid draw.
//!
//! ```text
//! attempt_assignment(participants, rng, max_steps) -> Assignment | error
//! ```
//!
//! ## Algorithm
//!
//! Givers are processed strictly in input order. For giver `i` the candidate
//! set is every participant not yet used as a recipient, shuffled afresh.
//! Candidates are tried in that order; the first one passing [`can_assign`]
//! whose commitment still leaves the remaining givers matchable is committed
//! and the search moves to giver `i + 1`. When a giver runs out of candidates
//! its frame is dropped and the previous giver's commitment is undone so it
//! can try its next candidate. The first complete assignment wins.
//! Exhausting the first giver's candidates means no valid draw exists.
//!
//! Only recipient order is randomized; giver order is fixed.
//!
//! ## Pruning
//!
//! Uncommitted givers can still all be matched iff no household has more
//! uncommitted givers than there are free recipients outside it. Givers
//! from two different households together accept every free recipient, so
//! single households are the only groups that can fail Hall's condition.
//! The check runs before the search (an infeasible group fails at once)
//! and after every tentative commitment, which keeps the search from
//! walking into branches that cannot finish.
//!
//! The search keeps an explicit stack of choice points instead of recursing,
//! so stack depth does not grow with the group size. Every candidate
//! evaluation costs one step against `max_steps`.

use std::collections::{BTreeMap, HashMap};

use rand::Rng;
use rand::seq::SliceRandom;
use secretsanta_types::{Assignment, ExclusionKey, Participant, Result, SantaError};

use crate::validation::{can_assign, check_participants};

/// One pending decision: the shuffled candidates giver `depth` has not
/// tried yet. Candidates are popped from the back.
struct ChoicePoint {
    remaining: Vec<usize>,
}

impl ChoicePoint {
    fn open<R: Rng + ?Sized>(taken: &[bool], rng: &mut R) -> Self {
        let mut remaining: Vec<usize> = taken
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(idx, _)| idx)
            .collect();
        remaining.shuffle(rng);
        Self { remaining }
    }
}

/// Per-household counts of uncommitted givers and free recipients.
struct Households {
    /// Household index of each participant.
    of: Vec<usize>,
    pending_givers: Vec<usize>,
    free_recipients: Vec<usize>,
    free_total: usize,
}

impl Households {
    fn new(participants: &[Participant]) -> Self {
        let mut index: HashMap<&ExclusionKey, usize> = HashMap::new();
        let of: Vec<usize> = participants
            .iter()
            .map(|p| {
                let next = index.len();
                *index.entry(&p.exclusion_key).or_insert(next)
            })
            .collect();
        let mut sizes = vec![0; index.len()];
        for &h in &of {
            sizes[h] += 1;
        }
        Self {
            of,
            pending_givers: sizes.clone(),
            free_recipients: sizes,
            free_total: participants.len(),
        }
    }

    fn commit(&mut self, giver: usize, recipient: usize) {
        self.pending_givers[self.of[giver]] -= 1;
        self.free_recipients[self.of[recipient]] -= 1;
        self.free_total -= 1;
    }

    fn release(&mut self, giver: usize, recipient: usize) {
        self.pending_givers[self.of[giver]] += 1;
        self.free_recipients[self.of[recipient]] += 1;
        self.free_total += 1;
    }

    /// Whether the uncommitted givers can still all be matched.
    fn completable(&self) -> bool {
        self.pending_givers
            .iter()
            .zip(&self.free_recipients)
            .all(|(&pending, &free)| pending <= self.free_total - free)
    }
}

/// Draw a giver → recipient bijection over `participants`.
///
/// # Errors
/// - `InsufficientParticipants` / `DuplicateIdentifier` before searching
/// - `NoSolution` when no valid draw exists
/// - `SearchBudgetExhausted` when more than `max_steps` candidates were tried
pub fn attempt_assignment<R: Rng + ?Sized>(
    participants: &[Participant],
    rng: &mut R,
    max_steps: u64,
) -> Result<Assignment> {
    check_participants(participants)?;

    let n = participants.len();
    let mut households = Households::new(participants);
    if !households.completable() {
        tracing::debug!(participants = n, "Household larger than half the group");
        return Err(SantaError::NoSolution { participants: n });
    }

    let mut taken = vec![false; n];
    // chosen[i] is the recipient index committed for giver i.
    let mut chosen: Vec<usize> = Vec::with_capacity(n);
    let mut frames: Vec<ChoicePoint> = Vec::with_capacity(n);
    let mut steps: u64 = 0;
    let mut backtracks: u64 = 0;
    let mut pruned: u64 = 0;

    frames.push(ChoicePoint::open(&taken, rng));

    loop {
        let depth = frames.len();
        let Some(frame) = frames.last_mut() else {
            tracing::debug!(
                participants = n,
                steps,
                backtracks,
                pruned,
                "Search space exhausted"
            );
            return Err(SantaError::NoSolution { participants: n });
        };
        let giver = depth - 1;

        // Returning to this level: undo the previous tentative commitment.
        if chosen.len() > giver {
            if let Some(prev) = chosen.pop() {
                taken[prev] = false;
                households.release(giver, prev);
            }
            backtracks += 1;
        }

        let mut committed = None;
        while let Some(candidate) = frame.remaining.pop() {
            steps += 1;
            if steps > max_steps {
                tracing::warn!(
                    participants = n,
                    steps = max_steps,
                    backtracks,
                    pruned,
                    "Search budget exhausted"
                );
                return Err(SantaError::SearchBudgetExhausted { steps: max_steps });
            }
            if !can_assign(&participants[giver], &participants[candidate]) {
                continue;
            }
            households.commit(giver, candidate);
            if households.completable() {
                committed = Some(candidate);
                break;
            }
            households.release(giver, candidate);
            pruned += 1;
        }

        let Some(recipient) = committed else {
            frames.pop();
            continue;
        };

        taken[recipient] = true;
        chosen.push(recipient);

        if chosen.len() == n {
            tracing::debug!(
                participants = n,
                steps,
                backtracks,
                pruned,
                "Assignment found"
            );
            let pairs: BTreeMap<_, _> = participants
                .iter()
                .zip(&chosen)
                .map(|(giver, &recipient)| (giver.id, participants[recipient].id))
                .collect();
            return Ok(Assignment::from_pairs(pairs));
        }

        frames.push(ChoicePoint::open(&taken, rng));
    }
}
