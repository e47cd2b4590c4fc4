//! Exhaustive search for the utilitarian room assignment.
//!
//! Every one of the N! permutations is scored, so the search is only
//! practical for small houses. Around ten participants it already visits
//! 3.6 million permutations and each extra participant multiplies the work.

use crate::{
    error::RentSplitError,
    model::{Assignment, BidMatrix, Money, ParticipantId, RoomId},
};

/// Participant counts above this are logged as slow.
pub const PRACTICAL_PARTICIPANT_LIMIT: usize = 10;

/// Lazily yields the permutations of `0..n` in lexicographic order,
/// starting from the identity.
#[derive(Clone, Debug)]
pub struct Permutations {
    current: Vec<usize>,
    exhausted: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            exhausted: false,
        }
    }

    fn advance(&mut self) {
        let len = self.current.len();
        let Some(pivot) = (1..len)
            .rev()
            .find(|&idx| self.current[idx - 1] < self.current[idx])
            .map(|idx| idx - 1)
        else {
            self.exhausted = true;
            return;
        };

        let Some(successor) = (pivot + 1..len)
            .rev()
            .find(|&idx| self.current[idx] > self.current[pivot])
        else {
            self.exhausted = true;
            return;
        };

        self.current.swap(pivot, successor);
        self.current[pivot + 1..].reverse();
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.current.clone();
        self.advance();
        Some(item)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtilitarianAssignment {
    pub assignment: Assignment,
    /// Sum of each participant's bid on their own room.
    pub total: Money,
}

pub struct UtilitarianSolver;

impl UtilitarianSolver {
    /// Finds the assignment with the greatest total declared value.
    ///
    /// Only totals strictly above zero are accepted, and on ties the first
    /// permutation in lexicographic order wins.
    pub fn solve(bids: &BidMatrix) -> Result<UtilitarianAssignment, RentSplitError> {
        let size = bids.size();
        if size > PRACTICAL_PARTICIPANT_LIMIT {
            tracing::warn!(
                participant_count = size,
                practical_limit = PRACTICAL_PARTICIPANT_LIMIT,
                "Brute-force assignment search over N! permutations may be very slow"
            );
        }

        let mut best: Option<Vec<usize>> = None;
        let mut max_sum = Money::ZERO;
        let mut visited = 0usize;

        for permutation in Permutations::new(size) {
            visited += 1;
            let Some(total) = permutation
                .iter()
                .enumerate()
                .try_fold(Money::ZERO, |acc, (participant, &room)| {
                    acc.checked_add(bids.bid(ParticipantId(participant), RoomId(room)))
                })
            else {
                tracing::error!(
                    participant_count = size,
                    assignment = ?permutation,
                    "Assignment total overflowed"
                );
                return Err(RentSplitError::Overflow);
            };

            if total > max_sum {
                max_sum = total;
                best = Some(permutation);
            }
        }

        let Some(best) = best else {
            tracing::error!(
                participant_count = size,
                permutations = visited,
                "No permutation produced a positive total value"
            );
            return Err(RentSplitError::NoFeasibleAssignment {
                best_total: max_sum,
            });
        };

        tracing::debug!(
            participant_count = size,
            permutations = visited,
            total = %max_sum,
            assignment = ?best,
            "Utilitarian assignment selected"
        );

        Ok(UtilitarianAssignment {
            assignment: Assignment::from_indices(&best),
            total: max_sum,
        })
    }
}
