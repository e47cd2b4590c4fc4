use crate::model::{Money, ParticipantId, RoomId};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No bids were provided")]
    Empty,
    #[error("Participant {participant} bid on {found} rooms, expected {expected}")]
    NotSquare {
        participant: ParticipantId,
        expected: usize,
        found: usize,
    },
    #[error("Participant {participant} placed a negative bid ({bid}) on {room}")]
    NegativeBid {
        participant: ParticipantId,
        room: RoomId,
        bid: Money,
    },
    #[error("Bids of participant {participant} are too large to add up")]
    AmountOverflow { participant: ParticipantId },
    #[error("Bids of participant {participant} sum to {sum}, expected {cost}")]
    RowSumMismatch {
        participant: ParticipantId,
        sum: Money,
        cost: Money,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RentSplitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No room assignment has a positive total value (best total {best_total})")]
    NoFeasibleAssignment { best_total: Money },
    #[error("The total value of an assignment exceeds the representable range")]
    Overflow,
    #[error("Compensation did not reach an envy-free state within {rounds} rounds")]
    NonConvergence { rounds: usize },
    #[error("Compensation stalled at round {round}: no envious participant can be compensated")]
    CompensationStalled { round: usize },
}
