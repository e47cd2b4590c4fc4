use crate::{
    error::ValidationError,
    model::{BidMatrix, Money, ParticipantId, RoomId},
};

/// Checks raw bid rows against the declared total cost.
pub struct BidValidator;

impl BidValidator {
    /// Validates `rows` and freezes them into a [`BidMatrix`].
    ///
    /// Rows must form an N×N matrix of non-negative bids, each summing
    /// exactly to `cost`. The input is only borrowed.
    pub fn validate(rows: &[Vec<Money>], cost: Money) -> Result<BidMatrix, ValidationError> {
        let size = rows.len();
        if size == 0 {
            return Err(ValidationError::Empty);
        }

        for (idx, row) in rows.iter().enumerate() {
            let participant = ParticipantId(idx);
            if row.len() != size {
                return Err(ValidationError::NotSquare {
                    participant,
                    expected: size,
                    found: row.len(),
                });
            }

            if let Some((room, &bid)) = row.iter().enumerate().find(|(_, bid)| bid.is_negative())
            {
                return Err(ValidationError::NegativeBid {
                    participant,
                    room: RoomId(room),
                    bid,
                });
            }

            let sum = row
                .iter()
                .try_fold(Money::ZERO, |acc, bid| acc.checked_add(*bid))
                .ok_or(ValidationError::AmountOverflow { participant })?;
            if sum != cost {
                return Err(ValidationError::RowSumMismatch {
                    participant,
                    sum,
                    cost,
                });
            }
        }

        Ok(BidMatrix::from_validated_rows(rows))
    }
}
