#![warn(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod model;
pub mod services;

pub use config::SplitConfig;
pub use error::{RentSplitError, ValidationError};
pub use model::{
    AssessmentMatrix, Assignment, BidMatrix, DiscountVector, EnvyProfile, EnvyRecord, Money,
    ParticipantId, RentSplit, RoomId,
};
pub use services::{RentSplitter, quantize_costs};

/// Splits `cost` among the bidders with the default configuration.
///
/// `bids[i][r]` is participant `i`'s valuation of room `r`; every row must
/// sum to `cost`. Returns the room of each participant and what they pay.
pub fn compute_rent_split(
    cost: Money,
    bids: &[Vec<Money>],
) -> Result<(Assignment, Vec<Money>), RentSplitError> {
    let split = RentSplitter::default().split(cost, bids)?;
    Ok((split.assignment, split.final_costs))
}
