use crate::model::{Assignment, BidMatrix, DiscountVector, Money};

/// Spreads the undistributed surplus equally and returns final payments.
///
/// `surplus` is the utilitarian total minus the house cost. Whatever the
/// compensation rounds did not hand out is split evenly, so payments sum to
/// the house cost.
pub fn distribute_surplus(
    bids: &BidMatrix,
    assignment: &Assignment,
    surplus: Money,
    total_discounts: &DiscountVector,
) -> Vec<Money> {
    let mut discounts = total_discounts.clone();
    let additional_discount = (surplus - discounts.total()).split_evenly(discounts.len());
    discounts.add_to_each(additional_discount);

    assignment
        .iter()
        .map(|(participant, room)| bids.bid(participant, room) - discounts.get(participant))
        .collect()
}
