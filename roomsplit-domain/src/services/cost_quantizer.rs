//! Rounds exact payments to a currency grid without breaking their total.
//!
//! Each payment is rounded half away from zero to `scale` decimal places.
//! The units needed to get back to the house cost are then handed out one at
//! a time: missing units go to whoever lost most by rounding, surplus units
//! are taken from whoever gained most. Exact ties go to the lower index.

use crate::model::Money;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::cmp::Ordering;

pub fn quantize_costs(costs: &[Money], total: Money, scale: u32) -> Vec<Money> {
    let mut rounded: Vec<Money> = costs.iter().map(|cost| cost.round_to_scale(scale)).collect();
    if costs.is_empty() {
        return rounded;
    }

    let unit = Money::new(1, scale);
    let residual = total - rounded.iter().sum::<Money>();
    let Some(units) = (residual.as_decimal() / unit.as_decimal())
        .round()
        .to_i64()
    else {
        tracing::warn!(
            residual = %residual,
            scale,
            "Rounding residual is not representable; keeping plain rounded costs"
        );
        return rounded;
    };
    if units == 0 {
        return rounded;
    }

    // Positive diff: rounding lowered the payment.
    let diffs: Vec<Decimal> = costs
        .iter()
        .zip(&rounded)
        .map(|(exact, rounded)| (*exact - *rounded).as_decimal())
        .collect();

    let mut order: Vec<usize> = (0..costs.len()).collect();
    order.sort_by(|&lhs, &rhs| {
        let primary = if units > 0 {
            diffs[rhs].cmp(&diffs[lhs])
        } else {
            diffs[lhs].cmp(&diffs[rhs])
        };
        match primary {
            Ordering::Equal => lhs.cmp(&rhs),
            other => other,
        }
    });

    let step = if units > 0 { unit } else { -unit };
    for idx in order.into_iter().cycle().take(units.unsigned_abs() as usize) {
        rounded[idx] += step;
    }

    tracing::debug!(
        adjusted_units = units,
        scale,
        "Quantized costs rebalanced to the house total"
    );

    rounded
}
