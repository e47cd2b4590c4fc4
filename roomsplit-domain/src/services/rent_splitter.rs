use crate::{
    config::SplitConfig,
    error::RentSplitError,
    model::{Money, RentSplit},
    services::{
        BidValidator, CompensationEngine, UtilitarianSolver, build_assessment_matrix,
        distribute_surplus,
    },
};

/// Rent splitting pipeline: validate, assign, compensate, distribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct RentSplitter {
    config: SplitConfig,
}

impl RentSplitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SplitConfig {
        self.config
    }

    /// Computes an envy-free split of `cost` for the given bid rows.
    ///
    /// # Returns
    /// * `Ok(RentSplit)` - utilitarian assignment with payments summing to `cost`
    /// * `Err(RentSplitError)` - invalid bids, no positive assignment, or a
    ///   compensation loop that cannot finish
    pub fn split(&self, cost: Money, rows: &[Vec<Money>]) -> Result<RentSplit, RentSplitError> {
        let bids = BidValidator::validate(rows, cost)?;
        let utilitarian = UtilitarianSolver::solve(&bids)?;
        let surplus = utilitarian.total - cost;

        let assessments = build_assessment_matrix(&bids, &utilitarian.assignment);
        let outcome = CompensationEngine::from_config(&self.config).run(assessments)?;

        let final_costs = distribute_surplus(
            &bids,
            &utilitarian.assignment,
            surplus,
            &outcome.total_discounts,
        );

        tracing::info!(
            participant_count = bids.size(),
            cost = %cost,
            utilitarian_total = %utilitarian.total,
            surplus = %surplus,
            rounds = outcome.rounds,
            "Rent split computed"
        );

        Ok(RentSplit {
            assignment: utilitarian.assignment,
            final_costs,
            utilitarian_total: utilitarian.total,
            surplus,
            rounds: outcome.rounds,
        })
    }
}
