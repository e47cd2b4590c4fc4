//! Iterative discounting towards an envy-free assessment matrix.
//!
//! Each round, an envious participant whose maximum-envy targets include at
//! least one envyless participant is discounted by their maximum envy. A
//! discount is added to the participant's whole column, because everyone's
//! view of a room shifts with what its holder pays.

use crate::{
    config::SplitConfig,
    error::RentSplitError,
    model::{AssessmentMatrix, DiscountVector, EnvyProfile, Money},
    services::envy_analyzer::analyze_envy,
};

/// Loop state carried from one compensation round to the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompensationState {
    pub assessments: AssessmentMatrix,
    pub total_discounts: DiscountVector,
    pub round: usize,
}

impl CompensationState {
    pub fn initial(assessments: AssessmentMatrix) -> Self {
        let total_discounts = DiscountVector::zeros(assessments.size());
        Self {
            assessments,
            total_discounts,
            round: 0,
        }
    }

    /// Applies one round of discounts and returns the next state.
    pub fn apply(self, discounts: &DiscountVector) -> Self {
        let Self {
            assessments,
            mut total_discounts,
            round,
        } = self;
        total_discounts.accumulate(discounts);
        Self {
            assessments: assessments.with_column_discounts(discounts),
            total_discounts,
            round: round + 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompensationOutcome {
    pub assessments: AssessmentMatrix,
    pub total_discounts: DiscountVector,
    pub rounds: usize,
}

/// Discounts granted in a single round for the given envy profile.
pub fn round_discounts(profile: &EnvyProfile) -> DiscountVector {
    let envyless = profile.envyless_participants();
    let amounts = profile
        .iter()
        .map(|(participant, record)| {
            if envyless.contains(&participant) {
                return Money::ZERO;
            }
            let has_envyless_target = record
                .max_envy_targets
                .iter()
                .any(|target| envyless.contains(target));
            if has_envyless_target {
                record.max_envy_amount
            } else {
                Money::ZERO
            }
        })
        .collect();
    DiscountVector::from_amounts(amounts)
}

#[derive(Clone, Copy, Debug)]
pub struct CompensationEngine {
    max_rounds: usize,
}

impl CompensationEngine {
    pub fn new(max_rounds: usize) -> Self {
        Self { max_rounds }
    }

    pub fn from_config(config: &SplitConfig) -> Self {
        Self::new(config.max_rounds)
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Runs compensation rounds until nobody envies anybody.
    ///
    /// Fails with [`RentSplitError::CompensationStalled`] when a round would
    /// grant no discount at all, and with [`RentSplitError::NonConvergence`]
    /// once the round ceiling is reached.
    pub fn run(&self, assessments: AssessmentMatrix) -> Result<CompensationOutcome, RentSplitError> {
        let mut state = CompensationState::initial(assessments);
        let mut profile = analyze_envy(&state.assessments);

        while !profile.is_envy_free() {
            if state.round >= self.max_rounds {
                tracing::error!(
                    rounds = state.round,
                    max_rounds = self.max_rounds,
                    remaining_envy = %profile.max_envy(),
                    "Compensation did not converge"
                );
                return Err(RentSplitError::NonConvergence {
                    rounds: state.round,
                });
            }

            let discounts = round_discounts(&profile);
            if discounts.is_all_zero() {
                tracing::error!(
                    round = state.round + 1,
                    remaining_envy = %profile.max_envy(),
                    "Compensation round granted no discounts"
                );
                return Err(RentSplitError::CompensationStalled {
                    round: state.round + 1,
                });
            }

            state = state.apply(&discounts);
            tracing::debug!(
                round = state.round,
                round_discount = %discounts.total(),
                total_discount = %state.total_discounts.total(),
                "Compensation round applied"
            );
            profile = analyze_envy(&state.assessments);
        }

        tracing::info!(
            rounds = state.round,
            total_discount = %state.total_discounts.total(),
            "Compensation reached an envy-free state"
        );

        Ok(CompensationOutcome {
            assessments: state.assessments,
            total_discounts: state.total_discounts,
            rounds: state.round,
        })
    }
}

impl Default for CompensationEngine {
    fn default() -> Self {
        Self::from_config(&SplitConfig::default())
    }
}
