pub mod assessment_builder;
pub mod assignment_solver;
pub mod bid_validator;
pub mod compensation_engine;
pub mod cost_quantizer;
pub mod envy_analyzer;
pub mod rent_splitter;
pub mod surplus_distributor;

pub use assessment_builder::{assessment, build_assessment_matrix};
pub use assignment_solver::{
    PRACTICAL_PARTICIPANT_LIMIT, Permutations, UtilitarianAssignment, UtilitarianSolver,
};
pub use bid_validator::BidValidator;
pub use compensation_engine::{
    CompensationEngine, CompensationOutcome, CompensationState, round_discounts,
};
pub use cost_quantizer::quantize_costs;
pub use envy_analyzer::analyze_envy;
pub use rent_splitter::RentSplitter;
pub use surplus_distributor::distribute_surplus;
