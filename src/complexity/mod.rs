mod model;
mod scoring;
mod suggestions;

pub use model::{
    ComplexityFactor, ComplexityLevel, ComplexityScore, FactorList, MAX_SCORE,
    OptimizationSuggestion, SuggestionList,
};
pub use scoring::calculate_complexity;
pub use suggestions::optimization_suggestions;
