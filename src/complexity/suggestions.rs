use super::model::{ComplexityFactor, OptimizationSuggestion, SuggestionList};
use super::scoring::calculate_complexity;

#[tracing::instrument(level = "trace", fields(pattern_len = pattern.len() as u64))]
pub fn optimization_suggestions(pattern: &str) -> SuggestionList {
    let score = calculate_complexity(pattern);
    let mut suggestions = SuggestionList::new();

    if score.has_factor(ComplexityFactor::ManyAlternations) {
        suggestions.push(OptimizationSuggestion::ConsiderCharacterClass);
    }
    if score.has_factor(ComplexityFactor::ManyGroups) {
        suggestions.push(OptimizationSuggestion::UseNonCapturingGroups);
    }
    if score.has_factor(ComplexityFactor::VeryLong) {
        suggestions.push(OptimizationSuggestion::BreakIntoMultiplePatterns);
    }
    if pattern.contains(".*") {
        suggestions.push(OptimizationSuggestion::UseMoreSpecificPattern);
    }

    suggestions
}
