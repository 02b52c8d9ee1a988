use serde::{Deserialize, Serialize};

use super::options::{InspectorConfig, ReportViews};
use crate::backtracking::{BacktrackingAnalysis, analyze_backtracking};
use crate::complexity::{
    ComplexityScore, SuggestionList, calculate_complexity, optimization_suggestions,
};
use crate::errors::InspectResult;
use crate::explain::{PatternExplanation, explain};
use crate::syntax::{Token, tokenize};

/// Every view the editor panels render for one pattern revision.
///
/// Views that were not selected, or that had nothing to work on, are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatternReport {
    pub pattern: String,
    pub tokens: Option<Vec<Token>>,
    pub explanation: Option<PatternExplanation>,
    pub complexity: Option<ComplexityScore>,
    pub suggestions: Option<SuggestionList>,
    pub backtracking: Option<BacktrackingAnalysis>,
}

impl PatternReport {
    pub fn to_json(&self) -> InspectResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> InspectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the selected analyses over one pattern.
///
/// Results are tied to `pattern`; a caller that has since seen a newer edit just drops them.
#[tracing::instrument(level = "trace", skip(sample_text, config), fields(pattern_len = pattern.len() as u64))]
pub fn inspect_pattern(
    pattern: &str,
    sample_text: Option<&str>,
    config: &InspectorConfig,
) -> PatternReport {
    let mut report = PatternReport {
        pattern: pattern.to_string(),
        ..Default::default()
    };

    if pattern.is_empty() {
        tracing::event!(tracing::Level::DEBUG, operation = "inspect", "empty pattern; views cleared");
        return report;
    }

    if config.wants(ReportViews::TOKENS) {
        report.tokens = Some(tokenize(pattern));
    }
    if config.wants(ReportViews::EXPLANATION) {
        report.explanation = Some(explain(pattern));
    }
    if config.wants(ReportViews::COMPLEXITY) {
        report.complexity = Some(calculate_complexity(pattern));
    }
    if config.wants(ReportViews::SUGGESTIONS) {
        report.suggestions = Some(optimization_suggestions(pattern));
    }
    if config.wants(ReportViews::BACKTRACKING) {
        let sample = sample_text.filter(|text| !text.is_empty());
        report.backtracking = match sample {
            Some(text) => Some(analyze_backtracking(pattern, text)),
            None if !config.require_sample_text => Some(analyze_backtracking(pattern, "")),
            None => None,
        };
    }

    tracing::event!(
        tracing::Level::DEBUG,
        operation = "inspect",
        tokens = report.tokens.as_ref().map_or(0, |t| t.len()) as u64,
        score = report.complexity.as_ref().map(|c| c.score),
        risk = ?report.backtracking.as_ref().map(|b| b.risk_level)
    );
    report
}
