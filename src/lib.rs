//! Static analysis of regular expression pattern strings.
//!
//! Four independent scanners walk the raw pattern text. None of them executes or
//! validates the pattern, and all of them accept any input, malformed syntax included.

pub mod backtracking;
pub mod complexity;
pub mod errors;
pub mod explain;
pub mod inspector;
pub mod syntax;

pub use backtracking::{
    BacktrackingAnalysis, BacktrackingRiskLevel, BacktrackingWarning, analyze_backtracking,
};
pub use complexity::{
    ComplexityFactor, ComplexityLevel, ComplexityScore, OptimizationSuggestion,
    calculate_complexity, optimization_suggestions,
};
pub use errors::{InspectError, InspectResult};
pub use explain::{ExplanationPart, PatternExplanation, explain};
pub use inspector::{
    InspectorConfig, InspectorConfigBuilder, InspectorConfigError, PatternReport, ReportViews,
    inspect_pattern,
};
pub use syntax::{Token, TokenKind, TokenSpan, tokenize};
