use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const MAX_SCORE: u8 = 100;

pub type FactorList = SmallVec<[ComplexityFactor; 5]>;
pub type SuggestionList = SmallVec<[OptimizationSuggestion; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityScore {
    pub score: u8,
    pub level: ComplexityLevel,
    pub factors: FactorList,
}

impl ComplexityScore {
    pub fn has_factor(&self, factor: ComplexityFactor) -> bool {
        self.factors.contains(&factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl ComplexityLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..30 => ComplexityLevel::Simple,
            30..60 => ComplexityLevel::Moderate,
            60..80 => ComplexityLevel::Complex,
            _ => ComplexityLevel::VeryComplex,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "Simple",
            ComplexityLevel::Moderate => "Moderate",
            ComplexityLevel::Complex => "Complex",
            ComplexityLevel::VeryComplex => "Very Complex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityFactor {
    Lookaround,
    ManyAlternations,
    ManyGroups,
    NestedQuantifiers,
    VeryLong,
}

impl ComplexityFactor {
    pub fn description(self) -> &'static str {
        match self {
            ComplexityFactor::Lookaround => "Uses lookahead/lookbehind",
            ComplexityFactor::ManyAlternations => "Many alternations (|)",
            ComplexityFactor::ManyGroups => "Many capture groups",
            ComplexityFactor::NestedQuantifiers => "Nested quantifiers",
            ComplexityFactor::VeryLong => "Very long pattern",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptimizationSuggestion {
    ConsiderCharacterClass,
    UseNonCapturingGroups,
    BreakIntoMultiplePatterns,
    UseMoreSpecificPattern,
}

impl OptimizationSuggestion {
    pub fn description(self) -> &'static str {
        match self {
            OptimizationSuggestion::ConsiderCharacterClass => {
                "Consider using character classes instead of alternations"
            }
            OptimizationSuggestion::UseNonCapturingGroups => {
                "Use non-capturing groups (?:...) when you don't need the capture"
            }
            OptimizationSuggestion::BreakIntoMultiplePatterns => {
                "Consider breaking into multiple simpler patterns"
            }
            OptimizationSuggestion::UseMoreSpecificPattern => {
                "Use more specific patterns instead of .*"
            }
        }
    }
}
