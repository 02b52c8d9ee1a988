use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub type WarningList = SmallVec<[BacktrackingWarning; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktrackingAnalysis {
    pub risk_level: BacktrackingRiskLevel,
    pub warnings: WarningList,
    pub suggestions: Vec<String>,
}

impl BacktrackingAnalysis {
    pub fn has_warning(&self, warning: BacktrackingWarning) -> bool {
        self.warnings.contains(&warning)
    }

    pub fn weight(&self) -> u16 {
        self.warnings.iter().map(|w| w.weight()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BacktrackingRiskLevel {
    Low,
    Medium,
    High,
}

impl BacktrackingRiskLevel {
    pub fn from_weight(weight: u16) -> Self {
        match weight {
            50.. => BacktrackingRiskLevel::High,
            30.. => BacktrackingRiskLevel::Medium,
            _ => BacktrackingRiskLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BacktrackingRiskLevel::Low => "Low Risk",
            BacktrackingRiskLevel::Medium => "Medium Risk",
            BacktrackingRiskLevel::High => "High Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BacktrackingWarning {
    CatastrophicBacktracking,
    NestedQuantifiers,
    QuantifiedAlternation,
    InefficientPattern,
}

impl BacktrackingWarning {
    pub const ALL: [BacktrackingWarning; 4] = [
        BacktrackingWarning::CatastrophicBacktracking,
        BacktrackingWarning::NestedQuantifiers,
        BacktrackingWarning::QuantifiedAlternation,
        BacktrackingWarning::InefficientPattern,
    ];

    pub fn weight(self) -> u16 {
        match self {
            BacktrackingWarning::CatastrophicBacktracking => 50,
            BacktrackingWarning::NestedQuantifiers => 30,
            BacktrackingWarning::QuantifiedAlternation => 20,
            BacktrackingWarning::InefficientPattern => 10,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BacktrackingWarning::CatastrophicBacktracking => "Potential catastrophic backtracking",
            BacktrackingWarning::NestedQuantifiers => "Nested quantifiers detected",
            BacktrackingWarning::QuantifiedAlternation => {
                "Quantified alternation may cause backtracking"
            }
            BacktrackingWarning::InefficientPattern => "Pattern may be inefficient",
        }
    }

    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            BacktrackingWarning::CatastrophicBacktracking => &[
                "Use possessive quantifiers (*+, ++) or atomic groups",
                "Make the pattern more specific",
            ],
            BacktrackingWarning::NestedQuantifiers => &[
                "Flatten nested quantifiers",
                "Use non-capturing groups with specific patterns",
            ],
            BacktrackingWarning::QuantifiedAlternation => {
                &["Consider character classes instead of alternation"]
            }
            BacktrackingWarning::InefficientPattern => &[
                "Simplify the pattern",
                "Break into multiple patterns if needed",
            ],
        }
    }
}
