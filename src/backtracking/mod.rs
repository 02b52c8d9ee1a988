mod analysis;
mod model;

pub use analysis::analyze_backtracking;
pub use model::{BacktrackingAnalysis, BacktrackingRiskLevel, BacktrackingWarning, WarningList};
