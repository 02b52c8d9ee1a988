use std::sync::OnceLock;

use regex::Regex;

use super::model::{BacktrackingAnalysis, BacktrackingRiskLevel, BacktrackingWarning, WarningList};

// a group with no nested parens, holding an unescaped `|`, directly followed by a quantifier
const QUANTIFIED_ALTERNATION: &str = r"\((?:[^()\\|]|\\.)*\|(?:[^()\\]|\\.)*\)[+*?]";

fn quantified_alternation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(QUANTIFIED_ALTERNATION).expect("quantified alternation pattern should compile")
    })
}

/// Estimates backtracking risk from the shape of `pattern`.
///
/// All checks are textual: `.*.*` is looked up as a substring, not derived from a
/// parse. `text` only feeds the pattern-to-sample length ratio.
#[tracing::instrument(level = "trace", skip(text), fields(pattern_len = pattern.len() as u64, text_len = text.len() as u64))]
pub fn analyze_backtracking(pattern: &str, text: &str) -> BacktrackingAnalysis {
    let mut warnings = WarningList::new();

    if has_adjacent_wildcards(pattern) {
        warnings.push(BacktrackingWarning::CatastrophicBacktracking);
    }
    if has_nested_wildcard_group(pattern) {
        warnings.push(BacktrackingWarning::NestedQuantifiers);
    }
    if quantified_alternation_regex().is_match(pattern) {
        warnings.push(BacktrackingWarning::QuantifiedAlternation);
    }
    if pattern.chars().count() > text.chars().count() * 2 {
        warnings.push(BacktrackingWarning::InefficientPattern);
    }

    let weight: u16 = warnings.iter().map(|w| w.weight()).sum();
    let risk_level = BacktrackingRiskLevel::from_weight(weight);
    let suggestions = warnings
        .iter()
        .flat_map(|w| w.suggestions().iter().map(|s| s.to_string()))
        .collect();

    tracing::event!(
        tracing::Level::TRACE,
        operation = "analyze_backtracking",
        weight = weight,
        risk = ?risk_level
    );

    BacktrackingAnalysis {
        risk_level,
        warnings,
        suggestions,
    }
}

fn has_adjacent_wildcards(pattern: &str) -> bool {
    pattern.contains(".*.*") || pattern.contains(".+.*")
}

fn has_nested_wildcard_group(pattern: &str) -> bool {
    pattern.contains("(.*)+") || pattern.contains("(.+)*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantified_alternation_requires_pipe_inside_group() {
        assert!(quantified_alternation_regex().is_match("(a|b)*"));
        assert!(quantified_alternation_regex().is_match("x(foo|bar)+y"));
        assert!(!quantified_alternation_regex().is_match("(ab)*"));
        assert!(!quantified_alternation_regex().is_match("(a|b)"));
        assert!(!quantified_alternation_regex().is_match("a|b*"));
        assert!(!quantified_alternation_regex().is_match(r"(a\|b)*"));
        assert!(quantified_alternation_regex().is_match(r"(\.|x)+"));
    }

    #[test]
    fn weights_add_across_warnings() {
        // catastrophic (50) + nested (30) + inefficient (10)
        let analysis = analyze_backtracking("(.*)+.*.*", "");
        assert_eq!(analysis.weight(), 90);
        assert_eq!(analysis.risk_level, BacktrackingRiskLevel::High);
    }
}
