use memchr::{memchr_iter, memchr3_iter, memmem};

use super::model::{ComplexityFactor, ComplexityLevel, ComplexityScore, FactorList, MAX_SCORE};

const LENGTH_CAP: usize = 20;
const QUANTIFIER_CAP: usize = 20;
const GROUP_CAP: usize = 20;
const LOOKAROUND_CAP: usize = 15;
const ALTERNATION_CAP: usize = 15;
const CLASS_CAP: usize = 10;

const MANY_ALTERNATIONS: usize = 3;
const MANY_GROUPS: usize = 5;
const VERY_LONG: usize = 200;

/// Additive heuristic over raw character counts, not over parsed structure.
///
/// `a*b+` counts two quantifiers and every `(` counts as a group, lookarounds included.
#[tracing::instrument(level = "trace", fields(pattern_len = pattern.len() as u64))]
pub fn calculate_complexity(pattern: &str) -> ComplexityScore {
    let counts = Counts::of(pattern);

    let total = (counts.chars / 10).min(LENGTH_CAP)
        + (counts.quantifiers * 2).min(QUANTIFIER_CAP)
        + (counts.groups * 3).min(GROUP_CAP)
        + (counts.lookarounds * 5).min(LOOKAROUND_CAP)
        + (counts.alternations * 2).min(ALTERNATION_CAP)
        + counts.classes.min(CLASS_CAP);
    let score = total.min(MAX_SCORE as usize) as u8;

    let result = ComplexityScore {
        score,
        level: ComplexityLevel::from_score(score),
        factors: detect_factors(pattern, &counts),
    };
    tracing::event!(
        tracing::Level::TRACE,
        operation = "calculate_complexity",
        score = result.score,
        level = ?result.level
    );
    result
}

fn detect_factors(pattern: &str, counts: &Counts) -> FactorList {
    let mut factors = FactorList::new();

    if counts.lookarounds > 0 {
        factors.push(ComplexityFactor::Lookaround);
    }
    if counts.alternations > MANY_ALTERNATIONS {
        factors.push(ComplexityFactor::ManyAlternations);
    }
    if counts.groups > MANY_GROUPS {
        factors.push(ComplexityFactor::ManyGroups);
    }
    if pattern.contains("**") || pattern.contains("++") {
        factors.push(ComplexityFactor::NestedQuantifiers);
    }
    if counts.chars > VERY_LONG {
        factors.push(ComplexityFactor::VeryLong);
    }

    factors
}

// all counted symbols are ASCII, so byte scans never land inside a multibyte char
struct Counts {
    chars: usize,
    quantifiers: usize,
    groups: usize,
    lookarounds: usize,
    alternations: usize,
    classes: usize,
}

impl Counts {
    fn of(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        Self {
            chars: pattern.chars().count(),
            quantifiers: memchr3_iter(b'*', b'+', b'?', bytes).count()
                + memchr_iter(b'{', bytes).count(),
            groups: memchr_iter(b'(', bytes).count(),
            lookarounds: memmem::find_iter(bytes, b"(?=").count()
                + memmem::find_iter(bytes, b"(?<=").count(),
            alternations: memchr_iter(b'|', bytes).count(),
            classes: memchr_iter(b'[', bytes).count(),
        }
    }
}
