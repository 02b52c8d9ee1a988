mod generator;
mod glossary;
mod model;

pub use generator::explain;
pub use model::{ExplanationPart, PatternExplanation};
