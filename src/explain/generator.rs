use super::glossary;
use super::model::{ExplanationPart, PatternExplanation};
use crate::syntax::Cursor;

#[tracing::instrument(level = "trace", fields(pattern_len = pattern.len() as u64))]
pub fn explain(pattern: &str) -> PatternExplanation {
    let mut cursor = Cursor::new(pattern);
    let mut parts = Vec::new();

    while let Some(ch) = cursor.peek() {
        let start = cursor.position();
        match ch {
            '(' => {
                parts.push(group_opening(&cursor));
                // the lookaround check only peeks; `?` and `=` are glossed on their own
                cursor.advance(1);
            }
            '[' => {
                let end = cursor.set_end(start);
                let text = cursor.slice(start, end);
                parts.push(ExplanationPart::new(text, glossary::character_set(text)));
                cursor.advance_to(end);
            }
            '{' => {
                let end = cursor.brace_end(start);
                let text = cursor.slice(start, end);
                parts.push(ExplanationPart::new(text, glossary::quantifier(text)));
                cursor.advance_to(end);
            }
            '\\' => match cursor.peek_nth(1) {
                Some(escaped) => {
                    parts.push(ExplanationPart::new(
                        cursor.slice(start, start + 2),
                        glossary::escape(escaped),
                    ));
                    cursor.advance(2);
                }
                None => {
                    parts.push(ExplanationPart::new("\\", ""));
                    cursor.advance(1);
                }
            },
            _ => {
                let gloss = glossary::symbol(ch).unwrap_or(glossary::LITERAL);
                parts.push(ExplanationPart::new(ch, gloss));
                cursor.advance(1);
            }
        }
    }

    let summary = summarize(&parts);
    tracing::event!(
        tracing::Level::TRACE,
        operation = "explain",
        parts = parts.len() as u64
    );

    PatternExplanation {
        pattern: pattern.to_string(),
        parts,
        summary,
    }
}

// only positive lookahead and lookbehind are told apart; `(?!`, `(?<!` and `(?:` read as a plain group
fn group_opening(cursor: &Cursor<'_>) -> ExplanationPart {
    match (cursor.peek_nth(1), cursor.peek_nth(2), cursor.peek_nth(3)) {
        (Some('?'), Some('='), _) => ExplanationPart::new("(?=", glossary::LOOKAHEAD),
        (Some('?'), Some('<'), Some('=')) => ExplanationPart::new("(?<=", glossary::LOOKBEHIND),
        _ => ExplanationPart::new("(", glossary::CAPTURE_OPEN),
    }
}

fn summarize(parts: &[ExplanationPart]) -> String {
    let mut summary = String::from("This pattern");

    if parts.iter().any(|p| p.text == "^") {
        summary.push_str(", matches from the start of the line");
    }

    let groups = parts.iter().filter(|p| p.text == "(").count();
    if groups > 0 {
        let plural = if groups == 1 { "" } else { "s" };
        summary.push_str(&format!(", captures {groups} group{plural}"));
    }

    if parts.iter().any(|p| p.text == "$") {
        summary.push_str(", and matches to the end of the line");
    }

    summary.push('.');
    summary
}
