pub(super) const LITERAL: &str = "Literal character";
pub(super) const CAPTURE_OPEN: &str = "Start of capture group";
pub(super) const LOOKAHEAD: &str = "Positive lookahead: matches if followed by...";
pub(super) const LOOKBEHIND: &str = "Positive lookbehind: matches if preceded by...";

const DIGIT: &str = "Matches any digit (0-9)";
const WHITESPACE: &str = "Matches any whitespace character";

pub(super) fn symbol(ch: char) -> Option<&'static str> {
    let gloss = match ch {
        '^' => "Start of line anchor",
        '$' => "End of line anchor",
        '.' => "Matches any character except newline",
        '*' => "Matches zero or more of the preceding element",
        '+' => "Matches one or more of the preceding element",
        '?' => "Matches zero or one of the preceding element",
        '|' => "Alternation: matches either the expression before or after",
        ')' => "End of capture group",
        _ => return None,
    };
    Some(gloss)
}

pub(super) fn escape(ch: char) -> &'static str {
    match ch {
        'd' => DIGIT,
        'w' => "Matches any word character",
        's' => WHITESPACE,
        'n' => "Matches newline character",
        't' => "Matches tab character",
        'b' => "Word boundary",
        _ => "Escaped character",
    }
}

// exact-text lookups only; anything else is a generic set
pub(super) fn character_set(text: &str) -> &'static str {
    match text {
        "[0-9]" | r"\d" => DIGIT,
        "[a-zA-Z]" | r"\w" => "Matches any word character (letter, digit, underscore)",
        r"\s" => WHITESPACE,
        _ => "Character class: matches any character in the set",
    }
}

pub(super) fn quantifier(text: &str) -> String {
    let interior = text.trim_start_matches('{').trim_end_matches('}');
    if !interior.contains(',') {
        return format!("Matches exactly {interior} times");
    }

    let bounds: Vec<&str> = interior.split(',').filter(|b| !b.is_empty()).collect();
    match bounds.as_slice() {
        [min, max] => format!("Matches between {min} and {max} times"),
        [min, ..] => format!("Matches at least {min} times"),
        [] => "Matches at least 0 times".to_string(),
    }
}
