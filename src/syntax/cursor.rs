/// Character cursor over a pattern string.
///
/// Positions are indices into the decoded `char` sequence; `byte_offset` maps them back
/// onto the UTF-8 text so slices never split a code point. Every scan helper stops at
/// end-of-input instead of failing.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    pattern: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(pattern: &'a str) -> Self {
        let chars: Vec<(usize, char)> = pattern.char_indices().collect();
        Self {
            pattern,
            chars,
            index: 0,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.index
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    #[inline]
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.index + n).map(|&(_, ch)| ch)
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.index = (self.index + n).min(self.chars.len());
    }

    pub(crate) fn advance_to(&mut self, position: usize) {
        self.index = position.clamp(self.index, self.chars.len());
    }

    pub(crate) fn byte_offset(&self, position: usize) -> usize {
        self.chars
            .get(position)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.pattern.len())
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.pattern[self.byte_offset(start)..self.byte_offset(end)]
    }

    /// End (exclusive) of a `[...]` set opening at `open`.
    ///
    /// A backslash inside the set swallows the next character, so `\]` does not close it.
    /// Unterminated sets run to end-of-input.
    pub(crate) fn set_end(&self, open: usize) -> usize {
        let mut idx = open + 1;
        let mut escaped = false;
        while let Some(&(_, ch)) = self.chars.get(idx) {
            idx += 1;
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == ']' {
                return idx;
            }
        }
        self.chars.len()
    }

    /// End (exclusive) of a `{...}` run opening at `open`: the next `}` inclusive, or
    /// end-of-input. The interior is not validated.
    pub(crate) fn brace_end(&self, open: usize) -> usize {
        self.chars[open.min(self.chars.len())..]
            .iter()
            .skip(1)
            .position(|&(_, ch)| ch == '}')
            .map(|rel| open + rel + 2)
            .unwrap_or(self.chars.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_end_includes_closing_bracket() {
        let cursor = Cursor::new("a[bc]d");
        assert_eq!(cursor.set_end(1), 5);
        assert_eq!(cursor.slice(1, 5), "[bc]");
    }

    #[test]
    fn set_end_skips_escaped_bracket() {
        let cursor = Cursor::new(r"[a\]b]c");
        assert_eq!(cursor.slice(0, cursor.set_end(0)), r"[a\]b]");
    }

    #[test]
    fn set_end_runs_to_end_when_unterminated() {
        let cursor = Cursor::new("[abc");
        assert_eq!(cursor.set_end(0), 4);
        let cursor = Cursor::new(r"[abc\");
        assert_eq!(cursor.set_end(0), 5);
    }

    #[test]
    fn brace_end_stops_after_first_closing_brace() {
        let cursor = Cursor::new("a{2,3}}");
        assert_eq!(cursor.brace_end(1), 6);
        assert_eq!(cursor.slice(1, 6), "{2,3}");
    }

    #[test]
    fn brace_end_runs_to_end_when_unterminated() {
        let cursor = Cursor::new("x{12");
        assert_eq!(cursor.brace_end(1), 4);
    }

    #[test]
    fn slices_respect_multibyte_characters() {
        let cursor = Cursor::new("é[ü]ß");
        assert_eq!(cursor.byte_offset(1), 2);
        assert_eq!(cursor.slice(1, cursor.set_end(1)), "[ü]");
        assert_eq!(cursor.byte_offset(cursor.len()), "é[ü]ß".len());
    }

    #[test]
    fn peek_past_end_is_none() {
        let mut cursor = Cursor::new("ab");
        cursor.advance(5);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek_nth(1), None);
    }
}
