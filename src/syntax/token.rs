use serde::{Deserialize, Serialize};

/// Byte offset and byte length of a token inside its pattern.
pub type TokenSpan = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    CharacterClass,
    Quantifier,
    Anchor,
    CaptureGroup,
    EscapeSequence,
    Alternation,
    CharacterSet,
    Literal,
    // reserved for renderers; the scanner never emits it
    Special,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::CharacterClass,
        TokenKind::Quantifier,
        TokenKind::Anchor,
        TokenKind::CaptureGroup,
        TokenKind::EscapeSequence,
        TokenKind::Alternation,
        TokenKind::CharacterSet,
        TokenKind::Literal,
        TokenKind::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::CharacterClass => "characterClass",
            TokenKind::Quantifier => "quantifier",
            TokenKind::Anchor => "anchor",
            TokenKind::CaptureGroup => "captureGroup",
            TokenKind::EscapeSequence => "escapeSequence",
            TokenKind::Alternation => "alternation",
            TokenKind::CharacterSet => "characterSet",
            TokenKind::Literal => "literal",
            TokenKind::Special => "special",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub range: TokenSpan,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, range: TokenSpan) -> Self {
        Self {
            text: text.into(),
            kind,
            range,
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.range.0
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.range.0 + self.range.1
    }

    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.offset()..self.end()
    }
}
