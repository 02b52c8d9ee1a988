use super::cursor::Cursor;
use super::token::{Token, TokenKind};

const CLASS_SHORTHANDS: [char; 6] = ['d', 'D', 'w', 'W', 's', 'S'];
const ESCAPABLE: [char; 17] = [
    'n', 't', 'r', '\\', '.', '*', '+', '?', '|', '(', ')', '[', ']', '{', '}', '^', '$',
];

/// Splits a pattern into classified tokens that cover it without gaps.
///
/// Never fails: anything not recognised joins the surrounding literal run.
#[tracing::instrument(level = "trace", fields(pattern_len = pattern.len() as u64))]
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let tokens = Lexer::new(pattern).run();
    tracing::event!(
        tracing::Level::TRACE,
        operation = "tokenize",
        tokens = tokens.len() as u64
    );
    tokens
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
    literal_start: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(pattern: &'a str) -> Self {
        Self {
            cursor: Cursor::new(pattern),
            literal_start: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(ch) = self.cursor.peek() {
            match self.recognize(ch) {
                Some((kind, len)) => {
                    let start = self.cursor.position();
                    self.flush_literal(start);
                    self.push(kind, start, start + len);
                    self.cursor.advance(len);
                    self.literal_start = self.cursor.position();
                }
                None => self.cursor.advance(1),
            }
        }
        self.flush_literal(self.cursor.len());
        self.tokens
    }

    // first match wins; the order is escape, anchor, quantifier, group, alternation, set
    fn recognize(&self, ch: char) -> Option<(TokenKind, usize)> {
        let at = self.cursor.position();
        match ch {
            '\\' => match self.cursor.peek_nth(1) {
                Some(next) if CLASS_SHORTHANDS.contains(&next) => {
                    Some((TokenKind::CharacterClass, 2))
                }
                Some(next) if ESCAPABLE.contains(&next) => Some((TokenKind::EscapeSequence, 2)),
                _ => None,
            },
            '^' | '$' => Some((TokenKind::Anchor, 1)),
            '*' | '+' | '?' => Some((TokenKind::Quantifier, 1)),
            '{' => Some((TokenKind::Quantifier, self.cursor.brace_end(at) - at)),
            '(' | ')' => Some((TokenKind::CaptureGroup, 1)),
            '|' => Some((TokenKind::Alternation, 1)),
            '[' => Some((TokenKind::CharacterSet, self.cursor.set_end(at) - at)),
            _ => None,
        }
    }

    fn flush_literal(&mut self, end: usize) {
        if self.literal_start < end {
            self.push(TokenKind::Literal, self.literal_start, end);
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        let offset = self.cursor.byte_offset(start);
        let text = self.cursor.slice(start, end);
        self.tokens.push(Token::new(text, kind, (offset, text.len())));
    }
}
