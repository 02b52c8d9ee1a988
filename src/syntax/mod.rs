mod cursor;
mod lexer;
mod token;

pub(crate) use cursor::Cursor;
pub use lexer::tokenize;
pub use token::{Token, TokenKind, TokenSpan};
