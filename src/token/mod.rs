// Public exports.
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, TokenizeError, TokenizeErrorKind, Tokenizer};

// Public mods.
pub mod token;

// Private mods.
mod tokenizer;
