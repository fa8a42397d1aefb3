use alloc::string::String;

use thiserror::Error;

/// Errors surfaced by a decoding session.
///
/// Syntax errors are fatal to the session: once `read` has returned one, the
/// same error is returned from every subsequent call. [`StreamClosed`] is a
/// usage error and is fatal to the offending `write` only.
///
/// [`StreamClosed`]: DecodeError::StreamClosed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The tokenizer met a character that cannot start or continue a token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// A well-formed token arrived where its category is not permitted.
    /// Carries the token's raw source text.
    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),

    /// A non-string value token arrived in object key position.
    #[error("object keys must be strings, found `{0}`")]
    NonStringKey(String),

    /// A `\uXXXX` escape named a code point that is not a Unicode scalar
    /// value, such as an unpaired surrogate.
    #[error("invalid unicode escape sequence \\u{0:04X}")]
    InvalidUnicodeEscape(u32),

    /// An integer literal does not fit in `i64`.
    #[error("number out of range: `{0}`")]
    NumberOutOfRange(String),

    /// A chunk was written after `end()` sealed the stream.
    #[error("stream is closed to further writes")]
    StreamClosed,
}
