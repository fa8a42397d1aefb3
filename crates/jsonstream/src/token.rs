use alloc::string::String;

use crate::value::Value;

/// Syntactic category of a token, as seen by the decoder's expecting set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// A scalar token: literal, string, or number.
    Value,
    ArrayOpen,
    ArrayClose,
    ObjectOpen,
    ObjectClose,
    Comma,
    Colon,
}

/// One lexical token: raw source text plus decoded value-or-absent.
///
/// Structural tokens and the `null` literal carry no decoded value; what (if
/// anything) a `null` leaf becomes is the decoder's business.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) src: String,
    pub(crate) value: Option<Value>,
}

/// Tagged result of one lexing call.
///
/// Suspension and exhaustion are ordinary values here, not errors: they
/// bubble from the buffer through the tokenizer to the decoder's `read`
/// without leaving the caller's stack.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Scan {
    Token(Token),
    /// A token could not be completed; the read cursor has been rolled back
    /// to where the attempt began.
    NeedMoreData,
    /// The stream is sealed and drained; no further tokens will appear.
    EndOfStream,
}
