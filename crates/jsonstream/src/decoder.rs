//! The path-tracking decoder.
//!
//! [`Decoder`] drives the tokenizer in a loop, validates token order against
//! an expecting set, maintains the path into open containers, and hands each
//! fully-decoded leaf value to the caller's callback in document order.

use alloc::{string::String, vec::Vec};

use crate::{
    error::DecodeError,
    path::PathSegment,
    token::{Scan, Token, TokenKind},
    tokenizer::Tokenizer,
    value::Value,
};

/// Set of token categories that are legal as the next token.
///
/// A pure function of the path and the preceding transition; exactly one set
/// is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Expecting(u8);

impl Expecting {
    const VALUE: u8 = 1 << 0;
    const ARRAY_OPEN: u8 = 1 << 1;
    const ARRAY_CLOSE: u8 = 1 << 2;
    const OBJECT_OPEN: u8 = 1 << 3;
    const OBJECT_CLOSE: u8 = 1 << 4;
    const COMMA: u8 = 1 << 5;
    const COLON: u8 = 1 << 6;

    /// Legal openers for a value in any position, including the root.
    const ANY_VALUE: Self = Self(Self::VALUE | Self::ARRAY_OPEN | Self::OBJECT_OPEN);

    fn contains(self, kind: TokenKind) -> bool {
        let bit = match kind {
            TokenKind::Value => Self::VALUE,
            TokenKind::ArrayOpen => Self::ARRAY_OPEN,
            TokenKind::ArrayClose => Self::ARRAY_CLOSE,
            TokenKind::ObjectOpen => Self::OBJECT_OPEN,
            TokenKind::ObjectClose => Self::OBJECT_CLOSE,
            TokenKind::Comma => Self::COMMA,
            TokenKind::Colon => Self::COLON,
        };
        self.0 & bit != 0
    }
}

/// One open container. The authoritative index or key lives in the parallel
/// path snapshot; the frame only tracks container kind and whether an object
/// has read a key for its next value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Frame {
    Array,
    Object { has_key: bool },
}

/// An incremental JSON decoder.
///
/// Chunks go in through [`write`], the end of input is signalled once with
/// [`end`], and [`read`] drains everything currently decodable, invoking the
/// callback once per leaf value with the path addressing it.
///
/// The path is lent to the callback as a borrowed slice of a stack that is
/// reused across calls; a callback that wants to keep it must copy it.
///
/// # Examples
///
/// ```
/// use jsonstream::{Decoder, Value};
///
/// let mut decoder = Decoder::new();
/// decoder.write(r#"{"a": [1, 2]}"#)?;
/// decoder.end();
///
/// let mut leaves = Vec::new();
/// let exhausted = !decoder.read(|path, value| {
///     leaves.push((path.to_vec(), value));
/// })?;
/// assert!(exhausted);
/// assert_eq!(leaves.len(), 2);
/// assert_eq!(leaves[1].1, Value::Integer(2));
/// # Ok::<(), jsonstream::DecodeError>(())
/// ```
///
/// [`write`]: Decoder::write
/// [`end`]: Decoder::end
/// [`read`]: Decoder::read
#[derive(Debug)]
pub struct Decoder {
    tokenizer: Tokenizer,
    /// Open containers, root-first.
    frames: Vec<Frame>,
    /// Path snapshot kept in lockstep with `frames` and lent to the
    /// callback. While an object frame is awaiting its next key, its slot
    /// holds the previous (stale) key and is never observable through a
    /// callback.
    path: Vec<PathSegment>,
    expecting: Expecting,
    /// First syntax error, if any. Replayed by every subsequent `read`.
    failed: Option<DecodeError>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Creates a decoder for one input stream.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            frames: Vec::new(),
            path: Vec::new(),
            expecting: Expecting::ANY_VALUE,
            failed: None,
        }
    }

    /// Appends a chunk of JSON text to the stream.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodeError::StreamClosed`] once [`end`](Self::end) has
    /// been called. The error is fatal to this call only; already-decoded
    /// state is unaffected.
    pub fn write(&mut self, chunk: &str) -> Result<(), DecodeError> {
        self.tokenizer.write(chunk)
    }

    /// Seals the stream: no further writes are accepted. Idempotent.
    pub fn end(&mut self) {
        self.tokenizer.finish();
    }

    /// Decodes as much as the buffered input allows, invoking `handler` once
    /// per leaf value in document order.
    ///
    /// Returns `Ok(true)` when more input is needed (call again after the
    /// next [`write`](Self::write) or [`end`](Self::end)), and `Ok(false)`
    /// once the stream is exhausted and no further call will produce output.
    ///
    /// # Errors
    ///
    /// A syntax error leaves the session unusable; the same error is
    /// returned from every later call.
    pub fn read<F>(&mut self, mut handler: F) -> Result<bool, DecodeError>
    where
        F: FnMut(&[PathSegment], Value),
    {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        loop {
            let scan = match self.tokenizer.read() {
                Ok(scan) => scan,
                Err(err) => return Err(self.poison(err)),
            };
            match scan {
                Scan::Token(token) => {
                    if let Err(err) = self.apply(token, &mut handler) {
                        return Err(self.poison(err));
                    }
                }
                Scan::NeedMoreData => return Ok(true),
                Scan::EndOfStream => return Ok(false),
            }
        }
    }

    fn poison(&mut self, err: DecodeError) -> DecodeError {
        self.failed = Some(err.clone());
        err
    }

    fn apply<F>(&mut self, token: Token, handler: &mut F) -> Result<(), DecodeError>
    where
        F: FnMut(&[PathSegment], Value),
    {
        if !self.expecting.contains(token.kind) {
            return Err(DecodeError::UnexpectedToken(token.src));
        }

        match token.kind {
            TokenKind::Value => self.handle_value(token, handler)?,
            TokenKind::Comma | TokenKind::Colon => {
                self.expecting = Expecting::ANY_VALUE;
            }
            TokenKind::ArrayOpen => {
                self.frames.push(Frame::Array);
                self.path.push(PathSegment::Index(0));
                self.expecting = Expecting(
                    Expecting::VALUE
                        | Expecting::ARRAY_OPEN
                        | Expecting::ARRAY_CLOSE
                        | Expecting::OBJECT_OPEN,
                );
            }
            TokenKind::ObjectOpen => {
                self.frames.push(Frame::Object { has_key: false });
                // Placeholder until the first key is read; `{}` is legal.
                self.path.push(PathSegment::Key(String::new()));
                self.expecting = Expecting(Expecting::VALUE | Expecting::OBJECT_CLOSE);
            }
            TokenKind::ArrayClose | TokenKind::ObjectClose => {
                self.frames.pop();
                self.path.pop();
                self.ascend();
            }
        }

        Ok(())
    }

    fn handle_value<F>(&mut self, token: Token, handler: &mut F) -> Result<(), DecodeError>
    where
        F: FnMut(&[PathSegment], Value),
    {
        match self.frames.last_mut() {
            Some(Frame::Array) => {
                handler(&self.path, token.value.unwrap_or(Value::Null));
                if let Some(PathSegment::Index(i)) = self.path.last_mut() {
                    *i += 1;
                }
                self.expecting = Expecting(Expecting::COMMA | Expecting::ARRAY_CLOSE);
            }
            Some(Frame::Object { has_key }) if !*has_key => {
                // Key position: strings only.
                match token.value {
                    Some(Value::String(key)) => {
                        *has_key = true;
                        if let Some(top) = self.path.last_mut() {
                            *top = PathSegment::Key(key);
                        }
                        self.expecting = Expecting(Expecting::COLON);
                    }
                    _ => return Err(DecodeError::NonStringKey(token.src)),
                }
            }
            Some(Frame::Object { has_key }) => {
                *has_key = false;
                handler(&self.path, token.value.unwrap_or(Value::Null));
                self.expecting = Expecting(Expecting::COMMA | Expecting::OBJECT_CLOSE);
            }
            None => {
                // Root value; the expecting set stays open so a stream may
                // carry a concatenated sequence of documents.
                handler(&self.path, token.value.unwrap_or(Value::Null));
            }
        }
        Ok(())
    }

    /// After popping a closed container, resume the parent's bookkeeping.
    fn ascend(&mut self) {
        match self.frames.last_mut() {
            Some(Frame::Array) => {
                if let Some(PathSegment::Index(i)) = self.path.last_mut() {
                    *i += 1;
                }
                self.expecting = Expecting(Expecting::COMMA | Expecting::ARRAY_CLOSE);
            }
            Some(Frame::Object { has_key }) => {
                *has_key = false;
                self.expecting = Expecting(Expecting::COMMA | Expecting::OBJECT_CLOSE);
            }
            None => self.expecting = Expecting::ANY_VALUE,
        }
    }
}
