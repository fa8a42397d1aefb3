//! The resumable lexer.
//!
//! [`Tokenizer::read`] recognizes one token per call. When the buffer runs
//! dry mid-token the read cursor is rolled back to where the attempt began
//! and [`Scan::NeedMoreData`] is returned, so no partial input is ever lost
//! or consumed twice. Number and string lexing always look one character
//! past what they have before committing: `12` is not a complete token until
//! the character after the `2` is known not to extend it.

use alloc::string::String;

use crate::{
    buffer::{Fetch, StreamBuffer},
    error::DecodeError,
    escape_buffer::{UnicodeEscapeBuffer, decode_escape},
    token::{Scan, Token, TokenKind},
    value::Value,
};

#[derive(Debug)]
pub(crate) struct Tokenizer {
    buffer: StreamBuffer,
    unicode_escape: UnicodeEscapeBuffer,
}

impl Tokenizer {
    pub(crate) fn new() -> Self {
        Self {
            buffer: StreamBuffer::new(),
            unicode_escape: UnicodeEscapeBuffer::new(),
        }
    }

    pub(crate) fn write(&mut self, chunk: &str) -> Result<(), DecodeError> {
        self.buffer.write(chunk)
    }

    pub(crate) fn finish(&mut self) {
        self.buffer.finish();
    }

    /// Lexes one token, dispatching on the first non-whitespace character.
    pub(crate) fn read(&mut self) -> Result<Scan, DecodeError> {
        self.skip_whitespace();

        let c = match self.buffer.peek() {
            Fetch::Char(c) => c,
            Fetch::NeedMoreData => return Ok(Scan::NeedMoreData),
            Fetch::EndOfStream => return Ok(Scan::EndOfStream),
        };

        match c {
            ',' | ':' | '[' | ']' | '{' | '}' => {
                self.buffer.take();
                Ok(Scan::Token(Token {
                    kind: structural_kind(c),
                    src: String::from(c),
                    value: None,
                }))
            }
            'n' => self.read_literal("null", None),
            't' => self.read_literal("true", Some(Value::Boolean(true))),
            'f' => self.read_literal("false", Some(Value::Boolean(false))),
            '"' => self.read_string(),
            '-' | '0'..='9' => self.read_number(),
            other => Err(DecodeError::UnexpectedCharacter(other)),
        }
    }

    /// Whitespace belongs to no token, so it is consumed without rollback.
    fn skip_whitespace(&mut self) {
        while let Fetch::Char(c) = self.buffer.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.buffer.take();
        }
    }

    fn read_literal(
        &mut self,
        literal: &'static str,
        value: Option<Value>,
    ) -> Result<Scan, DecodeError> {
        let mark = self.buffer.pos();
        for expected in literal.chars() {
            match self.buffer.take() {
                Fetch::Char(c) if c == expected => {}
                Fetch::Char(c) => return Err(DecodeError::UnexpectedCharacter(c)),
                Fetch::NeedMoreData => {
                    self.buffer.seek(mark);
                    return Ok(Scan::NeedMoreData);
                }
                // A truncated literal can never complete; the stream just
                // ends.
                Fetch::EndOfStream => return Ok(Scan::EndOfStream),
            }
        }
        Ok(Scan::Token(Token {
            kind: TokenKind::Value,
            src: literal.into(),
            value,
        }))
    }

    fn read_string(&mut self) -> Result<Scan, DecodeError> {
        let mark = self.buffer.pos();
        self.buffer.take(); // opening quote
        let mut src = String::from('"');
        let mut value = String::new();

        loop {
            match self.buffer.take() {
                Fetch::NeedMoreData => {
                    self.buffer.seek(mark);
                    return Ok(Scan::NeedMoreData);
                }
                Fetch::EndOfStream => return Ok(Scan::EndOfStream),
                Fetch::Char('"') => {
                    src.push('"');
                    break;
                }
                Fetch::Char('\\') => {
                    src.push('\\');
                    match self.buffer.take() {
                        Fetch::NeedMoreData => {
                            self.buffer.seek(mark);
                            return Ok(Scan::NeedMoreData);
                        }
                        Fetch::EndOfStream => return Ok(Scan::EndOfStream),
                        Fetch::Char('u') => {
                            src.push('u');
                            self.unicode_escape.reset();
                            loop {
                                match self.buffer.take() {
                                    Fetch::NeedMoreData => {
                                        self.buffer.seek(mark);
                                        return Ok(Scan::NeedMoreData);
                                    }
                                    Fetch::EndOfStream => return Ok(Scan::EndOfStream),
                                    Fetch::Char(h) => {
                                        src.push(h);
                                        if let Some(ch) = self.unicode_escape.feed(h)? {
                                            value.push(ch);
                                            break;
                                        }
                                    }
                                }
                            }
                        }
                        Fetch::Char(e) => match decode_escape(e) {
                            Some(decoded) => {
                                src.push(e);
                                value.push(decoded);
                            }
                            None => return Err(DecodeError::UnexpectedCharacter(e)),
                        },
                    }
                }
                Fetch::Char(c) => {
                    src.push(c);
                    value.push(c);
                }
            }
        }

        Ok(Scan::Token(Token {
            kind: TokenKind::Value,
            src,
            value: Some(Value::String(value)),
        }))
    }

    fn read_number(&mut self) -> Result<Scan, DecodeError> {
        let mark = self.buffer.pos();
        let mut src = String::new();

        if let Fetch::Char('-') = self.buffer.peek() {
            self.buffer.take();
            src.push('-');
        }

        // Integer part: a lone `0`, or a non-zero digit followed by more
        // digits.
        let first = match self.buffer.take() {
            Fetch::Char(c) if c.is_ascii_digit() => c,
            Fetch::Char(c) => return Err(DecodeError::UnexpectedCharacter(c)),
            Fetch::NeedMoreData => {
                self.buffer.seek(mark);
                return Ok(Scan::NeedMoreData);
            }
            Fetch::EndOfStream => return Ok(Scan::EndOfStream),
        };
        src.push(first);

        if first != '0' {
            loop {
                match self.buffer.peek() {
                    Fetch::Char(c) if c.is_ascii_digit() => {
                        self.buffer.take();
                        src.push(c);
                    }
                    Fetch::Char(_) | Fetch::EndOfStream => break,
                    Fetch::NeedMoreData => {
                        self.buffer.seek(mark);
                        return Ok(Scan::NeedMoreData);
                    }
                }
            }
        }

        let mut has_fraction = false;
        match self.buffer.peek() {
            // Strict JSON: a leading zero takes no further integer digits.
            Fetch::Char(c) if first == '0' && c.is_ascii_digit() => {
                return Err(DecodeError::UnexpectedCharacter(c));
            }
            Fetch::Char('.') => {
                self.buffer.take();
                src.push('.');
                has_fraction = true;
                // The point requires at least one digit after it.
                match self.buffer.take() {
                    Fetch::Char(c) if c.is_ascii_digit() => src.push(c),
                    Fetch::Char(c) => return Err(DecodeError::UnexpectedCharacter(c)),
                    Fetch::NeedMoreData => {
                        self.buffer.seek(mark);
                        return Ok(Scan::NeedMoreData);
                    }
                    Fetch::EndOfStream => return Ok(Scan::EndOfStream),
                }
                loop {
                    match self.buffer.peek() {
                        Fetch::Char(c) if c.is_ascii_digit() => {
                            self.buffer.take();
                            src.push(c);
                        }
                        Fetch::Char(_) | Fetch::EndOfStream => break,
                        Fetch::NeedMoreData => {
                            self.buffer.seek(mark);
                            return Ok(Scan::NeedMoreData);
                        }
                    }
                }
            }
            Fetch::Char(_) | Fetch::EndOfStream => {}
            Fetch::NeedMoreData => {
                self.buffer.seek(mark);
                return Ok(Scan::NeedMoreData);
            }
        }

        let value = if has_fraction {
            let num = src
                .parse::<f64>()
                .map_err(|_| DecodeError::NumberOutOfRange(src.clone()))?;
            Value::Float(num)
        } else {
            let num = src
                .parse::<i64>()
                .map_err(|_| DecodeError::NumberOutOfRange(src.clone()))?;
            Value::Integer(num)
        };

        Ok(Scan::Token(Token {
            kind: TokenKind::Value,
            src,
            value: Some(value),
        }))
    }
}

fn structural_kind(c: char) -> TokenKind {
    match c {
        ',' => TokenKind::Comma,
        ':' => TokenKind::Colon,
        '[' => TokenKind::ArrayOpen,
        ']' => TokenKind::ArrayClose,
        '{' => TokenKind::ObjectOpen,
        _ => TokenKind::ObjectClose,
    }
}
