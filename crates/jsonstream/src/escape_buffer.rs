//! Escape decoding: the single-character escape table and a four-digit
//! `\uXXXX` accumulator.

use crate::error::DecodeError;

/// Decodes a single-character escape (`\" \\ \/ \b \f \n \r \t`).
///
/// Returns `None` for anything else, including `u`, which starts a hex
/// escape and is handled by [`UnicodeEscapeBuffer`].
pub(crate) fn decode_escape(c: char) -> Option<char> {
    match c {
        '"' | '\\' | '/' => Some(c),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// Accumulates up to four hexadecimal digits of a `\uXXXX` escape and decodes
/// them into a [`char`] once the fourth digit arrives. Resets automatically
/// after a successful conversion.
#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer {
    code: u32,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self { code: 0, len: 0 }
    }

    /// Discards any accumulated digits.
    pub(crate) fn reset(&mut self) {
        self.code = 0;
        self.len = 0;
    }

    /// Feeds one digit.
    ///
    /// - `Ok(None)` while fewer than four digits have arrived.
    /// - `Ok(Some(ch))` on the fourth digit, after which the buffer is reset.
    /// - `Err(DecodeError::UnexpectedCharacter)` for a non-hex digit.
    /// - `Err(DecodeError::InvalidUnicodeEscape)` when the four digits name a
    ///   code point that is not a Unicode scalar value.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<char>, DecodeError> {
        let Some(digit) = c.to_digit(16) else {
            return Err(DecodeError::UnexpectedCharacter(c));
        };

        debug_assert!(self.len < 4);
        self.code = self.code * 16 + digit;
        self.len += 1;

        if self.len == 4 {
            let code = self.code;
            self.reset();
            match char::from_u32(code) {
                Some(ch) => Ok(Some(ch)),
                None => Err(DecodeError::InvalidUnicodeEscape(code)),
            }
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{UnicodeEscapeBuffer, decode_escape};
    use crate::error::DecodeError;

    #[test]
    fn basic_decoding() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(buf.feed('0').unwrap(), None);
        assert_eq!(buf.feed('0').unwrap(), None);
        assert_eq!(buf.feed('4').unwrap(), None);
        assert_eq!(buf.feed('1').unwrap(), Some('A'));
    }

    #[test]
    fn mixed_case_hex() {
        let mut buf = UnicodeEscapeBuffer::new();
        for ch in "AbCd".chars() {
            let res = buf.feed(ch).unwrap();
            if ch == 'd' {
                assert_eq!(res, Some(char::from_u32(0xABCD).unwrap()));
            } else {
                assert!(res.is_none());
            }
        }
    }

    #[test]
    fn reset_clears_buffer() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert!(buf.feed('F').unwrap().is_none());
        buf.reset();
        assert_eq!(buf.feed('0').unwrap(), None);
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(buf.feed('G'), Err(DecodeError::UnexpectedCharacter('G')));
    }

    #[test]
    fn surrogate_is_not_a_scalar() {
        let mut buf = UnicodeEscapeBuffer::new();
        let mut last = Ok(None);
        for ch in "D800".chars() {
            last = buf.feed(ch);
        }
        assert_eq!(last, Err(DecodeError::InvalidUnicodeEscape(0xD800)));
    }

    #[test]
    fn escape_table_matches_json() {
        assert_eq!(decode_escape('n'), Some('\n'));
        assert_eq!(decode_escape('/'), Some('/'));
        assert_eq!(decode_escape('u'), None);
        assert_eq!(decode_escape('x'), None);
    }
}
