use alloc::vec::Vec;

use crate::error::DecodeError;

/// Outcome of a single-character fetch from the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fetch {
    /// The next unread character.
    Char(char),
    /// The buffer is drained but the stream is still open.
    NeedMoreData,
    /// The buffer is drained and no further bytes will ever arrive.
    EndOfStream,
}

/// Append-only character store with independent write and read cursors.
///
/// Chunks are appended at the write cursor (the end of `data`); the tokenizer
/// consumes from the read cursor. `pos`/`seek` expose the read cursor so a
/// partially-lexed token can be rolled back without losing input.
#[derive(Debug)]
pub(crate) struct StreamBuffer {
    data: Vec<char>,
    read_pos: usize,
    finished: bool,
}

impl StreamBuffer {
    pub(crate) fn new() -> Self {
        Self {
            data: Vec::new(),
            read_pos: 0,
            finished: false,
        }
    }

    /// Appends a chunk at the write cursor, leaving the read cursor intact.
    pub(crate) fn write(&mut self, chunk: &str) -> Result<(), DecodeError> {
        if self.finished {
            return Err(DecodeError::StreamClosed);
        }
        // Byte length is an upper bound on the number of chars.
        self.data.reserve(chunk.len());
        self.data.extend(chunk.chars());
        Ok(())
    }

    /// Seals the stream. Idempotent; once set, `write` always fails.
    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }

    #[inline]
    pub(crate) fn peek(&self) -> Fetch {
        match self.data.get(self.read_pos) {
            Some(&c) => Fetch::Char(c),
            None if self.finished => Fetch::EndOfStream,
            None => Fetch::NeedMoreData,
        }
    }

    #[inline]
    pub(crate) fn take(&mut self) -> Fetch {
        let fetched = self.peek();
        if matches!(fetched, Fetch::Char(_)) {
            self.read_pos += 1;
        }
        fetched
    }

    /// Read-cursor checkpoint, paired with [`seek`](Self::seek) for rollback.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.read_pos
    }

    /// Rewinds the read cursor to an earlier checkpoint.
    #[inline]
    pub(crate) fn seek(&mut self, pos: usize) {
        debug_assert!(pos <= self.read_pos);
        self.read_pos = pos;
    }
}
