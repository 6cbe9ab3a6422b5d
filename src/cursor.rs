use alloc::vec::Vec;

use crate::cursor_error::CursorError;
use crate::search::find_pattern;

/// A stateful cursor over an immutable byte buffer.
///
/// The cursor borrows the buffer for its lifetime and keeps a single piece of
/// mutable state, the anchor: the current position used as the implicit
/// starting point for sequential reads and token extraction. Search and
/// ranged extraction take explicit bounds and leave the anchor alone.
///
/// Not thread safe: every anchor-mutating operation takes `&mut self`, so a
/// cursor has one logical owner at a time. The underlying buffer may be
/// shared freely for reading.
#[derive(Debug, Copy, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    anchor: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, anchor: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn index(&self) -> usize {
        self.anchor
    }

    /// Sets the anchor, clamping negative values to `0`. Values at or past
    /// the buffer end are accepted as-is; callers may park the anchor past
    /// the end to mark the cursor exhausted.
    pub fn set_index(&mut self, idx: isize) {
        self.anchor = idx.max(0) as usize;
    }

    pub fn reset(&mut self) {
        self.set_index(0);
    }

    /// Searches the whole buffer for `pattern`.
    pub fn find(&self, pattern: &[u8]) -> Result<Option<usize>, CursorError> {
        self.find_in(pattern, 0, self.data.len())
    }

    /// Searches from `start` to the end of the buffer.
    pub fn find_from(&self, pattern: &[u8], start: usize) -> Result<Option<usize>, CursorError> {
        self.find_in(pattern, start, self.data.len())
    }

    /// Returns the first position in `[start, end]` at which `pattern`
    /// occurs, or `Ok(None)` if there is none. `end` is clamped to the last
    /// valid index, but the `start > end` check happens before clamping. The
    /// match itself only has to fit inside the buffer, not inside `end`.
    ///
    /// A zero-length pattern never matches.
    pub fn find_in(
        &self,
        pattern: &[u8],
        start: usize,
        end: usize,
    ) -> Result<Option<usize>, CursorError> {
        if start > end {
            return Err(CursorError::StartAfterEnd);
        }
        Ok(find_pattern(self.data, pattern, start, end))
    }

    /// Returns the byte at index `i`. Any `i` within the buffer is readable,
    /// including the final index.
    pub fn byte_at(&self, i: usize) -> Result<u8, CursorError> {
        match self.data.get(i) {
            Some(&byte) => Ok(byte),
            None => Err(CursorError::IndexOutOfBounds(i)),
        }
    }

    /// Advances the anchor by one and returns the byte there.
    ///
    /// The increment happens before the bounds check and is not rolled back:
    /// after a failed call the anchor has still moved forward, leaving the
    /// cursor past the end. Starting from a fresh cursor this yields the
    /// bytes at indices `1..len`, so the byte at index `0` is only reachable
    /// through `byte_at`.
    pub fn next_byte(&mut self) -> Result<u8, CursorError> {
        self.anchor += 1;
        match self.data.get(self.anchor) {
            Some(&byte) => Ok(byte),
            None => Err(CursorError::IndexOutOfBounds(self.anchor)),
        }
    }

    /// Returns an owned copy of the bytes in `[start, end]` inclusive, with
    /// `end` clamped to the last valid index. The copy is exactly
    /// `end - start + 1` bytes long. `start` must itself be a valid index.
    pub fn sub_array(&self, start: usize, end: usize) -> Result<Vec<u8>, CursorError> {
        if start > end {
            return Err(CursorError::StartAfterEnd);
        }
        if start >= self.data.len() {
            return Err(CursorError::IndexOutOfBounds(start));
        }
        let end = end.min(self.data.len() - 1);
        Ok(self.data[start..=end].to_vec())
    }

    /// Resets the anchor if it has moved, then returns the first token.
    pub fn token(&mut self, delim: &[u8]) -> Vec<u8> {
        if self.anchor != 0 {
            self.reset();
        }
        self.next_token(delim)
    }

    /// Returns the next token: the bytes from the anchor up to (excluding)
    /// the next occurrence of `delim`, advancing the anchor past the
    /// delimiter. Adjacent delimiters yield empty tokens.
    ///
    /// When no further delimiter exists the remainder of the buffer is
    /// returned and the cursor becomes exhausted. An exhausted cursor does
    /// not stay terminal: the next call resets the anchor to `0` and returns
    /// an empty token, and the call after that starts tokenizing from the
    /// beginning again.
    pub fn next_token(&mut self, delim: &[u8]) -> Vec<u8> {
        if self.anchor >= self.data.len() {
            self.reset();
            return Vec::new();
        }
        let jump = match find_pattern(self.data, delim, self.anchor, self.data.len()) {
            Some(jump) => jump,
            None => {
                let rest = self.data[self.anchor..].to_vec();
                self.anchor = self.data.len();
                return rest;
            }
        };
        let token = self.data[self.anchor..jump].to_vec();
        self.anchor = jump + delim.len();
        token
    }

    pub fn debug(&self) {
        log::info!(
            "cursor anchor {} of {} bytes",
            self.anchor,
            self.data.len()
        );
    }
}
