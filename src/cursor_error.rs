#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CursorError {
    /// A ranged operation was called with `start > end`.
    StartAfterEnd,
    /// A positional read landed outside the buffer; carries the index that
    /// was accessed.
    IndexOutOfBounds(usize),
}
