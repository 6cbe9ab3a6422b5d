#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod cursor_error;
mod search;

pub use cursor::ByteCursor;
pub use cursor_error::CursorError;
