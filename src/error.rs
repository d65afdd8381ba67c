use std::error::Error;
use std::fmt;

/// Errors returned by fallible [`GrowableDeque`](crate::GrowableDeque) operations.
/// A call that returns an error leaves the deque exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum DequeError {
    /// A negative index was passed to `set` or `get`.
    InvalidIndex(isize),
    /// `safe_get` was called with an index outside `0..len`.
    OutOfRange { index: isize, len: usize },
    /// `pop` or `pop_front` was called on an empty deque.
    Underflow,
    /// A range argument was malformed (reversed bounds, zero or non-finite step).
    InvalidRange(String),
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DequeError::InvalidIndex(index) => write!(f, "negative index {} in deque", index),
            DequeError::OutOfRange { index, len } => write!(
                f,
                "index {} out of range for deque of length {}",
                index, len
            ),
            DequeError::Underflow => write!(f, "cannot pop from an empty deque"),
            DequeError::InvalidRange(reason) => write!(f, "invalid range: {}", reason),
        }
    }
}

impl Error for DequeError {}
