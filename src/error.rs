use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// A bounded cursor was asked to move outside `0..len`.
    #[error("index is out of range for a sequence of length {len}")]
    OutOfRange { len: usize },
    /// A cycling cursor has nothing to wrap around.
    #[error("cannot position a cycling cursor in an empty sequence")]
    EmptyCycle,
}
