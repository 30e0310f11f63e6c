use std::fmt::Display;
use std::num::NonZeroUsize;

use num_traits::PrimInt;

use crate::error::CursorError;

/// Bidirectional navigation over a sequence.
///
/// Unlike [`Iterator`], items are lent out from the cursor itself, so a
/// cursor can hand back `&Self::Item` while still owning its sequence.
pub trait Cursor {
    type Item;

    fn next(&mut self) -> Option<&Self::Item>;
    fn prev(&mut self) -> Option<&Self::Item>;
    fn current(&self) -> Option<&Self::Item>;
    fn peek_next(&self) -> Option<&Self::Item>;
    fn peek_prev(&self) -> Option<&Self::Item>;
    fn has_next(&self) -> bool;
    fn has_prev(&self) -> bool;

    /// Moves `n` steps forward. On a shortfall, returns the number of steps
    /// that could not be taken, like `Iterator::advance_by`.
    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize>;

    /// The backward counterpart of [`Cursor::advance_by`].
    fn revert_by(&mut self, n: usize) -> Result<(), NonZeroUsize>;
}

pub trait CursorWithPosition: Cursor {
    /// Index of the current element, or `None` before the first move.
    fn index(&self) -> Option<usize>;
    fn set_index<I: PrimInt + Display>(&mut self, index: I) -> Result<(), CursorError>;
    fn reset(&mut self);
}
