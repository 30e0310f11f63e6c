use std::cmp::min;
use std::fmt::Display;
use std::num::NonZeroUsize;

use log::{debug, trace};
use num_traits::PrimInt;

use crate::cursor::{Cursor, CursorWithPosition};
use crate::error::CursorError;
use crate::index::{bounded_index, wrap_backward, wrap_forward, wrap_index};
use crate::sequence::Sequence;

/// A cursor over any [`Sequence`], either bounded or cycling.
///
/// A bounded cursor stops at either end of the sequence; a cycling cursor
/// wraps around and never runs out while the sequence is non-empty. Both
/// start before the first element. The mode can be switched at any time with
/// [`SequenceCursor::set_cycle`] without moving the cursor.
///
/// The length is read from the sequence on every call. If the sequence is
/// shrunk through [`SequenceCursor::get_mut`], the position is kept as is and
/// [`Cursor::current`] returns `None` until the cursor moves back in range.
///
/// Not synchronized; share across threads behind a lock.
#[derive(Debug, Clone)]
pub struct SequenceCursor<S> {
    seq: S,
    // We use 0 to represent the state before the first element, so that
    // positions can stay unsigned. Values above 0 are 1-based indices into
    // the sequence, so `pos` stays within `0..=len`.
    pos: usize,
    cycle: bool,
}

impl<S: Sequence> SequenceCursor<S> {
    /// Creates a bounded cursor positioned before the first element.
    pub fn new(seq: S) -> Self {
        SequenceCursor {
            seq,
            pos: 0,
            cycle: false,
        }
    }

    /// Creates a cycling cursor positioned before the first element.
    pub fn cycling(seq: S) -> Self {
        SequenceCursor {
            seq,
            pos: 0,
            cycle: true,
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn is_cycle(&self) -> bool {
        self.cycle
    }

    pub fn set_cycle(&mut self, cycle: bool) {
        self.cycle = cycle;
    }

    pub fn get_ref(&self) -> &S {
        &self.seq
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.seq
    }

    pub fn into_inner(self) -> S {
        self.seq
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        self.seq.as_slice().get(index)
    }
}

fn shortfall(n: usize) -> Result<(), NonZeroUsize> {
    match NonZeroUsize::new(n) {
        Some(n) => Err(n),
        None => Ok(()),
    }
}

impl<S: Sequence> Cursor for SequenceCursor<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<&Self::Item> {
        let len = self.seq.len();
        if self.cycle {
            if len == 0 {
                return None;
            }
            let index = wrap_forward(self.index(), 1, len);
            if index == 0 && self.pos > 0 {
                trace!("cursor wrapped past the end of a sequence of length {len}");
            }
            self.pos = index + 1;
        } else if self.pos < len {
            self.pos += 1;
        } else {
            return None;
        }
        self.current()
    }

    fn prev(&mut self) -> Option<&Self::Item> {
        let len = self.seq.len();
        if self.pos > 1 {
            self.pos -= 1;
        } else if self.cycle && len > 0 {
            trace!("cursor wrapped past the start of a sequence of length {len}");
            self.pos = len;
        } else {
            return None;
        }
        self.current()
    }

    fn current(&self) -> Option<&Self::Item> {
        self.index().and_then(|index| self.get(index))
    }

    fn peek_next(&self) -> Option<&Self::Item> {
        let len = self.seq.len();
        if self.cycle {
            if len == 0 {
                None
            } else {
                self.get(wrap_forward(self.index(), 1, len))
            }
        } else if self.pos < len {
            self.get(self.pos)
        } else {
            None
        }
    }

    fn peek_prev(&self) -> Option<&Self::Item> {
        let len = self.seq.len();
        if self.pos > 1 {
            self.get(self.pos - 2)
        } else if self.cycle && len > 0 {
            self.get(len - 1)
        } else {
            None
        }
    }

    fn has_next(&self) -> bool {
        let len = self.seq.len();
        if self.cycle {
            len > 0
        } else {
            self.pos < len
        }
    }

    fn has_prev(&self) -> bool {
        if self.cycle {
            !self.seq.is_empty()
        } else {
            self.pos > 1
        }
    }

    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        if n == 0 {
            return Ok(());
        }
        let len = self.seq.len();
        if self.cycle {
            if len == 0 {
                return shortfall(n);
            }
            self.pos = wrap_forward(self.index(), n, len) + 1;
            return Ok(());
        }
        let remaining = len.saturating_sub(self.pos);
        let advance = min(n, remaining);
        self.pos += advance;
        shortfall(n - advance)
    }

    fn revert_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        if n == 0 {
            return Ok(());
        }
        let len = self.seq.len();
        if self.cycle {
            if len == 0 {
                return shortfall(n);
            }
            self.pos = wrap_backward(self.index(), n, len) + 1;
            return Ok(());
        }
        let remaining = self.pos.saturating_sub(1);
        let revert = min(n, remaining);
        self.pos -= revert;
        shortfall(n - revert)
    }
}

impl<S: Sequence> CursorWithPosition for SequenceCursor<S> {
    fn index(&self) -> Option<usize> {
        self.pos.checked_sub(1)
    }

    fn set_index<I: PrimInt + Display>(&mut self, index: I) -> Result<(), CursorError> {
        let len = self.seq.len();
        let target = if self.cycle {
            if len == 0 {
                debug!("rejected index {index} for a cycling cursor over an empty sequence");
                return Err(CursorError::EmptyCycle);
            }
            wrap_index(index, len)
        } else {
            match bounded_index(index, len) {
                Some(target) => target,
                None => {
                    debug!("rejected index {index} for a sequence of length {len}");
                    return Err(CursorError::OutOfRange { len });
                }
            }
        };
        self.pos = target + 1;
        Ok(())
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}
