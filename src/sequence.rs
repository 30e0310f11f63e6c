use std::rc::Rc;
use std::sync::Arc;

/// An ordered run of elements that a cursor can walk over.
///
/// Anything that can lend out a contiguous slice qualifies: slices, arrays,
/// vectors, and references or smart pointers to any of those. The cursor reads
/// the slice afresh on every call, so the length it sees is always the live one.
pub trait Sequence {
    type Item;

    fn as_slice(&self) -> &[Self::Item];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
}

macro_rules! forward_sequence {
    ($($Ptr:ident),+) => {
        $(
            impl<S: Sequence + ?Sized> Sequence for $Ptr<S> {
                type Item = S::Item;
                fn as_slice(&self) -> &[S::Item] {
                    (**self).as_slice()
                }
            }
        )+
    };
}

forward_sequence!(Box, Rc, Arc);

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    fn as_slice(&self) -> &[S::Item] {
        (**self).as_slice()
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;
    fn as_slice(&self) -> &[S::Item] {
        (**self).as_slice()
    }
}
