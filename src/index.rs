use num_traits::{PrimInt, ToPrimitive};

// Converts a caller-supplied index into a position in `0..len`. Negative
// indices and indices past the end are rejected.
pub(crate) fn bounded_index<I: PrimInt>(index: I, len: usize) -> Option<usize> {
    index.to_usize().filter(|&i| i < len)
}

// Reduces a caller-supplied index modulo `len`, rounding towards negative
// infinity so the result always lands in `0..len`. `len` must be non-zero.
pub(crate) fn wrap_index<I: PrimInt>(index: I, len: usize) -> usize {
    debug_assert!(len > 0, "cannot wrap into an empty sequence");
    match index.to_i128() {
        Some(i) => i.rem_euclid(len as i128) as usize,
        // Only u128 values above i128::MAX end up here.
        None => (index.to_u128().unwrap_or_default() % len as u128) as usize,
    }
}

// `(a + b) mod len` for `a, b < len`, without an intermediate above `len`.
fn add_mod(a: usize, b: usize, len: usize) -> usize {
    if a >= len - b {
        a - (len - b)
    } else {
        a + b
    }
}

// `(a - b) mod len` for `a, b < len`.
fn sub_mod(a: usize, b: usize, len: usize) -> usize {
    if a >= b {
        a - b
    } else {
        len - (b - a)
    }
}

// Position reached by walking `steps` forward from `start` on a ring of `len`
// elements, where `start == None` stands for "before the first element".
pub(crate) fn wrap_forward(start: Option<usize>, steps: usize, len: usize) -> usize {
    debug_assert!(len > 0 && steps > 0);
    match start {
        Some(i) => add_mod(i % len, steps % len, len),
        None => (steps - 1) % len,
    }
}

// Same as `wrap_forward` but walking backwards, one `prev()` at a time. A
// start past the end (after the sequence shrank) is walked down step by step
// rather than reduced first. From "before the first element" the first step
// lands on the last element.
pub(crate) fn wrap_backward(start: Option<usize>, steps: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    match start {
        Some(i) if steps <= i => i - steps,
        Some(i) => sub_mod(0, (steps - i) % len, len),
        None => sub_mod(0, steps % len, len),
    }
}
