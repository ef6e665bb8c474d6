//! Overflow policies and insertion outcomes.
//!
//! The policy of a [`CircularBuffer`](crate::CircularBuffer) is a type parameter, so a
//! buffer can never change how it treats a full ring after it has been declared.

use core::fmt;

/// What a full buffer does with an incoming element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Evict an element at the opposite end and store the new one.
    Overwrite,
    /// Reject the new element and leave the buffer untouched.
    Discard,
}

/// Outcome of every `push_*` / `emplace_*` call.
#[must_use = "a full buffer may have overwritten or discarded an element"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertResult {
    /// The buffer had room; its length grew by one.
    Inserted,
    /// The buffer was full and an existing element was evicted.
    Overwritten,
    /// The buffer was full and the new element was rejected.
    Discarded,
}

impl InsertResult {
    #[inline]
    pub fn is_inserted(self) -> bool {
        self == InsertResult::Inserted
    }

    #[inline]
    pub fn is_overwritten(self) -> bool {
        self == InsertResult::Overwritten
    }

    #[inline]
    pub fn is_discarded(self) -> bool {
        self == InsertResult::Discarded
    }

    /// Returns `true` if the new element is now in the buffer.
    #[inline]
    pub fn is_stored(self) -> bool {
        self != InsertResult::Discarded
    }
}

impl fmt::Display for InsertResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsertResult::Inserted => "inserted",
            InsertResult::Overwritten => "overwritten",
            InsertResult::Discarded => "discarded",
        })
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Overwrite {}
    impl Sealed for super::Discard {}
}

/// Type-level overflow policy.  Implemented by [`Overwrite`] and [`Discard`].
pub trait Policy: sealed::Sealed + 'static {
    const OVERFLOW: OverflowPolicy;
}

/// Full buffers evict the oldest element on `push_back` and the newest on `push_front`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Overwrite;

/// Full buffers reject new elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Discard;

impl Policy for Overwrite {
    const OVERFLOW: OverflowPolicy = OverflowPolicy::Overwrite;
}

impl Policy for Discard {
    const OVERFLOW: OverflowPolicy = OverflowPolicy::Discard;
}
