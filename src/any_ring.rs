//! Object-safe abstraction over fixed-capacity double-ended queues.

use crate::buffer::CircularBuffer;
use crate::policy::{InsertResult, OverflowPolicy, Policy};
use crate::storage::{Alignment, Storage};
use crate::utils::IndexType;

/// A bounded double-ended queue that reports what happened on every insert.
///
/// Implemented by every [`CircularBuffer`] configuration and by `heapless::Deque`
/// (which rejects pushes when full, i.e. behaves as a [`Discard`](crate::Discard) ring),
/// so producers can be written once against `&mut dyn AnyRing<T>`.
pub trait AnyRing<T> {
    /// Returns the number of elements in the ring.
    fn len(&self) -> usize;
    /// Returns the fixed number of slots.
    fn capacity(&self) -> usize;
    /// Returns `true` if the ring contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns `true` if the next push overwrites or discards.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
    /// How a full ring treats new elements.
    fn overflow_policy(&self) -> OverflowPolicy;
    /// Appends an element to the back.
    fn push_back(&mut self, item: T) -> InsertResult;
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T) -> InsertResult;
    /// Removes and returns the element from the back, or `None` if empty.
    fn take_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn take_front(&mut self) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the element at logical `index`, or `None`.
    fn get(&self, index: usize) -> Option<&T>;
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T> {
        self.get(0)
    }
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> AnyRing<T>
    for CircularBuffer<T, N, P, I, S, A>
{
    fn len(&self) -> usize {
        self.len()
    }
    fn capacity(&self) -> usize {
        N
    }
    fn overflow_policy(&self) -> OverflowPolicy {
        P::OVERFLOW
    }
    fn push_back(&mut self, item: T) -> InsertResult {
        self.push_back(item)
    }
    fn push_front(&mut self, item: T) -> InsertResult {
        self.push_front(item)
    }
    fn take_back(&mut self) -> Option<T> {
        self.take_back()
    }
    fn take_front(&mut self) -> Option<T> {
        self.take_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T, const N: usize> AnyRing<T> for heapless::Deque<T, N> {
    fn len(&self) -> usize {
        self.len()
    }
    fn capacity(&self) -> usize {
        N
    }
    fn overflow_policy(&self) -> OverflowPolicy {
        OverflowPolicy::Discard
    }
    fn push_back(&mut self, item: T) -> InsertResult {
        match self.push_back(item) {
            Ok(()) => InsertResult::Inserted,
            Err(_) => InsertResult::Discarded,
        }
    }
    fn push_front(&mut self, item: T) -> InsertResult {
        match self.push_front(item) {
            Ok(()) => InsertResult::Inserted,
            Err(_) => InsertResult::Discarded,
        }
    }
    fn take_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn take_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Discard, HeapBuffer};

    fn produce(ring: &mut dyn AnyRing<u32>, count: u32) -> Vec<InsertResult> {
        (0..count).map(|i| ring.push_back(i)).collect()
    }

    fn drain(ring: &mut dyn AnyRing<u32>) -> Vec<u32> {
        let mut out = Vec::new();
        while let Some(x) = ring.take_front() {
            out.push(x);
        }
        out
    }

    // ─── dyn dispatch ─────────────────────────────────────────────────────────
    #[test]
    fn test_any_ring_circular_buffer_overwrite() {
        let mut ring: CircularBuffer<u32, 3> = CircularBuffer::new();
        let results = produce(&mut ring, 5);
        assert_eq!(results.iter().filter(|r| r.is_overwritten()).count(), 2);
        let any: &mut dyn AnyRing<u32> = &mut ring;
        assert!(any.is_full());
        assert_eq!(any.overflow_policy(), OverflowPolicy::Overwrite);
        assert_eq!(any.front(), Some(&2));
        assert_eq!(any.back(), Some(&4));
        assert_eq!(drain(any), vec![2, 3, 4]);
        assert!(any.is_empty());
    }

    #[test]
    fn test_any_ring_heapless_matches_discard_buffer() {
        let mut heapless_ring: heapless::Deque<u32, 4> = heapless::Deque::new();
        let mut discard: CircularBuffer<u32, 4, Discard> = CircularBuffer::new();
        let mut heap: HeapBuffer<u32, 4, Discard> = HeapBuffer::new();

        let rings: [&mut dyn AnyRing<u32>; 3] = [&mut heapless_ring, &mut discard, &mut heap];
        for ring in rings {
            let results = produce(ring, 6);
            assert_eq!(&results[4..], &[InsertResult::Discarded; 2]);
            assert_eq!(ring.capacity(), 4);
            assert_eq!(ring.overflow_policy(), OverflowPolicy::Discard);
            assert_eq!(ring.get(1), Some(&1));
            assert_eq!(ring.get(4), None);
            assert_eq!(ring.push_front(9), InsertResult::Discarded);
            assert_eq!(ring.take_back(), Some(3));
            assert_eq!(ring.push_front(9), InsertResult::Inserted);
            assert_eq!(drain(ring), vec![9, 0, 1, 2]);
        }
    }

    #[test]
    fn test_any_ring_clear_and_empty_access() {
        let mut ring: heapless::Deque<u32, 2> = heapless::Deque::new();
        let any: &mut dyn AnyRing<u32> = &mut ring;
        assert_eq!(any.front(), None);
        assert_eq!(any.back(), None);
        let _ = any.push_back(1);
        any.clear();
        assert!(any.is_empty());
        assert_eq!(any.take_back(), None);
    }
}
