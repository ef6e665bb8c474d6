//! Fixed-capacity ring buffer with compile-time overflow policy and storage strategy.
//!
//! [`CircularBuffer`] holds exactly `N` slots and tracks `head`, `tail` and `len`
//! separately, so a full buffer really holds `N` elements (there is no reserved
//! "empty" slot).
//!
//! # Layout
//! ```text
//!   physical:   0    1    2    3    4    5
//!             [ d ][ . ][ . ][ a ][ b ][ c ]      N = 6, len = 4
//!                    ^         ^
//!                   head      tail
//!   logical:    a = 0, b = 1, c = 2, d = 3
//! ```
//! `tail` is the slot of the front element, `head` the slot the next `push_back` writes.
//! Only the `len` slots starting at `tail` hold initialised values; every other slot is
//! uninitialised memory and is never read or dropped.
//!
//! # Generic parameters
//! | Parameter | Meaning | Default |
//! |-----------|---------|---------|
//! | `T` | Element type | |
//! | `N` | Capacity, `> 0` | |
//! | `P` | [`Overwrite`] or [`Discard`] | `Overwrite` |
//! | `I` | Width of `head`/`tail`/`len`, must hold `N` | `u32` |
//! | `S` | [`Inline`] or [`Heap`](crate::Heap) slot storage | `Inline` |
//! | `A` | Slot [`Alignment`] | [`Natural`] |
//!
//! Invalid combinations (zero capacity, `N` too large for `I`, an alignment narrower than
//! `T`'s) fail to compile the first time the type is constructed.
//!
//! # Concurrency
//! The buffer does no synchronisation of its own.  It is `Send`/`Sync` whenever `T` is;
//! share it across threads behind a `Mutex` or hand it over through a channel.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use crate::error::OutOfRange;
use crate::iter::{Cursor, CursorMut, IntoIter, Iter, IterMut};
use crate::policy::{Discard, InsertResult, OverflowPolicy, Overwrite, Policy};
use crate::ring::Ring;
use crate::storage::{Alignment, Heap, Inline, Natural, SlotAlign, SlotArena, Storage, StorageKind};
use crate::utils::IndexType;

/// A ring buffer of exactly `N` elements.
///
/// ```
/// use ring_collections::{CircularBuffer, InsertResult};
///
/// let mut buf: CircularBuffer<i32, 3> = CircularBuffer::new();
/// assert_eq!(buf.push_back(1), InsertResult::Inserted);
/// assert_eq!(buf.push_back(2), InsertResult::Inserted);
/// assert_eq!(buf.push_back(3), InsertResult::Inserted);
/// assert_eq!(buf.push_back(4), InsertResult::Overwritten);
/// assert_eq!(buf, [2, 3, 4]);
/// ```
///
/// # Choosing storage
/// The slot location is the `S` parameter, not a threshold compared against `N`: stable
/// Rust cannot size an array from such a comparison.  `S` defaults to [`Inline`] for
/// every `N`, and an inline slot array larger than
/// [`MAX_INLINE_BYTES`](crate::MAX_INLINE_BYTES) fails to compile.  Pick [`Heap`]
/// (or the [`HeapBuffer`] alias) for large rings.
/// [`StorageKind::for_capacity`] with
/// [`DEFAULT_INLINE_THRESHOLD`](crate::DEFAULT_INLINE_THRESHOLD) gives the recommended
/// choice for a capacity:
///
/// ```
/// use ring_collections::{
///     CircularBuffer, HeapBuffer, StorageKind, DEFAULT_INLINE_THRESHOLD,
/// };
///
/// const N: usize = 4096;
/// assert_eq!(StorageKind::for_capacity(N, DEFAULT_INLINE_THRESHOLD), StorageKind::Heap);
///
/// // `CircularBuffer<u64, N>` would exceed the inline limit; the heap variant is fine.
/// let mut big: HeapBuffer<u64, N> = CircularBuffer::new();
/// big.extend(0..10_000);
/// assert_eq!(big.front(), Some(&5_904));
/// ```
pub struct CircularBuffer<
    T,
    const N: usize,
    P: Policy = Overwrite,
    I: IndexType = u32,
    S: Storage = Inline,
    A: Alignment = Natural,
> {
    head: I,
    tail: I,
    len: I,
    slots: S::Slots<T, N, A>,
    _marker: PhantomData<(T, P)>,
}

/// A buffer that rejects pushes once full.
pub type DiscardBuffer<T, const N: usize> = CircularBuffer<T, N, Discard>;

/// A buffer whose slots live in one heap allocation.
pub type HeapBuffer<T, const N: usize, P = Overwrite> = CircularBuffer<T, N, P, u32, Heap>;

#[derive(Clone, Copy)]
enum End {
    Back,
    Front,
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment>
    CircularBuffer<T, N, P, I, S, A>
{
    /// The fixed number of slots.
    pub const CAPACITY: usize = N;

    /// Creates an empty buffer.  Heap storage allocates its block here.
    ///
    /// # Panics (compile-time)
    /// Asserts `N > 0`, `N <= I::MAX` and a valid alignment request.
    pub fn new() -> Self {
        const {
            assert!(N > 0, "CircularBuffer capacity must be greater than 0");
            assert!(N <= I::MAX, "CircularBuffer capacity too large for the index type");
            assert!(SlotAlign::<T, A>::BYTES.is_power_of_two());
        }
        Self {
            head: I::ZERO,
            tail: I::ZERO,
            len: I::ZERO,
            slots: <S::Slots<T, N, A> as SlotArena<T>>::new(),
            _marker: PhantomData,
        }
    }

    // ─── queries ──────────────────────────────────────────────────────────────

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len.as_usize()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len.is_zero()
    }

    /// Returns `true` when the next push will overwrite or discard.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len.as_usize() == N
    }

    #[inline(always)]
    pub const fn policy() -> OverflowPolicy {
        P::OVERFLOW
    }

    #[inline(always)]
    pub const fn storage_kind() -> StorageKind {
        S::KIND
    }

    #[inline(always)]
    pub const fn has_inline_storage() -> bool {
        matches!(S::KIND, StorageKind::Inline)
    }

    /// Effective alignment of the slot region in bytes.
    #[inline(always)]
    pub const fn alignment() -> usize {
        SlotAlign::<T, A>::BYTES
    }

    // ─── index helpers ────────────────────────────────────────────────────────

    /// Physical slot of logical position `logical`.  Requires `logical < len`.
    #[inline(always)]
    fn physical(&self, logical: usize) -> usize {
        debug_assert!(logical < self.len(), "logical index past the live window");
        Ring::<N>::physical(self.tail.as_usize(), logical)
    }

    #[inline(always)]
    fn slot(&self, physical: usize) -> *const T {
        // SAFETY: callers pass `physical < N`.
        unsafe { self.slots.as_ptr().add(physical) }
    }

    #[inline(always)]
    fn slot_mut(&mut self, physical: usize) -> *mut T {
        // SAFETY: callers pass `physical < N`.
        unsafe { self.slots.as_mut_ptr().add(physical) }
    }

    // ─── element access ───────────────────────────────────────────────────────

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Logical index 0 is the front (oldest element).
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            // SAFETY: `index` is inside the live window.
            Some(unsafe { &*self.slot(self.physical(index)) })
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let physical = self.physical(index);
            // SAFETY: `index` is inside the live window.
            Some(unsafe { &mut *self.slot_mut(physical) })
        } else {
            None
        }
    }

    /// Bounds-checked access reporting [`OutOfRange`].
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len();
        self.get(index).ok_or(OutOfRange { index, len })
    }

    /// Mutable counterpart of [`at`](CircularBuffer::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len();
        self.get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Returns the element at logical `index` without a bounds check.
    ///
    /// # Safety
    /// `index < self.len()`.  Checked with `debug_assert!` only.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { &*self.slot(self.physical(index)) }
    }

    /// Mutable counterpart of [`get_unchecked`](CircularBuffer::get_unchecked).
    ///
    /// # Safety
    /// `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        let physical = self.physical(index);
        unsafe { &mut *self.slot_mut(physical) }
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: non-empty, so `prev(head)` holds the newest element.
            Some(unsafe { &*self.slot(Ring::<N>::prev(self.head.as_usize())) })
        }
    }

    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            let physical = Ring::<N>::prev(self.head.as_usize());
            // SAFETY: as in `back`.
            Some(unsafe { &mut *self.slot_mut(physical) })
        }
    }

    /// Returns up to two contiguous slices covering the logical range `[0, len)`.
    ///
    /// The second slice is empty unless the live window wraps past slot `N - 1`.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let ptr = self.slots.as_ptr();
        let tail = self.tail.as_usize();
        let len = self.len();
        // SAFETY: both ranges lie inside the live window.
        unsafe {
            if tail + len <= N {
                (slice::from_raw_parts(ptr.add(tail), len), &[])
            } else {
                let first = N - tail;
                (
                    slice::from_raw_parts(ptr.add(tail), first),
                    slice::from_raw_parts(ptr, len - first),
                )
            }
        }
    }

    /// Mutable counterpart of [`as_slices`](CircularBuffer::as_slices).
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let tail = self.tail.as_usize();
        let len = self.len();
        let ptr = self.slots.as_mut_ptr();
        // SAFETY: the two ranges are disjoint parts of the live window.
        unsafe {
            if tail + len <= N {
                (slice::from_raw_parts_mut(ptr.add(tail), len), &mut [])
            } else {
                let first = N - tail;
                (
                    slice::from_raw_parts_mut(ptr.add(tail), first),
                    slice::from_raw_parts_mut(ptr, len - first),
                )
            }
        }
    }

    // ─── insertion ────────────────────────────────────────────────────────────

    /// Shared state machine behind every `push_*` and `emplace_*`.
    ///
    /// `make` runs only when the value will be stored.  The evicted element of an
    /// overwrite is dropped after the indices are consistent again.
    #[inline(always)]
    fn insert_with<F: FnOnce() -> T>(&mut self, end: End, make: F) -> InsertResult {
        let was_full = self.is_full();
        if was_full && matches!(P::OVERFLOW, OverflowPolicy::Discard) {
            return InsertResult::Discarded;
        }
        let value = make();

        if was_full {
            // Full ring: head == tail.
            let evicted = match end {
                End::Back => {
                    let physical = self.head.as_usize();
                    self.head = I::from_usize(Ring::<N>::next(physical));
                    self.tail = I::from_usize(Ring::<N>::next(self.tail.as_usize()));
                    // SAFETY: the slot held the oldest live element.
                    unsafe { ptr::replace(self.slot_mut(physical), value) }
                }
                End::Front => {
                    self.head = I::from_usize(Ring::<N>::prev(self.head.as_usize()));
                    let physical = Ring::<N>::prev(self.tail.as_usize());
                    self.tail = I::from_usize(physical);
                    // SAFETY: the slot held the newest live element.
                    unsafe { ptr::replace(self.slot_mut(physical), value) }
                }
            };
            drop(evicted);
            InsertResult::Overwritten
        } else {
            match end {
                End::Back => {
                    let physical = self.head.as_usize();
                    // SAFETY: not full, so `head` is outside the live window.
                    unsafe { ptr::write(self.slot_mut(physical), value) };
                    self.head = I::from_usize(Ring::<N>::next(physical));
                }
                End::Front => {
                    let physical = Ring::<N>::prev(self.tail.as_usize());
                    // SAFETY: not full, so `prev(tail)` is outside the live window.
                    unsafe { ptr::write(self.slot_mut(physical), value) };
                    self.tail = I::from_usize(physical);
                }
            }
            self.len = self.len.inc();
            InsertResult::Inserted
        }
    }

    /// Appends `value` at the back.
    ///
    /// On a full buffer, [`Overwrite`] evicts the front element and [`Discard`] drops
    /// `value`; the returned [`InsertResult`] says which happened.
    #[inline(always)]
    pub fn push_back(&mut self, value: T) -> InsertResult {
        self.insert_with(End::Back, move || value)
    }

    /// Prepends `value` at the front.
    ///
    /// On a full buffer, [`Overwrite`] evicts the back element and [`Discard`] drops
    /// `value`.
    #[inline(always)]
    pub fn push_front(&mut self, value: T) -> InsertResult {
        self.insert_with(End::Front, move || value)
    }

    /// Builds the new back element with `make`.  Under [`Discard`] on a full buffer
    /// `make` is never called.
    #[inline(always)]
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> InsertResult {
        self.insert_with(End::Back, make)
    }

    /// Builds the new front element with `make`.
    #[inline(always)]
    pub fn emplace_front<F: FnOnce() -> T>(&mut self, make: F) -> InsertResult {
        self.insert_with(End::Front, make)
    }

    // ─── removal ──────────────────────────────────────────────────────────────

    /// Detaches the back slot from the live window and returns its physical index.
    /// Requires a non-empty buffer.
    #[inline(always)]
    fn retreat_head(&mut self) -> usize {
        let physical = Ring::<N>::prev(self.head.as_usize());
        self.head = I::from_usize(physical);
        self.len = self.len.dec();
        physical
    }

    /// Detaches the front slot from the live window and returns its physical index.
    /// Requires a non-empty buffer.
    #[inline(always)]
    fn advance_tail(&mut self) -> usize {
        let physical = self.tail.as_usize();
        self.tail = I::from_usize(Ring::<N>::next(physical));
        self.len = self.len.dec();
        physical
    }

    /// Drops the back element.
    ///
    /// # Panics
    /// If the buffer is empty.  Use [`take_back`](CircularBuffer::take_back) when
    /// emptiness is a normal condition.
    #[inline]
    pub fn drop_back(&mut self) {
        assert!(!self.is_empty(), "drop_back on an empty CircularBuffer");
        let physical = self.retreat_head();
        // SAFETY: the slot was the newest live element and is no longer tracked.
        unsafe { ptr::drop_in_place(self.slot_mut(physical)) };
    }

    /// Drops the front element.
    ///
    /// # Panics
    /// If the buffer is empty.
    #[inline]
    pub fn drop_front(&mut self) {
        assert!(!self.is_empty(), "drop_front on an empty CircularBuffer");
        let physical = self.advance_tail();
        // SAFETY: the slot was the oldest live element and is no longer tracked.
        unsafe { ptr::drop_in_place(self.slot_mut(physical)) };
    }

    /// Removes and returns the back element, or `None` if empty.
    #[inline]
    pub fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let physical = self.retreat_head();
        // SAFETY: moved out of a slot that just left the live window.
        Some(unsafe { ptr::read(self.slot(physical)) })
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let physical = self.advance_tail();
        // SAFETY: moved out of a slot that just left the live window.
        Some(unsafe { ptr::read(self.slot(physical)) })
    }

    /// Drops every element front to back and resets the cursors to slot 0.
    pub fn clear(&mut self) {
        if !mem::needs_drop::<T>() {
            self.reset();
            return;
        }
        let (front, back) = self.as_mut_slices();
        let (front, back) = (front as *mut [T], back as *mut [T]);
        self.reset();
        // SAFETY: both slices were the live window, which is now empty.
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }

    #[inline(always)]
    fn reset(&mut self) {
        self.head = I::ZERO;
        self.tail = I::ZERO;
        self.len = I::ZERO;
    }

    // ─── iteration ────────────────────────────────────────────────────────────

    /// Front-to-back iterator.  Use `.rev()` for back-to-front.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self.slots.as_ptr(), self.tail.as_usize(), self.len())
    }

    /// Front-to-back iterator yielding exclusive references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        let tail = self.tail.as_usize();
        let len = self.len();
        IterMut::new(self.slots.as_mut_ptr(), tail, len)
    }

    /// Random-access cursor at logical `index` (may equal `len`).
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T, N> {
        let owner = self as *const Self as *const ();
        Cursor::new(owner, self.slots.as_ptr(), self.tail.as_usize(), self.len(), index)
    }

    /// Random-access cursor at logical `index` that can modify elements.
    #[inline]
    pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_, T, N> {
        let owner = self as *const Self as *const ();
        let (tail, len) = (self.tail.as_usize(), self.len());
        CursorMut::new(owner, self.slots.as_mut_ptr(), tail, len, index)
    }

    /// Cursor at the front element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        self.cursor(0)
    }

    /// Cursor one past the back element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        self.cursor(self.len())
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Drop
    for CircularBuffer<T, N, P, I, S, A>
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Default
    for CircularBuffer<T, N, P, I, S, A>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Clone
    for CircularBuffer<T, N, P, I, S, A>
{
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self.iter() {
            let _ = out.push_back(item.clone());
        }
        out
    }

    /// Reuses `self`'s slots (no new allocation for heap storage).
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source.iter() {
            let _ = self.push_back(item.clone());
        }
    }
}

impl<T: fmt::Debug, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> fmt::Debug
    for CircularBuffer<T, N, P, I, S, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Index<usize>
    for CircularBuffer<T, N, P, I, S, A>
{
    type Output = T;

    /// # Panics
    /// If `index >= len`.
    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(item) => item,
            None => index_out_of_range(index, len),
        }
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> IndexMut<usize>
    for CircularBuffer<T, N, P, I, S, A>
{
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(item) => item,
            None => index_out_of_range(index, len),
        }
    }
}

#[cold]
#[inline(never)]
fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("{}", OutOfRange { index, len })
}

// ─── comparison ───────────────────────────────────────────────────────────────

impl<T, U, const N: usize, const M: usize, P, Q, I, J, S, R, A, B>
    PartialEq<CircularBuffer<U, M, Q, J, R, B>> for CircularBuffer<T, N, P, I, S, A>
where
    T: PartialEq<U>,
    P: Policy,
    Q: Policy,
    I: IndexType,
    J: IndexType,
    S: Storage,
    R: Storage,
    A: Alignment,
    B: Alignment,
{
    fn eq(&self, other: &CircularBuffer<U, M, Q, J, R, B>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T, U, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> PartialEq<[U]>
    for CircularBuffer<T, N, P, I, S, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T, U, const N: usize, const M: usize, P: Policy, I: IndexType, S: Storage, A: Alignment>
    PartialEq<[U; M]> for CircularBuffer<T, N, P, I, S, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        *self == other[..]
    }
}

impl<T, U, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> PartialEq<Vec<U>>
    for CircularBuffer<T, N, P, I, S, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<T: Eq, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Eq
    for CircularBuffer<T, N, P, I, S, A>
{
}

impl<T: PartialOrd, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> PartialOrd
    for CircularBuffer<T, N, P, I, S, A>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Ord
    for CircularBuffer<T, N, P, I, S, A>
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Hash
    for CircularBuffer<T, N, P, I, S, A>
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

// ─── construction from elements ───────────────────────────────────────────────

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Extend<T>
    for CircularBuffer<T, N, P, I, S, A>
{
    /// Pushes every item at the back; the overflow policy applies to each one.
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            let _ = self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment>
    Extend<&'a T> for CircularBuffer<T, N, P, I, S, A>
{
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> FromIterator<T>
    for CircularBuffer<T, N, P, I, S, A>
{
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

impl<T, const N: usize, const M: usize, P: Policy, I: IndexType, S: Storage, A: Alignment>
    From<[T; M]> for CircularBuffer<T, N, P, I, S, A>
{
    fn from(items: [T; M]) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> IntoIterator
    for CircularBuffer<T, N, P, I, S, A>
{
    type Item = T;
    type IntoIter = IntoIter<T, N, P, I, S, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> IntoIterator
    for &'a CircularBuffer<T, N, P, I, S, A>
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> IntoIterator
    for &'a mut CircularBuffer<T, N, P, I, S, A>
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
