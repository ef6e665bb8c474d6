//! Iterators and cursors over the logical sequence of a [`CircularBuffer`].
//!
//! None of these types materialise the sequence.  Each one carries the slot base
//! pointer, the physical `tail` and a logical position, and maps logical to physical
//! through [`Ring`] on every access, so wraparound is invisible to the caller.
//! The borrow they hold on the buffer rules out mutation while they are alive.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::buffer::CircularBuffer;
use crate::policy::Policy;
use crate::ring::Ring;
use crate::storage::{Alignment, Storage};
use crate::utils::IndexType;

// ─── Iter ─────────────────────────────────────────────────────────────────────

/// Shared front-to-back iterator.  Created by [`CircularBuffer::iter`].
pub struct Iter<'a, T, const N: usize> {
    base: *const T,
    tail: usize,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a T>,
}

// SAFETY: behaves like `&'a [T]`.
unsafe impl<T: Sync, const N: usize> Send for Iter<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for Iter<'_, T, N> {}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    #[inline]
    pub(crate) fn new(base: *const T, tail: usize, len: usize) -> Self {
        Self {
            base,
            tail,
            front: 0,
            back: len,
            _marker: PhantomData,
        }
    }

    /// # Safety
    /// `logical` must be inside the window the iterator was created for.
    #[inline(always)]
    unsafe fn at(&self, logical: usize) -> &'a T {
        unsafe { &*self.base.add(Ring::<N>::physical(self.tail, logical)) }
    }
}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let logical = self.front;
        self.front += 1;
        // SAFETY: front < back <= len.
        Some(unsafe { self.at(logical) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.back - self.front {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.back - self.front
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: front <= back < len.
        Some(unsafe { self.at(self.back) })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.back - self.front {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Iter<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

// ─── IterMut ──────────────────────────────────────────────────────────────────

/// Exclusive front-to-back iterator.  Created by [`CircularBuffer::iter_mut`].
///
/// Converts into a shared [`Iter`] over the remaining range with `Iter::from`; the
/// reverse conversion does not exist.
pub struct IterMut<'a, T, const N: usize> {
    base: *mut T,
    tail: usize,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: behaves like `&'a mut [T]`.
unsafe impl<T: Send, const N: usize> Send for IterMut<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for IterMut<'_, T, N> {}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(base: *mut T, tail: usize, len: usize) -> Self {
        Self {
            base,
            tail,
            front: 0,
            back: len,
            _marker: PhantomData,
        }
    }

    /// # Safety
    /// `logical` must be inside the window and yielded at most once.
    #[inline(always)]
    unsafe fn at(&mut self, logical: usize) -> &'a mut T {
        unsafe { &mut *self.base.add(Ring::<N>::physical(self.tail, logical)) }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }
        let logical = self.front;
        self.front += 1;
        // SAFETY: each logical index maps to a distinct slot and is yielded once.
        Some(unsafe { self.at(logical) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        if n >= self.back - self.front {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for IterMut<'a, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let logical = self.back;
        // SAFETY: as in `next`.
        Some(unsafe { self.at(logical) })
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {}
impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> {}

impl<'a, T, const N: usize> From<IterMut<'a, T, N>> for Iter<'a, T, N> {
    fn from(iter: IterMut<'a, T, N>) -> Self {
        Iter {
            base: iter.base as *const T,
            tail: iter.tail,
            front: iter.front,
            back: iter.back,
            _marker: PhantomData,
        }
    }
}

impl<T, const N: usize> fmt::Debug for IterMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &(self.back - self.front))
            .finish()
    }
}

// ─── IntoIter ─────────────────────────────────────────────────────────────────

/// Owning iterator.  Elements not yielded are dropped with the iterator.
pub struct IntoIter<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> {
    buffer: CircularBuffer<T, N, P, I, S, A>,
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment>
    IntoIter<T, N, P, I, S, A>
{
    pub(crate) fn new(buffer: CircularBuffer<T, N, P, I, S, A>) -> Self {
        Self { buffer }
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> Iterator
    for IntoIter<T, N, P, I, S, A>
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.buffer.take_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buffer.len();
        (len, Some(len))
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> DoubleEndedIterator
    for IntoIter<T, N, P, I, S, A>
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.buffer.take_back()
    }
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> ExactSizeIterator
    for IntoIter<T, N, P, I, S, A>
{
}

impl<T, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> FusedIterator
    for IntoIter<T, N, P, I, S, A>
{
}

impl<T: fmt::Debug, const N: usize, P: Policy, I: IndexType, S: Storage, A: Alignment> fmt::Debug
    for IntoIter<T, N, P, I, S, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.buffer).finish()
    }
}

// ─── Cursor ───────────────────────────────────────────────────────────────────

/// A random-access position in a buffer's logical sequence.
///
/// Cursors behave like indices into a flat slice: they move by signed offsets, their
/// difference is a signed distance, and they order by logical index.  `begin()` is
/// position 0 and `end()` is position `len`.
///
/// ```
/// use ring_collections::CircularBuffer;
///
/// let mut buf: CircularBuffer<i32, 4> = CircularBuffer::from([1, 2, 3, 4]);
/// buf.drop_front();
/// let _ = buf.push_back(5); // wraps around physically
///
/// let begin = buf.begin();
/// assert_eq!((begin + 3).get(), Some(&5));
/// assert_eq!(buf.end() - begin, 4);
/// assert!(begin < buf.end());
/// ```
///
/// Two cursors belong to the same buffer when they were taken from the same container
/// object, which also holds for zero-sized `T`.  Ordering or subtracting cursors of
/// different buffers is a contract violation caught by `debug_assert!`.
pub struct Cursor<'a, T, const N: usize> {
    owner: *const (),
    base: *const T,
    tail: usize,
    len: usize,
    index: usize,
    _marker: PhantomData<&'a T>,
}

// SAFETY: behaves like `&'a [T]` plus an index.
unsafe impl<T: Sync, const N: usize> Send for Cursor<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for Cursor<'_, T, N> {}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    #[inline]
    pub(crate) fn new(owner: *const (), base: *const T, tail: usize, len: usize, index: usize) -> Self {
        Self {
            owner,
            base,
            tail,
            len,
            index,
            _marker: PhantomData,
        }
    }

    /// Logical position of this cursor.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// `true` when the cursor sits one past the back element.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.index == self.len
    }

    /// The element under the cursor, or `None` outside `[begin, end)`.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        if self.index < self.len {
            // SAFETY: inside the live window.
            Some(unsafe { self.get_unchecked() })
        } else {
            None
        }
    }

    /// The element under the cursor.
    ///
    /// # Safety
    /// The cursor must lie in `[begin, end)`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &'a T {
        debug_assert!(self.index < self.len, "dereferenced a cursor outside the buffer");
        unsafe { &*self.base.add(Ring::<N>::physical(self.tail, self.index)) }
    }

    /// Element `offset` positions away, like `it[n]` on a flat sequence.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        (*self + offset).get()
    }

    /// Signed distance `self - origin`.
    #[inline]
    pub fn distance_from(&self, origin: &Self) -> isize {
        debug_assert!(self.same_buffer(origin), "cursors from different buffers");
        self.index.wrapping_sub(origin.index) as isize
    }

    #[inline(always)]
    fn same_buffer(&self, other: &Self) -> bool {
        ptr::eq(self.owner, other.owner)
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> AddAssign<isize> for Cursor<'_, T, N> {
    #[inline]
    fn add_assign(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset);
    }
}

impl<T, const N: usize> SubAssign<isize> for Cursor<'_, T, N> {
    #[inline]
    fn sub_assign(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset.wrapping_neg());
    }
}

impl<T, const N: usize> Add<isize> for Cursor<'_, T, N> {
    type Output = Self;

    #[inline]
    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<'a, T, const N: usize> Add<Cursor<'a, T, N>> for isize {
    type Output = Cursor<'a, T, N>;

    #[inline]
    fn add(self, cursor: Cursor<'a, T, N>) -> Cursor<'a, T, N> {
        cursor + self
    }
}

impl<T, const N: usize> Sub<isize> for Cursor<'_, T, N> {
    type Output = Self;

    #[inline]
    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<T, const N: usize> Sub for Cursor<'_, T, N> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance_from(&origin)
    }
}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.index == other.index
    }
}

impl<T, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialOrd for Cursor<'_, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, const N: usize> Ord for Cursor<'_, T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        debug_assert!(self.same_buffer(other), "cursors from different buffers");
        self.index.cmp(&other.index)
    }
}

impl<T, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}

// ─── CursorMut ────────────────────────────────────────────────────────────────

/// A random-access position that can also modify the element under it.
///
/// Created by [`CircularBuffer::cursor_mut`].  It moves with `+=`/`-=` like a
/// [`Cursor`] and converts into one with `Cursor::from`; the reverse conversion does
/// not exist.
///
/// ```
/// use ring_collections::{CircularBuffer, Cursor};
///
/// let mut buf: CircularBuffer<i32, 3> = (1..=5).collect();
/// let mut c = buf.cursor_mut(0);
/// c += 2;
/// *c.get_mut().unwrap() = 50;
/// *c.peek_mut(-1).unwrap() *= 10;
/// let read: Cursor<'_, i32, 3> = Cursor::from(c);
/// assert_eq!(read.get(), Some(&50));
/// assert_eq!(buf, [3, 40, 50]);
/// ```
pub struct CursorMut<'a, T, const N: usize> {
    owner: *const (),
    base: *mut T,
    tail: usize,
    len: usize,
    index: usize,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: behaves like `&'a mut [T]` plus an index.
unsafe impl<T: Send, const N: usize> Send for CursorMut<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for CursorMut<'_, T, N> {}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(owner: *const (), base: *mut T, tail: usize, len: usize, index: usize) -> Self {
        Self {
            owner,
            base,
            tail,
            len,
            index,
            _marker: PhantomData,
        }
    }

    /// Logical position of this cursor.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// `true` when the cursor sits one past the back element.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.index == self.len
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> Option<*mut T> {
        if index < self.len {
            // SAFETY: inside the live window.
            Some(unsafe { self.base.add(Ring::<N>::physical(self.tail, index)) })
        } else {
            None
        }
    }

    /// The element under the cursor, or `None` outside `[begin, end)`.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: the cursor holds the buffer's exclusive borrow.
        self.slot(self.index).map(|p| unsafe { &*p })
    }

    /// Exclusive access to the element under the cursor.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `get`; `&mut self` prevents a second live reference.
        self.slot(self.index).map(|p| unsafe { &mut *p })
    }

    /// Element `offset` positions away, mutably.
    #[inline]
    pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
        let index = self.index.wrapping_add_signed(offset);
        // SAFETY: as in `get_mut`.
        self.slot(index).map(|p| unsafe { &mut *p })
    }

    /// Consumes the cursor, returning the element under it for the whole borrow.
    #[inline]
    pub fn into_mut(self) -> Option<&'a mut T> {
        // SAFETY: the cursor, and with it every other path to the slot, is gone.
        self.slot(self.index).map(|p| unsafe { &mut *p })
    }

    /// Read-only view of the same position, borrowed from this cursor.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.owner, self.base, self.tail, self.len, self.index)
    }
}

impl<T, const N: usize> AddAssign<isize> for CursorMut<'_, T, N> {
    #[inline]
    fn add_assign(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset);
    }
}

impl<T, const N: usize> SubAssign<isize> for CursorMut<'_, T, N> {
    #[inline]
    fn sub_assign(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset.wrapping_neg());
    }
}

impl<'a, T, const N: usize> From<CursorMut<'a, T, N>> for Cursor<'a, T, N> {
    fn from(cursor: CursorMut<'a, T, N>) -> Self {
        Cursor::new(cursor.owner, cursor.base, cursor.tail, cursor.len, cursor.index)
    }
}

impl<T, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}
