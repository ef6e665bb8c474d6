//! Slot storage strategies for [`CircularBuffer`](crate::CircularBuffer).
//!
//! A buffer owns exactly `N` slots of `MaybeUninit<T>`.  Where those slots live is a
//! type parameter:
//!
//! | Strategy | Slots live in | Moving the buffer |
//! |----------|---------------|-------------------|
//! | [`Inline`] | the buffer object itself (`[MaybeUninit<T>; N]`) | copies the slot bytes |
//! | [`Heap`] | one aligned allocation made in `new()` | copies one pointer |
//!
//! The choice is resolved through the generic associated type [`Storage::Slots`], so
//! there is no runtime tag and no branch on the hot path.  Neither arena knows which
//! slots hold live values; the owning buffer tracks the live window and drops it.
//!
//! # Alignment
//! The slot region is aligned to `max(requested, align_of::<usize>())`, where the
//! request comes from an [`Alignment`] marker ([`Natural`] means `align_of::<T>()`).

use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;
use std::alloc;

/// Recommended element-count cutoff between [`Inline`] and [`Heap`] storage.
pub const DEFAULT_INLINE_THRESHOLD: usize = 64;

/// Maximum byte size of an inline slot array.  Prevents accidentally placing huge
/// rings in a stack frame.
pub const MAX_INLINE_BYTES: usize = 16 * 1024;

/// Runtime description of a storage strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Inline,
    Heap,
}

impl StorageKind {
    /// The strategy a `capacity <= threshold` rule selects.
    ///
    /// ```
    /// use ring_collections::{StorageKind, DEFAULT_INLINE_THRESHOLD};
    ///
    /// assert_eq!(StorageKind::for_capacity(32, DEFAULT_INLINE_THRESHOLD), StorageKind::Inline);
    /// assert_eq!(StorageKind::for_capacity(128, DEFAULT_INLINE_THRESHOLD), StorageKind::Heap);
    /// ```
    pub const fn for_capacity(capacity: usize, threshold: usize) -> StorageKind {
        if capacity <= threshold {
            StorageKind::Inline
        } else {
            StorageKind::Heap
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageKind::Inline => "inline",
            StorageKind::Heap => "heap",
        })
    }
}

mod sealed {
    pub trait Sealed {}
}

// ─── Alignment ────────────────────────────────────────────────────────────────

/// Requested alignment of the slot region.
pub trait Alignment: sealed::Sealed + Sized + Send + Sync + 'static {
    /// `None` defers to the element's natural alignment.
    const REQUESTED: Option<usize>;
}

/// Align slots to `align_of::<T>()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl sealed::Sealed for Natural {}
impl Alignment for Natural {
    const REQUESTED: Option<usize> = None;
}

macro_rules! alignment_markers {
    ($($name:ident => $bytes:literal),* $(,)?) => {
        $(
            #[doc = concat!("Align slots to ", stringify!($bytes), " bytes.")]
            #[repr(align($bytes))]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl sealed::Sealed for $name {}
            impl Alignment for $name {
                const REQUESTED: Option<usize> = Some($bytes);
            }
        )*
    };
}

alignment_markers! {
    Align8 => 8,
    Align16 => 16,
    Align32 => 32,
    Align64 => 64,
    Align128 => 128,
}

/// Effective slot alignment for element `T` under request `A`.
pub(crate) struct SlotAlign<T, A>(PhantomData<(T, A)>);

impl<T, A: Alignment> SlotAlign<T, A> {
    pub(crate) const BYTES: usize = {
        let requested = match A::REQUESTED {
            Some(bytes) => bytes,
            None => mem::align_of::<T>(),
        };
        assert!(requested.is_power_of_two(), "alignment must be a power of two");
        assert!(
            requested >= mem::align_of::<T>(),
            "alignment must be at least the element's natural alignment"
        );
        if requested < mem::align_of::<usize>() {
            mem::align_of::<usize>()
        } else {
            requested
        }
    };
}

// ─── Slot arenas ──────────────────────────────────────────────────────────────

/// A fixed region of `N` uninitialised `T` slots.
///
/// # Safety
/// `as_ptr`/`as_mut_ptr` must return a pointer valid for reads and writes of `N`
/// consecutive `T` for as long as the arena is alive, aligned to at least
/// `align_of::<T>()`.  Dropping the arena must not drop any `T`.
pub unsafe trait SlotArena<T> {
    fn new() -> Self;
    fn as_ptr(&self) -> *const T;
    fn as_mut_ptr(&mut self) -> *mut T;
}

/// Slots embedded in the owning object.
#[repr(C)]
pub struct InlineSlots<T, const N: usize, A: Alignment> {
    _align: [A; 0],
    _ptr_align: [usize; 0],
    slots: [MaybeUninit<T>; N],
}

unsafe impl<T, const N: usize, A: Alignment> SlotArena<T> for InlineSlots<T, N, A> {
    #[inline(always)]
    fn new() -> Self {
        const {
            assert!(
                mem::size_of::<[MaybeUninit<T>; N]>() <= MAX_INLINE_BYTES,
                "inline ring storage exceeds MAX_INLINE_BYTES; use HeapBuffer (S = Heap) or reduce N"
            );
        }
        Self {
            _align: [],
            _ptr_align: [],
            slots: [const { MaybeUninit::uninit() }; N],
        }
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.slots.as_ptr() as *const T
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }
}

/// Slots in a single allocation owned by the arena.
pub struct HeapSlots<T, const N: usize, A: Alignment> {
    ptr: NonNull<T>,
    _marker: PhantomData<(T, A)>,
}

// SAFETY: the arena exclusively owns its block, exactly like `Box<[T]>`.
unsafe impl<T: Send, const N: usize, A: Alignment> Send for HeapSlots<T, N, A> {}
unsafe impl<T: Sync, const N: usize, A: Alignment> Sync for HeapSlots<T, N, A> {}

impl<T, const N: usize, A: Alignment> HeapSlots<T, N, A> {
    fn layout() -> Layout {
        let Some(size) = mem::size_of::<T>().checked_mul(N) else {
            capacity_overflow()
        };
        match Layout::from_size_align(size, SlotAlign::<T, A>::BYTES) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

unsafe impl<T, const N: usize, A: Alignment> SlotArena<T> for HeapSlots<T, N, A> {
    fn new() -> Self {
        let layout = Self::layout();
        if layout.size() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                _marker: PhantomData,
            };
        }
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) } as *mut T;
        let Some(ptr) = NonNull::new(raw) else {
            alloc::handle_alloc_error(layout)
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            bytes = layout.size(),
            align = layout.align(),
            "allocated ring slots"
        );
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T, const N: usize, A: Alignment> Drop for HeapSlots<T, N, A> {
    fn drop(&mut self) {
        let layout = Self::layout();
        if layout.size() != 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                bytes = layout.size(),
                align = layout.align(),
                "released ring slots"
            );
            // SAFETY: allocated in `new` with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

// ─── Strategies ───────────────────────────────────────────────────────────────

/// Type-level storage strategy.  Implemented by [`Inline`] and [`Heap`].
pub trait Storage: sealed::Sealed + 'static {
    const KIND: StorageKind;

    /// The slot arena this strategy places inside the buffer.
    type Slots<T, const N: usize, A: Alignment>: SlotArena<T>;
}

/// Slots embedded in the buffer object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Inline;

/// Slots in one heap block allocated when the buffer is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Heap;

impl sealed::Sealed for Inline {}
impl sealed::Sealed for Heap {}

impl Storage for Inline {
    const KIND: StorageKind = StorageKind::Inline;
    type Slots<T, const N: usize, A: Alignment> = InlineSlots<T, N, A>;
}

impl Storage for Heap {
    const KIND: StorageKind = StorageKind::Heap;
    type Slots<T, const N: usize, A: Alignment> = HeapSlots<T, N, A>;
}
