//! # Ring Collections
//!
//! A fixed-capacity ring buffer whose capacity, overflow behaviour, index width, storage
//! location and alignment are all chosen at compile time.
//!
//! [`CircularBuffer<T, N>`](CircularBuffer) stores exactly `N` elements (no reserved
//! slot), pushes and pops at both ends in O(1), and never allocates after construction.
//!
//! ## Key Features
//!
//! * **Full capacity:** `head`, `tail` and `len` are tracked separately, so a full
//!   buffer holds `N` elements, not `N - 1`.
//! * **Overflow policy as a type:** [`Overwrite`] evicts the element at the opposite end;
//!   [`Discard`] rejects the new one.  Every insert returns an [`InsertResult`].
//! * **Inline or heap slots:** [`Inline`] embeds the slots in the buffer object;
//!   [`Heap`] makes a single aligned allocation up front.
//! * **Power-of-two fast path:** index wrap uses a bitmask when `N` is a power of two,
//!   selected at compile time.
//! * **Compact indices:** `head`/`tail`/`len` can be `u8`, `u16`, `u32`, `u64` or `usize`.
//!
//! ## Configuration Constraints
//!
//! * `N` must be **greater than 0** and fit in the index type.
//! * An explicit [`Alignment`] must be at least `align_of::<T>()`.
//! * [`Inline`] slot arrays are limited to [`MAX_INLINE_BYTES`]; use [`Heap`] beyond that.
//!
//! All three are checked at compile time.
//!
//! ## Examples
//!
//! ### Overwrite (default)
//!
//! ```rust
//! use ring_collections::{CircularBuffer, InsertResult};
//!
//! let mut readings: CircularBuffer<u16, 3> = CircularBuffer::new();
//! for r in [10, 20, 30] {
//!     assert_eq!(readings.push_back(r), InsertResult::Inserted);
//! }
//! assert!(readings.is_full());
//!
//! // Oldest reading is evicted.
//! assert_eq!(readings.push_back(40), InsertResult::Overwritten);
//! assert_eq!(readings, [20, 30, 40]);
//! ```
//!
//! ### Discard
//!
//! ```rust
//! use ring_collections::{DiscardBuffer, InsertResult};
//!
//! let mut jobs: DiscardBuffer<&str, 2> = DiscardBuffer::new();
//! let _ = jobs.push_back("a");
//! let _ = jobs.push_back("b");
//! assert_eq!(jobs.push_back("c"), InsertResult::Discarded);
//! assert_eq!(jobs.take_front(), Some("a"));
//! ```
//!
//! ### Full configuration
//!
//! ```rust
//! use ring_collections::{Align64, CircularBuffer, Heap, Overwrite};
//!
//! // 200 slots, u8 cursors, one 64-byte aligned heap block.
//! let mut samples: CircularBuffer<f32, 200, Overwrite, u8, Heap, Align64> = CircularBuffer::new();
//! samples.extend((0..500).map(|i| i as f32));
//! assert_eq!(samples.len(), 200);
//! assert_eq!(samples.front(), Some(&300.0));
//! assert!(!CircularBuffer::<f32, 200, Overwrite, u8, Heap, Align64>::has_inline_storage());
//! ```

// --- Module Declarations ---

pub mod any_ring;
pub mod buffer;
pub mod error;
pub mod iter;
pub mod policy;
pub mod ring;
pub mod storage;
pub mod utils;

// --- Re-exports ---

pub use any_ring::AnyRing;
pub use buffer::{CircularBuffer, DiscardBuffer, HeapBuffer};
pub use error::OutOfRange;
pub use iter::{Cursor, CursorMut, IntoIter, Iter, IterMut};
pub use policy::{Discard, InsertResult, OverflowPolicy, Overwrite, Policy};
pub use storage::{
    Align8, Align16, Align32, Align64, Align128, Alignment, DEFAULT_INLINE_THRESHOLD, Heap,
    Inline, MAX_INLINE_BYTES, Natural, Storage, StorageKind,
};
pub use utils::IndexType;
