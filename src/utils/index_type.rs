//! Shared index types for the ring cursors.

use core::fmt::Debug;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// A sealed trait for unsigned integer types used as **compact ring cursors**.
///
/// `CircularBuffer` stores its `head`, `tail` and `len` fields in this type.  Picking a
/// narrow type (e.g. `u8` for a 200-slot buffer) shrinks the container header; the
/// capacity must still fit, which is checked at compile time against [`IndexType::MAX`].
///
/// Signed integers deliberately do not implement this trait.
pub trait IndexType: sealed::Sealed + Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// The first valid index.
    const ZERO: Self;

    /// Largest value representable by this type, saturated to `usize`.
    const MAX: usize;

    /// Converts this index to a `usize` for slot arithmetic.
    fn as_usize(self) -> usize;

    /// Converts a `usize` slot index to this compact type.
    ///
    /// Callers guarantee `i <= Self::MAX`; the value is truncated otherwise.
    fn from_usize(i: usize) -> Self;

    /// Increments the index (self + 1).
    fn inc(self) -> Self;

    /// Decrements the index (self - 1).
    fn dec(self) -> Self;

    /// Returns true if the index is zero.
    fn is_zero(self) -> bool;
}

macro_rules! impl_index_type {
    ($($t:ty),* $(,)?) => {
        $(
            impl IndexType for $t {
                const ZERO: Self = 0;
                const MAX: usize = if (<$t>::MAX as u128) > (usize::MAX as u128) {
                    usize::MAX
                } else {
                    <$t>::MAX as usize
                };
                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }
                #[inline(always)]
                fn from_usize(i: usize) -> Self {
                    debug_assert!(i <= <Self as IndexType>::MAX);
                    i as $t
                }
                #[inline(always)]
                fn inc(self) -> Self {
                    self + 1
                }
                #[inline(always)]
                fn dec(self) -> Self {
                    self - 1
                }
                #[inline(always)]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn test_index_type<I: IndexType>() {
        let zero = I::ZERO;
        assert!(zero.is_zero());
        assert_eq!(zero.as_usize(), 0);

        let one = zero.inc();
        assert!(!one.is_zero());
        assert_eq!(one.as_usize(), 1);

        let zero_again = one.dec();
        assert!(zero_again.is_zero());

        let from = I::from_usize(200);
        assert_eq!(from.as_usize(), 200);
        assert!(I::MAX >= 255);
    }

    #[test]
    fn test_u8_index() {
        test_index_type::<u8>();
        assert_eq!(<u8 as IndexType>::MAX, 255);
    }

    #[test]
    fn test_u16_index() {
        test_index_type::<u16>();
        assert_eq!(<u16 as IndexType>::MAX, 65_535);
    }

    #[test]
    fn test_wide_indices() {
        test_index_type::<u32>();
        test_index_type::<u64>();
        test_index_type::<usize>();
        assert_eq!(<usize as IndexType>::MAX, usize::MAX);
        assert!(<u64 as IndexType>::MAX >= <u32 as IndexType>::MAX);
    }
}
