//! Index arithmetic for a fixed ring of `N` slots.
//!
//! Every position stored by [`CircularBuffer`](crate::CircularBuffer) is a *physical*
//! slot number in `[0, N)`.  Callers think in *logical* positions (`0` is the front).
//! [`Ring`] converts between the two and walks physical indices around the ring.
//!
//! When `N` is a power of two the wrap is a bitmask; otherwise a compare (single step)
//! or a modulo (arbitrary offset).  The choice is made on the associated constant
//! [`Ring::POW2`], so the untaken branch is folded away at compile time.  The free
//! functions below expose both paths so they can be checked against each other.

/// `(index + offset) mod capacity` via bitmask.  `capacity` must be a power of two.
#[inline(always)]
pub const fn wrap_add_mask(index: usize, offset: usize, capacity: usize) -> usize {
    index.wrapping_add(offset) & (capacity - 1)
}

/// `(index + offset) mod capacity` via division.  Defined for every `index` and `offset`.
#[inline(always)]
pub const fn wrap_add_mod(index: usize, offset: usize, capacity: usize) -> usize {
    let index = index % capacity;
    let offset = offset % capacity;
    // `index + offset` may exceed `usize::MAX` for capacities above half the range.
    if offset >= capacity - index {
        offset - (capacity - index)
    } else {
        index + offset
    }
}

/// `(index - offset) mod capacity` via bitmask.  `capacity` must be a power of two.
#[inline(always)]
pub const fn wrap_sub_mask(index: usize, offset: usize, capacity: usize) -> usize {
    index.wrapping_sub(offset) & (capacity - 1)
}

/// `(index - offset) mod capacity` via division.  Defined for every `index` and `offset`.
#[inline(always)]
pub const fn wrap_sub_mod(index: usize, offset: usize, capacity: usize) -> usize {
    let index = index % capacity;
    let offset = offset % capacity;
    if index >= offset {
        index - offset
    } else {
        capacity - (offset - index)
    }
}

/// Zero-sized namespace for the arithmetic of an `N`-slot ring.
pub struct Ring<const N: usize>;

impl<const N: usize> Ring<N> {
    /// `true` when the bitmask fast path is used.
    pub const POW2: bool = N.is_power_of_two();

    /// Physical slot after `index`.
    #[inline(always)]
    pub const fn next(index: usize) -> usize {
        if Self::POW2 {
            (index + 1) & (N - 1)
        } else if index + 1 < N {
            index + 1
        } else {
            0
        }
    }

    /// Physical slot before `index`.
    #[inline(always)]
    pub const fn prev(index: usize) -> usize {
        if Self::POW2 {
            index.wrapping_sub(1) & (N - 1)
        } else if index > 0 {
            index - 1
        } else {
            N - 1
        }
    }

    /// Physical slot `offset` steps after `index`.  Any `index` and `offset` are
    /// accepted and both paths agree.
    #[inline(always)]
    pub const fn add(index: usize, offset: usize) -> usize {
        if Self::POW2 {
            wrap_add_mask(index, offset, N)
        } else {
            wrap_add_mod(index, offset, N)
        }
    }

    /// Physical slot `offset` steps before `index`.  Any `index` and `offset` are
    /// accepted and both paths agree.
    #[inline(always)]
    pub const fn sub(index: usize, offset: usize) -> usize {
        if Self::POW2 {
            wrap_sub_mask(index, offset, N)
        } else {
            wrap_sub_mod(index, offset, N)
        }
    }

    /// Physical slot holding logical position `logical` of a window starting at `tail`.
    ///
    /// Requires `tail < N` and `logical < N`, which every live window satisfies; the
    /// general path then needs a single compare instead of a division.
    #[inline(always)]
    pub const fn physical(tail: usize, logical: usize) -> usize {
        debug_assert!(tail < N && logical < N);
        if Self::POW2 {
            (tail + logical) & (N - 1)
        } else if logical < N - tail {
            tail + logical
        } else {
            logical - (N - tail)
        }
    }

    /// Inverse of [`physical`](Ring::physical).  Requires `tail < N` and `physical < N`.
    #[inline(always)]
    pub const fn logical(tail: usize, physical: usize) -> usize {
        debug_assert!(tail < N && physical < N);
        if physical >= tail {
            physical - tail
        } else {
            N - (tail - physical)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ─── single steps ─────────────────────────────────────────────────────────
    #[test]
    fn test_ring_next_prev_pow2() {
        assert_eq!(Ring::<4>::next(3), 0);
        assert_eq!(Ring::<4>::next(1), 2);
        assert_eq!(Ring::<4>::prev(0), 3);
        assert_eq!(Ring::<4>::prev(2), 1);
    }

    #[test]
    fn test_ring_next_prev_general() {
        assert!(!Ring::<5>::POW2);
        assert_eq!(Ring::<5>::next(4), 0);
        assert_eq!(Ring::<5>::next(3), 4);
        assert_eq!(Ring::<5>::prev(0), 4);
        assert_eq!(Ring::<5>::prev(4), 3);
    }

    #[test]
    fn test_ring_capacity_one() {
        assert!(Ring::<1>::POW2);
        assert_eq!(Ring::<1>::next(0), 0);
        assert_eq!(Ring::<1>::prev(0), 0);
        assert_eq!(Ring::<1>::add(0, 1), 0);
        assert_eq!(Ring::<1>::sub(0, 1), 0);
    }

    #[test]
    fn test_ring_add_wraps() {
        assert_eq!(Ring::<8>::add(6, 5), 3);
        assert_eq!(Ring::<7>::add(6, 5), 4);
        assert_eq!(Ring::<7>::sub(1, 3), 5);
        assert_eq!(Ring::<200>::add(199, 200), 199);
    }

    #[test]
    fn test_ring_offsets_past_capacity() {
        assert_eq!(Ring::<4>::sub(0, 5), 3);
        assert_eq!(Ring::<5>::sub(0, 7), 3);
        assert_eq!(wrap_sub_mask(0, 5, 4), 3);
        assert_eq!(wrap_sub_mod(0, 5, 4), 3);
        assert_eq!(Ring::<5>::add(4, 13), 2);
        assert_eq!(wrap_add_mask(usize::MAX, usize::MAX, 4), 2);
        assert_eq!(wrap_add_mod(usize::MAX, usize::MAX, 4), 2);
        // usize::MAX is a multiple of 5 on 32- and 64-bit targets.
        assert_eq!(wrap_add_mod(usize::MAX, usize::MAX, 5), 0);
        assert_eq!(wrap_sub_mod(3, usize::MAX, 5), 3);
        assert_eq!(wrap_add_mod(usize::MAX - 1, 3, usize::MAX), 2);
    }

    // ─── physical / logical ───────────────────────────────────────────────────
    #[test]
    fn test_ring_physical_logical_round_trip() {
        for tail in 0..6 {
            for logical in 0..6 {
                let p = Ring::<6>::physical(tail, logical);
                assert!(p < 6);
                assert_eq!(Ring::<6>::logical(tail, p), logical);
                assert_eq!(Ring::<6>::physical(tail, Ring::<6>::logical(tail, p)), p);
            }
        }
    }

    // ─── mask vs modulo ───────────────────────────────────────────────────────
    proptest! {
        #[test]
        fn prop_mask_matches_modulo(shift in 0u32..usize::BITS, index in any::<usize>(), offset in any::<usize>()) {
            let capacity = 1usize << shift;
            prop_assert_eq!(
                wrap_add_mask(index, offset, capacity),
                wrap_add_mod(index, offset, capacity)
            );
            prop_assert_eq!(
                wrap_sub_mask(index, offset, capacity),
                wrap_sub_mod(index, offset, capacity)
            );
        }

        #[test]
        fn prop_sub_inverts_add(capacity in 1usize.., index in any::<usize>(), offset in any::<usize>()) {
            let forward = wrap_add_mod(index, offset, capacity);
            prop_assert!(forward < capacity);
            prop_assert_eq!(wrap_sub_mod(forward, offset, capacity), index % capacity);
        }

        #[test]
        fn prop_ring_paths_agree_for_any_offset(index in 0usize..12, offset in any::<usize>()) {
            prop_assert_eq!(Ring::<5>::add(index % 5, offset), wrap_add_mod(index, offset, 5));
            prop_assert_eq!(Ring::<5>::sub(index % 5, offset), wrap_sub_mod(index, offset, 5));
            prop_assert_eq!(Ring::<8>::add(index, offset), wrap_add_mod(index, offset, 8));
            prop_assert_eq!(Ring::<8>::sub(index, offset), wrap_sub_mod(index, offset, 8));
        }
    }

    #[test]
    fn test_ring_paths_agree_for_every_pow2_slot() {
        fn check<const N: usize>() {
            for index in 0..N {
                assert_eq!(Ring::<N>::next(index), wrap_add_mod(index, 1, N));
                assert_eq!(Ring::<N>::prev(index), wrap_sub_mod(index, 1, N));
                for offset in 0..=N {
                    assert_eq!(Ring::<N>::add(index, offset), wrap_add_mod(index, offset, N));
                    assert_eq!(Ring::<N>::sub(index, offset), wrap_sub_mod(index, offset, N));
                }
            }
        }
        check::<1>();
        check::<2>();
        check::<16>();
        check::<64>();
        check::<3>();
        check::<100>();
    }
}
