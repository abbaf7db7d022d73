// Copyright © 2023, 2024 Andrea Corbellini and contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Raw storage for the ring buffer: `N + 1` cells that may or may not hold a value.
//!
//! `Slots` never knows which cells are live. The `read` and `write` cursors of the owning
//! [`RingBuffer`](crate::RingBuffer) are the only record of that, so every method that touches the
//! contents of a cell is `unsafe` and relies on the caller having checked the cursors.

use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

/// `N` regular cells followed by the spare cell that lets `read == write` mean "empty".
///
/// With `repr(C)` the `spare` field is placed right after `items` with no padding (the size of
/// `[MaybeUninit<T>; N]` is a multiple of the alignment of `T`), so the whole struct can be viewed
/// as a single `[MaybeUninit<T>]` of length `N + 1`.
#[repr(C)]
pub(crate) struct Slots<T, const N: usize> {
    items: [MaybeUninit<T>; N],
    spare: MaybeUninit<T>,
}

impl<T, const N: usize> Slots<T, N> {
    pub(crate) const LEN: usize = {
        assert!(N < usize::MAX, "ring buffer capacity must be less than usize::MAX");
        N + 1
    };

    #[inline]
    pub(crate) const fn uninit() -> Self {
        Self {
            // SAFETY: an array of `MaybeUninit` does not require initialization
            items: unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() },
            spare: MaybeUninit::uninit(),
        }
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const MaybeUninit<T> {
        self as *const Self as *const MaybeUninit<T>
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut MaybeUninit<T> {
        self as *mut Self as *mut MaybeUninit<T>
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[MaybeUninit<T>] {
        // SAFETY: `Self` is laid out as `N + 1` consecutive `MaybeUninit<T>` (see above)
        unsafe { slice::from_raw_parts(self.as_ptr(), Self::LEN) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: `Self` is laid out as `N + 1` consecutive `MaybeUninit<T>` (see above)
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), Self::LEN) }
    }

    /// Constructs `item` in the cell at `index`, overwriting (without dropping) whatever bytes were
    /// there.
    #[inline]
    pub(crate) fn write(&mut self, index: usize, item: T) {
        debug_assert!(index < Self::LEN, "slot index out-of-bounds");
        self.as_mut_slice()[index].write(item);
    }

    /// Moves the value out of the cell at `index`. The cell is uninitialized afterwards.
    ///
    /// # Safety
    ///
    /// The cell must be initialized.
    #[inline]
    pub(crate) unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < Self::LEN, "slot index out-of-bounds");
        self.as_slice()[index].assume_init_read()
    }

    /// # Safety
    ///
    /// The cell must be initialized.
    #[inline]
    pub(crate) unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index < Self::LEN, "slot index out-of-bounds");
        self.as_slice()[index].assume_init_ref()
    }

    /// # Safety
    ///
    /// The cell must be initialized.
    #[inline]
    pub(crate) unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < Self::LEN, "slot index out-of-bounds");
        self.as_mut_slice()[index].assume_init_mut()
    }

    /// Destroys the value in the cell at `index`.
    ///
    /// # Safety
    ///
    /// The cell must be initialized, and must not be read again before being written.
    #[inline]
    pub(crate) unsafe fn drop_in_place(&mut self, index: usize) {
        debug_assert!(index < Self::LEN, "slot index out-of-bounds");
        ptr::drop_in_place(self.as_mut_slice()[index].as_mut_ptr());
    }

    /// Returns the cells from `from` up to (excluding) `to`, walking forward and wrapping around the
    /// end of the storage. The first slice starts at `from`; the second one, possibly empty, starts
    /// at cell 0.
    #[inline]
    pub(crate) fn split(&self, from: usize, to: usize) -> (&[MaybeUninit<T>], &[MaybeUninit<T>]) {
        debug_assert!(from < Self::LEN, "start out-of-bounds");
        debug_assert!(to < Self::LEN, "end out-of-bounds");
        let items = self.as_slice();
        if from <= to {
            (&items[from..to], &[][..])
        } else {
            let (wrapped, front) = items.split_at(from);
            (front, &wrapped[..to])
        }
    }

    /// Mutable variant of [`split()`](Self::split).
    #[inline]
    pub(crate) fn split_mut(&mut self, from: usize, to: usize) -> (&mut [MaybeUninit<T>], &mut [MaybeUninit<T>]) {
        debug_assert!(from < Self::LEN, "start out-of-bounds");
        debug_assert!(to < Self::LEN, "end out-of-bounds");
        let items = self.as_mut_slice();
        if from <= to {
            (&mut items[from..to], &mut [][..])
        } else {
            let (wrapped, front) = items.split_at_mut(from);
            (front, &mut wrapped[..to])
        }
    }

    /// Destroys the values in the cells from `from` up to (excluding) `to`, in that order.
    ///
    /// # Safety
    ///
    /// All the cells in the range must be initialized, and the caller must have already moved its
    /// cursors past them so that none of them is dropped twice if a destructor panics.
    pub(crate) unsafe fn drop_range(&mut self, from: usize, to: usize) {
        // Drops all the items in the slice when dropped. This keeps dropping the other slice in
        // case a panic occurs during the drop of a single element.
        struct Dropper<'a, T>(&'a mut [MaybeUninit<T>]);

        impl<'a, T> Drop for Dropper<'a, T> {
            #[inline]
            fn drop(&mut self) {
                // SAFETY: the caller of `drop_range` is responsible to check that this slice was
                // initialized.
                unsafe { ptr::drop_in_place(slice_assume_init_mut(self.0)); }
            }
        }

        if from == to {
            return;
        }

        let (front, wrapped) = self.split_mut(from, to);

        // Locals are dropped in reverse order: `front` goes first
        let _wrapped = Dropper(wrapped);
        let _front = Dropper(front);
    }
}

#[inline]
pub(crate) unsafe fn slice_assume_init_ref<T>(slice: &[MaybeUninit<T>]) -> &[T] {
    &*(slice as *const [MaybeUninit<T>] as *const [T])
}

#[inline]
pub(crate) unsafe fn slice_assume_init_mut<T>(slice: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(slice as *mut [MaybeUninit<T>] as *mut [T])
}
