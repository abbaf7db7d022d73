//! This crate implements a fixed-capacity [ring buffer], also known as circular buffer.
//!
//! The main struct is [`RingBuffer`]. It embeds its storage, so it can live on the stack and does
//! not require any heap memory allocation. A `RingBuffer` holds at most `N` elements: elements are
//! pushed at the back and popped from the front, and once the capacity is reached every push
//! silently evicts the element at the front.
//!
//! [ring buffer]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! // Initialize a new, empty ring buffer with a capacity of 5 elements
//! let mut buf = RingBuffer::<u32, 5>::new();
//!
//! // Add a few elements
//! buf.push(1);
//! buf.push(2);
//! buf.push(3);
//! assert_eq!(buf, [1, 2, 3]);
//!
//! // Add more elements to fill the buffer capacity completely
//! buf.push(4);
//! buf.push(5);
//! assert_eq!(buf, [1, 2, 3, 4, 5]);
//!
//! // Pushing into a full buffer evicts the oldest element
//! buf.push(6);
//! assert_eq!(buf, [2, 3, 4, 5, 6]); // `1` got dropped to make room for `6`
//! ```
//!
//! # Storage
//!
//! A `RingBuffer<T, N>` owns `N + 1` slots of uninitialized memory and two cursors: `read`, the
//! slot holding the front element, and `write`, the slot where the next element is going to be
//! constructed. The buffer is empty when the two cursors are equal; the extra slot makes sure that
//! they are never equal when the buffer is full. Slots are only initialized by a push and are
//! deinitialized by a pop, an eviction, [`clear()`](RingBuffer::clear) or when the buffer is
//! dropped, so every element is dropped exactly once.
//!
//! A capacity of zero is rejected at compile time:
//!
//! ```compile_fail
//! use ring_buffer::RingBuffer;
//! let buf = RingBuffer::<u32, 0>::new();
//! ```
//!
//! So is a capacity of `usize::MAX`, since the spare slot would not fit (this is only reachable
//! with zero-sized elements):
//!
//! ```compile_fail
//! use ring_buffer::RingBuffer;
//! let buf = RingBuffer::<(), { usize::MAX }>::new();
//! ```
//!
//! # Interface
//!
//! ## Adding/removing elements
//!
//! * [`push()`](RingBuffer::push), [`try_push()`](RingBuffer::try_push)
//! * [`emplace_with()`](RingBuffer::emplace_with), [`try_emplace_with()`](RingBuffer::try_emplace_with)
//! * [`pop()`](RingBuffer::pop)
//! * [`clear()`](RingBuffer::clear)
//!
//! ## Getting/mutating elements
//!
//! * [`front()`](RingBuffer::front), [`front_mut()`](RingBuffer::front_mut)
//! * [`back()`](RingBuffer::back), [`back_mut()`](RingBuffer::back_mut)
//! * [`get()`](RingBuffer::get), [`get_mut()`](RingBuffer::get_mut), `buf[i]`
//!
//! ## Iterators and cursors
//!
//! * [`into_iter()`](RingBuffer::into_iter)
//! * [`iter()`](RingBuffer::iter), [`iter_mut()`](RingBuffer::iter_mut); reverse iteration is
//!   just `iter().rev()`
//! * [`cursor_front()`](RingBuffer::cursor_front), [`cursor_end()`](RingBuffer::cursor_end),
//!   [`cursor()`](RingBuffer::cursor), [`cursor_mut()`](RingBuffer::cursor_mut)
//!
//! Iterators and cursors address elements by their *logical* position, `0` being the front,
//! regardless of the slot they are stored in:
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! let buf = RingBuffer::<char, 4>::from(['a', 'b', 'c', 'd', 'e', 'f']);
//! let begin = buf.cursor_front();
//! let end = buf.cursor_end();
//!
//! assert_eq!(end - begin, 4);
//! assert_eq!((begin + 2).get(), Some(&'e'));
//! assert_eq!(begin[3], 'f');
//! assert_eq!(buf.iter().rev().collect::<String>(), "fedc");
//! ```
//!
//! ## Writing/reading bytes
//!
//! A `RingBuffer` containing `u8` elements implements the standard [`Write`](std::io::Write),
//! [`Read`](std::io::Read) and [`BufRead`](std::io::BufRead) traits. Writing past the buffer
//! capacity overwrites the oldest bytes, and reading consumes bytes from the front.
//!
//! ```
//! use ring_buffer::RingBuffer;
//! use std::io::Read;
//! use std::io::Write;
//!
//! let mut buf = RingBuffer::<u8, 5>::new();
//! assert_eq!(buf, b"");
//!
//! write!(buf, "hello");
//! assert_eq!(buf, b"hello");
//!
//! write!(buf, "this string will overflow the buffer and wrap around");
//! assert_eq!(buf, b"round");
//!
//! let mut s = String::new();
//! buf.read_to_string(&mut s).expect("failed to read from buffer");
//! assert_eq!(s, "round");
//! assert_eq!(buf, b"");
//! ```
//!
//! # Checked access
//!
//! Every safe accessor checks the state of the buffer: [`pop()`](RingBuffer::pop),
//! [`front()`](RingBuffer::front), [`back()`](RingBuffer::back) and [`get()`](RingBuffer::get)
//! return `None` on an empty buffer or an out-of-range index, while indexing with `buf[i]` and
//! moving a cursor out of range panic. Unchecked access is only available through
//! [`get_unchecked()`](RingBuffer::get_unchecked) and
//! [`get_unchecked_mut()`](RingBuffer::get_unchecked_mut).
//!
//! # Time complexity
//!
//! | Method                                                                                      | Complexity                                                         |
//! |---------------------------------------------------------------------------------------------|--------------------------------------------------------------------|
//! | [`push()`](RingBuffer::push), [`emplace_with()`](RingBuffer::emplace_with)                   | *O*(1)                                                             |
//! | [`pop()`](RingBuffer::pop)                                                                   | *O*(1)                                                             |
//! | [`clear()`](RingBuffer::clear)                                                               | *O*(*n*) for types that implement [`Drop`], *O*(1) otherwise       |
//! | [`front()`](RingBuffer::front), [`back()`](RingBuffer::back), [`get()`](RingBuffer::get)     | *O*(1)                                                             |
//! | [`as_slices()`](RingBuffer::as_slices), [`as_mut_slices()`](RingBuffer::as_mut_slices)       | *O*(1)                                                             |
//! | [`len()`](RingBuffer::len), [`capacity()`](RingBuffer::capacity)                             | *O*(1)                                                             |
//! | Cursor arithmetic, [`Iterator::nth()`] on [`Iter`] and [`IterMut`]                           | *O*(1)                                                             |
//!
//! # Stack vs heap
//!
//! For large buffers, or for buffers that need to be passed around often, allocate the buffer on
//! the heap with [`RingBuffer::boxed()`]. This does not build the buffer on the stack first.
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! let mut buf = RingBuffer::<u32, 4096>::boxed();
//! assert_eq!(buf.len(), 0);
//!
//! for i in 0..5000 {
//!     buf.push(i);
//! }
//! assert_eq!(buf.len(), 4096);
//! assert_eq!(buf.front(), Some(&904));
//! ```
//!
//! # `no_std`
//!
//! This crate can be used in a [`no_std` environment] by disabling the default features. The
//! `alloc` feature brings back [`boxed()`](RingBuffer::boxed) and
//! [`to_vec()`](RingBuffer::to_vec); the `std::io` traits require `std`.
//!
//! ```text
//! [dependencies]
//! ring-buffer = { version = "0.1", default-features = false }
//! ```
//!
//! [`no_std` environment]: https://docs.rust-embedded.org/book/intro/no-std.html

#![cfg_attr(not(feature = "std"), no_std)]

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unused_qualifications)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod iter;
mod slots;

#[cfg(feature = "std")]
mod io;

#[cfg(any(feature = "embedded-io", feature = "embedded-io-async"))]
mod embedded_io;


use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Index;
use core::ops::IndexMut;
use slots::Slots;
use slots::slice_assume_init_mut;
use slots::slice_assume_init_ref;

#[cfg(feature = "alloc")]
use alloc::boxed::Box;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

pub use crate::iter::Cursor;
pub use crate::iter::CursorMut;
pub use crate::iter::IntoIter;
pub use crate::iter::Iter;
pub use crate::iter::IterMut;

/// Returns `(x + y) % m` without risk of overflows if `x + y` cannot fit in `usize`.
///
/// `x` and `y` are expected to be less than, or equal to `m`.
#[inline]
const fn add_mod(x: usize, y: usize, m: usize) -> usize {
    debug_assert!(m > 0);
    debug_assert!(x <= m);
    debug_assert!(y <= m);
    let (z, overflow) = x.overflowing_add(y);
    (z + (overflow as usize) * (usize::MAX % m + 1)) % m
}

/// Returns `(x - y) % m` without risk of underflows if `x - y` is negative.
///
/// `x` and `y` are expected to be less than, or equal to `m`.
#[inline]
const fn sub_mod(x: usize, y: usize, m: usize) -> usize {
    debug_assert!(m > 0);
    debug_assert!(x <= m);
    debug_assert!(y <= m);
    add_mod(x, m - y, m)
}

/// A fixed-capacity ring buffer holding up to `N` elements of type `T`.
///
/// The storage is part of the struct, so a `RingBuffer` may live on the stack. Use
/// [`RingBuffer::boxed()`] if you need the struct to be heap-allocated.
///
/// `N` must be at least 1 and less than `usize::MAX`; other values fail to compile.
///
/// See the [module-level documentation](self) for more details and examples.
pub struct RingBuffer<T, const N: usize> {
    read: usize,
    write: usize,
    slots: Slots<T, N>,
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Number of physical slots. Evaluating this constant is what rejects `N == 0` and
    /// `N == usize::MAX`.
    const SLOTS: usize = {
        assert!(N > 0, "ring buffer capacity must be greater than zero");
        Slots::<T, N>::LEN
    };

    /// Returns an empty `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    /// let buf = RingBuffer::<u32, 16>::new();
    /// assert_eq!(buf, []);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        let _ = Self::SLOTS;
        Self {
            read: 0,
            write: 0,
            slots: Slots::uninit(),
        }
    }

    /// Returns an empty heap-allocated `RingBuffer`.
    ///
    /// Unlike `Box::new(RingBuffer::new())`, the buffer is never built on the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    /// let buf = RingBuffer::<f64, 1024>::boxed();
    /// assert_eq!(buf.len(), 0);
    /// ```
    #[must_use]
    #[cfg(feature = "alloc")]
    pub fn boxed() -> Box<Self> {
        use alloc::alloc::{alloc, handle_alloc_error, Layout};
        use core::ptr::addr_of_mut;

        let _ = Self::SLOTS;
        let layout = Layout::new::<Self>();

        // SAFETY: `Self` always has a non-zero size because of the two cursors. Only `read` and
        // `write` need to be initialized; `slots` does not need to be initialized when the cursors
        // are equal.
        unsafe {
            let ptr = alloc(layout) as *mut Self;
            if ptr.is_null() {
                handle_alloc_error(layout);
            }
            addr_of_mut!((*ptr).read).write(0);
            addr_of_mut!((*ptr).write).write(0);
            Box::from_raw(ptr)
        }
    }

    /// Returns the capacity of the buffer.
    ///
    /// This is the maximum number of elements that the buffer can hold, and it is always the
    /// generic const parameter `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    /// let buf = RingBuffer::<u32, 16>::new();
    /// assert_eq!(buf.capacity(), 16);
    /// ```
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<u32, 16>::new();
    /// assert_eq!(buf.len(), 0);
    ///
    /// buf.push(1);
    /// buf.push(2);
    /// buf.push(3);
    /// assert_eq!(buf.len(), 3);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        sub_mod(self.write, self.read, Self::SLOTS)
    }

    /// Returns `true` if the buffer contains 0 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<u32, 16>::new();
    /// assert!(buf.is_empty());
    ///
    /// buf.push(1);
    /// assert!(!buf.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Returns `true` if the number of elements in the buffer matches the buffer capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<u32, 2>::new();
    /// assert!(!buf.is_full());
    ///
    /// buf.push(1);
    /// buf.push(2);
    /// assert!(buf.is_full());
    ///
    /// buf.push(3);
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub const fn is_full(&self) -> bool {
        Self::next(self.write) == self.read
    }

    /// Maps the logical `offset` (`0` being the front) to a physical slot, given the `read`
    /// cursor. This is the only place where logical positions are translated.
    #[inline]
    pub(crate) const fn slot(read: usize, offset: usize) -> usize {
        debug_assert!(read < Self::SLOTS, "read cursor out-of-bounds");
        add_mod(read, offset, Self::SLOTS)
    }

    #[inline]
    const fn next(index: usize) -> usize {
        Self::slot(index, 1)
    }

    #[inline]
    const fn prev(index: usize) -> usize {
        debug_assert!(index < Self::SLOTS, "cursor out-of-bounds");
        sub_mod(index, 1, Self::SLOTS)
    }

    /// Constructs a new element at the back of the buffer with `f` and returns a reference to it.
    ///
    /// If the buffer is full, the element at the front is dropped to make room for the new one.
    /// `f` runs before the buffer is touched: if it panics, the buffer is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<String, 2>::new();
    /// buf.emplace_with(|| "a".repeat(3)).push('!');
    /// buf.emplace_with(String::new);
    /// buf.emplace_with(|| String::from("c"));
    /// assert_eq!(buf, ["", "c"]);
    /// ```
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
        where F: FnOnce() -> T
    {
        let item = f();
        self.insert(item)
    }

    /// Constructs a new element at the back of the buffer with the fallible constructor `f`.
    ///
    /// If `f` fails, its error is returned and the buffer is left unmodified: nothing gets
    /// evicted, even if the buffer is full. Otherwise this behaves like
    /// [`emplace_with()`](Self::emplace_with).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u32, 2>::from([1, 2]);
    ///
    /// assert!(buf.try_emplace_with(|| "x".parse::<u32>()).is_err());
    /// assert_eq!(buf, [1, 2]);
    ///
    /// assert_eq!(buf.try_emplace_with(|| "3".parse::<u32>()), Ok(&mut 3));
    /// assert_eq!(buf, [2, 3]);
    /// ```
    pub fn try_emplace_with<F, E>(&mut self, f: F) -> Result<&mut T, E>
        where F: FnOnce() -> Result<T, E>
    {
        let item = f()?;
        Ok(self.insert(item))
    }

    /// Appends an element to the back of the buffer.
    ///
    /// If the buffer is full, the element at the front of the buffer is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 3>::new();
    ///
    /// buf.push('a'); assert_eq!(buf, ['a']);
    /// buf.push('b'); assert_eq!(buf, ['a', 'b']);
    /// buf.push('c'); assert_eq!(buf, ['a', 'b', 'c']);
    /// // The buffer is now full; adding more values causes the front elements to be dropped
    /// buf.push('d'); assert_eq!(buf, ['b', 'c', 'd']);
    /// buf.push('e'); assert_eq!(buf, ['c', 'd', 'e']);
    /// ```
    #[inline]
    pub fn push(&mut self, item: T) {
        self.insert(item);
    }

    /// Appends an element to the back of the buffer, unless the buffer is full.
    ///
    /// If the buffer is full, the element is returned back as an error and the buffer is left
    /// unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 2>::new();
    ///
    /// assert_eq!(buf.try_push('a'), Ok(&mut 'a'));
    /// assert_eq!(buf.try_push('b'), Ok(&mut 'b'));
    /// assert_eq!(buf.try_push('c'), Err('c'));
    /// assert_eq!(buf, ['a', 'b']);
    /// ```
    pub fn try_push(&mut self, item: T) -> Result<&mut T, T> {
        if self.is_full() {
            return Err(item);
        }
        Ok(self.insert(item))
    }

    fn insert(&mut self, item: T) -> &mut T {
        debug_assert!(self.read < Self::SLOTS, "read cursor out-of-bounds");
        debug_assert!(self.write < Self::SLOTS, "write cursor out-of-bounds");

        // The slot at `write` is never initialized: even when the buffer is full, the spare slot
        // sits between the back and the front.
        let slot = self.write;
        let evict = self.is_full();
        self.slots.write(slot, item);
        self.write = Self::next(slot);

        if evict {
            // Advance the cursor before dropping, so that a panicking destructor cannot cause a
            // double drop
            let front = self.read;
            self.read = Self::next(front);
            // SAFETY: the buffer was full, so the old front slot is initialized
            unsafe { self.slots.drop_in_place(front); }
        }

        // SAFETY: the slot has just been written
        unsafe { self.slots.get_mut(slot) }
    }

    /// Removes and returns the element at the front of the buffer.
    ///
    /// If the buffer is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 4>::from(['a', 'b', 'c']);
    ///
    /// assert_eq!(buf.pop(), Some('a'));
    /// assert_eq!(buf.pop(), Some('b'));
    /// assert_eq!(buf.pop(), Some('c'));
    /// assert_eq!(buf.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let front = self.read;
        self.read = Self::next(front);
        // SAFETY: the buffer is not empty, so the front slot is initialized
        Some(unsafe { self.slots.read(front) })
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let back = Self::prev(self.write);
        self.write = back;
        // SAFETY: the buffer is not empty, so the back slot is initialized
        Some(unsafe { self.slots.read(back) })
    }

    /// Drops the first `count` elements of the buffer (or all of them, if `count` exceeds the
    /// length).
    #[cfg(any(feature = "std", feature = "embedded-io", feature = "embedded-io-async"))]
    pub(crate) fn discard_front(&mut self, count: usize) {
        let count = core::cmp::min(count, self.len());
        let from = self.read;
        self.read = Self::slot(from, count);
        // SAFETY: the range covers `count` live elements starting from the front; `read` has
        // already been moved past them
        unsafe { self.slots.drop_range(from, self.read); }
    }

    /// Drops all the elements in the buffer.
    ///
    /// Each element is dropped exactly once, from front to back, even if one of the destructors
    /// panics. Both cursors are then reset to the first slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u32, 4>::from([1, 2, 3]);
    /// assert_eq!(buf, [1, 2, 3]);
    ///
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        let (from, to) = (self.read, self.write);
        self.read = 0;
        self.write = 0;
        // SAFETY: `from..to` is exactly the set of live slots, and the cursors no longer refer
        // to them
        unsafe { self.slots.drop_range(from, to); }
    }

    /// Returns a reference to the front element (the oldest one), or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 4>::new();
    /// assert_eq!(buf.front(), None);
    ///
    /// buf.push('a');
    /// buf.push('b');
    /// assert_eq!(buf.front(), Some(&'a'));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the buffer is not empty, so the front slot is initialized
        Some(unsafe { self.slots.get(self.read) })
    }

    /// Returns a mutable reference to the front element, or `None` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 4>::from(['a', 'b']);
    /// *buf.front_mut().unwrap() = 'z';
    /// assert_eq!(buf, ['z', 'b']);
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the buffer is not empty, so the front slot is initialized
        Some(unsafe { self.slots.get_mut(self.read) })
    }

    /// Returns a reference to the back element (the newest one), or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 4>::new();
    /// assert_eq!(buf.back(), None);
    ///
    /// buf.push('a');
    /// buf.push('b');
    /// assert_eq!(buf.back(), Some(&'b'));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the buffer is not empty, so the slot before `write` is initialized
        Some(unsafe { self.slots.get(Self::prev(self.write)) })
    }

    /// Returns a mutable reference to the back element, or `None` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 4>::from(['a', 'b']);
    /// *buf.back_mut().unwrap() = 'z';
    /// assert_eq!(buf, ['a', 'z']);
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the buffer is not empty, so the slot before `write` is initialized
        Some(unsafe { self.slots.get_mut(Self::prev(self.write)) })
    }

    /// Returns a reference to the element at the given logical index (`0` being the front), or
    /// `None` if the index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 3>::from(['a', 'b', 'c']);
    /// buf.push('d');
    ///
    /// assert_eq!(buf.get(0), Some(&'b'));
    /// assert_eq!(buf.get(2), Some(&'d'));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        // SAFETY: `index` is in range
        Some(unsafe { self.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at the given logical index, or `None` if the
    /// index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 3>::from(['a', 'b', 'c']);
    /// *buf.get_mut(1).unwrap() = 'z';
    /// assert_eq!(buf, ['a', 'z', 'c']);
    /// assert_eq!(buf.get_mut(3), None);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        // SAFETY: `index` is in range
        Some(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at the given logical index, without checking the
    /// length of the buffer.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let buf = RingBuffer::<u32, 3>::from([1, 2, 3, 4]);
    /// assert_eq!(unsafe { *buf.get_unchecked(0) }, 2);
    /// ```
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "index out-of-bounds");
        self.slots.get(Self::slot(self.read, index))
    }

    /// Returns a mutable reference to the element at the given logical index, without checking
    /// the length of the buffer.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "index out-of-bounds");
        self.slots.get_mut(Self::slot(self.read, index))
    }

    /// Returns a pair of slices which contain the elements of this buffer, in order.
    ///
    /// The second slice may be empty, if the elements do not wrap around the end of the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char, 4>::from(['a', 'b', 'c', 'd']);
    /// assert_eq!(buf.as_slices(), (&['a', 'b', 'c', 'd'][..], &[][..]));
    ///
    /// buf.push('e');
    /// buf.push('f');
    /// let (front, back) = buf.as_slices();
    /// assert_eq!(front.len() + back.len(), 4);
    /// assert_eq!([front, back].concat(), ['c', 'd', 'e', 'f']);
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (front, back) = self.slots.split(self.read, self.write);
        // SAFETY: the slots between `read` and `write` are initialized
        unsafe { (slice_assume_init_ref(front), slice_assume_init_ref(back)) }
    }

    /// Returns a pair of mutable slices which contain the elements of this buffer, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u32, 3>::from([1, 2, 3, 4, 5]);
    /// let (front, back) = buf.as_mut_slices();
    /// front.iter_mut().chain(back.iter_mut()).for_each(|x| *x *= 10);
    /// assert_eq!(buf, [30, 40, 50]);
    /// ```
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (front, back) = self.slots.split_mut(self.read, self.write);
        // SAFETY: the slots between `read` and `write` are initialized
        unsafe { (slice_assume_init_mut(front), slice_assume_init_mut(back)) }
    }

    /// Returns an iterator over the elements of the buffer, from front to back.
    ///
    /// Use `iter().rev()` to iterate from back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let buf = RingBuffer::<char, 4>::from(['a', 'b', 'c', 'd', 'e']);
    ///
    /// let mut it = buf.iter();
    /// assert_eq!(it.next(), Some(&'b'));
    /// assert_eq!(it.next_back(), Some(&'e'));
    /// assert_eq!(it.nth(1), Some(&'d'));
    /// assert_eq!(it.next(), None);
    ///
    /// assert_eq!(buf.iter().rev().collect::<String>(), "edcb");
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self)
    }

    /// Returns an iterator over the elements of the buffer that allows modifying each value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u32, 4>::from([1, 2, 3, 4, 5]);
    /// for elem in buf.iter_mut() {
    ///     *elem += 10;
    /// }
    /// assert_eq!(buf, [12, 13, 14, 15]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::new(self)
    }

    /// Returns a cursor pointing at the front element.
    ///
    /// On an empty buffer this is the same position as [`cursor_end()`](Self::cursor_end).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let buf = RingBuffer::<u32, 4>::from([1, 2, 3]);
    /// let cursor = buf.cursor_front();
    /// assert_eq!(cursor.get(), Some(&1));
    /// assert_eq!(cursor.at(2), Some(&3));
    /// ```
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor pointing one past the back element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let buf = RingBuffer::<u32, 4>::from([1, 2, 3]);
    /// let end = buf.cursor_end();
    /// assert_eq!(end.get(), None);
    /// assert_eq!((end - 1).get(), Some(&3));
    /// assert_eq!(end - buf.cursor_front(), 3);
    /// ```
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len())
    }

    /// Returns a cursor pointing at the given logical offset.
    ///
    /// # Panics
    ///
    /// If `offset` is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let buf = RingBuffer::<char, 4>::from(['a', 'b', 'c']);
    /// assert_eq!(buf.cursor(1).get(), Some(&'b'));
    /// assert_eq!(buf.cursor(3), buf.cursor_end());
    /// ```
    #[inline]
    pub fn cursor(&self, offset: usize) -> Cursor<'_, T, N> {
        Cursor::new(self, offset)
    }

    /// Returns a mutable cursor pointing at the front element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u32, 4>::from([1, 2, 3]);
    /// let mut cursor = buf.cursor_front_mut();
    /// cursor += 1;
    /// *cursor.get_mut().unwrap() = 20;
    /// assert_eq!(buf, [1, 20, 3]);
    /// ```
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutable cursor pointing at the given logical offset.
    ///
    /// # Panics
    ///
    /// If `offset` is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u32, 4>::from([1, 2, 3]);
    /// let mut cursor = buf.cursor_mut(2);
    /// cursor[0] = 30;
    /// assert_eq!(buf, [1, 2, 30]);
    /// ```
    #[inline]
    pub fn cursor_mut(&mut self, offset: usize) -> CursorMut<'_, T, N> {
        CursorMut::new(self, offset)
    }
}

impl<T, const N: usize> RingBuffer<T, N>
    where T: Clone
{
    /// Clones and appends all the elements from the slice to the back of the buffer.
    ///
    /// Elements at the front of the buffer are evicted as needed. Only the last `N` elements of
    /// `other` are cloned, since the others would be evicted right away.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<u32, 5>::from([1, 2, 3]);
    /// buf.extend_from_slice(&[4, 5, 6, 7]);
    /// assert_eq!(buf, [3, 4, 5, 6, 7]);
    ///
    /// buf.extend_from_slice(&[10, 11, 12, 13, 14, 15, 16]);
    /// assert_eq!(buf, [12, 13, 14, 15, 16]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        let skip = other.len().saturating_sub(N);
        if skip > 0 {
            // Everything currently in the buffer is going to be evicted
            self.clear();
        }
        other[skip..].iter().for_each(|item| self.push(item.clone()));
    }

    /// Clones the elements of the buffer into a new [`Vec`], leaving the buffer unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let buf = RingBuffer::<u32, 5>::from([1, 2, 3, 4, 5, 6]);
    /// let vec: Vec<u32> = buf.to_vec();
    ///
    /// assert_eq!(buf, [2, 3, 4, 5, 6]);
    /// assert_eq!(vec, [2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.extend(self.iter().cloned());
        debug_assert_eq!(vec.len(), self.len());
        vec
    }
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for RingBuffer<T, N> {
    #[inline]
    fn drop(&mut self) {
        // `clear()` will make sure that every element is dropped in a safe way
        self.clear();
    }
}

impl<T, const N: usize> Index<usize> for RingBuffer<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(item) => item,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for RingBuffer<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for RingBuffer<T, N> {
    /// Builds a buffer out of the last `N` elements of the array; the others are dropped.
    fn from(arr: [T; M]) -> Self {
        let mut buf = Self::new();
        buf.extend(arr);
        buf
    }
}

impl<T, const N: usize> FromIterator<T> for RingBuffer<T, N> {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = T>
    {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<T, const N: usize> Extend<T> for RingBuffer<T, N> {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = T>
    {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<'a, T, const N: usize> Extend<&'a T> for RingBuffer<T, N>
    where T: Copy
{
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = &'a T>
    {
        iter.into_iter().for_each(|item| self.push(*item));
    }
}

impl<T, const N: usize> IntoIterator for RingBuffer<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut RingBuffer<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self)
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<RingBuffer<U, M>> for RingBuffer<T, N>
    where T: PartialEq<U>
{
    fn eq(&self, other: &RingBuffer<U, M>) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for RingBuffer<T, N>
    where T: PartialEq<U>
{
    fn eq(&self, other: &[U]) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (a_front, a_back) = self.as_slices();
        let (b_front, b_back) = other.split_at(a_front.len());
        a_front == b_front && a_back == b_back
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for RingBuffer<T, N>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        self == &other[..]
    }
}

impl<'a, T, U, const N: usize> PartialEq<&'a [U]> for RingBuffer<T, N>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a [U]) -> bool {
        self == *other
    }
}

impl<'a, T, U, const N: usize> PartialEq<&'a mut [U]> for RingBuffer<T, N>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a mut [U]) -> bool {
        self == *other
    }
}

impl<'a, T, U, const N: usize, const M: usize> PartialEq<&'a [U; M]> for RingBuffer<T, N>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a [U; M]) -> bool {
        self == *other
    }
}

impl<'a, T, U, const N: usize, const M: usize> PartialEq<&'a mut [U; M]> for RingBuffer<T, N>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a mut [U; M]) -> bool {
        self == *other
    }
}

impl<T, const N: usize> Eq for RingBuffer<T, N>
    where T: Eq
{}

impl<T, U, const N: usize, const M: usize> PartialOrd<RingBuffer<U, M>> for RingBuffer<T, N>
    where T: PartialOrd<U>
{
    fn partial_cmp(&self, other: &RingBuffer<U, M>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, const N: usize> Ord for RingBuffer<T, N>
    where T: Ord
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, const N: usize> Hash for RingBuffer<T, N>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T, const N: usize> Clone for RingBuffer<T, N>
    where T: Clone
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T, const N: usize> fmt::Debug for RingBuffer<T, N>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
