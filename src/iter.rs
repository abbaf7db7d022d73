use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Deref;
use core::ops::Index;
use core::ops::IndexMut;
use core::ops::Sub;
use core::ops::SubAssign;
use core::ptr;
use core::ptr::NonNull;
use crate::RingBuffer;

/// An owning [iterator](core::iter::Iterator) over the elements of a [`RingBuffer`].
///
/// This yields the elements of a `RingBuffer` from front to back.
///
/// This struct is created when iterating over a `RingBuffer`. See the documentation for
/// [`IntoIterator`] for more details.
#[derive(Clone)]
pub struct IntoIter<T, const N: usize> {
    inner: RingBuffer<T, N>,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) const fn new(inner: RingBuffer<T, N>) -> Self {
        Self { inner }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.pop_back()
    }
}

impl<T, const N: usize> fmt::Debug for IntoIter<T, N>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

/// Moves `offset` forward by `count`, as long as the result does not go past `len`.
#[inline]
fn forward(offset: usize, count: usize, len: usize) -> Option<usize> {
    offset.checked_add(count).filter(|&offset| offset <= len)
}

/// Moves `offset` backward by `count`, as long as the result does not go below 0.
#[inline]
fn backward(offset: usize, count: usize) -> Option<usize> {
    offset.checked_sub(count)
}

/// An [iterator](core::iter::Iterator) over the elements of a `RingBuffer`.
///
/// The iterator keeps a reference to the buffer and the logical offsets of the next elements to
/// yield from the front and from the back; elements are looked up through the same index
/// translation as [`RingBuffer::get()`]. Reverse iteration is obtained with
/// [`rev()`](Iterator::rev).
///
/// This struct is created by [`RingBuffer::iter()`] and [`Cursor::iter()`]. See their
/// documentation for more details.
pub struct Iter<'a, T, const N: usize> {
    buf: &'a RingBuffer<T, N>,
    front: usize,
    back: usize,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    #[inline]
    pub(crate) fn new(buf: &'a RingBuffer<T, N>) -> Self {
        Self::starting_at(buf, 0)
    }

    #[inline]
    pub(crate) fn starting_at(buf: &'a RingBuffer<T, N>, offset: usize) -> Self {
        let back = buf.len();
        debug_assert!(offset <= back, "offset out-of-bounds");
        Self { buf, front: offset, back }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: `front < back <= len`
        let item = unsafe { self.buf.get_unchecked(self.front) };
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = forward(self.front, n, self.back).unwrap_or(self.back);
        self.next()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for Iter<'a, T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, T, const N: usize> FusedIterator for Iter<'a, T, N> {}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `front <= back < len`
        Some(unsafe { self.buf.get_unchecked(self.back) })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = match backward(self.back, n) {
            Some(back) if back >= self.front => back,
            _ => self.front,
        };
        self.next_back()
    }
}

impl<'a, T, const N: usize> Clone for Iter<'a, T, N> {
    fn clone(&self) -> Self {
        Self { buf: self.buf, front: self.front, back: self.back }
    }
}

impl<'a, T, const N: usize> fmt::Debug for Iter<'a, T, N>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A mutable [iterator](core::iter::Iterator) over the elements of a `RingBuffer`.
///
/// Like [`Iter`], this walks logical offsets from both ends. It holds a raw pointer to the storage
/// (instead of `&mut RingBuffer`) so that it can hand out non-overlapping mutable references that
/// live as long as the borrow of the buffer.
///
/// This struct is created by [`RingBuffer::iter_mut()`]. See its documentation for more details.
pub struct IterMut<'a, T, const N: usize> {
    slots: NonNull<MaybeUninit<T>>,
    read: usize,
    front: usize,
    back: usize,
    marker: PhantomData<&'a mut T>,
}

// SAFETY: `IterMut` behaves like `&'a mut [T]`
unsafe impl<'a, T, const N: usize> Send for IterMut<'a, T, N> where T: Send {}
unsafe impl<'a, T, const N: usize> Sync for IterMut<'a, T, N> where T: Sync {}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(buf: &'a mut RingBuffer<T, N>) -> Self {
        let read = buf.read;
        let back = buf.len();
        // SAFETY: the pointer comes from a reference, so it is not null
        let slots = unsafe { NonNull::new_unchecked(buf.slots.as_mut_ptr()) };
        Self { slots, read, front: 0, back, marker: PhantomData }
    }

    /// # Safety
    ///
    /// `offset` must be less than the length of the buffer, and no other reference to the same
    /// element may be alive.
    #[inline]
    unsafe fn element(&self, offset: usize) -> &'a mut T {
        let slot = RingBuffer::<T, N>::slot(self.read, offset);
        (*self.slots.as_ptr().add(slot)).assume_init_mut()
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: `front < back <= len`, and `front` is never yielded again
        let item = unsafe { self.element(self.front) };
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = forward(self.front, n, self.back).unwrap_or(self.back);
        self.next()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for IterMut<'a, T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, T, const N: usize> FusedIterator for IterMut<'a, T, N> {}

impl<'a, T, const N: usize> DoubleEndedIterator for IterMut<'a, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `front <= back < len`, and `back` is never yielded again
        Some(unsafe { self.element(self.back) })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = match backward(self.back, n) {
            Some(back) if back >= self.front => back,
            _ => self.front,
        };
        self.next_back()
    }
}

impl<'a, T, const N: usize> fmt::Debug for IterMut<'a, T, N>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |offset| RingBuffer::<T, N>::slot(self.read, offset);
        // SAFETY: the remaining offsets are all in range; the shared references do not outlive
        // this call, during which no mutable reference is handed out
        let items = (self.front..self.back)
            .map(|offset| unsafe { (*self.slots.as_ptr().add(slot(offset))).assume_init_ref() });
        f.debug_list().entries(items).finish()
    }
}

/// A random-access position inside a [`RingBuffer`].
///
/// A cursor points at a logical offset between `0` (the front element) and the length of the
/// buffer (one past the back element, where [`get()`](Cursor::get) returns `None`). It can be
/// moved by any amount in both directions with `+`, `-`, `+=` and `-=`; subtracting two cursors
/// gives their signed distance.
///
/// Cursors over the same buffer compare by offset; cursors over different buffers are never equal
/// and have no ordering.
///
/// This struct is created by [`RingBuffer::cursor_front()`], [`RingBuffer::cursor_end()`] and
/// [`RingBuffer::cursor()`].
///
/// # Panics
///
/// Moving a cursor before the front or past the end of the buffer panics. Use
/// [`checked_add()`](Cursor::checked_add) and [`checked_sub()`](Cursor::checked_sub) to move
/// without panicking.
///
/// # Examples
///
/// ```
/// use ring_buffer::RingBuffer;
///
/// let buf = RingBuffer::<u32, 5>::from([1, 2, 3, 4, 5, 6, 7]);
///
/// let mut cursor = buf.cursor_front();
/// assert_eq!(*cursor, 3);
///
/// cursor += 3;
/// assert_eq!(*cursor, 6);
/// assert_eq!(cursor[1], 7);
/// assert_eq!(cursor - buf.cursor_front(), 3);
/// assert!(cursor < buf.cursor_end());
///
/// assert_eq!(cursor.checked_add(5), None);
/// assert_eq!((cursor - 1).iter().copied().collect::<Vec<_>>(), [5, 6, 7]);
/// ```
pub struct Cursor<'a, T, const N: usize> {
    buf: &'a RingBuffer<T, N>,
    offset: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    #[inline]
    pub(crate) fn new(buf: &'a RingBuffer<T, N>, offset: usize) -> Self {
        let len = buf.len();
        assert!(offset <= len, "cursor offset {offset} out of range for buffer of length {len}");
        Self { buf, offset }
    }

    /// Returns the logical offset of the cursor: `0` at the front, the length of the buffer at
    /// the end.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the cursor points one past the back element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.offset == self.buf.len()
    }

    /// Returns the element the cursor points at, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.buf.get(self.offset)
    }

    /// Returns the element `index` positions after the cursor, or `None` if that is past the back
    /// of the buffer.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&'a T> {
        self.offset.checked_add(index).and_then(|offset| self.buf.get(offset))
    }

    /// Returns a cursor moved forward by `count` positions, or `None` if that would go past the
    /// end.
    #[inline]
    pub fn checked_add(self, count: usize) -> Option<Self> {
        let offset = forward(self.offset, count, self.buf.len())?;
        Some(Self { buf: self.buf, offset })
    }

    /// Returns a cursor moved backward by `count` positions, or `None` if that would go before
    /// the front.
    #[inline]
    pub fn checked_sub(self, count: usize) -> Option<Self> {
        let offset = backward(self.offset, count)?;
        Some(Self { buf: self.buf, offset })
    }

    /// Moves the cursor to the next element.
    ///
    /// # Panics
    ///
    /// If the cursor is at the end.
    #[inline]
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Moves the cursor to the previous element.
    ///
    /// # Panics
    ///
    /// If the cursor is at the front.
    #[inline]
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// Returns an iterator over the elements from the cursor to the back of the buffer.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'a, T, N> {
        Iter::starting_at(self.buf, self.offset)
    }
}

impl<'a, T, const N: usize> Clone for Cursor<'a, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, const N: usize> Copy for Cursor<'a, T, N> {}

impl<'a, T, const N: usize> Deref for Cursor<'a, T, N> {
    type Target = T;

    /// # Panics
    ///
    /// If the cursor is at the end.
    #[inline]
    fn deref(&self) -> &T {
        self.get().expect("attempted to dereference the end cursor")
    }
}

impl<'a, T, const N: usize> Index<usize> for Cursor<'a, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.at(index).expect("cursor index out of bounds")
    }
}

impl<'a, T, const N: usize> Add<usize> for Cursor<'a, T, N> {
    type Output = Self;

    #[inline]
    fn add(self, count: usize) -> Self {
        self.checked_add(count).expect("attempted to move the cursor past the end of the buffer")
    }
}

impl<'a, T, const N: usize> Sub<usize> for Cursor<'a, T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, count: usize) -> Self {
        self.checked_sub(count).expect("attempted to move the cursor before the front of the buffer")
    }
}

impl<'a, T, const N: usize> AddAssign<usize> for Cursor<'a, T, N> {
    #[inline]
    fn add_assign(&mut self, count: usize) {
        *self = *self + count;
    }
}

impl<'a, T, const N: usize> SubAssign<usize> for Cursor<'a, T, N> {
    #[inline]
    fn sub_assign(&mut self, count: usize) {
        *self = *self - count;
    }
}

impl<'a, T, const N: usize> Sub for Cursor<'a, T, N> {
    type Output = isize;

    /// Returns the signed distance, in elements, from `other` to `self`.
    ///
    /// # Panics
    ///
    /// If the two cursors belong to different buffers, or if the distance does not fit in an
    /// `isize` (only possible with zero-sized elements).
    #[inline]
    fn sub(self, other: Self) -> isize {
        assert!(ptr::eq(self.buf, other.buf), "cursors belong to different buffers");
        let distance = isize::try_from(self.offset.abs_diff(other.offset))
            .expect("distance between cursors overflows isize");
        if self.offset >= other.offset { distance } else { -distance }
    }
}

impl<'a, T, const N: usize> PartialEq for Cursor<'a, T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.buf, other.buf) && self.offset == other.offset
    }
}

impl<'a, T, const N: usize> Eq for Cursor<'a, T, N> {}

impl<'a, T, const N: usize> PartialOrd for Cursor<'a, T, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.buf, other.buf) {
            Some(self.offset.cmp(&other.offset))
        } else {
            None
        }
    }
}

impl<'a, T, const N: usize> fmt::Debug for Cursor<'a, T, N>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
         .field("offset", &self.offset)
         .field("current", &self.get())
         .finish()
    }
}

/// A random-access position inside a [`RingBuffer`] that allows modifying elements.
///
/// This is the mutable counterpart of [`Cursor`]: it moves the same way, and exclusively borrows
/// the buffer for as long as it is alive.
///
/// This struct is created by [`RingBuffer::cursor_front_mut()`] and [`RingBuffer::cursor_mut()`].
///
/// # Examples
///
/// ```
/// use ring_buffer::RingBuffer;
///
/// let mut buf = RingBuffer::<u32, 4>::from([1, 2, 3, 4, 5]);
///
/// let mut cursor = buf.cursor_front_mut();
/// while let Some(elem) = cursor.get_mut() {
///     *elem *= 2;
///     if cursor.at(1).is_none() {
///         break;
///     }
///     cursor.move_next();
/// }
/// assert_eq!(buf, [4, 6, 8, 10]);
/// ```
pub struct CursorMut<'a, T, const N: usize> {
    buf: &'a mut RingBuffer<T, N>,
    offset: usize,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(buf: &'a mut RingBuffer<T, N>, offset: usize) -> Self {
        let len = buf.len();
        assert!(offset <= len, "cursor offset {offset} out of range for buffer of length {len}");
        Self { buf, offset }
    }

    /// Returns the logical offset of the cursor.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the cursor points one past the back element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.offset == self.buf.len()
    }

    /// Returns the element the cursor points at, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.buf.get(self.offset)
    }

    /// Returns a mutable reference to the element the cursor points at, or `None` at the end.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.buf.get_mut(self.offset)
    }

    /// Returns the element `index` positions after the cursor, or `None` if that is past the back
    /// of the buffer.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.offset.checked_add(index).and_then(|offset| self.buf.get(offset))
    }

    /// Mutable variant of [`at()`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        let offset = self.offset.checked_add(index)?;
        self.buf.get_mut(offset)
    }

    /// Returns the cursor moved forward by `count` positions, or `None` if that would go past the
    /// end. The buffer stays borrowed by the returned cursor.
    #[inline]
    pub fn checked_add(self, count: usize) -> Option<Self> {
        let offset = forward(self.offset, count, self.buf.len())?;
        Some(Self { buf: self.buf, offset })
    }

    /// Returns the cursor moved backward by `count` positions, or `None` if that would go before
    /// the front.
    #[inline]
    pub fn checked_sub(self, count: usize) -> Option<Self> {
        let offset = backward(self.offset, count)?;
        Some(Self { buf: self.buf, offset })
    }

    /// Moves the cursor to the next element.
    ///
    /// # Panics
    ///
    /// If the cursor is at the end.
    #[inline]
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Moves the cursor to the previous element.
    ///
    /// # Panics
    ///
    /// If the cursor is at the front.
    #[inline]
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// Returns a read-only cursor at the same position, borrowing from this one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor { buf: &*self.buf, offset: self.offset }
    }
}

impl<'a, T, const N: usize> Index<usize> for CursorMut<'a, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.at(index).expect("cursor index out of bounds")
    }
}

impl<'a, T, const N: usize> IndexMut<usize> for CursorMut<'a, T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index).expect("cursor index out of bounds")
    }
}

impl<'a, T, const N: usize> Add<usize> for CursorMut<'a, T, N> {
    type Output = Self;

    #[inline]
    fn add(self, count: usize) -> Self {
        self.checked_add(count).expect("attempted to move the cursor past the end of the buffer")
    }
}

impl<'a, T, const N: usize> Sub<usize> for CursorMut<'a, T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, count: usize) -> Self {
        self.checked_sub(count).expect("attempted to move the cursor before the front of the buffer")
    }
}

impl<'a, T, const N: usize> AddAssign<usize> for CursorMut<'a, T, N> {
    #[inline]
    fn add_assign(&mut self, count: usize) {
        self.offset = forward(self.offset, count, self.buf.len())
            .expect("attempted to move the cursor past the end of the buffer");
    }
}

impl<'a, T, const N: usize> SubAssign<usize> for CursorMut<'a, T, N> {
    #[inline]
    fn sub_assign(&mut self, count: usize) {
        self.offset = backward(self.offset, count)
            .expect("attempted to move the cursor before the front of the buffer");
    }
}

impl<'a, T, const N: usize> fmt::Debug for CursorMut<'a, T, N>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_cursor().fmt(f)
    }
}
