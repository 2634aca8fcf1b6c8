//! Fixed-capacity ring buffer with inline storage.
//!
//! # Invariants
//! - `S` is a power of two greater than zero.
//! - `0 <= write - read <= S`, computed with wrapping subtraction.
//! - The element at logical index `i` lives at `(read + i) & MASK`.
//!
//! # Threading
//! Not synchronized. Producer and consumer on different threads need an
//! external lock around the buffer.

use super::cursor::Cursor;
use crate::error::{Error, TryWriteError};
use std::fmt;

/// Checks that `capacity` is usable as a ring buffer size.
pub const fn validate_capacity(capacity: usize) -> Result<usize, Error> {
    if capacity > 0 && capacity & (capacity - 1) == 0 {
        Ok(capacity)
    } else {
        Err(Error::Capacity { capacity })
    }
}

/// A bounded FIFO over `S` inline slots.
///
/// Writes into a full buffer are rejected, never overwriting unread data.
/// Full and empty are told apart by letting the cursors run past `S` and
/// masking only the storage index, so no slot or counter is sacrificed.
///
/// A capacity that is zero or not a power of two does not compile:
///
/// ```compile_fail
/// let ring = fixed_ring::RingBuffer::<u8, 3>::new();
/// ```
pub struct RingBuffer<T, const S: usize> {
    storage: [Option<T>; S],
    write: Cursor,
    read: Cursor,
}

impl<T, const S: usize> RingBuffer<T, S> {
    const CAPACITY: usize = {
        assert!(S > 0, "RingBuffer capacity must be > 0");
        assert!(S & (S - 1) == 0, "RingBuffer capacity must be power of 2");
        S
    };

    const MASK: usize = Self::CAPACITY - 1;

    /// Creates an empty buffer. The capacity is checked at compile time.
    pub fn new() -> Self {
        let _ = Self::CAPACITY;
        Self::empty()
    }

    /// Creates an empty buffer, reporting a bad capacity as an error instead
    /// of failing the build.
    pub fn try_new() -> Result<Self, Error> {
        validate_capacity(S)?;
        Ok(Self::empty())
    }

    fn empty() -> Self {
        Self {
            storage: std::array::from_fn(|_| None),
            write: Cursor::default(),
            read: Cursor::default(),
        }
    }

    pub const fn capacity(&self) -> usize {
        S
    }

    pub fn is_empty(&self) -> bool {
        self.write.get() == self.read.get()
    }

    /// The difference reaches the bit above the mask only when it equals `S`.
    pub fn is_full(&self) -> bool {
        self.write.distance(&self.read) & !Self::MASK != 0
    }

    /// Number of unread elements, in `0..=S`.
    pub fn count(&self) -> usize {
        let count = self.write.distance(&self.read);
        debug_assert!(count <= S, "cursor distance exceeds capacity");
        count
    }

    /// Free slots, `S - count()`.
    pub fn free(&self) -> usize {
        S - self.count()
    }

    /// Appends `value`, handing it back inside the error if the buffer is full.
    pub fn try_write(&mut self, value: T) -> Result<(), TryWriteError<T>> {
        if self.is_full() {
            tracing::trace!(capacity = S, "ring buffer full, write rejected");
            return Err(TryWriteError { val: value });
        }
        self.store(value);
        Ok(())
    }

    /// Appends `value`. Returns false and leaves the buffer untouched if full.
    pub fn write(&mut self, value: T) -> bool {
        self.try_write(value).is_ok()
    }

    /// Writes all of `values` in order, or nothing at all.
    ///
    /// Fails on an empty slice and when fewer than `values.len()` slots are
    /// free.
    pub fn write_slice(&mut self, values: &[T]) -> bool
    where
        T: Clone,
    {
        if !self.fits(values.len()) {
            return false;
        }
        for value in values {
            self.store(value.clone());
        }
        true
    }

    /// Checks room for a bulk write of `len` elements.
    pub(crate) fn fits(&self, len: usize) -> bool {
        if len == 0 || self.free() < len {
            tracing::trace!(
                len,
                free = self.free(),
                "bulk write rejected, not enough room"
            );
            return false;
        }
        true
    }

    /// Stores at the write cursor. The caller has checked there is room.
    pub(crate) fn store(&mut self, value: T) {
        debug_assert!(!self.is_full(), "store called on full buffer");
        let idx = self.write.index(Self::MASK);
        self.storage[idx] = Some(value);
        self.write.advance(1);
    }

    /// Removes and returns the oldest element, or `None` when empty.
    pub fn read(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let idx = self.read.index(Self::MASK);
        let value = self.storage[idx].take();
        debug_assert!(value.is_some(), "unread slot {} was vacant", idx);
        self.read.advance(1);
        value
    }

    /// Moves the oldest element into `out`. Leaves `out` alone when empty.
    pub fn read_into(&mut self, out: &mut T) -> bool {
        match self.read() {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// The `i`-th oldest unread element.
    pub fn get(&self, i: usize) -> Result<&T, Error> {
        let idx = self.physical_index(i)?;
        self.storage[idx].as_ref().ok_or(Error::OutOfRange {
            index: i,
            count: self.count(),
        })
    }

    pub fn get_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        let idx = self.physical_index(i)?;
        let count = self.count();
        self.storage[idx]
            .as_mut()
            .ok_or(Error::OutOfRange { index: i, count })
    }

    fn physical_index(&self, i: usize) -> Result<usize, Error> {
        let count = self.count();
        if self.is_empty() || i >= count {
            return Err(Error::OutOfRange { index: i, count });
        }
        Ok(self.read.get().wrapping_add(i) & Self::MASK)
    }

    /// Oldest unread element, without consuming it.
    pub fn first(&self) -> Result<&T, Error> {
        self.get(0)
    }

    pub fn first_mut(&mut self) -> Result<&mut T, Error> {
        self.get_mut(0)
    }

    /// Newest element.
    pub fn last(&self) -> Result<&T, Error> {
        self.get(self.last_index()?)
    }

    pub fn last_mut(&mut self) -> Result<&mut T, Error> {
        let i = self.last_index()?;
        self.get_mut(i)
    }

    fn last_index(&self) -> Result<usize, Error> {
        self.count()
            .checked_sub(1)
            .ok_or(Error::OutOfRange { index: 0, count: 0 })
    }

    /// Resets both cursors. Slot contents are left as they are.
    pub fn clear(&mut self) {
        tracing::trace!(discarded = self.count(), "ring buffer cleared");
        self.write.reset();
        self.read.reset();
    }

    /// Unread elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count()).filter_map(move |i| self.get(i).ok())
    }

    /// Unordered physical view of the storage, starting at slot 0 rather than
    /// at the oldest element. Vacant and stale slots are visible here; use
    /// `iter` for the logical content.
    pub fn physical(&self) -> &[Option<T>; S] {
        &self.storage
    }
}

impl<T, const S: usize> Default for RingBuffer<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const S: usize> Clone for RingBuffer<T, S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            write: self.write.clone(),
            read: self.read.clone(),
        }
    }
}

impl<T: fmt::Debug, const S: usize> fmt::Debug for RingBuffer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &S)
            .field("read", &self.read.get())
            .field("write", &self.write.get())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T, const S: usize>(&'a RingBuffer<T, S>);

impl<T: fmt::Debug, const S: usize> fmt::Debug for DebugElements<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
