pub(crate) use self::inner::Cursor;

#[cfg(feature = "cache-padded")]
mod inner {
    use cache_padded::CachePadded;
    use core::ops::{Deref, DerefMut};

    #[derive(Clone, Default)]
    pub(crate) struct Cursor {
        inner: CachePadded<usize>,
    }

    impl Deref for Cursor {
        type Target = usize;

        fn deref(&self) -> &Self::Target {
            &self.inner
        }
    }

    impl DerefMut for Cursor {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.inner
        }
    }
}

#[cfg(not(feature = "cache-padded"))]
mod inner {
    use core::ops::{Deref, DerefMut};

    #[derive(Clone, Default)]
    pub(crate) struct Cursor {
        inner: usize,
    }

    impl Deref for Cursor {
        type Target = usize;

        fn deref(&self) -> &Self::Target {
            &self.inner
        }
    }

    impl DerefMut for Cursor {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.inner
        }
    }
}

impl Cursor {
    pub(crate) fn get(&self) -> usize {
        **self
    }

    /// Moves the cursor forward by `off`. Positions are never wrapped at the
    /// capacity, only when the counter itself overflows `usize`.
    pub(crate) fn advance(&mut self, off: usize) -> usize {
        let next = self.get().wrapping_add(off);
        **self = next;
        next
    }

    pub(crate) fn reset(&mut self) {
        **self = 0;
    }

    pub(crate) fn index(&self, mask: usize) -> usize {
        self.get() & mask
    }

    pub(crate) fn distance(&self, behind: &Cursor) -> usize {
        self.get().wrapping_sub(behind.get())
    }
}
