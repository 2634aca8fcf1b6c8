use super::RingBuffer;
use std::ops::{Index, IndexMut, Shl};

/// Panics where `get` would return `Error::OutOfRange`.
impl<T, const S: usize> Index<usize> for RingBuffer<T, S> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const S: usize> IndexMut<usize> for RingBuffer<T, S> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.get_mut(i) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

/// `&mut ring << a << b` writes `a` then `b`; writes into a full buffer are
/// dropped.
impl<'a, T, const S: usize> Shl<T> for &'a mut RingBuffer<T, S> {
    type Output = &'a mut RingBuffer<T, S>;

    fn shl(self, value: T) -> Self::Output {
        self.write(value);
        self
    }
}
