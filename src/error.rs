use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Capacity is zero or not a power of two.
    Capacity { capacity: usize },
    /// Positional access on an empty buffer or past the last unread element.
    OutOfRange { index: usize, count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            Error::Capacity { capacity } => write!(
                f,
                "ring buffer capacity must be a power of two greater than zero, got {}",
                capacity
            ),
            Error::OutOfRange { index, count } => write!(
                f,
                "index {} located in invalid range for access ring buffer of {} elements",
                index, count
            ),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn is_capacity(&self) -> bool {
        matches!(&self, Error::Capacity { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(&self, Error::OutOfRange { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Full;

impl fmt::Display for Full {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        "write failed because ring buffer is full".fmt(fmt)
    }
}

impl std::error::Error for Full {}

/// A rejected write. Owns the value that did not fit.
#[derive(Clone, PartialEq, Eq)]
pub struct TryWriteError<T> {
    pub(crate) val: T,
}

impl<T> fmt::Debug for TryWriteError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryWriteError").field("kind", &Full).finish()
    }
}

impl<T> fmt::Display for TryWriteError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Full.fmt(f)
    }
}

impl<T: core::any::Any> std::error::Error for TryWriteError<T> {}

impl<T> TryWriteError<T> {
    pub fn into_inner(self) -> T {
        self.val
    }

    pub fn into_full(self) -> Full {
        Full
    }
}
