mod buffer;
mod cursor;
mod ops;

pub use self::buffer::{validate_capacity, RingBuffer};
