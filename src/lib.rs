//! A fixed-capacity ring buffer for single-producer/single-consumer handoff.
//!
//! Capacity is a power-of-two const generic. Writing into a full buffer and
//! reading from an empty one are reported through the return value; only
//! positional access past the unread elements is an error.

#[cfg(feature = "bytes")]
mod buf;
pub mod error;
mod ring;
pub mod wrapper;

pub use crate::error::{Error, Full, TryWriteError};
pub use crate::ring::{validate_capacity, RingBuffer};
pub use crate::wrapper::{Drain, RingSink};
