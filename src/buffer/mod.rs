//! Internal buffer management.
//!
//! - [`GrowableBuffer`] holds the per-block MD5 digests; its capacity view
//!   feeds the final MD5.
//! - [`ReadBuffer`] is a thread-local pooled buffer used when pumping a
//!   reader through a digest.
//!
//! Both are implementation details and not part of the public API.

mod growable;
mod pool;

pub(crate) use growable::{GrowableBuffer, INITIAL_CAPACITY};
pub(crate) use pool::ReadBuffer;
