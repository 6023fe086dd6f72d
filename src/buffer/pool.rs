//! Thread-local pool of read buffers for the reader front-ends.

use std::cell::RefCell;

/// Size of a pooled read buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024; // 64 KiB

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable, fixed-size read buffer.
pub struct ReadBuffer {
    data: Vec<u8>,
}

impl ReadBuffer {
    /// Takes a buffer from the thread-local pool or allocates a new one.
    pub fn take() -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let data = pool
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| vec![0u8; DEFAULT_BUFFER_SIZE]);
            Self { data }
        })
    }

    /// Returns the whole buffer for a reader to fill.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the first `len` bytes.
    pub fn filled(&self, len: usize) -> &[u8] {
        &self.data[..len]
    }
}

impl Drop for ReadBuffer {
    fn drop(&mut self) {
        if self.data.len() != DEFAULT_BUFFER_SIZE {
            return;
        }
        THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOL_SIZE {
                pool.push(std::mem::take(&mut self.data));
            }
        });
    }
}

impl Default for ReadBuffer {
    fn default() -> Self {
        Self::take()
    }
}

thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
