//! Append-only byte buffer with doubling growth and a capacity view.

use bytes::BytesMut;

/// Initial capacity of the block-digest buffer (two MD5 digests).
pub const INITIAL_CAPACITY: usize = 32;

/// An append-only byte accumulator that doubles its capacity on overflow.
///
/// Unlike `Vec<u8>`, the capacity is tracked explicitly and every byte up to
/// it is initialized to zero, so [`GrowableBuffer::allocated`] can hand out
/// the whole region including the unwritten tail. The final digest hashes
/// exactly that region, which makes the growth sequence part of the output
/// format: capacity starts at `initial_capacity` and only ever doubles.
#[derive(Debug, Clone)]
pub struct GrowableBuffer {
    storage: BytesMut,
    len: usize,
}

impl GrowableBuffer {
    /// Creates an empty buffer with `capacity` zeroed bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: BytesMut::zeroed(capacity),
            len: 0,
        }
    }

    /// Appends `data` after the logical content, doubling capacity as needed.
    pub fn write(&mut self, data: &[u8]) {
        let needed = self.len + data.len();
        if needed > self.storage.len() {
            let mut capacity = self.storage.len().max(1);
            while capacity < needed {
                capacity *= 2;
            }
            // Old content stays in place; the new tail is zero-filled.
            self.storage.resize(capacity, 0);
        }
        self.storage[self.len..needed].copy_from_slice(data);
        self.len = needed;
    }

    /// Discards the content and starts over with `capacity` zeroed bytes.
    pub fn reset(&mut self, capacity: usize) {
        self.storage.clear();
        self.storage.resize(capacity, 0);
        self.len = 0;
    }

    /// Returns the full allocated region, including the zeroed tail.
    pub fn allocated(&self) -> &[u8] {
        &self.storage
    }

    /// Returns only the bytes written since the last reset.
    pub fn logical(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Returns the number of bytes written since the last reset.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let buf = GrowableBuffer::default();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 32);
        assert_eq!(buf.allocated(), &[0u8; 32][..]);
        assert!(buf.logical().is_empty());
    }

    #[test]
    fn test_write_within_capacity() {
        let mut buf = GrowableBuffer::default();
        buf.write(&[0xAA; 16]);

        assert_eq!(buf.len(), 16);
        assert_eq!(buf.capacity(), 32);
        assert_eq!(buf.logical(), &[0xAA; 16][..]);
        assert_eq!(&buf.allocated()[16..], &[0u8; 16][..]);
    }

    #[test]
    fn test_growth_doubles_and_preserves_content() {
        let mut buf = GrowableBuffer::default();
        for i in 0..3u8 {
            buf.write(&[i; 16]);
        }

        assert_eq!(buf.len(), 48);
        assert_eq!(buf.capacity(), 64);
        assert_eq!(&buf.logical()[..16], &[0u8; 16][..]);
        assert_eq!(&buf.logical()[16..32], &[1u8; 16][..]);
        assert_eq!(&buf.logical()[32..], &[2u8; 16][..]);
        assert_eq!(&buf.allocated()[48..], &[0u8; 16][..]);
    }

    #[test]
    fn test_exact_fill_does_not_grow() {
        let mut buf = GrowableBuffer::default();
        buf.write(&[1; 16]);
        buf.write(&[2; 16]);
        assert_eq!(buf.capacity(), 32);
        assert_eq!(buf.allocated(), buf.logical());
    }

    #[test]
    fn test_large_write_doubles_repeatedly() {
        let mut buf = GrowableBuffer::default();
        buf.write(&[7; 100]);
        assert_eq!(buf.capacity(), 128);
        assert_eq!(buf.len(), 100);
    }

    #[test]
    fn test_zero_capacity_grows() {
        let mut buf = GrowableBuffer::with_capacity(0);
        buf.write(b"abc");
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.logical(), b"abc");
    }

    #[test]
    fn test_reset_clears_old_bytes() {
        let mut buf = GrowableBuffer::default();
        buf.write(&[0xFF; 40]);
        buf.reset(INITIAL_CAPACITY);

        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 32);
        assert_eq!(buf.allocated(), &[0u8; 32][..]);
    }
}
