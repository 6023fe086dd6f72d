//! Reusable MD5 state for block and final digests.

use md5::{Digest, Md5};

use super::Md5Hash;

/// An MD5 hasher that is reset after every digest it produces.
#[derive(Debug, Clone, Default)]
pub struct Md5Hasher {
    state: Md5,
}

impl Md5Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self { state: Md5::new() }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    /// Returns the digest of everything fed so far and resets the hasher.
    pub fn finalize_reset(&mut self) -> Md5Hash {
        Md5Hash::new(self.state.finalize_reset().into())
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        Digest::reset(&mut self.state);
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> Md5Hash {
        Md5Hash::new(Md5::digest(data).into())
    }
}
