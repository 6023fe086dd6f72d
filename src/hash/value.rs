//! The 16-byte MD5 value type.

use std::fmt;
use std::hash::{Hash as StdHash, Hasher};

/// A 16-byte MD5 digest.
///
/// Used both for per-block digests and for the final file digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Md5Hash([u8; 16]);

impl Md5Hash {
    /// The size of the hash in bytes.
    pub const SIZE: usize = 16;

    /// Creates a new hash from a byte array.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a new hash from a slice.
    ///
    /// Returns `None` if the slice is not exactly 16 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 16] = slice.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Returns the hash as a byte array.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(32);
        for byte in &self.0 {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Creates a hash from a hex string.
    ///
    /// Returns `None` if the string is not valid hex or not exactly 32 characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != 32 || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex_str[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl From<[u8; 16]> for Md5Hash {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Md5Hash> for [u8; 16] {
    fn from(hash: Md5Hash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Md5Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl StdHash for Md5Hash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.0);
    }
}

impl fmt::Display for Md5Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let bytes = vec![7u8; 16];
        let hash = Md5Hash::from_slice(&bytes).unwrap();
        assert_eq!(hash.as_bytes(), &[7u8; 16]);

        // Wrong size
        assert!(Md5Hash::from_slice(&[0u8; 15]).is_none());
        assert!(Md5Hash::from_slice(&[0u8; 17]).is_none());
    }

    #[test]
    fn test_hex_round_trip() {
        let hex = "6e54ac6aefab46e765686eb309142474";
        let hash = Md5Hash::from_hex(hex).unwrap();
        assert_eq!(hash.as_bytes()[0], 0x6e);
        assert_eq!(hash.to_hex(), hex);
        assert_eq!(hash.to_string(), hex);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Md5Hash::from_hex("abc").is_none());
        assert!(Md5Hash::from_hex("+e54ac6aefab46e765686eb309142474").is_none());
        assert!(Md5Hash::from_hex("zz54ac6aefab46e765686eb309142474").is_none());
        assert!(Md5Hash::from_hex("é54ac6aefab46e765686eb309142474").is_none());
    }

    #[test]
    fn test_display_matches_to_hex() {
        let hash = Md5Hash::new([0xAB; 16]);
        assert_eq!(hash.to_string(), hash.to_hex());
        assert!(hash.to_hex().chars().all(|c| c == 'a' || c == 'b'));
    }
}
