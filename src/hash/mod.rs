//! MD5 hashing for block and final digests.
//!
//! - [`Md5Hash`] - 16-byte digest value
//! - [`Md5Hasher`] - reusable MD5 state (internal)

mod hasher;
mod value;

pub(crate) use hasher::Md5Hasher;
pub use value::Md5Hash;
