//! Async front-ends for the digest.
//!
//! This module uses the `futures-io` traits, making it runtime-agnostic and
//! compatible with tokio (via `tokio-util` compat), async-std, smol, and
//! other async runtimes.
//!
//! - [`digest_async`] - Digests everything an async reader yields
//! - [`UpdateAsync`] - Future returned by [`Md5Md5CrcDigest::update_async`](crate::Md5Md5CrcDigest::update_async)
//!
//! `Md5Md5CrcDigest` also implements `futures_io::AsyncWrite`, so any
//! runtime's copy helper can drive it.
//!
//! This module requires the `async-io` feature to be enabled.

mod future;

pub use future::{UpdateAsync, digest_async};
