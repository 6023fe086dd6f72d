//! `digest` crate trait implementations.
//!
//! Lets the digest stand in wherever generic code expects a
//! [`digest::Digest`], e.g. `Md5Md5CrcDigest::digest(data)` or
//! `Digest::chain_update`. The generic API always uses the default
//! configuration; construct with [`Md5Md5CrcDigest::new`] for anything else.

use digest::core_api::BlockSizeUser;
use digest::typenum::{U16, U64};
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update};

use super::Md5Md5CrcDigest;

impl OutputSizeUser for Md5Md5CrcDigest {
    type OutputSize = U16;
}

impl BlockSizeUser for Md5Md5CrcDigest {
    type BlockSize = U64;
}

impl HashMarker for Md5Md5CrcDigest {}

impl Update for Md5Md5CrcDigest {
    fn update(&mut self, data: &[u8]) {
        Md5Md5CrcDigest::update(self, data);
    }
}

impl Reset for Md5Md5CrcDigest {
    fn reset(&mut self) {
        Md5Md5CrcDigest::reset(self);
    }
}

impl FixedOutput for Md5Md5CrcDigest {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(Md5Md5CrcDigest::finalize(self).as_bytes());
    }
}

impl FixedOutputReset for Md5Md5CrcDigest {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(Md5Md5CrcDigest::finalize_reset(self).as_bytes());
    }
}
