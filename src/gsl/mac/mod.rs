// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// Module: mac (message authentication codes)
// Author: gslcrypto maintainers

//! Keyed message authentication codes built on the HMAC construction.

mod hmac;
pub mod registry;

pub use registry::{HmacAlgorithm, MacAlgorithmMetadata};

use self::hmac::HmacExecutor;
use super::buffer::Buffer;
use super::weak;

/// Computes the HMAC of `data` under `key`. Any key length is accepted,
/// including an empty key.
pub fn hmac(data: &[u8], algorithm: HmacAlgorithm, key: &[u8]) -> Buffer {
	weak::warn_once(algorithm.digest().identifier());
	let mut executor = HmacExecutor::new(algorithm, key);
	executor.update(data);
	Buffer::from(executor.finalize())
}

/// Recomputes the HMAC of `data` and compares it with `tag` in constant
/// time.
pub fn verify_hmac(
	data: &[u8],
	algorithm: HmacAlgorithm,
	key: &[u8],
	tag: &[u8],
) -> bool {
	weak::warn_once(algorithm.digest().identifier());
	let mut executor = HmacExecutor::new(algorithm, key);
	executor.update(data);
	executor.verify(tag)
}
