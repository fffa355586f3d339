// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: hmac.rs
// Author: gslcrypto maintainers

//! HMAC executors over the MD and SHA-2 hash families.

use digest::{Digest, Key, KeyInit};
use hmac::{Hmac, Mac};
use md2::Md2;
use md4::Md4;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use super::registry::HmacAlgorithm;

type HmacMd2 = Hmac<Md2>;
type HmacMd4 = Hmac<Md4>;
type HmacMd5 = Hmac<Md5>;
type HmacSha1 = Hmac<Sha1>;
type HmacSha224 = Hmac<Sha224>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

// Keys are normalized to one hash block up front, as HMAC itself does:
// longer keys are hashed, shorter keys are zero-padded. The block-sized
// constructor cannot fail.
macro_rules! keyed {
	($variant:ident, $mac:ty, $hash:ty, $key:expr) => {{
		let key: &[u8] = $key;
		let mut block = Key::<$mac>::default();
		if key.len() > block.len() {
			let hashed = <$hash as Digest>::digest(key);
			block[..hashed.len()].copy_from_slice(&hashed);
		} else {
			block[..key.len()].copy_from_slice(key);
		}
		HmacVariant::$variant(<$mac as KeyInit>::new(&block))
	}};
}

macro_rules! each_variant {
	($value:expr, $mac:ident => $body:expr) => {
		match $value {
			HmacVariant::Md2($mac) => $body,
			HmacVariant::Md4($mac) => $body,
			HmacVariant::Md5($mac) => $body,
			HmacVariant::Sha1($mac) => $body,
			HmacVariant::Sha224($mac) => $body,
			HmacVariant::Sha256($mac) => $body,
			HmacVariant::Sha384($mac) => $body,
			HmacVariant::Sha512($mac) => $body,
		}
	};
}

enum HmacVariant {
	Md2(HmacMd2),
	Md4(HmacMd4),
	Md5(HmacMd5),
	Sha1(HmacSha1),
	Sha224(HmacSha224),
	Sha256(HmacSha256),
	Sha384(HmacSha384),
	Sha512(HmacSha512),
}

/// Keyed HMAC state for a single computation.
pub struct HmacExecutor {
	inner: HmacVariant,
}

impl HmacExecutor {
	pub fn new(algorithm: HmacAlgorithm, key: &[u8]) -> Self {
		let inner = match algorithm {
			HmacAlgorithm::Md2 => keyed!(Md2, HmacMd2, Md2, key),
			HmacAlgorithm::Md4 => keyed!(Md4, HmacMd4, Md4, key),
			HmacAlgorithm::Md5 => keyed!(Md5, HmacMd5, Md5, key),
			HmacAlgorithm::Sha1 => keyed!(Sha1, HmacSha1, Sha1, key),
			HmacAlgorithm::Sha224 => keyed!(Sha224, HmacSha224, Sha224, key),
			HmacAlgorithm::Sha256 => keyed!(Sha256, HmacSha256, Sha256, key),
			HmacAlgorithm::Sha384 => keyed!(Sha384, HmacSha384, Sha384, key),
			HmacAlgorithm::Sha512 => keyed!(Sha512, HmacSha512, Sha512, key),
		};
		Self { inner }
	}

	pub fn update(&mut self, data: &[u8]) {
		each_variant!(&mut self.inner, mac => mac.update(data))
	}

	pub fn finalize(self) -> Vec<u8> {
		each_variant!(self.inner, mac => {
			mac.finalize().into_bytes().to_vec()
		})
	}

	/// Constant-time comparison against an expected tag.
	pub fn verify(self, tag: &[u8]) -> bool {
		each_variant!(self.inner, mac => mac.verify_slice(tag).is_ok())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reference<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Vec<u8> {
		let mut mac = <M as Mac>::new_from_slice(key).unwrap();
		Mac::update(&mut mac, data);
		Mac::finalize(mac).into_bytes().to_vec()
	}

	fn executor(alg: HmacAlgorithm, key: &[u8], data: &[u8]) -> Vec<u8> {
		let mut executor = HmacExecutor::new(alg, key);
		executor.update(data);
		executor.finalize()
	}

	#[test]
	fn block_normalized_keys_match_hmac_key_schedule() {
		let data = b"normalized keys";
		for len in [0usize, 1, 15, 16, 17, 63, 64, 65, 127, 128, 129, 300] {
			let key: Vec<u8> = (0..len).map(|i| i as u8 ^ 0xa5).collect();
			assert_eq!(
				executor(HmacAlgorithm::Md2, &key, data),
				reference::<HmacMd2>(&key, data),
				"md2 key {}",
				len
			);
			assert_eq!(
				executor(HmacAlgorithm::Sha1, &key, data),
				reference::<HmacSha1>(&key, data),
				"sha1 key {}",
				len
			);
			assert_eq!(
				executor(HmacAlgorithm::Sha256, &key, data),
				reference::<HmacSha256>(&key, data),
				"sha256 key {}",
				len
			);
			assert_eq!(
				executor(HmacAlgorithm::Sha512, &key, data),
				reference::<HmacSha512>(&key, data),
				"sha512 key {}",
				len
			);
		}
	}
}
