// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: digest.rs
// Author: gslcrypto maintainers

//! One-shot message digests over byte buffers.

use std::fmt;

use ::digest::{Digest, DynDigest};
use strum::{EnumIter, IntoEnumIterator};

use super::buffer::Buffer;
use super::error::UnknownAlgorithm;
use super::weak;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DigestAlgorithm {
	Md2,
	Md4,
	Md5,
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
}

impl DigestAlgorithm {
	pub fn identifier(self) -> &'static str {
		match self {
			Self::Md2 => "md2",
			Self::Md4 => "md4",
			Self::Md5 => "md5",
			Self::Sha1 => "sha1",
			Self::Sha224 => "sha224",
			Self::Sha256 => "sha256",
			Self::Sha384 => "sha384",
			Self::Sha512 => "sha512",
		}
	}

	pub fn display_name(self) -> &'static str {
		match self {
			Self::Md2 => "MD2",
			Self::Md4 => "MD4",
			Self::Md5 => "MD5",
			Self::Sha1 => "SHA-1",
			Self::Sha224 => "SHA-224",
			Self::Sha256 => "SHA-256",
			Self::Sha384 => "SHA-384",
			Self::Sha512 => "SHA-512",
		}
	}

	/// Length in bytes of every digest this algorithm produces.
	pub fn output_size(self) -> usize {
		match self {
			Self::Md2 | Self::Md4 | Self::Md5 => 16,
			Self::Sha1 => 20,
			Self::Sha224 => 28,
			Self::Sha256 => 32,
			Self::Sha384 => 48,
			Self::Sha512 => 64,
		}
	}

	pub fn is_legacy(self) -> bool {
		weak::metadata_for(self.identifier()).is_some()
	}

	pub fn all() -> impl Iterator<Item = DigestAlgorithm> {
		Self::iter()
	}

	fn hasher(self) -> Box<dyn DynDigest> {
		match self {
			Self::Md2 => Box::new(::md2::Md2::new()),
			Self::Md4 => Box::new(::md4::Md4::new()),
			Self::Md5 => Box::new(::md5::Md5::new()),
			Self::Sha1 => Box::new(::sha1::Sha1::new()),
			Self::Sha224 => Box::new(::sha2::Sha224::new()),
			Self::Sha256 => Box::new(::sha2::Sha256::new()),
			Self::Sha384 => Box::new(::sha2::Sha384::new()),
			Self::Sha512 => Box::new(::sha2::Sha512::new()),
		}
	}
}

impl fmt::Display for DigestAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.display_name())
	}
}

impl std::str::FromStr for DigestAlgorithm {
	type Err = UnknownAlgorithm;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.to_ascii_lowercase().replace('-', "");
		Self::iter()
			.find(|alg| alg.identifier() == normalized)
			.ok_or_else(|| UnknownAlgorithm(value.to_string()))
	}
}

/// Hashes `data` with `algorithm`. Never fails, including for empty input.
pub fn digest(data: &[u8], algorithm: DigestAlgorithm) -> Buffer {
	weak::warn_once(algorithm.identifier());
	let mut hasher = algorithm.hasher();
	hasher.update(data);
	Buffer::from(hasher.finalize())
}

pub fn md2(data: &[u8]) -> Buffer {
	digest(data, DigestAlgorithm::Md2)
}

pub fn md4(data: &[u8]) -> Buffer {
	digest(data, DigestAlgorithm::Md4)
}

pub fn md5(data: &[u8]) -> Buffer {
	digest(data, DigestAlgorithm::Md5)
}

pub fn sha1(data: &[u8]) -> Buffer {
	digest(data, DigestAlgorithm::Sha1)
}

pub fn sha224(data: &[u8]) -> Buffer {
	digest(data, DigestAlgorithm::Sha224)
}

pub fn sha256(data: &[u8]) -> Buffer {
	digest(data, DigestAlgorithm::Sha256)
}

pub fn sha384(data: &[u8]) -> Buffer {
	digest(data, DigestAlgorithm::Sha384)
}

pub fn sha512(data: &[u8]) -> Buffer {
	digest(data, DigestAlgorithm::Sha512)
}
