// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: registry.rs
// Author: gslcrypto maintainers

//! Closed set of HMAC algorithms with their numeric codes and metadata.

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::gsl::digest::DigestAlgorithm;
use crate::gsl::error::UnknownAlgorithm;

#[derive(Clone, Copy, Debug)]
pub struct MacAlgorithmMetadata {
	pub identifier: &'static str,
	pub display_name: &'static str,
	pub legacy: bool,
}

impl MacAlgorithmMetadata {
	const fn legacy(
		identifier: &'static str,
		display_name: &'static str,
	) -> Self {
		Self {
			identifier,
			display_name,
			legacy: true,
		}
	}

	const fn current(
		identifier: &'static str,
		display_name: &'static str,
	) -> Self {
		Self {
			identifier,
			display_name,
			legacy: false,
		}
	}

	pub fn is_legacy(&self) -> bool {
		self.legacy
	}
}

/// Hash family used for HMAC. Codes 0..=5 follow the platform HMAC
/// identifiers; MD2 and MD4 extend the family after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum HmacAlgorithm {
	Sha1,
	Md5,
	Sha256,
	Sha384,
	Sha512,
	Sha224,
	Md2,
	Md4,
}

impl HmacAlgorithm {
	pub const fn code(self) -> u32 {
		match self {
			Self::Sha1 => 0,
			Self::Md5 => 1,
			Self::Sha256 => 2,
			Self::Sha384 => 3,
			Self::Sha512 => 4,
			Self::Sha224 => 5,
			Self::Md2 => 6,
			Self::Md4 => 7,
		}
	}

	pub fn metadata(self) -> MacAlgorithmMetadata {
		match self {
			Self::Sha1 => {
				MacAlgorithmMetadata::legacy("hmac-sha1", "HMAC-SHA1")
			}
			Self::Md5 => {
				MacAlgorithmMetadata::legacy("hmac-md5", "HMAC-MD5")
			}
			Self::Sha256 => MacAlgorithmMetadata::current(
				"hmac-sha256",
				"HMAC-SHA256",
			),
			Self::Sha384 => MacAlgorithmMetadata::current(
				"hmac-sha384",
				"HMAC-SHA384",
			),
			Self::Sha512 => MacAlgorithmMetadata::current(
				"hmac-sha512",
				"HMAC-SHA512",
			),
			Self::Sha224 => MacAlgorithmMetadata::current(
				"hmac-sha224",
				"HMAC-SHA224",
			),
			Self::Md2 => {
				MacAlgorithmMetadata::legacy("hmac-md2", "HMAC-MD2")
			}
			Self::Md4 => {
				MacAlgorithmMetadata::legacy("hmac-md4", "HMAC-MD4")
			}
		}
	}

	/// Digest the HMAC construction is built on.
	pub fn digest(self) -> DigestAlgorithm {
		match self {
			Self::Sha1 => DigestAlgorithm::Sha1,
			Self::Md5 => DigestAlgorithm::Md5,
			Self::Sha256 => DigestAlgorithm::Sha256,
			Self::Sha384 => DigestAlgorithm::Sha384,
			Self::Sha512 => DigestAlgorithm::Sha512,
			Self::Sha224 => DigestAlgorithm::Sha224,
			Self::Md2 => DigestAlgorithm::Md2,
			Self::Md4 => DigestAlgorithm::Md4,
		}
	}

	pub fn output_size(self) -> usize {
		self.digest().output_size()
	}

	pub fn all() -> impl Iterator<Item = HmacAlgorithm> {
		Self::iter()
	}
}

impl From<DigestAlgorithm> for HmacAlgorithm {
	fn from(digest: DigestAlgorithm) -> Self {
		match digest {
			DigestAlgorithm::Md2 => Self::Md2,
			DigestAlgorithm::Md4 => Self::Md4,
			DigestAlgorithm::Md5 => Self::Md5,
			DigestAlgorithm::Sha1 => Self::Sha1,
			DigestAlgorithm::Sha224 => Self::Sha224,
			DigestAlgorithm::Sha256 => Self::Sha256,
			DigestAlgorithm::Sha384 => Self::Sha384,
			DigestAlgorithm::Sha512 => Self::Sha512,
		}
	}
}

impl TryFrom<u32> for HmacAlgorithm {
	type Error = UnknownAlgorithm;

	fn try_from(code: u32) -> Result<Self, Self::Error> {
		Self::iter()
			.find(|alg| alg.code() == code)
			.ok_or_else(|| UnknownAlgorithm(format!("hmac code {}", code)))
	}
}

impl std::str::FromStr for HmacAlgorithm {
	type Err = UnknownAlgorithm;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let lowered = value.to_ascii_lowercase();
		let bare = lowered.strip_prefix("hmac-").unwrap_or(&lowered);
		match bare.parse::<DigestAlgorithm>() {
			Ok(digest) => Ok(Self::from(digest)),
			Err(_) => Err(UnknownAlgorithm(value.to_string())),
		}
	}
}

impl fmt::Display for HmacAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.metadata().display_name)
	}
}
