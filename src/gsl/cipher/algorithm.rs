// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: algorithm.rs
// Author: gslcrypto maintainers

//! Symmetric cipher selector and the key/block limits of each algorithm.

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::gsl::error::{CryptoError, UnknownAlgorithm};
use crate::gsl::weak;

/// Accepted key lengths in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySizes {
	Fixed(&'static [usize]),
	Range { min: usize, max: usize },
}

impl KeySizes {
	pub fn accepts(&self, len: usize) -> bool {
		match self {
			Self::Fixed(sizes) => sizes.contains(&len),
			Self::Range { min, max } => (*min..=*max).contains(&len),
		}
	}
}

impl fmt::Display for KeySizes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fixed(sizes) => {
				let rendered: Vec<String> =
					sizes.iter().map(|size| size.to_string()).collect();
				write!(f, "{}", rendered.join(", "))
			}
			Self::Range { min, max } => write!(f, "{}..={}", min, max),
		}
	}
}

const AES_KEY_SIZES: &[usize] = &[16, 24, 32];
const DES_KEY_SIZES: &[usize] = &[8];
const TDES_KEY_SIZES: &[usize] = &[24];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CipherAlgorithm {
	Aes,
	Des,
	TripleDes,
	Cast,
	Rc4,
	Rc2,
	Blowfish,
}

impl CipherAlgorithm {
	/// Platform numeric identifier of the algorithm.
	pub const fn code(self) -> i32 {
		match self {
			Self::Aes => 0,
			Self::Des => 1,
			Self::TripleDes => 2,
			Self::Cast => 3,
			Self::Rc4 => 4,
			Self::Rc2 => 5,
			Self::Blowfish => 6,
		}
	}

	pub fn identifier(self) -> &'static str {
		match self {
			Self::Aes => "aes",
			Self::Des => "des",
			Self::TripleDes => "3des",
			Self::Cast => "cast",
			Self::Rc4 => "rc4",
			Self::Rc2 => "rc2",
			Self::Blowfish => "blowfish",
		}
	}

	pub fn display_name(self) -> &'static str {
		match self {
			Self::Aes => "AES",
			Self::Des => "DES",
			Self::TripleDes => "3DES",
			Self::Cast => "CAST",
			Self::Rc4 => "RC4",
			Self::Rc2 => "RC2",
			Self::Blowfish => "Blowfish",
		}
	}

	/// Block size in bytes; 1 for the RC4 stream cipher.
	pub const fn block_size(self) -> usize {
		match self {
			Self::Aes => 16,
			Self::Rc4 => 1,
			Self::Des
			| Self::TripleDes
			| Self::Cast
			| Self::Rc2
			| Self::Blowfish => 8,
		}
	}

	pub fn key_sizes(self) -> KeySizes {
		match self {
			Self::Aes => KeySizes::Fixed(AES_KEY_SIZES),
			Self::Des => KeySizes::Fixed(DES_KEY_SIZES),
			Self::TripleDes => KeySizes::Fixed(TDES_KEY_SIZES),
			Self::Cast => KeySizes::Range { min: 5, max: 16 },
			Self::Rc4 => KeySizes::Range { min: 1, max: 512 },
			Self::Rc2 => KeySizes::Range { min: 1, max: 128 },
			Self::Blowfish => KeySizes::Range { min: 8, max: 56 },
		}
	}

	pub fn is_stream(self) -> bool {
		matches!(self, Self::Rc4)
	}

	pub fn is_legacy(self) -> bool {
		weak::metadata_for(self.identifier()).is_some()
	}

	pub fn all() -> impl Iterator<Item = CipherAlgorithm> {
		Self::iter()
	}

	pub(crate) fn validate_key(
		self,
		key: &[u8],
	) -> Result<(), CryptoError> {
		let sizes = self.key_sizes();
		if sizes.accepts(key.len()) {
			Ok(())
		} else {
			Err(CryptoError::param(format!(
				"Invalid {} key length: expected {} bytes but received {}",
				self.display_name(),
				sizes,
				key.len()
			)))
		}
	}
}

impl fmt::Display for CipherAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.display_name())
	}
}

impl TryFrom<i32> for CipherAlgorithm {
	type Error = UnknownAlgorithm;

	fn try_from(code: i32) -> Result<Self, Self::Error> {
		Self::iter().find(|alg| alg.code() == code).ok_or_else(|| {
			UnknownAlgorithm(format!("cipher code {}", code))
		})
	}
}

impl std::str::FromStr for CipherAlgorithm {
	type Err = UnknownAlgorithm;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.to_ascii_lowercase().as_str() {
			"aes" => Ok(Self::Aes),
			"des" => Ok(Self::Des),
			"3des" | "tdes" | "des-ede3" => Ok(Self::TripleDes),
			"cast" | "cast5" | "cast-128" => Ok(Self::Cast),
			"rc4" | "arc4" => Ok(Self::Rc4),
			"rc2" => Ok(Self::Rc2),
			"blowfish" => Ok(Self::Blowfish),
			_ => Err(UnknownAlgorithm(value.to_string())),
		}
	}
}
