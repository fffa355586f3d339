// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: options.rs
// Author: gslcrypto maintainers

use crate::gsl::error::CryptoError;

bitflags::bitflags! {
	/// Mode and padding flags for block ciphers.
	///
	/// The empty set selects CBC without padding. Stream ciphers ignore
	/// every flag.
	#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct CipherOptions: u32 {
		const PKCS7_PADDING = 0x0001;
		const ECB_MODE = 0x0002;
	}
}

impl CipherOptions {
	/// Builds options from raw bits, rejecting flags outside the known set.
	pub fn from_raw(bits: u32) -> Result<Self, CryptoError> {
		Self::from_bits(bits).ok_or_else(|| {
			CryptoError::param(format!(
				"unknown cipher option bits {:#06x}",
				bits & !Self::all().bits()
			))
		})
	}

	pub fn is_padded(&self) -> bool {
		self.contains(Self::PKCS7_PADDING)
	}

	pub fn is_ecb(&self) -> bool {
		self.contains(Self::ECB_MODE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_set_is_unpadded_cbc() {
		let options = CipherOptions::default();
		assert!(!options.is_padded());
		assert!(!options.is_ecb());
	}

	#[test]
	fn flags_combine() {
		let options = CipherOptions::PKCS7_PADDING | CipherOptions::ECB_MODE;
		assert!(options.is_padded());
		assert!(options.is_ecb());
		assert_eq!(options.bits(), 0x0003);
	}

	#[test]
	fn unknown_bits_are_rejected() {
		assert!(CipherOptions::from_raw(0x0001).is_ok());
		let err = CipherOptions::from_raw(0x0004).unwrap_err();
		assert!(err.message().contains("0x0004"));
	}
}
