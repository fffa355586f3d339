// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: error.rs
// Author: gslcrypto maintainers

//! Error taxonomy for cipher operations. Digests and HMACs cannot fail,
//! so every variant here originates from `encrypt`/`decrypt`.

use std::borrow::Cow;
use std::fmt;

use strum::EnumIter;

/// Name of the error domain reported alongside status codes.
pub const ERROR_DOMAIN: &str = "GSLCryptoErrorDomain";

/// Status code reported for a successful operation.
pub const STATUS_SUCCESS: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CryptoErrorKind {
	/// Invalid algorithm, key, IV or option combination.
	ParamError,
	/// The output buffer sized for the primitive was rejected.
	BufferTooSmall,
	/// The output buffer could not be allocated.
	MemoryFailure,
	/// Input is not a multiple of the block size and padding is off.
	AlignmentError,
	/// Ciphertext is malformed, e.g. bad PKCS7 padding.
	DecodeError,
	/// Algorithm or mode not supported by the primitive.
	Unimplemented,
	/// Input is too large to process in one call.
	Overflow,
	/// Internal random number generation failed.
	RngFailure,
}

impl CryptoErrorKind {
	/// Numeric status code of this kind.
	pub const fn status(self) -> i32 {
		match self {
			Self::ParamError => -4300,
			Self::BufferTooSmall => -4301,
			Self::MemoryFailure => -4302,
			Self::AlignmentError => -4303,
			Self::DecodeError => -4304,
			Self::Unimplemented => -4305,
			Self::Overflow => -4306,
			Self::RngFailure => -4307,
		}
	}

	/// Maps a status code back to its kind. Success and unknown codes
	/// yield `None`.
	pub const fn from_status(status: i32) -> Option<Self> {
		match status {
			-4300 => Some(Self::ParamError),
			-4301 => Some(Self::BufferTooSmall),
			-4302 => Some(Self::MemoryFailure),
			-4303 => Some(Self::AlignmentError),
			-4304 => Some(Self::DecodeError),
			-4305 => Some(Self::Unimplemented),
			-4306 => Some(Self::Overflow),
			-4307 => Some(Self::RngFailure),
			_ => None,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::ParamError => "parameter error",
			Self::BufferTooSmall => "buffer too small",
			Self::MemoryFailure => "memory failure",
			Self::AlignmentError => "alignment error",
			Self::DecodeError => "decode error",
			Self::Unimplemented => "unimplemented",
			Self::Overflow => "overflow",
			Self::RngFailure => "RNG failure",
		}
	}
}

impl fmt::Display for CryptoErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoError {
	kind: CryptoErrorKind,
	message: Cow<'static, str>,
}

impl CryptoError {
	pub fn new(
		kind: CryptoErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn param(message: impl Into<Cow<'static, str>>) -> Self {
		Self::new(CryptoErrorKind::ParamError, message)
	}

	pub fn kind(&self) -> CryptoErrorKind {
		self.kind
	}

	/// Numeric status code for diagnostics.
	pub fn status(&self) -> i32 {
		self.kind.status()
	}

	pub fn domain(&self) -> &'static str {
		ERROR_DOMAIN
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl fmt::Display for CryptoError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} ({} {}): {}",
			self.kind,
			ERROR_DOMAIN,
			self.status(),
			self.message
		)
	}
}

impl std::error::Error for CryptoError {}

/// Raised when a textual or numeric algorithm selector names nothing in
/// the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unsupported algorithm `{}`", self.0)
	}
}

impl std::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	fn status_codes_map_back_to_their_kind() {
		for kind in CryptoErrorKind::iter() {
			assert_eq!(
				CryptoErrorKind::from_status(kind.status()),
				Some(kind)
			);
		}
	}

	#[test]
	fn success_is_not_an_error_kind() {
		assert_eq!(CryptoErrorKind::from_status(STATUS_SUCCESS), None);
		assert_eq!(CryptoErrorKind::from_status(-1), None);
	}

	#[test]
	fn display_includes_domain_and_status() {
		let err = CryptoError::param("AES key must be 16, 24 or 32 bytes");
		let rendered = err.to_string();
		assert!(rendered.contains("GSLCryptoErrorDomain"));
		assert!(rendered.contains("-4300"));
		assert!(rendered.ends_with("AES key must be 16, 24 or 32 bytes"));
	}
}
