// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: buffer.rs
// Author: gslcrypto maintainers

//! Immutable byte buffer shared by every operation in the crate.

use std::fmt;
use std::ops::Deref;

use super::cipher::{self, CipherAlgorithm, CipherOptions};
use super::digest::{self, DigestAlgorithm};
use super::error::CryptoError;
use super::mac::{self, HmacAlgorithm};

/// An immutable sequence of bytes. Every operation borrows its input and
/// returns a freshly allocated `Buffer`.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Buffer {
	bytes: Box<[u8]>,
}

impl Buffer {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			bytes: bytes.into().into_boxed_slice(),
		}
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	pub fn into_vec(self) -> Vec<u8> {
		self.bytes.into_vec()
	}

	pub fn to_hex(&self) -> String {
		hex::encode(&self.bytes)
	}

	pub fn to_base64(&self) -> String {
		base64::encode(&self.bytes)
	}

	pub fn digest(&self, algorithm: DigestAlgorithm) -> Buffer {
		digest::digest(&self.bytes, algorithm)
	}

	pub fn hmac(&self, algorithm: HmacAlgorithm, key: &[u8]) -> Buffer {
		mac::hmac(&self.bytes, algorithm, key)
	}

	pub fn encrypt(
		&self,
		algorithm: CipherAlgorithm,
		options: CipherOptions,
		key: Option<&[u8]>,
		iv: Option<&[u8]>,
	) -> Result<Buffer, CryptoError> {
		cipher::encrypt(&self.bytes, algorithm, options, key, iv)
	}

	pub fn decrypt(
		&self,
		algorithm: CipherAlgorithm,
		options: CipherOptions,
		key: Option<&[u8]>,
		iv: Option<&[u8]>,
	) -> Result<Buffer, CryptoError> {
		cipher::decrypt(&self.bytes, algorithm, options, key, iv)
	}
}

impl Deref for Buffer {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		&self.bytes
	}
}

impl AsRef<[u8]> for Buffer {
	fn as_ref(&self) -> &[u8] {
		&self.bytes
	}
}

impl From<Vec<u8>> for Buffer {
	fn from(bytes: Vec<u8>) -> Self {
		Self::new(bytes)
	}
}

impl From<Box<[u8]>> for Buffer {
	fn from(bytes: Box<[u8]>) -> Self {
		Self { bytes }
	}
}

impl From<&[u8]> for Buffer {
	fn from(bytes: &[u8]) -> Self {
		Self::new(bytes)
	}
}

impl<const N: usize> From<[u8; N]> for Buffer {
	fn from(bytes: [u8; N]) -> Self {
		Self::new(bytes.to_vec())
	}
}

impl From<&str> for Buffer {
	fn from(text: &str) -> Self {
		Self::new(text.as_bytes())
	}
}

impl From<Buffer> for Vec<u8> {
	fn from(buffer: Buffer) -> Self {
		buffer.into_vec()
	}
}

impl PartialEq<[u8]> for Buffer {
	fn eq(&self, other: &[u8]) -> bool {
		self.as_bytes() == other
	}
}

impl PartialEq<&[u8]> for Buffer {
	fn eq(&self, other: &&[u8]) -> bool {
		self.as_bytes() == *other
	}
}

impl fmt::Debug for Buffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Buffer({})", self.to_hex())
	}
}
