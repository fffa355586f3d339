// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: request.rs
// Author: gslcrypto maintainers

//! Reusable cipher parameters for applying one configuration to many
//! buffers.

use std::fmt;

use zeroize::Zeroizing;

use super::{decrypt, encrypt, CipherAlgorithm, CipherOptions};
use crate::gsl::buffer::Buffer;
use crate::gsl::error::CryptoError;

#[derive(Clone)]
pub struct CipherRequest {
	algorithm: CipherAlgorithm,
	options: CipherOptions,
	key: Option<Zeroizing<Vec<u8>>>,
	iv: Option<Vec<u8>>,
}

impl CipherRequest {
	pub fn new(algorithm: CipherAlgorithm) -> Self {
		Self {
			algorithm,
			options: CipherOptions::empty(),
			key: None,
			iv: None,
		}
	}

	pub fn with_options(mut self, options: CipherOptions) -> Self {
		self.options = options;
		self
	}

	pub fn padded(mut self) -> Self {
		self.options.insert(CipherOptions::PKCS7_PADDING);
		self
	}

	pub fn ecb(mut self) -> Self {
		self.options.insert(CipherOptions::ECB_MODE);
		self
	}

	pub fn with_key(mut self, key: &[u8]) -> Self {
		self.key = Some(Zeroizing::new(key.to_vec()));
		self
	}

	pub fn with_iv(mut self, iv: &[u8]) -> Self {
		self.iv = Some(iv.to_vec());
		self
	}

	pub fn algorithm(&self) -> CipherAlgorithm {
		self.algorithm
	}

	pub fn options(&self) -> CipherOptions {
		self.options
	}

	pub fn encrypt(&self, data: &[u8]) -> Result<Buffer, CryptoError> {
		encrypt(
			data,
			self.algorithm,
			self.options,
			self.key.as_deref().map(Vec::as_slice),
			self.iv.as_deref(),
		)
	}

	pub fn decrypt(&self, data: &[u8]) -> Result<Buffer, CryptoError> {
		decrypt(
			data,
			self.algorithm,
			self.options,
			self.key.as_deref().map(Vec::as_slice),
			self.iv.as_deref(),
		)
	}
}

impl fmt::Debug for CipherRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CipherRequest")
			.field("algorithm", &self.algorithm)
			.field("options", &self.options)
			.field("key_len", &self.key.as_ref().map(|key| key.len()))
			.field("iv", &self.iv.as_deref().map(hex::encode))
			.finish()
	}
}
