// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// Module: cipher (symmetric encryption)
// Author: gslcrypto maintainers

//! Symmetric encryption and decryption of byte buffers.
//!
//! Block ciphers run in CBC mode unless [`CipherOptions::ECB_MODE`] is
//! set. CBC requires an IV of exactly one block; ECB ignores any IV it is
//! given. Without [`CipherOptions::PKCS7_PADDING`] the input must already
//! be block aligned. RC4 ignores options and IV.

pub mod algorithm;
mod block;
pub mod options;
pub mod request;
mod stream;

pub use algorithm::{CipherAlgorithm, KeySizes};
pub use options::CipherOptions;
pub use request::CipherRequest;

use super::buffer::Buffer;
use super::error::{CryptoError, CryptoErrorKind};
use super::weak;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Encrypt,
	Decrypt,
}

impl Operation {
	fn label(self) -> &'static str {
		match self {
			Self::Encrypt => "encrypt",
			Self::Decrypt => "decrypt",
		}
	}
}

/// Validated parameters handed to the block and stream engines.
pub(crate) struct Params<'a> {
	pub algorithm: CipherAlgorithm,
	pub options: CipherOptions,
	pub key: &'a [u8],
	pub iv: Option<&'a [u8]>,
	pub operation: Operation,
}

pub fn encrypt(
	data: &[u8],
	algorithm: CipherAlgorithm,
	options: CipherOptions,
	key: Option<&[u8]>,
	iv: Option<&[u8]>,
) -> Result<Buffer, CryptoError> {
	transform(data, algorithm, options, key, iv, Operation::Encrypt)
}

pub fn decrypt(
	data: &[u8],
	algorithm: CipherAlgorithm,
	options: CipherOptions,
	key: Option<&[u8]>,
	iv: Option<&[u8]>,
) -> Result<Buffer, CryptoError> {
	transform(data, algorithm, options, key, iv, Operation::Decrypt)
}

fn transform(
	data: &[u8],
	algorithm: CipherAlgorithm,
	options: CipherOptions,
	key: Option<&[u8]>,
	iv: Option<&[u8]>,
	operation: Operation,
) -> Result<Buffer, CryptoError> {
	let params = Params {
		algorithm,
		options,
		key: key.unwrap_or_default(),
		iv,
		operation,
	};
	let result = params
		.algorithm
		.validate_key(params.key)
		.and_then(|()| {
			if algorithm.is_stream() {
				stream::run(data, &params)
			} else {
				block::run(data, &params)
			}
		});
	match result {
		Ok(output) => {
			weak::warn_once(algorithm.identifier());
			log::trace!(
				"{} {} ({:?}): {} -> {} bytes",
				algorithm,
				operation.label(),
				options,
				data.len(),
				output.len()
			);
			Ok(Buffer::from(output))
		}
		Err(err) => {
			log::debug!(
				"{} {} rejected: {} ({})",
				algorithm,
				operation.label(),
				err.kind(),
				err.status()
			);
			Err(err)
		}
	}
}

/// Zero-filled output buffer, reporting allocation failure instead of
/// aborting.
pub(crate) fn allocate(len: usize) -> Result<Vec<u8>, CryptoError> {
	let mut out = Vec::new();
	out.try_reserve_exact(len).map_err(|_| {
		CryptoError::new(
			CryptoErrorKind::MemoryFailure,
			format!("unable to allocate {} bytes of output", len),
		)
	})?;
	out.resize(len, 0);
	Ok(out)
}
