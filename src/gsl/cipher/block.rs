// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: block.rs
// Author: gslcrypto maintainers

//! ECB and CBC processing for the block ciphers, with optional PKCS7
//! padding.

use aes::{Aes128, Aes192, Aes256};
use blowfish::Blowfish;
use cast5::Cast5;
use cipher::block_padding::{NoPadding, Pkcs7};
use cipher::crypto_common::InnerInit;
use cipher::{
	BlockCipher, BlockDecryptMut, BlockEncryptMut, InnerIvInit, KeyInit,
};
use des::{Des, TdesEde3};
use rc2::Rc2;
use zeroize::Zeroizing;

use super::{allocate, CipherAlgorithm, Operation, Params};
use crate::gsl::error::{CryptoError, CryptoErrorKind};

pub(super) fn run(
	data: &[u8],
	params: &Params<'_>,
) -> Result<Vec<u8>, CryptoError> {
	let key = params.key;
	match params.algorithm {
		CipherAlgorithm::Aes => match key.len() {
			16 => apply(keyed::<Aes128>(params)?, data, params),
			24 => apply(keyed::<Aes192>(params)?, data, params),
			32 => apply(keyed::<Aes256>(params)?, data, params),
			other => Err(CryptoError::param(format!(
				"Invalid AES key length: {} bytes",
				other
			))),
		},
		CipherAlgorithm::Des => {
			apply(keyed::<Des>(params)?, data, params)
		}
		CipherAlgorithm::TripleDes => {
			apply(keyed::<TdesEde3>(params)?, data, params)
		}
		CipherAlgorithm::Cast => {
			apply(keyed::<Cast5>(params)?, data, params)
		}
		CipherAlgorithm::Rc2 => {
			// Effective key bits follow the supplied key length.
			let cipher = Rc2::new_with_eff_key_len(key, key.len() * 8);
			apply(cipher, data, params)
		}
		CipherAlgorithm::Blowfish => {
			apply(keyed::<Blowfish>(params)?, data, params)
		}
		CipherAlgorithm::Rc4 => Err(CryptoError::new(
			CryptoErrorKind::Unimplemented,
			"RC4 is a stream cipher and has no block mode",
		)),
	}
}

fn keyed<C: KeyInit>(params: &Params<'_>) -> Result<C, CryptoError> {
	C::new_from_slice(params.key).map_err(|_| {
		CryptoError::param(format!(
			"{} rejected a {}-byte key",
			params.algorithm,
			params.key.len()
		))
	})
}

fn apply<C>(
	cipher: C,
	data: &[u8],
	params: &Params<'_>,
) -> Result<Vec<u8>, CryptoError>
where
	C: BlockCipher + BlockEncryptMut + BlockDecryptMut,
{
	let ecb = params.options.is_ecb();
	match (params.operation, ecb) {
		(Operation::Encrypt, true) => {
			seal(ecb::Encryptor::<C>::inner_init(cipher), data, params)
		}
		(Operation::Decrypt, true) => {
			open(ecb::Decryptor::<C>::inner_init(cipher), data, params)
		}
		(Operation::Encrypt, false) => {
			let iv = chaining_iv(params, C::block_size())?;
			let mode = cbc::Encryptor::<C>::inner_iv_slice_init(cipher, iv)
				.map_err(|_| invalid_iv(params, iv.len()))?;
			seal(mode, data, params)
		}
		(Operation::Decrypt, false) => {
			let iv = chaining_iv(params, C::block_size())?;
			let mode = cbc::Decryptor::<C>::inner_iv_slice_init(cipher, iv)
				.map_err(|_| invalid_iv(params, iv.len()))?;
			open(mode, data, params)
		}
	}
}

fn chaining_iv<'a>(
	params: &Params<'a>,
	block_size: usize,
) -> Result<&'a [u8], CryptoError> {
	match params.iv {
		None => Err(CryptoError::param(format!(
			"{} in CBC mode requires a {}-byte initialization vector",
			params.algorithm, block_size
		))),
		Some(iv) if iv.len() != block_size => {
			Err(invalid_iv(params, iv.len()))
		}
		Some(iv) => Ok(iv),
	}
}

fn invalid_iv(params: &Params<'_>, len: usize) -> CryptoError {
	CryptoError::param(format!(
		"Invalid {} initialization vector length: expected {} bytes but received {}",
		params.algorithm,
		params.algorithm.block_size(),
		len
	))
}

fn seal<M: BlockEncryptMut>(
	mode: M,
	data: &[u8],
	params: &Params<'_>,
) -> Result<Vec<u8>, CryptoError> {
	let block_size = M::block_size();
	let padded = params.options.is_padded();
	if !padded && data.len() % block_size != 0 {
		return Err(CryptoError::new(
			CryptoErrorKind::AlignmentError,
			format!(
				"{} plaintext of {} bytes is not a multiple of the {}-byte block size",
				params.algorithm,
				data.len(),
				block_size
			),
		));
	}
	let out_len = if padded {
		(data.len() / block_size)
			.checked_add(1)
			.and_then(|blocks| blocks.checked_mul(block_size))
	} else {
		Some(data.len())
	}
	.ok_or_else(|| {
		CryptoError::new(
			CryptoErrorKind::Overflow,
			format!("{} bytes cannot be padded", data.len()),
		)
	})?;

	let mut out = allocate(out_len)?;
	let written = if padded {
		mode.encrypt_padded_b2b_mut::<Pkcs7>(data, &mut out)
	} else {
		mode.encrypt_padded_b2b_mut::<NoPadding>(data, &mut out)
	}
	.map_err(|_| {
		CryptoError::new(
			CryptoErrorKind::BufferTooSmall,
			format!(
				"{} bytes of output cannot hold {} bytes of input",
				out_len,
				data.len()
			),
		)
	})?
	.len();
	out.truncate(written);
	Ok(out)
}

fn open<M: BlockDecryptMut>(
	mode: M,
	data: &[u8],
	params: &Params<'_>,
) -> Result<Vec<u8>, CryptoError> {
	let block_size = M::block_size();
	let padded = params.options.is_padded();
	if data.len() % block_size != 0 {
		let kind = if padded {
			CryptoErrorKind::DecodeError
		} else {
			CryptoErrorKind::AlignmentError
		};
		return Err(CryptoError::new(
			kind,
			format!(
				"{} ciphertext of {} bytes is not a multiple of the {}-byte block size",
				params.algorithm,
				data.len(),
				block_size
			),
		));
	}
	if padded && data.is_empty() {
		return Err(CryptoError::new(
			CryptoErrorKind::DecodeError,
			"padded ciphertext must contain at least one block",
		));
	}

	// Partially decrypted plaintext is wiped if unpadding fails.
	let mut out = Zeroizing::new(allocate(data.len())?);
	let written = if padded {
		mode.decrypt_padded_b2b_mut::<Pkcs7>(data, &mut out[..])
			.map_err(|_| {
				CryptoError::new(
					CryptoErrorKind::DecodeError,
					format!("{} ciphertext has invalid PKCS7 padding", params.algorithm),
				)
			})?
			.len()
	} else {
		mode.decrypt_padded_b2b_mut::<NoPadding>(data, &mut out[..])
			.map_err(|_| {
				CryptoError::new(
					CryptoErrorKind::BufferTooSmall,
					format!(
						"{} bytes of output cannot hold the plaintext",
						data.len()
					),
				)
			})?
			.len()
	};
	out.truncate(written);
	Ok(std::mem::take(&mut *out))
}
