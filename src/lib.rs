// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// File: lib.rs
// Author: gslcrypto maintainers

//! Digests, HMACs and symmetric ciphers over immutable byte buffers.
//!
//! Every operation is a stateless call that borrows its input and returns
//! a new [`Buffer`]. Digests and HMACs cannot fail; cipher operations
//! return a [`CryptoError`] carrying a [`CryptoErrorKind`] and its numeric
//! status code.

pub mod gsl {
	pub mod buffer;
	pub mod cipher;
	pub mod digest;
	pub mod error;
	pub mod mac;
	pub mod weak;
}

pub use gsl::buffer::Buffer;
pub use gsl::cipher::{
	decrypt, encrypt, CipherAlgorithm, CipherOptions, CipherRequest,
};
pub use gsl::digest::{digest, DigestAlgorithm};
pub use gsl::error::{
	CryptoError, CryptoErrorKind, UnknownAlgorithm, ERROR_DOMAIN,
};
pub use gsl::mac::{hmac, verify_hmac, HmacAlgorithm};
