// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto

//! Property-based tests for the cipher, digest and HMAC entry points.

use gslcrypto::{
	decrypt, digest, encrypt, hmac, CipherAlgorithm, CipherOptions,
	CryptoErrorKind, DigestAlgorithm, HmacAlgorithm,
};
use proptest::prelude::*;

fn block_cipher_strategy() -> impl Strategy<Value = CipherAlgorithm> {
	prop_oneof![
		Just(CipherAlgorithm::Aes),
		Just(CipherAlgorithm::Des),
		Just(CipherAlgorithm::TripleDes),
		Just(CipherAlgorithm::Cast),
		Just(CipherAlgorithm::Rc2),
		Just(CipherAlgorithm::Blowfish),
	]
}

fn digest_strategy() -> impl Strategy<Value = DigestAlgorithm> {
	prop_oneof![
		Just(DigestAlgorithm::Md2),
		Just(DigestAlgorithm::Md4),
		Just(DigestAlgorithm::Md5),
		Just(DigestAlgorithm::Sha1),
		Just(DigestAlgorithm::Sha224),
		Just(DigestAlgorithm::Sha256),
		Just(DigestAlgorithm::Sha384),
		Just(DigestAlgorithm::Sha512),
	]
}

fn key_len(alg: CipherAlgorithm) -> usize {
	match alg {
		CipherAlgorithm::Des => 8,
		CipherAlgorithm::TripleDes => 24,
		_ => 16,
	}
}

proptest! {
	/// AES-CBC with PKCS7 padding recovers arbitrary plaintext.
	#[test]
	fn aes_cbc_pkcs7_round_trip(
		plaintext in proptest::collection::vec(any::<u8>(), 0..512),
		key in proptest::collection::vec(any::<u8>(), 32),
		iv in proptest::collection::vec(any::<u8>(), 16),
	) {
		let options = CipherOptions::PKCS7_PADDING;
		let sealed = encrypt(&plaintext, CipherAlgorithm::Aes, options, Some(&key), Some(&iv)).unwrap();
		prop_assert_eq!(sealed.len() % 16, 0);
		prop_assert!(sealed.len() > plaintext.len());
		let opened = decrypt(&sealed, CipherAlgorithm::Aes, options, Some(&key), Some(&iv)).unwrap();
		prop_assert_eq!(opened.as_bytes(), &plaintext[..]);
	}

	/// Every block cipher round-trips padded input in both modes.
	#[test]
	fn block_ciphers_round_trip(
		alg in block_cipher_strategy(),
		ecb in any::<bool>(),
		plaintext in proptest::collection::vec(any::<u8>(), 0..128),
		seed in any::<u8>(),
	) {
		let mut options = CipherOptions::PKCS7_PADDING;
		if ecb {
			options |= CipherOptions::ECB_MODE;
		}
		let key = vec![seed; key_len(alg)];
		let iv = vec![seed.wrapping_add(1); alg.block_size()];
		let sealed = encrypt(&plaintext, alg, options, Some(&key), Some(&iv)).unwrap();
		let opened = decrypt(&sealed, alg, options, Some(&key), Some(&iv)).unwrap();
		prop_assert_eq!(opened.into_vec(), plaintext);
	}

	/// Unpadded encryption fails exactly when the input is unaligned.
	#[test]
	fn unpadded_alignment_is_enforced(
		alg in block_cipher_strategy(),
		len in 0usize..80,
	) {
		let key = vec![0x5a; key_len(alg)];
		let result = encrypt(&vec![0u8; len], alg, CipherOptions::ECB_MODE, Some(&key), None);
		if len % alg.block_size() == 0 {
			prop_assert_eq!(result.unwrap().len(), len);
		} else {
			prop_assert_eq!(result.unwrap_err().kind(), CryptoErrorKind::AlignmentError);
		}
	}

	/// RC4 output always matches input length and decrypts symmetrically.
	#[test]
	fn rc4_is_length_preserving(
		plaintext in proptest::collection::vec(any::<u8>(), 0..256),
		key in proptest::collection::vec(any::<u8>(), 1..600),
	) {
		let result = encrypt(&plaintext, CipherAlgorithm::Rc4, CipherOptions::empty(), Some(&key), None);
		if key.len() > 512 {
			prop_assert_eq!(result.unwrap_err().kind(), CryptoErrorKind::ParamError);
		} else {
			let sealed = result.unwrap();
			prop_assert_eq!(sealed.len(), plaintext.len());
			let opened = decrypt(&sealed, CipherAlgorithm::Rc4, CipherOptions::empty(), Some(&key), None).unwrap();
			prop_assert_eq!(opened.into_vec(), plaintext);
		}
	}

	/// Digests are deterministic and fixed-length.
	#[test]
	fn digest_is_deterministic(
		alg in digest_strategy(),
		data in proptest::collection::vec(any::<u8>(), 0..256),
	) {
		let first = digest(&data, alg);
		let second = digest(&data, alg);
		prop_assert_eq!(first.len(), alg.output_size());
		prop_assert_eq!(first, second);
	}

	/// Changing one key byte changes the HMAC tag.
	#[test]
	fn hmac_depends_on_every_key_byte(
		key in proptest::collection::vec(any::<u8>(), 1..100),
		index in any::<prop::sample::Index>(),
		data in proptest::collection::vec(any::<u8>(), 0..64),
	) {
		let mut altered = key.clone();
		let position = index.index(altered.len());
		altered[position] ^= 0x01;
		let original = hmac(&data, HmacAlgorithm::Sha256, &key);
		let changed = hmac(&data, HmacAlgorithm::Sha256, &altered);
		prop_assert_ne!(original, changed);
	}
}
