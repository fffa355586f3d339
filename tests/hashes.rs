// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto

use gslcrypto::gsl::digest::{md2, md4, md5, sha1, sha224, sha256, sha384, sha512};
use gslcrypto::{digest, Buffer, DigestAlgorithm};
use hex_literal::hex;

const PHRASE: &str = "Jeder wackere Bayer vertilgt bequem zwo Pfund Kalbshaxen.";

#[test]
fn empty_input_vectors() {
	assert_eq!(md2(b"").as_bytes(), hex!("8350e5a3e24c153df2275c9f80692773"));
	assert_eq!(md4(b"").as_bytes(), hex!("31d6cfe0d16ae931b73c59d7e0c089c0"));
	assert_eq!(md5(b"").as_bytes(), hex!("d41d8cd98f00b204e9800998ecf8427e"));
	assert_eq!(
		sha1(b"").as_bytes(),
		hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")
	);
	assert_eq!(
		sha224(b"").as_bytes(),
		hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f")
	);
	assert_eq!(
		sha256(b"").as_bytes(),
		hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
	);
	assert_eq!(sha384(b"").as_bytes(), hex!("38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"));
	assert_eq!(sha512(b"").as_bytes(), hex!("cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"));
}

#[test]
fn abc_vectors() {
	let abc = Buffer::from("abc");
	assert_eq!(
		abc.digest(DigestAlgorithm::Md2).to_hex(),
		"da853b0d3f88d99b30283a69e6ded6bb"
	);
	assert_eq!(
		abc.digest(DigestAlgorithm::Md4).to_hex(),
		"a448017aaf21d8525fc10ae87aa6729d"
	);
	assert_eq!(
		abc.digest(DigestAlgorithm::Md5).to_hex(),
		"900150983cd24fb0d6963f7d28e17f72"
	);
	assert_eq!(
		abc.digest(DigestAlgorithm::Sha1).to_hex(),
		"a9993e364706816aba3e25717850c26c9cd0d89d"
	);
	assert_eq!(
		abc.digest(DigestAlgorithm::Sha224).to_hex(),
		"23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
	);
	assert_eq!(
		abc.digest(DigestAlgorithm::Sha256).to_hex(),
		"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
	);
	assert_eq!(abc.digest(DigestAlgorithm::Sha384).to_hex(), "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7");
	assert_eq!(abc.digest(DigestAlgorithm::Sha512).to_hex(), "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f");
}

#[test]
fn lib_sha1_hash() {
	let result = digest(PHRASE.as_bytes(), DigestAlgorithm::Sha1);
	assert_eq!(
		result.as_bytes(),
		hex!("1C90817FE5067AB226A331D4E7454858F6DD966A")
	);
}

#[test]
fn every_algorithm_is_deterministic_with_fixed_length() {
	for alg in DigestAlgorithm::all() {
		let first = digest(PHRASE.as_bytes(), alg);
		let second = digest(PHRASE.as_bytes(), alg);
		assert_eq!(first, second, "{}", alg);
		assert_eq!(first.len(), alg.output_size(), "{}", alg);
		assert_eq!(digest(b"", alg).len(), alg.output_size(), "{}", alg);
	}
}

#[test]
fn distinct_inputs_give_distinct_digests() {
	for alg in DigestAlgorithm::all() {
		assert_ne!(digest(b"alpha", alg), digest(b"beta", alg), "{}", alg);
	}
}
