// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: gslcrypto
// Module: weak algorithm registry
// Author: gslcrypto maintainers

//! Registry of broken or deprecated algorithms still offered for
//! interoperability. Informational only: no operation is refused.

use std::sync::atomic::{AtomicBool, Ordering};

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-131Ar2";
const BSI_REFERENCE: &str =
	"https://www.bsi.bund.de/SharedDocs/Downloads/EN/BSI/Publications/TechGuidelines/TG02102/BSI-TR-02102-1.pdf";

const REFERENCES: &[&str] = &[NIST_REFERENCE, BSI_REFERENCE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weakness {
	/// Practical collision or preimage attacks on the hash.
	Collisions,
	/// Key or block size small enough for exhaustive or birthday attacks.
	ShortBlockOrKey,
	/// Statistical biases in the keystream.
	KeystreamBias,
}

#[derive(Debug, Clone)]
pub struct WeakAlgorithmMetadata {
	/// Lowercase identifier as returned by `identifier()` on the selector.
	pub algorithm_id: &'static str,
	pub display_name: &'static str,
	pub weakness: Weakness,
	pub replacement_hint: &'static str,
}

const WEAK_ALGORITHMS: &[WeakAlgorithmMetadata] = &[
	WeakAlgorithmMetadata {
		algorithm_id: "md2",
		display_name: "MD2",
		weakness: Weakness::Collisions,
		replacement_hint: "Use SHA-256 or SHA-512",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "md4",
		display_name: "MD4",
		weakness: Weakness::Collisions,
		replacement_hint: "Use SHA-256 or SHA-512",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "md5",
		display_name: "MD5",
		weakness: Weakness::Collisions,
		replacement_hint: "Use SHA-256 or SHA-512",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "sha1",
		display_name: "SHA-1",
		weakness: Weakness::Collisions,
		replacement_hint: "Use SHA-256 or SHA-512",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "des",
		display_name: "DES",
		weakness: Weakness::ShortBlockOrKey,
		replacement_hint: "Use AES with a 128-bit or longer key",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "3des",
		display_name: "3DES",
		weakness: Weakness::ShortBlockOrKey,
		replacement_hint: "Use AES; 64-bit blocks limit safe data volume",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "cast",
		display_name: "CAST",
		weakness: Weakness::ShortBlockOrKey,
		replacement_hint: "Use AES; 64-bit blocks limit safe data volume",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "rc4",
		display_name: "RC4",
		weakness: Weakness::KeystreamBias,
		replacement_hint: "Use AES in CBC mode with a fresh IV",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "rc2",
		display_name: "RC2",
		weakness: Weakness::ShortBlockOrKey,
		replacement_hint: "Use AES with a 128-bit or longer key",
	},
	WeakAlgorithmMetadata {
		algorithm_id: "blowfish",
		display_name: "Blowfish",
		weakness: Weakness::ShortBlockOrKey,
		replacement_hint: "Use AES; 64-bit blocks limit safe data volume",
	},
];

/// Returns registry metadata for a given algorithm identifier.
pub fn metadata_for(
	algorithm: &str,
) -> Option<&'static WeakAlgorithmMetadata> {
	position(algorithm).map(|index| &WEAK_ALGORITHMS[index])
}

fn position(algorithm: &str) -> Option<usize> {
	WEAK_ALGORITHMS
		.iter()
		.position(|entry| entry.algorithm_id.eq_ignore_ascii_case(algorithm))
}

/// One-line warning for known weak algorithms.
pub fn warning_for(algorithm: &str) -> Option<String> {
	let metadata = metadata_for(algorithm)?;
	let reason = match metadata.weakness {
		Weakness::Collisions => "collisions known",
		Weakness::ShortBlockOrKey => "block or key size too small",
		Weakness::KeystreamBias => "biased keystream",
	};
	Some(format!(
		"{} is a weak algorithm ({}). {}. See: {}",
		metadata.display_name,
		reason,
		metadata.replacement_hint,
		REFERENCES.join(" | ")
	))
}

pub fn all_metadata() -> &'static [WeakAlgorithmMetadata] {
	WEAK_ALGORITHMS
}

#[allow(clippy::declare_interior_mutable_const)]
const UNWARNED: AtomicBool = AtomicBool::new(false);

// One flag per registry entry, in registry order.
static WARNED: [AtomicBool; WEAK_ALGORITHMS.len()] =
	[UNWARNED; WEAK_ALGORITHMS.len()];

/// Logs the warning for `algorithm` at warn level the first time it is
/// used in this process. Returns whether a warning was emitted.
pub fn warn_once(algorithm: &str) -> bool {
	let Some(index) = position(algorithm) else {
		return false;
	};
	if WARNED[index].swap(true, Ordering::Relaxed) {
		return false;
	}
	if let Some(message) = warning_for(algorithm) {
		log::warn!("{}", message);
	}
	true
}

/// Whether `warn_once` has already reported `algorithm`.
pub fn has_warned(algorithm: &str) -> bool {
	position(algorithm)
		.map(|index| WARNED[index].load(Ordering::Relaxed))
		.unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::gsl::cipher::CipherAlgorithm;
	use crate::gsl::digest::DigestAlgorithm;

	#[test]
	fn every_entry_names_a_known_selector() {
		for entry in all_metadata() {
			let digest = entry.algorithm_id.parse::<DigestAlgorithm>();
			let cipher = entry.algorithm_id.parse::<CipherAlgorithm>();
			assert!(
				digest.is_ok() || cipher.is_ok(),
				"{}",
				entry.algorithm_id
			);
		}
	}

	#[test]
	fn sha256_and_aes_are_not_listed() {
		assert!(metadata_for("sha256").is_none());
		assert!(metadata_for("aes").is_none());
	}

	#[test]
	fn warn_once_fires_only_for_first_use() {
		assert!(!warn_once("sha512"));
		warn_once("RC2");
		assert!(!warn_once("rc2"));
	}

	#[test]
	fn concurrent_first_use_warns_exactly_once() {
		let fired: usize = std::thread::scope(|scope| {
			let handles: Vec<_> = (0..8)
				.map(|_| scope.spawn(|| warn_once("blowfish") as usize))
				.collect();
			handles.into_iter().map(|h| h.join().unwrap()).sum()
		});
		assert!(fired <= 1);
		assert!(has_warned("BLOWFISH"));
		assert!(!warn_once("Blowfish"));
	}

	#[test]
	fn lookup_ignores_case() {
		assert_eq!(metadata_for("Sha1").unwrap().algorithm_id, "sha1");
		assert!(!has_warned("sha256"));
	}

	#[test]
	fn warning_mentions_replacement() {
		let warning = warning_for("MD5").unwrap();
		assert!(warning.starts_with("MD5 is a weak algorithm"));
		assert!(warning.contains("Use SHA-256"));
	}
}
