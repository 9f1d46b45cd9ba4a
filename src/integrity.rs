/*!
 * Source integrity gate.
 *
 * The Quran corpus is only accepted when its raw bytes hash to the digest
 * of the approved Tanzil release. A mismatch is never repaired: the caller
 * must abort before anything is written.
 */

use log::debug;
use sha2::{Digest, Sha256};

use crate::errors::IntegrityError;

/// SHA-256 of the approved Tanzil Quran XML release
pub const TANZIL_QURAN_SOURCE_HASH: &str =
    "a22c0d515c37a5667160765c2d1d171fa4b9d7d8778e47161bb0fe894cf61c1d";

/// Lowercase hex SHA-256 of the exact byte sequence
pub fn digest_hex(raw: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw);
    format!("{:x}", hasher.finalize())
}

/// Check raw bytes against the expected digest.
///
/// The expected digest is compared in its canonical form, lowercase with
/// surrounding whitespace trimmed. Published checksums and hand-edited
/// config files often carry uppercase hex or a trailing newline, and
/// `Config::validate` has already rejected anything that is not 64 hex
/// digits. The hashed bytes themselves are never normalized.
pub fn validate(raw: &[u8], expected_digest: &str) -> bool {
    digest_hex(raw) == expected_digest.trim().to_ascii_lowercase()
}

/// Like [`validate`], but returns the mismatch as an error carrying both digests.
/// The reported `expected` value is the canonical lowercase form.
pub fn ensure_valid(raw: &[u8], expected_digest: &str) -> Result<(), IntegrityError> {
    let actual = digest_hex(raw);
    let expected = expected_digest.trim().to_ascii_lowercase();

    if actual != expected {
        return Err(IntegrityError::DigestMismatch { expected, actual });
    }

    debug!("Source digest accepted: {}", actual);
    Ok(())
}

/// Whether a string looks like a SHA-256 hex digest
pub fn is_digest_format(value: &str) -> bool {
    value.len() == 64 && value.chars().all(|c| c.is_ascii_hexdigit())
}
