//! Content-addressed identifier derivation.
//!
//! A link's identifier is a digest of its destination, so the same destination
//! always maps to the same storage unit and no sequence counter is needed.

use sha2::{Digest, Sha256};

/// Derives a stable identifier from a destination string.
///
/// Implementations must be pure and deterministic across processes, and must
/// produce lowercase hexadecimal output so identifiers are valid path
/// components and URL segments.
pub trait IdentifierDeriver: Send + Sync {
    fn derive(&self, destination: &str) -> String;
}

/// SHA-256 over the raw destination bytes, hex encoded (64 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Deriver;

impl IdentifierDeriver for Sha256Deriver {
    fn derive(&self, destination: &str) -> String {
        hex::encode(Sha256::digest(destination.as_bytes()))
    }
}

/// Derives an identifier with the default [`Sha256Deriver`].
///
/// The destination is hashed as-is; callers trim whitespace beforehand.
///
/// # Examples
///
/// ```ignore
/// let id = derive_identifier("https://example.com/a");
/// assert_eq!(id.len(), 64);
/// ```
pub fn derive_identifier(destination: &str) -> String {
    Sha256Deriver.derive(destination)
}

/// Longest identifier any deriver may produce.
///
/// Keeps `<identifier>.linkanalytics` well under common file name limits.
pub const MAX_IDENTIFIER_LEN: usize = 128;

/// Returns `true` if `identifier` could have been produced by a deriver.
///
/// Only lowercase hex of 1 to [`MAX_IDENTIFIER_LEN`] characters is accepted,
/// which also keeps identifiers from escaping the storage directory when used
/// as file names.
pub fn is_well_formed(identifier: &str) -> bool {
    (1..=MAX_IDENTIFIER_LEN).contains(&identifier.len())
        && identifier
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derive_known_vector() {
        assert_eq!(
            derive_identifier(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            derive_identifier("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = derive_identifier("https://example.com/a");
        let b = derive_identifier(&String::from("https://example.com/a"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_is_64_lowercase_hex() {
        let id = derive_identifier("https://example.com/a");
        assert_eq!(id.len(), 64);
        assert!(is_well_formed(&id));
        assert!(!id.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_derive_is_sensitive_to_whitespace() {
        assert_ne!(
            derive_identifier("https://example.com"),
            derive_identifier("https://example.com ")
        );
    }

    #[test]
    fn test_derive_corpus_has_no_duplicates() {
        let mut seen = HashSet::new();

        for i in 0..10_000 {
            let id = derive_identifier(&format!("https://example.com/page/{i}"));
            assert!(seen.insert(id), "duplicate identifier for page {i}");
        }
    }

    #[test]
    fn test_well_formed_rejects_unsafe_input() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("../etc/passwd"));
        assert!(!is_well_formed("ABCDEF"));
        assert!(!is_well_formed("abc/def"));
        assert!(!is_well_formed("xyz"));
        assert!(is_well_formed("0123456789abcdef"));
    }

    #[test]
    fn test_well_formed_bounds_length() {
        assert!(is_well_formed(&"a".repeat(MAX_IDENTIFIER_LEN)));
        assert!(!is_well_formed(&"a".repeat(MAX_IDENTIFIER_LEN + 1)));
        assert!(!is_well_formed(&"a".repeat(300)));
    }
}
