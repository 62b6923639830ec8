//! Cryptographic primitives for credential hashing
//!
//! This module provides the security-critical pieces of the credential
//! pipeline: salt generation, the PBKDF2 derivation shared by signup and
//! login, and constant-time hash comparison.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Salt length in bytes, fixed at credential creation
pub const SALT_LENGTH: usize = 16;

/// PBKDF2-HMAC-SHA256 parameters.
///
/// One value of this type is shared by the signup and login derivations;
/// the two paths must never diverge on iteration count or output length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Iteration count
    pub iterations: u32,
    /// Derived hash length in bytes
    pub output_length: usize,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: 310_000,
            output_length: 16,
        }
    }
}

/// Generate a fresh random salt from the OS CSPRNG.
///
/// Generated once per credential at signup and never regenerated for the
/// life of the account.
pub fn generate_salt() -> [u8; SALT_LENGTH] {
    let mut salt = [0u8; SALT_LENGTH];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Derive a password hash with PBKDF2-HMAC-SHA256.
///
/// Deterministic for a given `(password, salt, params)` triple; the
/// deliberately high default iteration count makes brute force expensive.
pub fn derive_hash(password: &str, salt: &[u8], params: KdfParams) -> Vec<u8> {
    let mut output = vec![0u8; params.output_length];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, &mut output);
    output
}

/// Compare a candidate hash against the stored hash in constant time.
///
/// # Security
/// - Comparison time does not depend on where the first differing byte is
/// - Returns `false` for differing lengths (length is not secret)
#[inline]
pub fn hashes_match(candidate: &[u8], stored: &[u8]) -> bool {
    candidate.ct_eq(stored).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> KdfParams {
        KdfParams {
            iterations: 1_000,
            output_length: 16,
        }
    }

    #[test]
    fn test_derive_hash_deterministic() {
        let salt = [7u8; SALT_LENGTH];
        let a = derive_hash("Secret123", &salt, fast_params());
        let b = derive_hash("Secret123", &salt, fast_params());
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_hash_output_length() {
        let salt = [7u8; SALT_LENGTH];
        let hash = derive_hash("Secret123", &salt, fast_params());
        assert_eq!(hash.len(), 16);
    }

    #[test]
    fn test_different_passwords_diverge() {
        let salt = [7u8; SALT_LENGTH];
        let a = derive_hash("Secret123", &salt, fast_params());
        let b = derive_hash("Secret124", &salt, fast_params());
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_salts_diverge() {
        let a = derive_hash("Secret123", &[1u8; SALT_LENGTH], fast_params());
        let b = derive_hash("Secret123", &[2u8; SALT_LENGTH], fast_params());
        assert_ne!(a, b);
    }

    #[test]
    fn test_known_answer_vector() {
        // PBKDF2-HMAC-SHA256("password", "salt", 1 iteration, 32 bytes)
        let params = KdfParams {
            iterations: 1,
            output_length: 32,
        };
        let hash = derive_hash("password", b"salt", params);
        assert_eq!(
            hex::encode(hash),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn test_generate_salt_is_random() {
        let a = generate_salt();
        let b = generate_salt();
        assert_eq!(a.len(), SALT_LENGTH);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hashes_match_equal() {
        assert!(hashes_match(b"0123456789abcdef", b"0123456789abcdef"));
    }

    #[test]
    fn test_hashes_match_different() {
        assert!(!hashes_match(b"0123456789abcdef", b"0123456789abcdeX"));
    }

    #[test]
    fn test_hashes_match_different_lengths() {
        assert!(!hashes_match(b"0123", b"0123456789abcdef"));
    }

    #[test]
    fn test_hashes_match_empty() {
        assert!(hashes_match(b"", b""));
    }
}
