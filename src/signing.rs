//! Default signer implementation.
//!
//! Real deployments plug a credentialed signer into the [`Signer`] seam;
//! this module provides a batteries-included digest signer for tests,
//! demos, and groups that delegate authenticity to the transport.

use sha2::{Digest, Sha256};

use crate::core::Signer;

/// Signs a response body with its SHA-256 digest.
///
/// The "signature" carries integrity only, not authenticity.
#[derive(Debug, Clone, Default)]
pub struct DigestSigner;

impl DigestSigner {
    /// Create a digest signer.
    pub fn new() -> Self {
        Self
    }
}

impl Signer for DigestSigner {
    fn sign(&self, body: &[u8]) -> Vec<u8> {
        Sha256::digest(body).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_digest_sized() {
        let signer = DigestSigner::new();
        assert_eq!(signer.sign(b"payload").len(), 32);
    }

    #[test]
    fn test_signature_is_deterministic() {
        let signer = DigestSigner::new();
        assert_eq!(signer.sign(b"payload"), signer.sign(b"payload"));
        assert_ne!(signer.sign(b"payload"), signer.sign(b"other"));
    }
}
