//! Disposable signers for new nft mint accounts.

use ed25519_dalek::{Signer, SigningKey};
use rand_core::OsRng;

/// A fresh keypair generated for exactly one submission and discarded after.
pub struct EphemeralSigner {
    signing_key: SigningKey,
}

impl EphemeralSigner {
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Base58 address of the signer's public key.
    pub fn address(&self) -> String {
        bs58::encode(self.signing_key.verifying_key().as_bytes()).into_string()
    }

    /// Base58 signature over a serialized submission.
    pub fn sign(&self, message: &[u8]) -> String {
        bs58::encode(self.signing_key.sign(message).to_bytes()).into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_signers_are_distinct() {
        let first = EphemeralSigner::generate();
        let second = EphemeralSigner::generate();
        assert_ne!(first.address(), second.address());
    }

    #[test]
    fn test_signature_is_deterministic_per_signer() {
        let signer = EphemeralSigner::generate();
        let message = b"submission";
        assert_eq!(signer.sign(message), signer.sign(message));
        assert!(!signer.sign(message).is_empty());
    }
}
