//! Ed25519 wallet keypair generation and reconstruction.
//!
//! The vault stores a keypair as its 64-byte encoding (32-byte seed
//! followed by the 32-byte public key).  The public identifier is the
//! lowercase hex encoding of the public half and is always derived from
//! the secret bytes, never taken on trust from stored metadata.

use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;

use crate::errors::{Result, WalletVaultError};

/// Length of the 64-byte keypair encoding (seed + public key).
pub const KEYPAIR_LEN: usize = KEYPAIR_LENGTH;

/// Length of the seed half of the encoding.
pub const SEED_LEN: usize = SECRET_KEY_LENGTH;

/// An Ed25519 signing wallet keypair.
pub struct WalletKeypair {
    signing_key: SigningKey,
}

impl WalletKeypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Build a keypair deterministically from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstruct a keypair from its 64-byte encoding.
    ///
    /// The encoding embeds the public key, so this also verifies that
    /// the public half actually belongs to the seed — inconsistent
    /// bytes are rejected.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        let fixed: &[u8; KEYPAIR_LEN] = bytes.try_into().map_err(|_| {
            WalletVaultError::InvalidKeypair(format!(
                "expected {KEYPAIR_LEN} secret bytes, got {}",
                bytes.len()
            ))
        })?;

        let signing_key = SigningKey::from_keypair_bytes(fixed).map_err(|e| {
            WalletVaultError::InvalidKeypair(format!("inconsistent keypair bytes: {e}"))
        })?;

        Ok(Self { signing_key })
    }

    /// The 64-byte keypair encoding (for vault storage).
    pub fn to_secret_bytes(&self) -> [u8; KEYPAIR_LEN] {
        self.signing_key.to_keypair_bytes()
    }

    /// The public half of the keypair.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// The hex-encoded public key, used as the wallet's public identifier.
    pub fn public_hex(&self) -> String {
        hex::encode(self.verifying_key().to_bytes())
    }
}
