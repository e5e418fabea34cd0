//! Password-based key derivation using Argon2id.
//!
//! Argon2id is a memory-hard KDF that protects against brute-force and
//! GPU-based attacks.  The parameters are pinned to the record format
//! version: the wallet record carries no KDF parameter fields, so every
//! version-1 record is derived with the same settings (64 MB, 3
//! iterations, 4 lanes).  Changing them requires a format version bump.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use zeroize::Zeroize;

use crate::errors::{Result, WalletVaultError};

/// Length of the salt in bytes (512 bits, random per record).
pub const SALT_LEN: usize = 64;

/// Length of the derived key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// Argon2id memory cost in KiB (64 MB).
const MEMORY_KIB: u32 = 65_536;

/// Argon2id iteration count.
const ITERATIONS: u32 = 3;

/// Argon2id parallelism lanes.
const PARALLELISM: u32 = 4;

/// A 32-byte symmetric key that zeroes its memory when dropped.
///
/// Holds the Argon2id output so the key cannot linger in memory after
/// encryption or decryption is done with it.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Access the raw key bytes (e.g. to build an AES cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Derive a 32-byte key from a password and salt using Argon2id.
///
/// Deterministic: the same password + salt always produces the same
/// key.  Any password/salt combination is valid input — empty-password
/// policy belongs to the caller, not here.
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<VaultKey> {
    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(KEY_LEN))
        .map_err(|e| WalletVaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| {
            WalletVaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}"))
        })?;

    Ok(VaultKey { bytes: key })
}

/// Generate a cryptographically random 64-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
