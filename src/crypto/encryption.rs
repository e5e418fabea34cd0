//! AES-256-GCM authenticated encryption with a detached tag.
//!
//! The wallet record stores ciphertext, nonce, and authentication tag
//! as separate fields, so unlike the usual nonce-prepended blob layout
//! both functions here take the nonce explicitly and the tag travels on
//! its own.  The associated data parameter is authenticated but not
//! encrypted — the vault passes the record's format version through it
//! so a version swap breaks the tag.

use aes_gcm::aead::{Aead, KeyInit, OsRng, Payload};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{Result, WalletVaultError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the AES-256-GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Generate a random 12-byte nonce.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    Aes256Gcm::generate_nonce(&mut OsRng).into()
}

/// Encrypt `plaintext` with a 32-byte `key` under the given nonce.
///
/// Returns the ciphertext and the detached 16-byte authentication tag.
/// The tag covers both the ciphertext and `aad`.
pub fn encrypt(
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| WalletVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // The aead API appends the tag to the ciphertext; split it back out.
    let mut combined = cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| WalletVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let tag_start = combined.len() - TAG_LEN;
    let tag_bytes = combined.split_off(tag_start);
    let tag: [u8; TAG_LEN] = tag_bytes
        .try_into()
        .map_err(|_| WalletVaultError::EncryptionFailed("short authentication tag".into()))?;

    Ok((combined, tag))
}

/// Decrypt and verify data produced by `encrypt`.
///
/// Fails closed: wrong key, wrong nonce, corrupted ciphertext, corrupted
/// tag, or mismatched `aad` all yield `AuthenticationFailed` and no
/// plaintext.
pub fn decrypt(
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
    aad: &[u8],
) -> Result<Vec<u8>> {
    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|_| WalletVaultError::AuthenticationFailed)?;

    // Re-join ciphertext and tag into the combined layout the aead API expects.
    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    let plaintext = cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: &combined,
                aad,
            },
        )
        .map_err(|_| WalletVaultError::AuthenticationFailed)?;

    Ok(plaintext)
}
