//! Encrypt/decrypt operations tying the crypto layer to the record
//! format, plus file-level create/load wrappers.
//!
//! Every function here is stateless — the only state a caller ever
//! holds is the decrypted `WalletKeypair` it chooses to keep, and
//! ownership of that is entirely the caller's.

use std::path::Path;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{decrypt, derive_key, encrypt, generate_nonce, generate_salt, NONCE_LEN, TAG_LEN};
use crate::errors::{Result, WalletVaultError};
use crate::keypair::WalletKeypair;

use super::record::{
    base64_decode, base64_encode, read_record, write_record, EncryptedRecord, CURRENT_VERSION,
};

/// The serialized plaintext inside the ciphertext.
///
/// Carries the public identifier alongside the secret bytes so the
/// decrypt path can cross-check the identifier it derives.  Zeroized on
/// drop — this struct holds the secret in the clear.
#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
struct PayloadEnvelope {
    #[serde(rename = "publicKey")]
    public_key: String,

    #[serde(
        rename = "secretKey",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    secret_key: Vec<u8>,
}

/// Encrypt a keypair under a password into a fresh record.
///
/// Generates a new random salt and nonce on every call, so two records
/// for the same keypair and password never match — but both decrypt to
/// the same keypair.
pub fn encrypt_keypair(keypair: &WalletKeypair, password: &[u8]) -> Result<EncryptedRecord> {
    let salt = generate_salt();
    let nonce = generate_nonce();

    let key = derive_key(password, &salt)?;

    let public_key = keypair.public_hex();
    let envelope = PayloadEnvelope {
        public_key: public_key.clone(),
        secret_key: keypair.to_secret_bytes().to_vec(),
    };
    let mut plaintext = serde_json::to_vec(&envelope)
        .map_err(|e| WalletVaultError::SerializationError(format!("payload: {e}")))?;

    // The version byte rides as associated data so the tag breaks if it
    // is rewritten on disk.
    let (ciphertext, tag) = encrypt(key.as_bytes(), &nonce, &plaintext, &[CURRENT_VERSION])?;
    plaintext.zeroize();

    Ok(EncryptedRecord {
        version: CURRENT_VERSION,
        ciphertext,
        nonce: nonce.to_vec(),
        auth_tag: tag.to_vec(),
        salt: salt.to_vec(),
        public_key,
    })
}

/// Decrypt a record back into a keypair.
///
/// Fails closed at every step, in order:
/// 1. unknown/future version — `UnsupportedVersion`, before any crypto;
/// 2. malformed structure — `InvalidRecord`, before any crypto;
/// 3. tag verification failure (wrong password or tampered data) —
///    `AuthenticationFailed`, never partial plaintext;
/// 4. authenticated-but-undecodable payload, or a public identifier
///    that does not match the one derived from the secret bytes —
///    `MalformedPayload`.
pub fn decrypt_record(record: &EncryptedRecord, password: &[u8]) -> Result<WalletKeypair> {
    if record.version != CURRENT_VERSION {
        return Err(WalletVaultError::UnsupportedVersion {
            found: record.version,
            supported: CURRENT_VERSION,
        });
    }

    record.validate()?;

    let key = derive_key(password, &record.salt)?;

    // validate() pinned the lengths, so these conversions cannot fail.
    let nonce: [u8; NONCE_LEN] = record
        .nonce
        .as_slice()
        .try_into()
        .map_err(|_| WalletVaultError::InvalidRecord("iv length".into()))?;
    let tag: [u8; TAG_LEN] = record
        .auth_tag
        .as_slice()
        .try_into()
        .map_err(|_| WalletVaultError::InvalidRecord("authTag length".into()))?;

    let mut plaintext = decrypt(
        key.as_bytes(),
        &nonce,
        &record.ciphertext,
        &tag,
        &[record.version],
    )?;

    let parsed: std::result::Result<PayloadEnvelope, _> = serde_json::from_slice(&plaintext);
    plaintext.zeroize();
    let envelope = parsed
        .map_err(|e| WalletVaultError::MalformedPayload(format!("payload JSON: {e}")))?;

    // Rebuild the keypair from the authenticated secret bytes; this
    // also verifies the seed and public half are consistent.
    let keypair = WalletKeypair::from_secret_bytes(&envelope.secret_key)
        .map_err(|e| WalletVaultError::MalformedPayload(e.to_string()))?;

    // The identifier inside the payload must match the one derived from
    // the secret bytes.  Authenticity is already established by the
    // tag; this is a consistency check.
    if keypair.public_hex() != envelope.public_key {
        return Err(WalletVaultError::MalformedPayload(
            "public key does not match secret bytes".into(),
        ));
    }

    Ok(keypair)
}

/// Encrypt a keypair and write it to a new wallet file.
///
/// Refuses to overwrite an existing wallet.
pub fn create_wallet(path: &Path, keypair: &WalletKeypair, password: &[u8]) -> Result<()> {
    if path.exists() {
        return Err(WalletVaultError::WalletAlreadyExists(path.to_path_buf()));
    }

    let record = encrypt_keypair(keypair, password)?;
    write_record(path, &record)
}

/// Read a wallet file and decrypt it with the given password.
pub fn load_wallet(path: &Path, password: &[u8]) -> Result<WalletKeypair> {
    let record = read_record(path)?;
    decrypt_record(&record, password)
}
