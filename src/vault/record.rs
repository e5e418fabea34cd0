//! Persisted wallet record format.
//!
//! A wallet file is a single JSON object:
//!
//! ```json
//! {
//!   "version": 1,
//!   "encrypted": "<base64 ciphertext>",
//!   "iv": "<base64 12-byte nonce>",
//!   "authTag": "<base64 16-byte tag>",
//!   "salt": "<base64 64-byte salt>",
//!   "publicKey": "<hex public key>"
//! }
//! ```
//!
//! Byte fields are base64; the public key is lowercase hex.  These
//! encodings are fixed so wallet files stay portable across
//! implementations.  `publicKey` is plaintext for reference and display
//! only — it is not covered by the authentication tag and is never
//! trusted as the wallet's identity (the decrypted payload is).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::{NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{Result, WalletVaultError};

/// Current record format version.
///
/// Version 1 means: Argon2id (64 MB, t=3, p=4, 64-byte salt) +
/// AES-256-GCM with the version byte as associated data.
pub const CURRENT_VERSION: u8 = 1;

/// An encrypted wallet record as persisted on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedRecord {
    /// Record format version.
    pub version: u8,

    /// The AES-256-GCM ciphertext (base64 in JSON).
    #[serde(
        rename = "encrypted",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub ciphertext: Vec<u8>,

    /// The 12-byte nonce (base64 in JSON).
    #[serde(
        rename = "iv",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub nonce: Vec<u8>,

    /// The detached 16-byte authentication tag (base64 in JSON).
    #[serde(
        rename = "authTag",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub auth_tag: Vec<u8>,

    /// The 64-byte Argon2id salt, random per record (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    /// Hex public key, stored unencrypted for reference/display.
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

impl EncryptedRecord {
    /// Check the record's structure before any cryptographic attempt.
    ///
    /// Length checks only — authenticity is the tag's job.
    pub fn validate(&self) -> Result<()> {
        if self.salt.len() != SALT_LEN {
            return Err(WalletVaultError::InvalidRecord(format!(
                "salt must be {SALT_LEN} bytes, got {}",
                self.salt.len()
            )));
        }
        if self.nonce.len() != NONCE_LEN {
            return Err(WalletVaultError::InvalidRecord(format!(
                "iv must be {NONCE_LEN} bytes, got {}",
                self.nonce.len()
            )));
        }
        if self.auth_tag.len() != TAG_LEN {
            return Err(WalletVaultError::InvalidRecord(format!(
                "authTag must be {TAG_LEN} bytes, got {}",
                self.auth_tag.len()
            )));
        }
        if self.ciphertext.is_empty() {
            return Err(WalletVaultError::InvalidRecord(
                "encrypted field is empty".into(),
            ));
        }
        if self.public_key.is_empty() {
            return Err(WalletVaultError::InvalidRecord(
                "publicKey field is empty".into(),
            ));
        }
        Ok(())
    }
}

/// Write a wallet record to disk **atomically**.
///
/// Serializes to pretty JSON, writes a temp file in the same directory,
/// then renames it over the target path so readers never see a
/// half-written wallet.  On Unix the file is owner-only.
pub fn write_record(path: &Path, record: &EncryptedRecord) -> Result<()> {
    let json = serde_json::to_vec_pretty(record)
        .map_err(|e| WalletVaultError::SerializationError(format!("record: {e}")))?;

    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Read a wallet record from disk and check its structure.
///
/// The returned record has passed `validate()` but nothing has been
/// decrypted or authenticated yet.
pub fn read_record(path: &Path) -> Result<EncryptedRecord> {
    if !path.exists() {
        return Err(WalletVaultError::WalletNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;

    let record: EncryptedRecord = serde_json::from_slice(&data)
        .map_err(|e| WalletVaultError::InvalidRecord(format!("record JSON: {e}")))?;

    record.validate()?;

    Ok(record)
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
