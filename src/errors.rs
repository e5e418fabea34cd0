use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in WalletVault.
#[derive(Debug, Error)]
pub enum WalletVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// AEAD tag verification failed. The message does not say whether
    /// the password was wrong or the file was tampered with — callers
    /// must not be able to tell the two apart.
    #[error("Authentication failed — wrong password or corrupted file")]
    AuthenticationFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Record errors ---
    #[error("Invalid wallet record: {0}")]
    InvalidRecord(String),

    #[error("Unsupported record version {found} — this build reads version {supported}")]
    UnsupportedVersion { found: u8, supported: u8 },

    /// The plaintext authenticated correctly but could not be decoded
    /// into a keypair, or its embedded public identifier is inconsistent.
    #[error("Malformed wallet payload: {0}")]
    MalformedPayload(String),

    // --- Keypair errors ---
    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),

    // --- Storage errors ---
    #[error("Wallet not found at {0}")]
    WalletNotFound(PathBuf),

    #[error("Wallet already exists at {0}")]
    WalletAlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for WalletVault results.
pub type Result<T> = std::result::Result<T, WalletVaultError>;
