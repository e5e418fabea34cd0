//! Vault module — encrypted wallet storage.
//!
//! This module provides:
//! - The persisted `EncryptedRecord` JSON format (`record`)
//! - Encrypt/decrypt and file-level create/load operations (`store`)

pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{read_record, write_record, EncryptedRecord, CURRENT_VERSION};
pub use store::{create_wallet, decrypt_record, encrypt_keypair, load_wallet};
