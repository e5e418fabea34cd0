//! `walletvault import` — encrypt an existing keypair into a new wallet.
//!
//! Accepts the two plaintext keypair formats found in the wild:
//! - a JSON array of 64 byte values (the common exported-wallet layout)
//! - a hex string of 128 characters
//! The format is auto-detected from the file contents.

use std::fs;
use std::path::Path;

use zeroize::Zeroize;

use crate::cli::output;
use crate::cli::{prompt_new_password, wallet_path, Cli};
use crate::errors::{Result, WalletVaultError};
use crate::keypair::WalletKeypair;
use crate::vault::create_wallet;

/// Execute the `import` command.
pub fn execute(cli: &Cli, source: &str) -> Result<()> {
    let path = wallet_path(cli)?;

    if path.exists() {
        return Err(WalletVaultError::WalletAlreadyExists(path));
    }

    let mut secret_bytes = read_secret_file(Path::new(source))?;
    let keypair = WalletKeypair::from_secret_bytes(&secret_bytes);
    secret_bytes.zeroize();
    let keypair = keypair?;

    let password = prompt_new_password()?;
    create_wallet(&path, &keypair, password.as_bytes())?;

    output::success(&format!(
        "Imported keypair into wallet at {}",
        path.display()
    ));
    println!("{}", keypair.public_hex());

    output::warning("The plaintext source file still exists — delete it once verified.");

    Ok(())
}

/// Read a plaintext keypair file and decode it into raw secret bytes.
///
/// A leading `[` means a JSON byte array; anything else is treated as a
/// hex string (an optional `0x` prefix is stripped).
fn read_secret_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(WalletVaultError::CommandFailed(format!(
            "keypair file not found at {}",
            path.display()
        )));
    }

    let mut contents = fs::read_to_string(path)?;
    let trimmed = contents.trim();

    let bytes = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<u8>>(trimmed).map_err(|e| {
            WalletVaultError::CommandFailed(format!("invalid JSON byte array: {e}"))
        })?
    } else {
        let hex_str = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        hex::decode(hex_str)
            .map_err(|e| WalletVaultError::CommandFailed(format!("invalid hex string: {e}")))?
    };

    contents.zeroize();
    Ok(bytes)
}
