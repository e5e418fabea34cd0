//! `walletvault rotate` — change the wallet password.
//!
//! Decrypts the keypair with the old password, then re-encrypts it
//! under the new password with a fresh salt and nonce and replaces the
//! wallet file atomically.

use crate::cli::output;
use crate::cli::{prompt_new_password, prompt_password, wallet_path, Cli};
use crate::errors::Result;
use crate::vault::{encrypt_keypair, load_wallet, write_record};

/// Execute the `rotate` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = wallet_path(cli)?;

    // 1. Decrypt with the current password.
    output::info("Enter your current wallet password.");
    let old_password = prompt_password()?;
    let keypair = load_wallet(&path, old_password.as_bytes())?;

    // 2. Prompt for the new password.
    output::info("Choose your new wallet password.");
    let new_password = prompt_new_password()?;

    // 3. Re-encrypt with a fresh salt and nonce, then replace the file.
    let record = encrypt_keypair(&keypair, new_password.as_bytes())?;
    write_record(&path, &record)?;

    output::success(&format!("Password rotated for wallet at {}", path.display()));

    Ok(())
}
