//! `walletvault create` — generate a keypair and write a new wallet.

use crate::cli::output;
use crate::cli::{prompt_new_password, wallet_path, Cli};
use crate::errors::{Result, WalletVaultError};
use crate::keypair::WalletKeypair;
use crate::vault::create_wallet;

/// Execute the `create` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = wallet_path(cli)?;

    if path.exists() {
        output::tip("Use `walletvault rotate` to change the password of an existing wallet.");
        return Err(WalletVaultError::WalletAlreadyExists(path));
    }

    // Prompt for a new password (with confirmation) before generating
    // anything, so a cancelled prompt leaves nothing behind.
    let password = prompt_new_password()?;

    let keypair = WalletKeypair::generate();
    create_wallet(&path, &keypair, password.as_bytes())?;

    output::success(&format!("Wallet created at {}", path.display()));
    println!("{}", keypair.public_hex());

    output::tip("Run `walletvault show` to verify the wallet decrypts.");
    output::tip("Run `walletvault address` to print the public key without a password.");

    Ok(())
}
