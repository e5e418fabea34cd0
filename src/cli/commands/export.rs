//! `walletvault export` — decrypt the wallet and print or write the
//! secret bytes.
//!
//! Output formats:
//! - `hex`: 128 hex characters
//! - `json`: a JSON array of 64 byte values, importable elsewhere

use std::fs;
use std::path::Path;

use dialoguer::Confirm;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{prompt_password, wallet_path, Cli};
use crate::errors::{Result, WalletVaultError};
use crate::vault::load_wallet;

/// Execute the `export` command.
pub fn execute(cli: &Cli, format: &str, out_path: Option<&str>, force: bool) -> Result<()> {
    let path = wallet_path(cli)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("This will reveal the wallet's secret key. Continue?")
            .default(false)
            .interact()
            .map_err(|e| {
                WalletVaultError::CommandFailed(format!("failed to read confirmation: {e}"))
            })?;

        if !confirmed {
            return Err(WalletVaultError::UserCancelled);
        }
    }

    let password = prompt_password()?;
    let keypair = load_wallet(&path, password.as_bytes())?;

    let secret = Zeroizing::new(keypair.to_secret_bytes());
    let rendered = Zeroizing::new(match format {
        "hex" => hex::encode(secret.as_slice()),
        "json" => serde_json::to_string(&secret.to_vec())
            .map_err(|e| WalletVaultError::SerializationError(format!("secret bytes: {e}")))?,
        other => {
            return Err(WalletVaultError::CommandFailed(format!(
                "unknown format '{other}' — supported: hex, json"
            )))
        }
    });

    match out_path {
        Some(out) => {
            write_secret_file(Path::new(out), rendered.as_bytes())?;
            output::success(&format!("Secret key written to {out}"));
            output::warning("The exported file is unencrypted — handle it accordingly.");
        }
        None => println!("{}", rendered.as_str()),
    }

    Ok(())
}

/// Write exported secret material with owner-only permissions.
fn write_secret_file(path: &Path, data: &[u8]) -> Result<()> {
    if path.exists() {
        return Err(WalletVaultError::CommandFailed(format!(
            "output file already exists at {}",
            path.display()
        )));
    }

    fs::write(path, data)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}
