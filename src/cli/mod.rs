//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;
use clap_complete::Shell;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, WalletVaultError};

/// Minimum password length to prevent trivially weak passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// WalletVault CLI: password-encrypted keypair vault.
#[derive(Parser)]
#[command(
    name = "walletvault",
    about = "Password-encrypted keypair vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Wallet file (default: wallet.vault, or wallet_file from .walletvault.toml)
    #[arg(short, long, global = true)]
    pub file: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new wallet with a freshly generated keypair
    Create,

    /// Import an existing keypair from a file and encrypt it
    Import {
        /// File holding the secret bytes (JSON byte array or hex string)
        source: String,
    },

    /// Decrypt the wallet and print its public key
    Show,

    /// Print the wallet's stored public key without decrypting
    Address,

    /// Decrypt the wallet and print or write the secret bytes
    Export {
        /// Output format: hex (default) or json (byte array)
        #[arg(short = 'F', long, default_value = "hex")]
        format: String,

        /// Output file path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Change the wallet password
    Rotate,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the wallet password, trying in order:
/// 1. `WALLETVAULT_PASSWORD` env var (CI/scripted use)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("WALLETVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter wallet password")
        .interact()
        .map_err(|e| WalletVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used by `create`,
/// `import`, and `rotate`).
///
/// Also respects `WALLETVAULT_PASSWORD` for scripted usage.  Enforces a
/// minimum password length — the crypto layer accepts any password, so
/// the empty/weak-password policy lives here.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("WALLETVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(WalletVaultError::CommandFailed(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose wallet password")
            .with_confirmation(
                "Confirm wallet password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| WalletVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Resolve the wallet file path from CLI arguments and config.
///
/// `--file` wins; otherwise `wallet_file` from `.walletvault.toml`
/// (or its default) relative to the current directory.
pub fn wallet_path(cli: &Cli) -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir()?;
    match &cli.file {
        Some(file) => Ok(cwd.join(file)),
        None => {
            let settings = Settings::load(&cwd)?;
            Ok(settings.wallet_path(&cwd))
        }
    }
}
