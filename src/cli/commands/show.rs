//! `walletvault show` — decrypt the wallet and print its public key.

use crate::cli::output;
use crate::cli::{prompt_password, wallet_path, Cli};
use crate::errors::Result;
use crate::vault::{decrypt_record, read_record};

/// Execute the `show` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = wallet_path(cli)?;

    let record = read_record(&path)?;
    let password = prompt_password()?;
    let keypair = decrypt_record(&record, password.as_bytes())?;

    // The plaintext publicKey field is reference-only; if someone edited
    // it, the decrypted wallet is still the truth — but say so.
    if record.public_key != keypair.public_hex() {
        output::warning(
            "stored publicKey field does not match the decrypted wallet — file metadata was edited",
        );
    }

    println!("{}", keypair.public_hex());

    Ok(())
}
