//! `walletvault address` — print the stored public key without decrypting.
//!
//! Reads the plaintext `publicKey` reference field, so no password is
//! needed.  The value is display-only: it is not covered by the
//! authentication tag.  Use `show` to get the authenticated public key.

use crate::cli::{wallet_path, Cli};
use crate::errors::Result;
use crate::vault::read_record;

/// Execute the `address` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = wallet_path(cli)?;
    let record = read_record(&path)?;

    println!("{}", record.public_key);

    Ok(())
}
