//! Integration tests for the WalletVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive password prompts are bypassed with the
//! `WALLETVAULT_PASSWORD` environment variable so every test runs
//! unattended.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

const PASSWORD: &str = "integration-pw";

/// Helper: get a Command pointing at the walletvault binary.
fn walletvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("walletvault").expect("binary should exist")
}

/// Helper: run `create` in `dir` and return the wallet file path.
fn create_wallet_in(dir: &TempDir) -> String {
    let file = dir.path().join("wallet.vault");
    let file_str = file.to_str().unwrap().to_string();

    walletvault()
        .args(["create", "--file", &file_str])
        .current_dir(dir.path())
        .env("WALLETVAULT_PASSWORD", PASSWORD)
        .assert()
        .success();

    file_str
}

/// Helper: extract the single trimmed stdout line of a command run.
fn stdout_line(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run command");
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout)
        .expect("utf8 stdout")
        .trim()
        .to_string()
}

#[test]
fn help_flag_shows_usage() {
    walletvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password-encrypted keypair vault"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("address"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("rotate"));
}

#[test]
fn version_flag_shows_version() {
    walletvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("walletvault"));
}

#[test]
fn no_args_shows_help() {
    walletvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn create_then_show_and_address_agree() {
    let tmp = TempDir::new().unwrap();
    let file = create_wallet_in(&tmp);

    let shown = stdout_line(
        walletvault()
            .args(["show", "--file", &file])
            .current_dir(tmp.path())
            .env("WALLETVAULT_PASSWORD", PASSWORD),
    );

    // The authenticated public key is 32 bytes of lowercase hex.
    assert_eq!(shown.len(), 64);
    assert!(shown.chars().all(|c| c.is_ascii_hexdigit()));

    // `address` reads the plaintext reference field without a password.
    let address = stdout_line(
        walletvault()
            .args(["address", "--file", &file])
            .current_dir(tmp.path()),
    );
    assert_eq!(address, shown);
}

#[test]
fn show_with_wrong_password_fails_closed() {
    let tmp = TempDir::new().unwrap();
    let file = create_wallet_in(&tmp);

    walletvault()
        .args(["show", "--file", &file])
        .current_dir(tmp.path())
        .env("WALLETVAULT_PASSWORD", "not-the-password")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wrong password or corrupted file"));
}

#[test]
fn create_twice_fails() {
    let tmp = TempDir::new().unwrap();
    let file = create_wallet_in(&tmp);

    walletvault()
        .args(["create", "--file", &file])
        .current_dir(tmp.path())
        .env("WALLETVAULT_PASSWORD", PASSWORD)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn create_rejects_short_password() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("wallet.vault");

    walletvault()
        .args(["create", "--file", file.to_str().unwrap()])
        .current_dir(tmp.path())
        .env("WALLETVAULT_PASSWORD", "short")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));
}

#[test]
fn show_on_missing_wallet_fails() {
    let tmp = TempDir::new().unwrap();

    walletvault()
        .args(["show", "--file", tmp.path().join("nope.vault").to_str().unwrap()])
        .current_dir(tmp.path())
        .env("WALLETVAULT_PASSWORD", PASSWORD)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn export_force_prints_hex_secret() {
    let tmp = TempDir::new().unwrap();
    let file = create_wallet_in(&tmp);

    let secret = stdout_line(
        walletvault()
            .args(["export", "--force", "--file", &file])
            .current_dir(tmp.path())
            .env("WALLETVAULT_PASSWORD", PASSWORD),
    );

    // 64 secret bytes = 128 hex characters.
    assert_eq!(secret.len(), 128);
    assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn export_then_import_preserves_identity() {
    let tmp = TempDir::new().unwrap();
    let file = create_wallet_in(&tmp);

    let address = stdout_line(
        walletvault()
            .args(["address", "--file", &file])
            .current_dir(tmp.path()),
    );

    // Export the secret bytes as a JSON byte array to a file.
    let exported = tmp.path().join("keypair.json");
    walletvault()
        .args([
            "export",
            "--force",
            "-F",
            "json",
            "--output",
            exported.to_str().unwrap(),
            "--file",
            &file,
        ])
        .current_dir(tmp.path())
        .env("WALLETVAULT_PASSWORD", PASSWORD)
        .assert()
        .success();

    // Import it into a second wallet under a different password.
    let second = tmp.path().join("second.vault");
    walletvault()
        .args([
            "import",
            exported.to_str().unwrap(),
            "--file",
            second.to_str().unwrap(),
        ])
        .current_dir(tmp.path())
        .env("WALLETVAULT_PASSWORD", "another-password")
        .assert()
        .success();

    let second_address = stdout_line(
        walletvault()
            .args(["address", "--file", second.to_str().unwrap()])
            .current_dir(tmp.path()),
    );
    assert_eq!(second_address, address);
}

#[test]
fn rotate_reencrypts_the_wallet() {
    let tmp = TempDir::new().unwrap();
    let file = create_wallet_in(&tmp);

    let before = std::fs::read_to_string(&file).unwrap();

    // Env-var flow rotates to the same password; the record must still
    // be rebuilt with a fresh salt and nonce.
    walletvault()
        .args(["rotate", "--file", &file])
        .current_dir(tmp.path())
        .env("WALLETVAULT_PASSWORD", PASSWORD)
        .assert()
        .success();

    let after = std::fs::read_to_string(&file).unwrap();
    assert_ne!(before, after, "rotation must rewrite the record");

    // The wallet still opens with the password.
    walletvault()
        .args(["show", "--file", &file])
        .current_dir(tmp.path())
        .env("WALLETVAULT_PASSWORD", PASSWORD)
        .assert()
        .success();
}

#[test]
fn completions_bash_generates_script() {
    walletvault()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("walletvault"));
}
