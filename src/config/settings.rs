use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WalletVaultError};

/// Project-level configuration, loaded from `.walletvault.toml`.
///
/// Every field has a sensible default so WalletVault works
/// out-of-the-box without any config file at all.  KDF parameters are
/// deliberately not configurable: the wallet record format pins them,
/// so a config knob would produce files other builds cannot open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Wallet file to use when `--file` is not passed.
    #[serde(default = "default_wallet_file")]
    pub wallet_file: String,
}

fn default_wallet_file() -> String {
    "wallet.vault".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wallet_file: default_wallet_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".walletvault.toml";

    /// Load settings from `<dir>/.walletvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            WalletVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the wallet file relative to `dir`.
    pub fn wallet_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.wallet_file)
    }
}
