//! Config module — project-level settings loaded from `.walletvault.toml`.

pub mod settings;

pub use settings::Settings;
