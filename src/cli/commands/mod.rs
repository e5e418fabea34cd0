//! Command implementations, one module per subcommand.

pub mod address;
pub mod completions;
pub mod create;
pub mod export;
pub mod import_cmd;
pub mod rotate;
pub mod show;
