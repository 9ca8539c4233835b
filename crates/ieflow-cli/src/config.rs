//! Layered configuration for the CLI.
//!
//! Precedence, highest first: explicit CLI flags, `--set KEY=VALUE` overrides, the TOML
//! config file, then the built-in defaults (for `drive`, the chosen profile).

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
