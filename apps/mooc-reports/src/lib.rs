//! MOOC approval report generator
//!
//! Loads course mappings from a TOML file and writes one report per mapping
//! plus a summary proposal.

pub mod config;
pub mod runner;

pub use config::Config;
pub use runner::{run, RunSummary};
