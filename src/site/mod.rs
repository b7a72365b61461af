//! Site driver: configuration, directory walking, and output writing
//!
//! The driver feeds each data file through the pure substitution core and
//! owns everything the core deliberately does not: flag and config-file
//! handling, path derivation, and file I/O.

pub mod config;
pub mod generate;

pub use config::{ConfigError, FileConfig, Overrides, SiteConfig};
pub use generate::{generate, GenerateError, Summary};
