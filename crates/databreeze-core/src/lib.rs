//! # databreeze-core
//!
//! Shared foundation for the databreeze drill crates.
//! Keys and key paths, errors, configuration, and tracing setup.

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod types;

pub use config::DrillConfig;
pub use errors::{ConfigError, DatabreezeError, DatabreezeErrorCode, PathError};
pub use types::{Key, KeyPath};
