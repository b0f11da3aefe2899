//! Error types for the fallible edges of databreeze.
//!
//! Drilling itself never fails; a missing key becomes the fallback value.
//! Only parsing a key path and loading configuration can return an error.

pub mod config_error;
pub mod error_code;
pub mod path_error;

pub use config_error::ConfigError;
pub use error_code::DatabreezeErrorCode;
pub use path_error::PathError;

/// Umbrella error for callers that handle both paths and configuration.
#[derive(Debug, thiserror::Error)]
pub enum DatabreezeError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DatabreezeErrorCode for DatabreezeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Path(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
