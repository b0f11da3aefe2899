//! Stable string codes for error variants, for callers that report errors
//! across a process or language boundary.

pub const PATH_ERROR: &str = "PATH_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to its stable code.
pub trait DatabreezeErrorCode {
    fn error_code(&self) -> &'static str;
}
