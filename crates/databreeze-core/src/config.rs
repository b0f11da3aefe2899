//! Drill configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;

/// Tunables for a configured driller.
///
/// ```toml
/// negative_indices = false
/// trace_batches = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrillConfig {
    /// Allow `Index(-n)` to count from the end of a sequence. When off, a
    /// negative sequence position is treated like any other missing key.
    /// Integer mapping keys such as YAML's `-1:` still match literally.
    pub negative_indices: bool,
    /// Emit one `trace` event per batch with resolved/fallback counts.
    pub trace_batches: bool,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            negative_indices: true,
            trace_batches: true,
        }
    }
}

impl DrillConfig {
    /// Parse a config from a TOML string. Missing fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        debug!(
            negative_indices = config.negative_indices,
            trace_batches = config.trace_batches,
            "loaded drill config"
        );
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
