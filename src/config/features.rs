//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Accept `English` as a grade class on create
    #[serde(default)]
    pub allow_english_class: bool,

    /// Include itemized violations in 400 responses
    #[serde(default = "default_true")]
    pub validation_details: bool,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            allow_english_class: false,
            validation_details: true,
            enable_tracing: true,
        }
    }
}

fn default_true() -> bool {
    true
}
