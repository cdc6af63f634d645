use serde::{Deserialize, Serialize};

/// Optional marketplace features toggled from `config.toml`.
///
/// Every field defaults to `false`, so a missing or partial config file
/// turns the optional surfaces off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Self-service account creation on `/signup`.
    #[serde(default)]
    pub signup: bool,
    /// Premium boost toggles and the boosting services page.
    #[serde(default)]
    pub boosting: bool,
    /// Seed demo accounts, jobs and applicants at startup.
    #[serde(default)]
    pub demo_data: bool,
}

/// Top-level shape of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
