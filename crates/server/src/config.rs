use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, all flags default to `false`.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let features = parse_feature_flags(&contents);
            tracing::info!(?features, "Loaded feature flags");
            features
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Config file not found, all features off");
            FeatureFlags::default()
        }
    });
}

/// Parse the `[features]` table. A malformed file turns every flag off.
pub fn parse_feature_flags(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, all features off");
            FeatureFlags::default()
        }
    }
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_feature_flags()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        signup: false,
        boosting: false,
        demo_data: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_config_turns_features_off() {
        assert_eq!(parse_feature_flags("[features\nsignup = "), FeatureFlags::default());
    }

    #[test]
    fn features_table_is_read() {
        let flags = parse_feature_flags("[features]\nboosting = true\n");
        assert!(flags.boosting);
        assert!(!flags.signup);
    }
}
