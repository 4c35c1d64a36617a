//! # Stack Configuration
//!
//! Which project and stack the sample declares resources into. Values come from the
//! environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `NIMBUS_PROJECT` | `nimbus` |
//! | `NIMBUS_STACK` | `dev` |
//!
//! Log verbosity is controlled separately through `RUST_LOG`
//! (see [`nimbus::tracing`]).

use serde::{Deserialize, Serialize};

pub const PROJECT_VAR: &str = "NIMBUS_PROJECT";
pub const STACK_VAR: &str = "NIMBUS_STACK";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub project: String,
    pub stack: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            project: "nimbus".to_string(),
            stack: "dev".to_string(),
        }
    }
}

impl StackConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults for
    /// missing or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: String| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
        };
        Self {
            project: read(PROJECT_VAR, defaults.project),
            stack: read(STACK_VAR, defaults.stack),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = StackConfig::from_lookup(|_| None);
        assert_eq!(config, StackConfig::default());
    }

    #[test]
    fn test_lookup_overrides_and_blank_values() {
        let vars = HashMap::from([
            (PROJECT_VAR, " billing ".to_string()),
            (STACK_VAR, "   ".to_string()),
        ]);
        let config = StackConfig::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(config.project, "billing");
        assert_eq!(config.stack, "dev");
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: StackConfig = serde_json::from_str(r#"{"stack": "prod"}"#).unwrap();
        assert_eq!(config.project, "nimbus");
        assert_eq!(config.stack, "prod");
    }
}
