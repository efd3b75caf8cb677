//! Frontend Models
//!
//! Data structures for the tracker session configuration.

use serde::{Deserialize, Serialize};

/// Tracker configuration embedded in the host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Daily goal in volume units, fixed for the session
    pub goal: u32,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Amounts for the one-click preset buttons
    #[serde(default = "default_quick_amounts")]
    pub quick_amounts: Vec<u32>,
}

fn default_unit() -> String {
    "ml".to_string()
}

fn default_quick_amounts() -> Vec<u32> {
    vec![250, 500, 750]
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            goal: 2000,
            unit: default_unit(),
            quick_amounts: default_quick_amounts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.goal, 2000);
        assert_eq!(config.unit, "ml");
        assert_eq!(config.quick_amounts, vec![250, 500, 750]);
    }

    #[test]
    fn test_optional_fields_take_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{"goal": 1500}"#).unwrap();
        assert_eq!(config.goal, 1500);
        assert_eq!(config.unit, "ml");
        assert_eq!(config.quick_amounts, vec![250, 500, 750]);
    }
}
