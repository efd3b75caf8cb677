//! Embedded Page Configuration
//!
//! Reads tracker settings from a JSON `<script>` block in the host page.

use crate::models::TrackerConfig;

/// Element id of the embedded config block
pub const CONFIG_ELEMENT_ID: &str = "hydrotrack-config";

/// Load the config block from the current document.
///
/// A missing block or malformed JSON is an error the caller is expected to
/// recover from by falling back to `TrackerConfig::default()`.
pub fn load() -> Result<TrackerConfig, String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let block = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .ok_or_else(|| format!("#{} not found in page", CONFIG_ELEMENT_ID))?;
    parse_config(&block.text_content().unwrap_or_default())
}

/// Parse and validate a raw config document
pub fn parse_config(raw: &str) -> Result<TrackerConfig, String> {
    let config: TrackerConfig = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if config.goal == 0 {
        return Err("goal must be a positive volume".to_string());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(r#"{"goal": 2500, "unit": "oz", "quick_amounts": [8, 16]}"#)
            .expect("Parse failed");
        assert_eq!(config.goal, 2500);
        assert_eq!(config.unit, "oz");
        assert_eq!(config.quick_amounts, vec![8, 16]);
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(parse_config("not json").is_err());
    }

    #[test]
    fn test_rejects_missing_goal() {
        assert!(parse_config(r#"{"unit": "ml"}"#).is_err());
    }

    #[test]
    fn test_rejects_zero_goal() {
        assert!(parse_config(r#"{"goal": 0}"#).is_err());
    }
}
