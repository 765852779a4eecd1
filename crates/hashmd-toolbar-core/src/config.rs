//! Toolbar settings.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::ToolbarError;
use crate::position::{Placement, Size};

pub const DEFAULT_SOURCE_URL: &str = "https://github.com/pd4d10/hashmd";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolbarConfig {
    /// Opened by the source-code action.
    pub source_url: SmolStr,
    /// Dropdown placement relative to its icon.
    pub placement: Placement,
    /// Minimum gap between a dropdown and the viewport edge, in pixels.
    pub padding: f64,
    /// Viewport used for dropdown placement when the platform cannot report one.
    pub fallback_viewport: Size,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            source_url: SmolStr::new_static(DEFAULT_SOURCE_URL),
            placement: Placement::default(),
            padding: 0.0,
            fallback_viewport: Size::new(1280.0, 800.0),
        }
    }
}

impl ToolbarConfig {
    pub fn from_json(json: &str) -> Result<Self, ToolbarError> {
        serde_json::from_str(json).map_err(ToolbarError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Align, Side};

    #[test]
    fn test_defaults() {
        let config = ToolbarConfig::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.placement, Placement::new(Side::Bottom, Align::Start));
    }

    #[test]
    fn test_from_json_overrides() {
        let config = ToolbarConfig::from_json(
            r#"{
                "sourceUrl": "https://example.com/fork",
                "placement": { "side": "top", "align": "end" },
                "padding": 8
            }"#,
        )
        .unwrap();
        assert_eq!(config.source_url, "https://example.com/fork");
        assert_eq!(config.placement, Placement::new(Side::Top, Align::End));
        assert_eq!(config.padding, 8.0);
        assert_eq!(config.fallback_viewport, Size::new(1280.0, 800.0));
    }

    #[test]
    fn test_from_json_rejects_unknown_side() {
        let err = ToolbarConfig::from_json(r#"{"placement": {"side": "up", "align": "start"}}"#)
            .unwrap_err();
        assert!(matches!(err, ToolbarError::Config(_)));
    }
}
