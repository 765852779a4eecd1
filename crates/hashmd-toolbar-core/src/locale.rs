//! Localized toolbar strings.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::ToolbarError;

/// Every label the toolbar shows.
///
/// Deserializes from a camelCase JSON map. Missing keys keep their English
/// default, so partial translations are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    pub toc: SmolStr,
    pub close_toc: SmolStr,
    pub help: SmolStr,
    pub close_help: SmolStr,
    pub write_only: SmolStr,
    pub exit_write_only: SmolStr,
    pub preview_only: SmolStr,
    pub exit_preview_only: SmolStr,
    pub fullscreen: SmolStr,
    pub exit_fullscreen: SmolStr,
    pub source: SmolStr,
    pub write: SmolStr,
    pub preview: SmolStr,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            toc: SmolStr::new_static("Table of contents"),
            close_toc: SmolStr::new_static("Close table of contents"),
            help: SmolStr::new_static("Help"),
            close_help: SmolStr::new_static("Close help"),
            write_only: SmolStr::new_static("Write only"),
            exit_write_only: SmolStr::new_static("Exit write only"),
            preview_only: SmolStr::new_static("Preview only"),
            exit_preview_only: SmolStr::new_static("Exit preview only"),
            fullscreen: SmolStr::new_static("Fullscreen"),
            exit_fullscreen: SmolStr::new_static("Exit fullscreen"),
            source: SmolStr::new_static("Source code"),
            write: SmolStr::new_static("Write"),
            preview: SmolStr::new_static("Preview"),
        }
    }
}

impl Locale {
    pub fn from_json(json: &str) -> Result<Self, ToolbarError> {
        serde_json::from_str(json).map_err(ToolbarError::Locale)
    }
}
