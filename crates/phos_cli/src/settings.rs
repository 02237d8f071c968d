//! Render settings file.
//!
//! A JSON document such as:
//!
//! ```json
//! { "width": 800, "height": 600, "render": { "mode": "sequential" } }
//! ```
//!
//! Every field is optional; command-line flags override the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use phos_renderer::RenderConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub render: RenderConfig,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            render: RenderConfig::default(),
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phos_renderer::RenderMode;

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(RenderSettings::from_json("{}").unwrap(), RenderSettings::default());
    }

    #[test]
    fn test_partial_settings() {
        let settings =
            RenderSettings::from_json(r#"{ "width": 64, "render": { "mode": "sequential" } }"#)
                .unwrap();
        assert_eq!(settings.width, 64);
        assert_eq!(settings.height, 500);
        assert_eq!(settings.render.mode, RenderMode::Sequential);
        assert_eq!(settings.render.threads, None);
    }

    #[test]
    fn test_threads_and_unknown_mode() {
        let settings = RenderSettings::from_json(r#"{ "render": { "threads": 4 } }"#).unwrap();
        assert_eq!(settings.render.mode, RenderMode::Parallel);
        assert_eq!(settings.render.threads, Some(4));

        assert!(RenderSettings::from_json(r#"{ "render": { "mode": "gpu" } }"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = RenderSettings::load(Path::new("/nonexistent/phos.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }
}
