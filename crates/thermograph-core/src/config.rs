//! Page configuration.
//!
//! Every field has a default matching the published chart, so an empty JSON
//! object (or no configuration at all) reproduces it exactly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Source of the monthly global land-surface temperature dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration is not valid JSON for [`HeatmapConfig`].
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the renderer cannot use.
    #[error("invalid configuration: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Legend placement and swatch geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendConfig {
    /// Lower end of the legend domain (°C variance)
    pub min_variance: f64,
    /// Upper end of the legend domain (°C variance)
    pub max_variance: f64,
    /// Pixel length of the legend scale
    pub width: f64,
    /// Height of the legend drawing surface
    pub height: f64,
    /// Horizontal offset of the swatches and axis
    pub offset_x: f64,
    /// Top of the swatches
    pub offset_y: f64,
    /// Vertical position of the legend axis
    pub axis_y: f64,
    /// Swatch width
    pub swatch_width: f64,
    /// Swatch height
    pub swatch_height: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            min_variance: -7.0,
            max_variance: 7.0,
            width: 500.0,
            height: 80.0,
            offset_x: 100.0,
            offset_y: 20.0,
            axis_y: 50.0,
            swatch_width: 36.0,
            swatch_height: 30.0,
        }
    }
}

/// Tooltip placement relative to the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipConfig {
    /// Horizontal offset from the pointer
    pub offset_x: f64,
    /// Vertical offset from the pointer
    pub offset_y: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 10.0,
            offset_y: -28.0,
        }
    }
}

/// Top-level page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapConfig {
    /// Dataset URL
    pub data_url: String,
    /// Id of the element the page mounts under
    pub mount_id: String,
    /// Page title
    pub title: String,
    /// Page subtitle
    pub description: String,
    /// Left/bottom margin around the grid
    pub margin: f64,
    /// Chart height as a fraction of the window's inner height
    pub height_ratio: f64,
    /// Legend settings
    pub legend: LegendConfig,
    /// Tooltip settings
    pub tooltip: TooltipConfig,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            mount_id: "root".to_string(),
            title: "FreeCodeCamp Heatmap".to_string(),
            description: "Monthly Global Land-Surface Temperature".to_string(),
            margin: 70.0,
            height_ratio: 0.8,
            legend: LegendConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl HeatmapConfig {
    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every dimension is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if self.mount_id.is_empty() {
            return invalid("mountId", "must not be empty");
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return invalid("margin", "must be a non-negative number");
        }
        if !(self.height_ratio > 0.0 && self.height_ratio <= 1.0) {
            return invalid("heightRatio", "must be in (0, 1]");
        }
        let legend = &self.legend;
        if legend.min_variance.partial_cmp(&legend.max_variance) != Some(Ordering::Less) {
            return invalid("legend.minVariance", "must be below legend.maxVariance");
        }
        for (field, value) in [
            ("legend.width", legend.width),
            ("legend.height", legend.height),
            ("legend.swatchWidth", legend.swatch_width),
            ("legend.swatchHeight", legend.swatch_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return invalid(field, "must be a positive number");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(HeatmapConfig::from_json("{}").unwrap(), HeatmapConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            HeatmapConfig::from_json(r#"{"title": "Heat", "legend": {"width": 700}}"#).unwrap();
        assert_eq!(config.title, "Heat");
        assert_eq!(config.legend.width, 700.0);
        assert_eq!(config.legend.swatch_width, 36.0);
        assert_eq!(config.margin, 70.0);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    #[test]
    fn test_malformed_json() {
        let err = HeatmapConfig::from_json("{title:").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = HeatmapConfig::from_json(r#"{"heightRatio": 0}"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration: heightRatio must be in (0, 1]");

        let err = HeatmapConfig::from_json(r#"{"legend": {"swatchHeight": -1}}"#).unwrap_err();
        assert!(err.to_string().contains("legend.swatchHeight"));

        let err =
            HeatmapConfig::from_json(r#"{"legend": {"minVariance": 7, "maxVariance": -7}}"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "legend.minVariance", .. }));
    }

    #[test]
    fn test_serialized_names_are_camel_case() {
        let json = serde_json::to_string(&HeatmapConfig::default()).unwrap();
        assert!(json.contains("\"dataUrl\""));
        assert!(json.contains("\"heightRatio\":0.8"));
        assert!(json.contains("\"swatchWidth\":36.0"));
    }
}
