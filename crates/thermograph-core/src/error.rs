//! Error types for loading and rendering the heatmap.

use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::surface::SurfaceError;
use thiserror::Error;

/// Every failure that stops the chart from being drawn.
///
/// All variants are terminal for the page: the header stays up, no grid is
/// drawn and the error is reported to the user and the console.
#[derive(Debug, Error)]
pub enum HeatmapError {
    /// Network failure before a response arrived.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The server answered with a non-2xx status.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The body is not a valid dataset.
    #[error("invalid dataset: {0}")]
    Parse(#[from] DatasetError),

    /// The page cannot host the chart (missing mount point, no usable
    /// viewport).
    #[error("cannot render: {0}")]
    RenderPrecondition(String),

    /// The configuration override was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The drawing backend failed while committing the scene.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl HeatmapError {
    /// Fail unless `status` is a 2xx HTTP status.
    pub fn check_status(url: &str, status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::HttpStatus {
                url: url.to_string(),
                status,
            })
        }
    }

    /// Whether the failure happened while obtaining the dataset.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::HttpStatus { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(HeatmapError::check_status("u", 200).is_ok());
        assert!(HeatmapError::check_status("u", 204).is_ok());
        let err = HeatmapError::check_status("https://x/y.json", 404).unwrap_err();
        assert!(err.is_fetch_error());
        assert_eq!(err.to_string(), "failed to fetch https://x/y.json: HTTP 404");
        assert!(HeatmapError::check_status("u", 304).is_err());
    }

    #[test]
    fn test_parse_error_from_dataset_error() {
        let err: HeatmapError = crate::TemperatureDataset::from_json("nope").unwrap_err().into();
        assert!(matches!(err, HeatmapError::Parse(_)));
        assert!(!err.is_fetch_error());
        assert!(err.to_string().starts_with("invalid dataset: malformed dataset JSON"));
    }

    #[test]
    fn test_render_precondition_display() {
        let err = HeatmapError::RenderPrecondition("mount point #root not found".into());
        assert_eq!(err.to_string(), "cannot render: mount point #root not found");
    }

    #[test]
    fn test_surface_error_is_transparent() {
        let err: HeatmapError = SurfaceError("appendChild failed".into()).into();
        assert_eq!(err.to_string(), "drawing surface error: appendChild failed");
    }
}
