//! Per-render state: the dataset, the viewport and the scales derived from
//! them. Built once per render call and handed to each sub-renderer.

use crate::config::HeatmapConfig;
use crate::dataset::TemperatureDataset;
use crate::error::HeatmapError;
use crate::scale::{BandScale, LinearScale};
use crate::Size;

/// Everything a renderer needs, derived once from the dataset.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    dataset: &'a TemperatureDataset,
    config: &'a HeatmapConfig,
    viewport: Size,
    years: BandScale<i32>,
    months: BandScale<u8>,
    legend: LinearScale,
}

impl<'a> RenderContext<'a> {
    /// Derive the scales for `dataset` drawn into `viewport`.
    ///
    /// The viewport must be wider than zero and taller than the bottom
    /// margin, otherwise the grid has nowhere to go.
    pub fn new(
        dataset: &'a TemperatureDataset,
        viewport: Size,
        config: &'a HeatmapConfig,
    ) -> Result<Self, HeatmapError> {
        if !(viewport.width.is_finite() && viewport.width > 0.0) {
            return Err(HeatmapError::RenderPrecondition(format!(
                "viewport width {} is not positive",
                viewport.width
            )));
        }
        if !(viewport.height.is_finite() && viewport.height > config.margin) {
            return Err(HeatmapError::RenderPrecondition(format!(
                "viewport height {} leaves no room below the {}px margin",
                viewport.height, config.margin
            )));
        }

        let years = BandScale::new(dataset.distinct_years(), (0.0, viewport.width));
        let months = BandScale::new(0u8..12, (viewport.height, config.margin));
        let legend = LinearScale::new(
            (config.legend.min_variance, config.legend.max_variance),
            (0.0, config.legend.width),
        );

        Ok(Self {
            dataset,
            config,
            viewport,
            years,
            months,
            legend,
        })
    }

    /// Chart size for a mount point `scroll_width` wide in a window
    /// `inner_height` tall.
    #[must_use]
    pub fn viewport_for(scroll_width: f64, inner_height: f64, config: &HeatmapConfig) -> Size {
        Size::new(scroll_width, inner_height * config.height_ratio)
    }

    /// The dataset being drawn.
    #[must_use]
    pub const fn dataset(&self) -> &'a TemperatureDataset {
        self.dataset
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &'a HeatmapConfig {
        self.config
    }

    /// Main drawing surface size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Left/bottom margin.
    #[must_use]
    pub const fn margin(&self) -> f64 {
        self.config.margin
    }

    /// Year -> x band scale.
    #[must_use]
    pub const fn years(&self) -> &BandScale<i32> {
        &self.years
    }

    /// Month index -> y band scale.
    #[must_use]
    pub const fn months(&self) -> &BandScale<u8> {
        &self.months
    }

    /// Variance -> legend x scale.
    #[must_use]
    pub const fn legend(&self) -> &LinearScale {
        &self.legend
    }
}
