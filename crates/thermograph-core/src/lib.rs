//! Core of the Thermograph monthly global temperature heatmap.
//!
//! This crate is platform independent and does no I/O:
//! - Data model: [`TemperatureDataset`], [`MonthlyRecord`], [`Month`]
//! - Color buckets: [`classify`]
//! - Scales and axes: [`BandScale`], [`LinearScale`], [`Axis`]
//! - Drawing: the [`DrawSurface`] trait and [`RecordingSurface`]
//! - Rendering: [`render`] builds a [`Scene`] from a dataset
//! - Interaction: [`TooltipController`]

mod color;
mod geometry;
mod month;

pub mod axis;
pub mod classify;
pub mod config;
pub mod context;
pub mod dataset;
pub mod error;
pub mod heatmap;
pub mod legend;
pub mod page;
pub mod render;
pub mod scale;
pub mod surface;
pub mod svg;
pub mod tooltip;

pub use axis::{Axis, Orientation, Tick};
pub use classify::{bucket_index, classify, BUCKET_COUNT, PALETTE};
pub use color::{Color, ColorParseError};
pub use config::{ConfigError, HeatmapConfig, LegendConfig, TooltipConfig, DEFAULT_DATA_URL};
pub use context::RenderContext;
pub use dataset::{DatasetError, MonthlyRecord, TemperatureDataset};
pub use error::HeatmapError;
pub use geometry::{Point, Rect, Size};
pub use month::Month;
pub use render::{render, render_svg, Scene};
pub use scale::{BandScale, LinearScale};
pub use surface::{
    CellDatum, DrawSurface, GroupId, GroupSpec, LineSpec, Node, RecordingSurface, RectSpec,
    SurfaceError, TextSpec,
};
pub use tooltip::{TooltipContent, TooltipController, TooltipState};
