//! Browser runtime for the heatmap.
//!
//! Bridges the recorded scene to the DOM, fetches the dataset and routes
//! pointer events to the tooltip controller.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod log;
#[cfg(target_arch = "wasm32")]
pub mod svg_surface;

#[cfg(target_arch = "wasm32")]
pub use app::{mount, render_svg_js, run};
#[cfg(target_arch = "wasm32")]
pub use fetch::fetch_dataset;
#[cfg(target_arch = "wasm32")]
pub use svg_surface::SvgSurface;
