//! Thermograph: monthly global land-surface temperature heatmap for the web.
//!
//! The chart logic lives in `thermograph-core` and is re-exported here. This
//! crate adds the browser runtime: page bootstrap, the dataset fetch, a DOM
//! backed drawing surface and the hover tooltip wiring.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { mount, render_svg } from './thermograph.js';
//!
//! // `init` boots the chart into `#root` with the default configuration.
//! await init();
//!
//! // Or mount with overrides:
//! mount('{"mountId": "chart", "heightRatio": 0.6}');
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::needless_pass_by_value,
    clippy::future_not_send
)]

pub use thermograph_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{mount, render_svg_js, SvgSurface};
