//! Color legend: one swatch per bucket above a °C tick axis.
//!
//! The legend depends only on the fixed variance domain, never on the
//! dataset, so it always shows every bucket.

use crate::axis::{Axis, Orientation};
use crate::classify::{classify, BUCKET_COUNT, TOP_THRESHOLD};
use crate::context::RenderContext;
use crate::page::ids;
use crate::scale::LinearScale;
use crate::surface::{DrawSurface, GroupSpec, RectSpec, SurfaceError};
use crate::Rect;

/// Variance a swatch stands for: the midpoint of its bucket, warmest first
/// (7.5, 6.5, ... -7.5).
#[must_use]
pub fn swatch_variance(index: usize) -> f64 {
    f64::from(TOP_THRESHOLD) + 0.5 - index as f64
}

/// Tick label for a legend value.
#[must_use]
pub fn format_degrees(value: f64) -> String {
    format!("{value}°C")
}

/// The swatch rectangles, in bucket order.
#[must_use]
pub fn swatches(ctx: &RenderContext<'_>) -> Vec<RectSpec> {
    let legend = &ctx.config().legend;
    let scale = ctx.legend();
    let first = scale.domain().0 - 1.0;

    (0..BUCKET_COUNT)
        .map(|i| {
            let x = scale.map(first + i as f64) + legend.offset_x;
            RectSpec::filled(
                Rect::new(x, legend.offset_y, legend.swatch_width, legend.swatch_height),
                classify(swatch_variance(i)),
            )
        })
        .collect()
}

/// Legend tick axis.
#[must_use]
pub fn legend_axis(scale: &LinearScale) -> Axis {
    Axis::from_linear(
        scale,
        Orientation::Bottom,
        LinearScale::DEFAULT_TICKS,
        format_degrees,
    )
}

/// Draw the legend group: the tick axis, then every swatch.
pub fn render_legend<S: DrawSurface + ?Sized>(
    ctx: &RenderContext<'_>,
    surface: &mut S,
) -> Result<(), SurfaceError> {
    let legend = &ctx.config().legend;
    let group = surface.add_group(None, &GroupSpec::with_id(ids::LEGEND))?;

    let axis_group = surface.add_group(
        Some(group),
        &GroupSpec::default()
            .class("legend-axis")
            .translate(legend.offset_x, legend.axis_y),
    )?;
    legend_axis(ctx.legend()).draw(surface, Some(axis_group))?;

    for swatch in swatches(ctx) {
        surface.add_rect(Some(group), &swatch)?;
    }
    Ok(())
}
