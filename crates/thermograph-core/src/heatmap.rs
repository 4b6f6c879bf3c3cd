//! Heatmap grid: one cell per monthly record plus the year and month axes.

use crate::axis::{Axis, Orientation};
use crate::classify::classify;
use crate::context::RenderContext;
use crate::dataset::MonthlyRecord;
use crate::month::Month;
use crate::page::{ids, CELL_CLASS};
use crate::surface::{CellDatum, DrawSurface, GroupSpec, RectSpec, SurfaceError};
use crate::Rect;

/// Years labelled on the x-axis are multiples of this.
pub const YEAR_TICK_INTERVAL: i32 = 10;

/// Project one record to its cell rectangle.
///
/// `None` only if the record's year or month is missing from the scales,
/// which cannot happen for records of the context's own dataset.
#[must_use]
pub fn project_cell(ctx: &RenderContext<'_>, record: &MonthlyRecord) -> Option<RectSpec> {
    let margin = ctx.margin();
    let x = ctx.years().position(&record.year)? + margin;
    let y = ctx.months().position(&record.month_index())? - margin;
    let base = ctx.dataset().base_temperature();

    Some(RectSpec {
        bounds: Rect::new(x, y, ctx.years().bandwidth(), ctx.months().bandwidth()),
        fill: classify(record.variance),
        class: Some(CELL_CLASS.to_string()),
        cell: Some(CellDatum {
            year: record.year,
            month: record.month_index(),
            temperature: record.absolute_temperature(base),
            variance: record.variance,
        }),
    })
}

/// Year axis along the bottom of the grid.
#[must_use]
pub fn year_axis(ctx: &RenderContext<'_>) -> Axis {
    Axis::from_band(
        ctx.years(),
        Orientation::Bottom,
        |year| year % YEAR_TICK_INTERVAL == 0,
        ToString::to_string,
    )
}

/// Month axis along the left of the grid, labelled with month names.
#[must_use]
pub fn month_axis(ctx: &RenderContext<'_>) -> Axis {
    Axis::from_band(
        ctx.months(),
        Orientation::Left,
        |_| true,
        |&index| Month::from_index(index).map_or_else(String::new, |m| m.name().to_string()),
    )
}

/// Draw both axes and every cell; returns the number of cells drawn.
pub fn render_heatmap<S: DrawSurface + ?Sized>(
    ctx: &RenderContext<'_>,
    surface: &mut S,
) -> Result<usize, SurfaceError> {
    let margin = ctx.margin();
    let height = ctx.viewport().height;

    let x_axis = surface.add_group(
        None,
        &GroupSpec::with_id(ids::X_AXIS).translate(margin, height - margin),
    )?;
    year_axis(ctx).draw(surface, Some(x_axis))?;

    let y_axis = surface.add_group(
        None,
        &GroupSpec::with_id(ids::Y_AXIS).translate(margin, -margin),
    )?;
    month_axis(ctx).draw(surface, Some(y_axis))?;

    let mut drawn = 0;
    for record in ctx.dataset().records() {
        if let Some(cell) = project_cell(ctx, record) {
            surface.add_rect(None, &cell)?;
            drawn += 1;
        }
    }
    Ok(drawn)
}
