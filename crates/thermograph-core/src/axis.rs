//! Tick axes for band and linear scales.
//!
//! Geometry matches d3-axis defaults: a domain line along the scale range,
//! 6px tick marks pointing away from the plot, and labels 3px beyond the
//! tick ends.

use crate::scale::{BandScale, LinearScale};
use crate::surface::{
    Baseline, DrawSurface, GroupId, LineSpec, SurfaceError, TextAnchor, TextSpec,
};
use crate::{Color, Point};
use std::hash::Hash;

/// Tick mark length in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Label font size in pixels.
pub const LABEL_FONT_SIZE: f64 = 10.0;

/// Which side of the plot the axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Below the plot, ticks pointing down
    Bottom,
    /// Left of the plot, ticks pointing left
    Left,
}

impl Orientation {
    const fn is_horizontal(self) -> bool {
        matches!(self, Self::Bottom)
    }

    /// +1 for ticks pointing down, -1 for ticks pointing left.
    const fn direction(self) -> f64 {
        match self {
            Self::Bottom => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// A labelled tick at an offset along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Offset along the axis in pixels
    pub offset: f64,
    /// Label text
    pub label: String,
}

/// An axis ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    orientation: Orientation,
    extent: (f64, f64),
    ticks: Vec<Tick>,
}

impl Axis {
    /// Axis over a band scale; ticks sit at band centres.
    pub fn from_band<T, F, L>(
        scale: &BandScale<T>,
        orientation: Orientation,
        filter: F,
        label: L,
    ) -> Self
    where
        T: Clone + Eq + Hash,
        F: Fn(&T) -> bool,
        L: Fn(&T) -> String,
    {
        let ticks = scale
            .domain()
            .iter()
            .filter(|v| filter(*v))
            .filter_map(|v| {
                scale.center(v).map(|offset| Tick {
                    offset,
                    label: label(v),
                })
            })
            .collect();
        Self {
            orientation,
            extent: scale.range(),
            ticks,
        }
    }

    /// Axis over a linear scale with about `count` round ticks.
    pub fn from_linear<L>(
        scale: &LinearScale,
        orientation: Orientation,
        count: usize,
        label: L,
    ) -> Self
    where
        L: Fn(f64) -> String,
    {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick {
                offset: scale.map(v),
                label: label(v),
            })
            .collect();
        Self {
            orientation,
            extent: scale.range(),
            ticks,
        }
    }

    /// Ticks in domain order.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Draw the domain line, tick marks and labels into `parent`.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        parent: Option<GroupId>,
    ) -> Result<(), SurfaceError> {
        let along = |offset: f64, across: f64| {
            if self.orientation.is_horizontal() {
                Point::new(offset, across)
            } else {
                Point::new(across, offset)
            }
        };
        let k = self.orientation.direction();

        surface.add_line(
            parent,
            &LineSpec {
                from: along(self.extent.0, 0.0),
                to: along(self.extent.1, 0.0),
                stroke: Color::BLACK,
                width: 1.0,
            },
        )?;

        let (anchor, baseline) = match self.orientation {
            Orientation::Bottom => (TextAnchor::Middle, Baseline::Hanging),
            Orientation::Left => (TextAnchor::End, Baseline::Middle),
        };

        for tick in &self.ticks {
            surface.add_line(
                parent,
                &LineSpec {
                    from: along(tick.offset, 0.0),
                    to: along(tick.offset, k * TICK_SIZE),
                    stroke: Color::BLACK,
                    width: 1.0,
                },
            )?;
            surface.add_text(
                parent,
                &TextSpec {
                    position: along(tick.offset, k * (TICK_SIZE + TICK_PADDING)),
                    content: tick.label.clone(),
                    anchor,
                    baseline,
                    font_size: LABEL_FONT_SIZE,
                    fill: Color::BLACK,
                },
            )?;
        }
        Ok(())
    }
}
