//! Hover tooltip state machine.
//!
//! Two states, `Hidden` (initial) and `Visible`. Entering a cell always
//! replaces the content, and leaving clears it, so repeated hovers never
//! pile up stale text.

use crate::config::TooltipConfig;
use crate::month::Month;
use crate::surface::CellDatum;
use crate::Point;
use std::fmt;

/// What the tooltip says about a hovered cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipContent {
    /// Calendar year
    pub year: i32,
    /// Zero-based month index
    pub month: u8,
    /// Absolute temperature in °C
    pub temperature: f64,
    /// Deviation from the base temperature in °C
    pub variance: f64,
}

impl TooltipContent {
    /// Display lines: "1900 - January", "5.5°C", "-2.5°C".
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        let month = Month::from_index(self.month).map_or("", Month::name);
        [
            format!("{} - {}", self.year, month),
            format!("{:.1}°C", self.temperature),
            format!("{:+.1}°C", self.variance),
        ]
    }
}

impl From<&CellDatum> for TooltipContent {
    fn from(cell: &CellDatum) -> Self {
        Self {
            year: cell.year,
            month: cell.month,
            temperature: cell.temperature,
            variance: cell.variance,
        }
    }
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Tooltip visibility and content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TooltipState {
    /// Not shown, no content.
    #[default]
    Hidden,
    /// Shown at `anchor` with `content`.
    Visible {
        content: TooltipContent,
        anchor: Point,
    },
}

/// Owns the tooltip state; the only place it changes.
#[derive(Debug, Clone, Default)]
pub struct TooltipController {
    state: TooltipState,
    offset: Point,
}

impl TooltipController {
    /// Hidden tooltip that will appear offset from the pointer.
    #[must_use]
    pub const fn new(config: &TooltipConfig) -> Self {
        Self {
            state: TooltipState::Hidden,
            offset: Point::new(config.offset_x, config.offset_y),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Whether the tooltip is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// Current content, if shown.
    #[must_use]
    pub const fn content(&self) -> Option<&TooltipContent> {
        match &self.state {
            TooltipState::Visible { content, .. } => Some(content),
            TooltipState::Hidden => None,
        }
    }

    /// Pointer entered a cell at page position `pointer`.
    pub fn pointer_enter(&mut self, cell: &CellDatum, pointer: Point) -> &TooltipState {
        self.state = TooltipState::Visible {
            content: TooltipContent::from(cell),
            anchor: pointer + self.offset,
        };
        &self.state
    }

    /// Pointer left a cell.
    pub fn pointer_leave(&mut self) -> &TooltipState {
        self.state = TooltipState::Hidden;
        &self.state
    }

    /// Inline style properties reflecting the current state.
    #[must_use]
    pub fn style(&self) -> Vec<(&'static str, String)> {
        match &self.state {
            TooltipState::Hidden => vec![("visibility", "hidden".to_string())],
            TooltipState::Visible { anchor, .. } => vec![
                ("visibility", "visible".to_string()),
                ("left", format!("{}px", anchor.x)),
                ("top", format!("{}px", anchor.y)),
            ],
        }
    }

    /// Text the tooltip element should hold (empty when hidden).
    #[must_use]
    pub fn text(&self) -> String {
        self.content().map(ToString::to_string).unwrap_or_default()
    }
}
