//! Drawing-surface abstraction and an in-memory recording implementation.
//!
//! Renderers never touch the DOM directly: they emit groups, rectangles,
//! lines and text through [`DrawSurface`]. The browser crate implements the
//! trait on top of real SVG elements; [`RecordingSurface`] captures the same
//! calls as a [`Node`] list that tests can inspect and that can later be
//! replayed onto another surface in one pass.

use crate::{Color, Point, Rect, Size};
use serde::Serialize;
use thiserror::Error;

/// Handle to a group created on a surface.
pub type GroupId = usize;

/// Failure reported by a drawing surface backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("drawing surface error: {0}")]
pub struct SurfaceError(pub String);

/// Record behind a heatmap cell, attached to its rectangle so that
/// inspection tools and hover handlers can read it back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellDatum {
    /// Calendar year (`data-year`)
    pub year: i32,
    /// Zero-based month index (`data-month`)
    pub month: u8,
    /// Absolute temperature in °C (`data-temp`)
    pub temperature: f64,
    /// Deviation from the base temperature in °C
    pub variance: f64,
}

impl CellDatum {
    /// Inspectable `data-*` attributes, in the order they are written.
    #[must_use]
    pub fn data_attributes(&self) -> [(&'static str, String); 3] {
        [
            ("data-year", self.year.to_string()),
            ("data-month", self.month.to_string()),
            ("data-temp", self.temperature.to_string()),
        ]
    }
}

/// A group (`<g>`) with an optional id/class and a translation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupSpec {
    /// Element id
    pub id: Option<String>,
    /// CSS class
    pub class: Option<String>,
    /// Translation applied to all children
    pub translate: Point,
}

impl GroupSpec {
    /// Group with an id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the translation.
    #[must_use]
    pub const fn translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Point::new(x, y);
        self
    }

    /// Set the class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectSpec {
    /// Position and size
    pub bounds: Rect,
    /// Fill color
    pub fill: Color,
    /// CSS class
    pub class: Option<String>,
    /// Heatmap record, for cells
    pub cell: Option<CellDatum>,
}

impl RectSpec {
    /// Plain filled rectangle.
    #[must_use]
    pub const fn filled(bounds: Rect, fill: Color) -> Self {
        Self {
            bounds,
            fill,
            class: None,
            cell: None,
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` keyword.
    #[must_use]
    pub const fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical placement of a label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Baseline {
    /// Text sits on the anchor
    #[default]
    Alphabetic,
    /// Text hangs below the anchor
    Hanging,
    /// Text is vertically centred on the anchor
    Middle,
}

impl Baseline {
    /// `dy` shift d3 axes use for the same placement.
    #[must_use]
    pub const fn dy(self) -> Option<&'static str> {
        match self {
            Self::Alphabetic => None,
            Self::Hanging => Some("0.71em"),
            Self::Middle => Some("0.32em"),
        }
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpec {
    /// Anchor point
    pub position: Point,
    /// Text content
    pub content: String,
    /// Horizontal alignment
    pub anchor: TextAnchor,
    /// Vertical alignment
    pub baseline: Baseline,
    /// Font size in pixels
    pub font_size: f64,
    /// Text color
    pub fill: Color,
}

/// A straight stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSpec {
    /// Start point
    pub from: Point,
    /// End point
    pub to: Point,
    /// Stroke color
    pub stroke: Color,
    /// Stroke width
    pub width: f64,
}

/// Minimal drawing interface the renderers target.
///
/// `parent = None` attaches to the surface root.
pub trait DrawSurface {
    /// Create a group and return its handle.
    fn add_group(
        &mut self,
        parent: Option<GroupId>,
        group: &GroupSpec,
    ) -> Result<GroupId, SurfaceError>;

    /// Add a filled rectangle.
    fn add_rect(&mut self, parent: Option<GroupId>, rect: &RectSpec) -> Result<(), SurfaceError>;

    /// Add a text label.
    fn add_text(&mut self, parent: Option<GroupId>, text: &TextSpec) -> Result<(), SurfaceError>;

    /// Add a line.
    fn add_line(&mut self, parent: Option<GroupId>, line: &LineSpec) -> Result<(), SurfaceError>;
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Group {
        id: GroupId,
        parent: Option<GroupId>,
        spec: GroupSpec,
    },
    Rect {
        parent: Option<GroupId>,
        spec: RectSpec,
    },
    Text {
        parent: Option<GroupId>,
        spec: TextSpec,
    },
    Line {
        parent: Option<GroupId>,
        spec: LineSpec,
    },
}

impl Node {
    /// Parent group of this node.
    #[must_use]
    pub const fn parent(&self) -> Option<GroupId> {
        match self {
            Self::Group { parent, .. }
            | Self::Rect { parent, .. }
            | Self::Text { parent, .. }
            | Self::Line { parent, .. } => *parent,
        }
    }
}

/// A [`DrawSurface`] that records every call.
///
/// Useful for:
/// - Testing (inspect exactly what was drawn)
/// - Atomic rendering (build the whole scene, then replay it)
/// - Serialization (JSON scene dumps, standalone SVG)
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingSurface {
    size: Size,
    nodes: Vec<Node>,
    #[serde(skip)]
    groups: usize,
}

impl RecordingSurface {
    /// Create an empty surface of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Surface dimensions.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// All recorded nodes, in call order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of recorded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every recorded rectangle.
    pub fn rects(&self) -> impl Iterator<Item = &RectSpec> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Rect { spec, .. } => Some(spec),
            _ => None,
        })
    }

    /// Rectangles that carry a heatmap record.
    pub fn cells(&self) -> impl Iterator<Item = (&RectSpec, &CellDatum)> + '_ {
        self.rects()
            .filter_map(|rect| rect.cell.as_ref().map(|cell| (rect, cell)))
    }

    /// Every recorded text label.
    pub fn texts(&self) -> impl Iterator<Item = &TextSpec> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Text { spec, .. } => Some(spec),
            _ => None,
        })
    }

    /// Handle of the group with element id `id`.
    #[must_use]
    pub fn group_by_id(&self, id: &str) -> Option<GroupId> {
        self.nodes.iter().find_map(|node| match node {
            Node::Group { id: gid, spec, .. } if spec.id.as_deref() == Some(id) => Some(*gid),
            _ => None,
        })
    }

    /// Spec of a group.
    #[must_use]
    pub fn group_spec(&self, group: GroupId) -> Option<&GroupSpec> {
        self.nodes.iter().find_map(|node| match node {
            Node::Group { id, spec, .. } if *id == group => Some(spec),
            _ => None,
        })
    }

    /// Direct children of a group (or of the root for `None`).
    pub fn children(&self, parent: Option<GroupId>) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |node| node.parent() == parent)
    }

    /// Re-issue every recorded call against `target`, in order.
    pub fn replay<S: DrawSurface + ?Sized>(&self, target: &mut S) -> Result<(), SurfaceError> {
        let mut mapped: Vec<Option<GroupId>> = vec![None; self.groups];
        let resolve = |mapped: &[Option<GroupId>], parent: Option<GroupId>| match parent {
            None => Ok(None),
            Some(p) => mapped
                .get(p)
                .copied()
                .flatten()
                .map(Some)
                .ok_or_else(|| SurfaceError(format!("group {p} replayed before creation"))),
        };

        for node in &self.nodes {
            match node {
                Node::Group { id, parent, spec } => {
                    let parent = resolve(&mapped, *parent)?;
                    let new_id = target.add_group(parent, spec)?;
                    if let Some(slot) = mapped.get_mut(*id) {
                        *slot = Some(new_id);
                    }
                }
                Node::Rect { parent, spec } => target.add_rect(resolve(&mapped, *parent)?, spec)?,
                Node::Text { parent, spec } => target.add_text(resolve(&mapped, *parent)?, spec)?,
                Node::Line { parent, spec } => target.add_line(resolve(&mapped, *parent)?, spec)?,
            }
        }
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn add_group(
        &mut self,
        parent: Option<GroupId>,
        group: &GroupSpec,
    ) -> Result<GroupId, SurfaceError> {
        let id = self.groups;
        self.groups += 1;
        self.nodes.push(Node::Group {
            id,
            parent,
            spec: group.clone(),
        });
        Ok(id)
    }

    fn add_rect(&mut self, parent: Option<GroupId>, rect: &RectSpec) -> Result<(), SurfaceError> {
        self.nodes.push(Node::Rect {
            parent,
            spec: rect.clone(),
        });
        Ok(())
    }

    fn add_text(&mut self, parent: Option<GroupId>, text: &TextSpec) -> Result<(), SurfaceError> {
        self.nodes.push(Node::Text {
            parent,
            spec: text.clone(),
        });
        Ok(())
    }

    fn add_line(&mut self, parent: Option<GroupId>, line: &LineSpec) -> Result<(), SurfaceError> {
        self.nodes.push(Node::Line {
            parent,
            spec: line.clone(),
        });
        Ok(())
    }
}
