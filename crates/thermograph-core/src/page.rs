//! Static page structure created under the mount point.
//!
//! The browser runtime turns these specs into DOM elements; keeping them as
//! plain data lets the page shape be checked without a browser.

use crate::config::HeatmapConfig;
use crate::Size;

/// SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Element ids exposed for inspection.
pub mod ids {
    /// Page title (`h1`)
    pub const TITLE: &str = "title";
    /// Page subtitle (`h2`)
    pub const DESCRIPTION: &str = "description";
    /// Container of the main drawing surface
    pub const GRAPH: &str = "graph";
    /// Year axis group
    pub const X_AXIS: &str = "x-axis";
    /// Month axis group
    pub const Y_AXIS: &str = "y-axis";
    /// Legend group
    pub const LEGEND: &str = "legend";
    /// Floating tooltip
    pub const TOOLTIP: &str = "tooltip";
    /// Error banner shown when the chart cannot be drawn
    pub const ERROR: &str = "error";
}

/// Class carried by every heatmap cell.
pub const CELL_CLASS: &str = "cell";

/// Element namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Html,
    Svg,
}

/// A DOM element to create, with its children.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    /// Tag name
    pub tag: &'static str,
    /// Namespace the tag lives in
    pub namespace: Namespace,
    /// Element id
    pub id: Option<&'static str>,
    /// CSS class
    pub class: Option<&'static str>,
    /// Text content
    pub text: Option<String>,
    /// Attributes, in the order they are set
    pub attributes: Vec<(&'static str, String)>,
    /// Inline style properties
    pub style: Vec<(&'static str, &'static str)>,
    /// Child elements
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    fn new(tag: &'static str, namespace: Namespace) -> Self {
        Self {
            tag,
            namespace,
            id: None,
            class: None,
            text: None,
            attributes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    /// HTML element.
    #[must_use]
    pub fn html(tag: &'static str) -> Self {
        Self::new(tag, Namespace::Html)
    }

    /// SVG element.
    #[must_use]
    pub fn svg(tag: &'static str) -> Self {
        Self::new(tag, Namespace::Svg)
    }

    /// Set the id.
    #[must_use]
    pub const fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the class.
    #[must_use]
    pub const fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    /// Add an inline style property.
    #[must_use]
    pub fn style(mut self, property: &'static str, value: &'static str) -> Self {
        self.style.push((property, value));
        self
    }

    /// Add a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for a descendant (or self) by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Self> {
        if self.id == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// Title block.
#[must_use]
pub fn header(config: &HeatmapConfig) -> ElementSpec {
    ElementSpec::html("div")
        .class("header")
        .child(ElementSpec::html("h1").id(ids::TITLE).text(config.title.clone()))
        .child(
            ElementSpec::html("h2")
                .id(ids::DESCRIPTION)
                .text(config.description.clone()),
        )
}

/// Graph container holding the main drawing surface.
#[must_use]
pub fn graph(viewport: Size) -> ElementSpec {
    ElementSpec::html("div").id(ids::GRAPH).child(
        ElementSpec::svg("svg")
            .attr("width", viewport.width)
            .attr("height", viewport.height),
    )
}

/// Drawing surface for the legend.
#[must_use]
pub fn legend_surface(viewport: Size, config: &HeatmapConfig) -> ElementSpec {
    ElementSpec::svg("svg")
        .class("legend-surface")
        .attr("width", viewport.width)
        .attr("height", config.legend.height)
}

/// Hidden, absolutely positioned tooltip overlay.
#[must_use]
pub fn tooltip() -> ElementSpec {
    ElementSpec::html("div")
        .id(ids::TOOLTIP)
        .style("visibility", "hidden")
        .style("position", "absolute")
        .style("pointer-events", "none")
        .style("white-space", "pre-line")
}

/// Error banner replacing the chart.
#[must_use]
pub fn error_banner(message: impl Into<String>) -> ElementSpec {
    ElementSpec::html("p")
        .id(ids::ERROR)
        .attr("role", "alert")
        .text(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_texts() {
        let spec = header(&HeatmapConfig::default());
        assert_eq!(
            spec.find(ids::TITLE).unwrap().text.as_deref(),
            Some("FreeCodeCamp Heatmap")
        );
        assert_eq!(
            spec.find(ids::DESCRIPTION).unwrap().text.as_deref(),
            Some("Monthly Global Land-Surface Temperature")
        );
    }

    #[test]
    fn test_graph_svg_sized_to_viewport() {
        let spec = graph(Size::new(1200.0, 640.0));
        assert_eq!(spec.id, Some(ids::GRAPH));
        let svg = &spec.children[0];
        assert_eq!(svg.namespace, Namespace::Svg);
        assert_eq!(
            svg.attributes,
            vec![("width", "1200".to_string()), ("height", "640".to_string())]
        );
    }

    #[test]
    fn test_tooltip_starts_hidden() {
        let spec = tooltip();
        assert!(spec.style.contains(&("visibility", "hidden")));
        assert!(spec.style.contains(&("position", "absolute")));
    }

    #[test]
    fn test_error_banner() {
        let spec = error_banner("cannot render: no #root");
        assert_eq!(spec.id, Some(ids::ERROR));
        assert_eq!(spec.text.as_deref(), Some("cannot render: no #root"));
    }
}
