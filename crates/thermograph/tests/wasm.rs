//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use thermograph::browser::dom;
use thermograph::browser::svg_surface::Hover;
use thermograph::page::{self, ids};
use thermograph::{
    render, CellDatum, DrawSurface, GroupId, GroupSpec, HeatmapConfig, HeatmapError, LineSpec,
    RectSpec, Size, SurfaceError, SvgSurface, TemperatureDataset, TextSpec, TooltipController,
};
use web_sys::{Element, HtmlElement, MouseEvent};

const TWO_RECORDS: &str = r#"{
    "baseTemperature": 8.0,
    "monthlyVariance": [
        { "year": 1900, "month": 1, "variance": -2.5 },
        { "year": 1900, "month": 2, "variance": 3.1 }
    ]
}"#;

fn fresh_host() -> Element {
    let document = dom::document().expect("document");
    let host = document.create_element("div").expect("div");
    document
        .body()
        .expect("body")
        .append_child(&host)
        .expect("append host");
    host
}

struct Drawn {
    graph: Element,
    legend: Element,
    tooltip: HtmlElement,
    hover: Hover,
}

struct Detached {
    graph: Element,
    legend: Element,
    tooltip: HtmlElement,
    hover: Hover,
    graph_surface: SvgSurface,
    legend_surface: SvgSurface,
}

fn detached_chart(config: &HeatmapConfig, viewport: Size) -> Detached {
    let document = dom::document().expect("document");
    let graph = dom::build(&document, &page::graph(viewport)).expect("graph");
    let graph_svg = graph.first_element_child().expect("graph svg");
    let legend = dom::build(&document, &page::legend_surface(viewport, config)).expect("legend");
    let tooltip: HtmlElement = dom::build(&document, &page::tooltip())
        .expect("tooltip")
        .dyn_into()
        .expect("html tooltip");

    let hover = Hover::new(TooltipController::new(&config.tooltip), tooltip.clone());
    let graph_surface = SvgSurface::new(document.clone(), graph_svg).with_hover(hover.clone());
    let legend_surface = SvgSurface::new(document, legend.clone());
    Detached {
        graph,
        legend,
        tooltip,
        hover,
        graph_surface,
        legend_surface,
    }
}

fn attach_all(host: &Element, parts: [&Element; 3]) -> Result<(), HeatmapError> {
    for part in parts {
        host.append_child(part).map_err(dom::js_error)?;
    }
    Ok(())
}

fn draw_two_records(host: &Element) -> Drawn {
    let config = HeatmapConfig::default();
    let viewport = Size::new(800.0, 400.0);
    let dataset = TemperatureDataset::from_json(TWO_RECORDS).expect("dataset");
    let scene = render(&dataset, viewport, &config).expect("scene");

    let mut chart = detached_chart(&config, viewport);
    let parts = [&chart.graph, &chart.legend, &*chart.tooltip];
    scene
        .commit_and_attach(&mut chart.graph_surface, &mut chart.legend_surface, |_, _| {
            attach_all(host, parts)
        })
        .expect("commit");
    assert_eq!(chart.graph_surface.listener_count(), 4);
    chart.graph_surface.persist();

    Drawn {
        graph: chart.graph,
        legend: chart.legend,
        tooltip: chart.tooltip,
        hover: chart.hover,
    }
}

/// Passes calls through until its rect budget runs out.
struct Flaky {
    inner: SvgSurface,
    rects_left: usize,
}

impl DrawSurface for Flaky {
    fn add_group(
        &mut self,
        parent: Option<GroupId>,
        group: &GroupSpec,
    ) -> Result<GroupId, SurfaceError> {
        self.inner.add_group(parent, group)
    }

    fn add_rect(&mut self, parent: Option<GroupId>, rect: &RectSpec) -> Result<(), SurfaceError> {
        if self.rects_left == 0 {
            return Err(SurfaceError("createElementNS failed".into()));
        }
        self.rects_left -= 1;
        self.inner.add_rect(parent, rect)
    }

    fn add_text(&mut self, parent: Option<GroupId>, text: &TextSpec) -> Result<(), SurfaceError> {
        self.inner.add_text(parent, text)
    }

    fn add_line(&mut self, parent: Option<GroupId>, line: &LineSpec) -> Result<(), SurfaceError> {
        self.inner.add_line(parent, line)
    }
}

fn dispatch(target: &Element, kind: &str) {
    let event = MouseEvent::new(kind).expect("event");
    target.dispatch_event(&event).expect("dispatch");
}

// ============================================================================
// Page structure
// ============================================================================

#[wasm_bindgen_test]
fn test_header_builds_title_and_description() {
    let host = fresh_host();
    let document = dom::document().expect("document");
    dom::append(&document, &host, &page::header(&HeatmapConfig::default())).expect("header");

    let title = host.query_selector("#title").expect("query").expect("h1");
    assert_eq!(title.tag_name(), "H1");
    assert_eq!(title.text_content().as_deref(), Some("FreeCodeCamp Heatmap"));
    let description = host
        .query_selector("#description")
        .expect("query")
        .expect("h2");
    assert_eq!(
        description.text_content().as_deref(),
        Some("Monthly Global Land-Surface Temperature")
    );
}

#[wasm_bindgen_test]
fn test_missing_mount_point_is_reported() {
    let document = dom::document().expect("document");
    let err = dom::mount_point(&document, "no-such-mount").unwrap_err();
    assert!(err.to_string().contains("#no-such-mount"));
}

// ============================================================================
// DOM drawing surface
// ============================================================================

#[wasm_bindgen_test]
fn test_cells_carry_data_attributes() {
    let host = fresh_host();
    let drawn = draw_two_records(&host);

    let cells = drawn.graph.query_selector_all(".cell").expect("cells");
    assert_eq!(cells.length(), 2);

    let first: Element = cells.item(0).expect("cell").dyn_into().expect("element");
    assert_eq!(first.namespace_uri().as_deref(), Some(page::SVG_NS));
    assert_eq!(first.get_attribute("data-year").as_deref(), Some("1900"));
    assert_eq!(first.get_attribute("data-month").as_deref(), Some("0"));
    assert_eq!(first.get_attribute("data-temp").as_deref(), Some("5.5"));
    assert_eq!(first.get_attribute("fill").as_deref(), Some("#339af0"));
}

#[wasm_bindgen_test]
fn test_failed_commit_leaves_mount_untouched() {
    let host = fresh_host();
    let config = HeatmapConfig::default();
    let viewport = Size::new(800.0, 400.0);
    let dataset = TemperatureDataset::from_json(TWO_RECORDS).expect("dataset");
    let scene = render(&dataset, viewport, &config).expect("scene");

    let chart = detached_chart(&config, viewport);
    let parts = [&chart.graph, &chart.legend, &*chart.tooltip];
    let mut graph_surface = Flaky {
        inner: chart.graph_surface,
        rects_left: 1,
    };
    let mut legend_surface = chart.legend_surface;
    let result = scene.commit_and_attach(&mut graph_surface, &mut legend_surface, |_, _| {
        attach_all(&host, parts)
    });

    assert!(matches!(result, Err(HeatmapError::Surface(_))));
    assert_eq!(host.child_element_count(), 0);
    assert_eq!(chart.graph.query_selector_all(".cell").expect("cells").length(), 1);
}

#[wasm_bindgen_test]
fn test_axes_and_legend_are_inspectable() {
    let host = fresh_host();
    let drawn = draw_two_records(&host);

    assert!(drawn
        .graph
        .query_selector(&format!("#{}", ids::X_AXIS))
        .expect("query")
        .is_some());
    assert!(drawn
        .graph
        .query_selector(&format!("#{}", ids::Y_AXIS))
        .expect("query")
        .is_some());
    let legend = drawn
        .legend
        .query_selector(&format!("#{}", ids::LEGEND))
        .expect("query")
        .expect("legend group");
    assert_eq!(legend.query_selector_all("rect").expect("rects").length(), 16);
}

// ============================================================================
// Tooltip
// ============================================================================

#[wasm_bindgen_test]
fn test_hover_shows_and_hides_tooltip() {
    let host = fresh_host();
    let drawn = draw_two_records(&host);
    let controller = drawn.hover.controller();
    assert!(!controller.borrow().is_visible());

    let cell = drawn
        .graph
        .query_selector(".cell")
        .expect("query")
        .expect("cell");

    dispatch(&cell, "mouseover");
    assert!(controller.borrow().is_visible());
    assert_eq!(
        drawn.tooltip.style().get_property_value("visibility").ok().as_deref(),
        Some("visible")
    );
    assert_eq!(drawn.tooltip.get_attribute("data-year").as_deref(), Some("1900"));
    let text = drawn.tooltip.text_content().unwrap_or_default();
    assert!(text.starts_with("1900 - January"));

    dispatch(&cell, "mouseout");
    assert!(!controller.borrow().is_visible());
    assert_eq!(
        drawn.tooltip.style().get_property_value("visibility").ok().as_deref(),
        Some("hidden")
    );
    assert_eq!(drawn.tooltip.text_content().unwrap_or_default(), "");
}

#[wasm_bindgen_test]
fn test_repeated_hovers_do_not_accumulate() {
    let host = fresh_host();
    let drawn = draw_two_records(&host);
    let cell = drawn
        .graph
        .query_selector(".cell")
        .expect("query")
        .expect("cell");

    for _ in 0..5 {
        dispatch(&cell, "mouseover");
        dispatch(&cell, "mouseout");
    }
    dispatch(&cell, "mouseover");
    let text = drawn.tooltip.text_content().unwrap_or_default();
    assert_eq!(text.matches("1900 - January").count(), 1);
}

#[wasm_bindgen_test]
fn test_sync_mirrors_controller_state() {
    let document = dom::document().expect("document");
    let tooltip: HtmlElement = dom::build(&document, &page::tooltip())
        .expect("tooltip")
        .dyn_into()
        .expect("html tooltip");
    let hover = Hover::new(
        TooltipController::new(&HeatmapConfig::default().tooltip),
        tooltip.clone(),
    );
    let controller = hover.controller();
    let cell = CellDatum {
        year: 1850,
        month: 11,
        temperature: 7.2,
        variance: -0.8,
    };

    controller
        .borrow_mut()
        .pointer_enter(&cell, thermograph::Point::new(40.0, 60.0));
    hover.sync(&controller.borrow()).expect("sync visible");
    assert_eq!(tooltip.get_attribute("data-year").as_deref(), Some("1850"));
    assert_eq!(
        tooltip.style().get_property_value("left").ok().as_deref(),
        Some("50px")
    );
    assert!(tooltip
        .text_content()
        .unwrap_or_default()
        .starts_with("1850 - December"));

    controller.borrow_mut().pointer_leave();
    hover.sync(&controller.borrow()).expect("sync hidden");
    assert!(tooltip.get_attribute("data-year").is_none());
    assert_eq!(
        tooltip.style().get_property_value("visibility").ok().as_deref(),
        Some("hidden")
    );
}

// ============================================================================
// JS API
// ============================================================================

#[wasm_bindgen_test]
fn test_render_svg_export() {
    let svg = thermograph::render_svg_js(TWO_RECORDS, 800.0, 400.0).expect("svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"id="x-axis""#));

    assert!(thermograph::render_svg_js("not json", 800.0, 400.0).is_err());
}

#[wasm_bindgen_test]
fn test_mount_rejects_invalid_config() {
    assert!(thermograph::mount(r#"{"heightRatio": 0}"#).is_err());
    assert!(thermograph::mount("[").is_err());
}
