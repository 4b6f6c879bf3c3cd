//! WASM application entry points.

use super::dom;
use super::fetch::fetch_dataset;
use super::log;
use super::svg_surface::{Hover, SvgSurface};
use thermograph_core::{
    page, render, render_svg, HeatmapConfig, HeatmapError, RenderContext, Size, SurfaceError,
    TooltipController,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Boot the chart into the default mount point, if the page has one.
///
/// Pages that mount elsewhere call [`mount`] instead.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let config = HeatmapConfig::default();
    let has_mount = dom::document()
        .map(|doc| doc.get_element_by_id(&config.mount_id).is_some())
        .unwrap_or(false);
    if has_mount {
        wasm_bindgen_futures::spawn_local(run(config));
    } else {
        log::info(&format!(
            "thermograph: no #{} element, waiting for mount()",
            config.mount_id
        ));
    }
}

/// Boot the chart with a JSON configuration override.
#[wasm_bindgen]
pub fn mount(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config =
        HeatmapConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    wasm_bindgen_futures::spawn_local(run(config));
    Ok(())
}

/// Render a dataset to a standalone SVG document string.
#[wasm_bindgen(js_name = render_svg)]
pub fn render_svg_js(dataset_json: &str, width: f64, height: f64) -> Result<String, JsValue> {
    render_svg(
        dataset_json,
        Size::new(width, height),
        &HeatmapConfig::default(),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build the page, fetch the dataset and draw the chart.
///
/// Any failure leaves the header in place, shows an error banner under the
/// mount point and logs to the console.
pub async fn run(config: HeatmapConfig) {
    match try_run(&config).await {
        Ok(cells) => log::info(&format!("thermograph: rendered {cells} cells")),
        Err(err) => report(&config, &err),
    }
}

async fn try_run(config: &HeatmapConfig) -> Result<usize, HeatmapError> {
    config.validate()?;
    let document = dom::document()?;
    let mount = dom::mount_point(&document, &config.mount_id)?;
    dom::append(&document, &mount, &page::header(config))?;

    let viewport = RenderContext::viewport_for(
        f64::from(mount.scroll_width()),
        dom::inner_height()?,
        config,
    );

    let dataset = fetch_dataset(&config.data_url).await?;
    if dataset.is_empty() {
        log::warn("thermograph: dataset has no records");
    }
    let scene = render(&dataset, viewport, config)?;

    // The chart is drawn detached and only joins the page once complete.
    let graph = dom::build(&document, &page::graph(viewport))?;
    let graph_svg = graph
        .first_element_child()
        .ok_or_else(|| SurfaceError("graph container has no svg".into()))?;
    let legend_svg = dom::build(&document, &page::legend_surface(viewport, config))?;
    let tooltip: HtmlElement = dom::build(&document, &page::tooltip())?
        .dyn_into()
        .map_err(|_| SurfaceError("tooltip is not an HTML element".into()))?;

    let hover = Hover::new(TooltipController::new(&config.tooltip), tooltip.clone());
    let mut graph_surface = SvgSurface::new(document.clone(), graph_svg).with_hover(hover);
    let mut legend_surface = SvgSurface::new(document, legend_svg.clone());
    scene.commit_and_attach(&mut graph_surface, &mut legend_surface, |_, _| {
        for part in [&graph, &legend_svg, &*tooltip] {
            mount.append_child(part).map_err(dom::js_error)?;
        }
        Ok(())
    })?;
    graph_surface.persist();

    Ok(scene.cell_count())
}

fn report(config: &HeatmapConfig, err: &HeatmapError) {
    let message = err.to_string();
    log::error(&format!("thermograph: {message}"));
    if err.is_fetch_error() {
        log::warn(&format!(
            "thermograph: dataset unavailable at {}, reload to retry",
            config.data_url
        ));
    }

    let banner = dom::document().ok().and_then(|document| {
        let mount = document.get_element_by_id(&config.mount_id)?;
        Some(dom::append(&document, &mount, &page::error_banner(message)))
    });
    if let Some(Err(banner_err)) = banner {
        log::error(&format!("thermograph: cannot show error: {banner_err}"));
    }
}
