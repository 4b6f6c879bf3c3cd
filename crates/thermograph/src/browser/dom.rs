//! DOM access and element construction from [`ElementSpec`]s.

use thermograph_core::page::{ElementSpec, Namespace, SVG_NS};
use thermograph_core::{HeatmapError, SurfaceError};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node, Window};

/// Convert a JS exception into a surface error.
pub fn js_error(err: JsValue) -> SurfaceError {
    SurfaceError(format!("{err:?}"))
}

pub fn window() -> Result<Window, HeatmapError> {
    web_sys::window().ok_or_else(|| HeatmapError::RenderPrecondition("no global window".into()))
}

pub fn document() -> Result<Document, HeatmapError> {
    window()?
        .document()
        .ok_or_else(|| HeatmapError::RenderPrecondition("no document".into()))
}

/// The element the chart is built under.
pub fn mount_point(document: &Document, id: &str) -> Result<Element, HeatmapError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| HeatmapError::RenderPrecondition(format!("mount point #{id} not found")))
}

/// `window.innerHeight` in CSS pixels.
pub fn inner_height() -> Result<f64, HeatmapError> {
    window()?
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .ok_or_else(|| HeatmapError::RenderPrecondition("window height unavailable".into()))
}

/// Create the element described by `spec`, children included.
pub fn build(document: &Document, spec: &ElementSpec) -> Result<Element, SurfaceError> {
    let el = match spec.namespace {
        Namespace::Html => document.create_element(spec.tag),
        Namespace::Svg => document.create_element_ns(Some(SVG_NS), spec.tag),
    }
    .map_err(js_error)?;

    if let Some(id) = spec.id {
        el.set_id(id);
    }
    if let Some(class) = spec.class {
        el.set_attribute("class", class).map_err(js_error)?;
    }
    for (name, value) in &spec.attributes {
        el.set_attribute(name, value).map_err(js_error)?;
    }
    if !spec.style.is_empty() {
        let style: Vec<String> = spec
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect();
        el.set_attribute("style", &style.join("; ")).map_err(js_error)?;
    }
    if let Some(text) = &spec.text {
        el.set_text_content(Some(text));
    }
    for child in &spec.children {
        el.append_child(&build(document, child)?).map_err(js_error)?;
    }
    Ok(el)
}

/// Build `spec` and append it to `parent`.
pub fn append(document: &Document, parent: &Node, spec: &ElementSpec) -> Result<Element, SurfaceError> {
    let el = build(document, spec)?;
    parent.append_child(&el).map_err(js_error)?;
    Ok(el)
}
