//! Dataset download.

use super::dom;
use thermograph_core::{HeatmapError, TemperatureDataset};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GET `url` and parse the body as a dataset.
///
/// Network failures and non-2xx answers are fetch errors; a body that
/// does not decode is a parse error.
pub async fn fetch_dataset(url: &str) -> Result<TemperatureDataset, HeatmapError> {
    let body = fetch_text(url).await?;
    Ok(TemperatureDataset::from_json(&body)?)
}

async fn fetch_text(url: &str) -> Result<String, HeatmapError> {
    let failed = |reason: String| HeatmapError::Fetch {
        url: url.to_string(),
        reason,
    };
    let js_failed = |e: JsValue| failed(format!("{e:?}"));

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_failed)?;

    let window = dom::window()?;
    let resp_val = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_failed)?;
    let resp: Response = resp_val
        .dyn_into()
        .map_err(|_| failed("not a Response".to_string()))?;

    HeatmapError::check_status(url, resp.status())?;

    let text = JsFuture::from(resp.text().map_err(js_failed)?)
        .await
        .map_err(js_failed)?;
    text.as_string()
        .ok_or_else(|| failed("response body is not text".to_string()))
}
