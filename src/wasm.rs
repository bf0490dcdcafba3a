//! JavaScript bindings
//!
//! Every entry point takes and returns JSON strings so the host page can
//! feed them straight from its own state.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::decode::decode;
use crate::direction::Direction;
use crate::layout::{ResultView, chunk_rows, required_width};
use crate::share::{SharedConfig, decode_share_code, encode_share_code};
use crate::template::BitTemplate;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecodeRequest {
    template: BitTemplate,
    blue: u32,
    red: u32,
    direction: Direction,
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Bit template module loaded");
}

/// Decode `{ template, blue, red, direction }`.
///
/// Resolves to `{ ok: true, result, view }` or
/// `{ ok: false, errorKey, errorParams }`.
#[wasm_bindgen(js_name = decodeBits)]
pub fn decode_bits(request: &str) -> Result<String, JsValue> {
    let req: DecodeRequest = serde_json::from_str(request).map_err(js_err)?;
    let response = match decode(&req.template, req.blue, req.red, req.direction) {
        Ok(result) => serde_json::json!({
            "ok": true,
            "view": ResultView::new(&req.template, Some(&result)),
            "result": result,
        }),
        Err(e) => {
            log::info!("Decode failed: {}", e);
            let mut report = serde_json::to_value(e.report()).map_err(js_err)?;
            report["ok"] = serde_json::Value::Bool(false);
            report
        }
    };
    serde_json::to_string(&response).map_err(js_err)
}

/// Wrap a JSON array of cells into rows for `width` pixels
#[wasm_bindgen(js_name = chunkRows)]
pub fn chunk_rows_js(values: &str, width: f32, right_to_left: bool) -> Result<String, JsValue> {
    let values: Vec<serde_json::Value> = serde_json::from_str(values).map_err(js_err)?;
    serde_json::to_string(&chunk_rows(&values, width, right_to_left)).map_err(js_err)
}

#[wasm_bindgen(js_name = requiredWidth)]
pub fn required_width_js(side_count: usize) -> f32 {
    required_width(side_count)
}

#[wasm_bindgen(js_name = encodeShareCode)]
pub fn encode_share_code_js(config: &str) -> Result<String, JsValue> {
    let config: SharedConfig = serde_json::from_str(config).map_err(js_err)?;
    encode_share_code(&config).map_err(js_err)
}

#[wasm_bindgen(js_name = decodeShareCode)]
pub fn decode_share_code_js(code: &str) -> Result<String, JsValue> {
    let config = decode_share_code(code).map_err(js_err)?;
    serde_json::to_string(&config).map_err(js_err)
}
