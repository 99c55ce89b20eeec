//! WASM bindings for heapsort-viz.
//!
//! The browser page owns the DOM and the playback timer; these functions
//! hand it validated numbers, the step trace and the final tree as JSON or SVG.

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::input;
use crate::layout::compute_layout;
use crate::renderers::{Renderer, SvgRenderer};
use crate::trace::generate_trace;

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Validate the count field and the per-number fields.
///
/// Returns the numbers as a JSON array, or a `JsError` whose message is meant
/// to be shown to the user as-is.
#[wasm_bindgen(js_name = "validateInput")]
pub fn validate_input(count: &str, fields: Vec<String>) -> Result<String, JsError> {
    let values = input::validate_fields(count, fields.as_slice(), input::MAX_COUNT)
        .map_err(|e| JsError::new(&e))?;
    to_json(&values)
}

/// Heapsort trace for `values` as a JSON array of steps.
#[wasm_bindgen(js_name = "generateTrace")]
pub fn generate_trace_json(values: Vec<f64>) -> Result<String, JsError> {
    to_json(&generate_trace(&values))
}

/// Tree layout for `values` as a JSON array of nodes.
#[wasm_bindgen(js_name = "computeLayout")]
pub fn compute_layout_json(values: Vec<f64>) -> Result<String, JsError> {
    to_json(&compute_layout(&values))
}

/// SVG document for the heap tree of `values`. Empty input gives an empty string.
#[wasm_bindgen(js_name = "renderTreeSvg")]
pub fn render_tree_svg(values: Vec<f64>) -> String {
    SvgRenderer::new(&RenderConfig::default()).render(&compute_layout(&values))
}

#[cfg(all(test, feature = "wasm"))]
mod tests {
    use super::*;

    #[test]
    fn test_generate_trace_json() {
        let Ok(json) = generate_trace_json(vec![2.0, 1.0]) else {
            panic!("trace serializes");
        };
        let steps: serde_json::Value = serde_json::from_str(&json).unwrap();
        let steps = steps.as_array().unwrap();
        assert_eq!(steps[0]["description"], "Initial array");
        assert_eq!(steps[0]["heapSize"], 2);
        assert_eq!(steps.last().unwrap()["array"], serde_json::json!([1.0, 2.0]));
    }

    #[test]
    fn test_compute_layout_json() {
        let Ok(json) = compute_layout_json(vec![3.0, 1.0, 2.0]) else {
            panic!("layout serializes");
        };
        let nodes: serde_json::Value = serde_json::from_str(&json).unwrap();
        let nodes = nodes.as_array().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1]["x"], serde_json::json!(-40.0));
        assert_eq!(nodes[2]["level"], 1);
    }

    #[test]
    fn test_compute_layout_json_empty() {
        let Ok(json) = compute_layout_json(Vec::new()) else {
            panic!("layout serializes");
        };
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_render_tree_svg() {
        assert_eq!(render_tree_svg(Vec::new()), "");
        let svg = render_tree_svg(vec![1.0, 2.0]);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<line").count(), 1);
    }
}
