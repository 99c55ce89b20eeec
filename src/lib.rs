//! heapsort-viz — step-by-step heapsort trace and heap tree layout.
//!
//! Public API: [`generate_trace`] and [`compute_layout`], plus the input
//! validation, playback state and renderers built on them.

pub mod config;
pub mod input;
pub mod layout;
pub mod playback;
pub mod renderers;
pub mod trace;
pub mod tree;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use layout::{TreeNode, compute_layout};
pub use trace::{Step, format_number, generate_trace};

use crate::config::RenderConfig;
use crate::renderers::{Renderer, SvgRenderer};

/// Parse a free-form number list, sort it, and render the final heap tree as SVG.
pub fn render_tree_svg(src: &str, config: &RenderConfig) -> Result<String, String> {
    let values = input::parse_list(src, config.max_count)?;
    let steps = generate_trace(&values);
    let final_array = steps.last().map(|s| s.array.as_slice()).unwrap_or(&[]);
    let nodes = layout::compute_layout_with_config(final_array, &config.layout);
    Ok(SvgRenderer::new(config).render(&nodes))
}

/// Parse a free-form number list and return its trace as JSON.
pub fn trace_json(src: &str, config: &RenderConfig) -> Result<String, String> {
    let values = input::parse_list(src, config.max_count)?;
    serde_json::to_string(&generate_trace(&values)).map_err(|e| e.to_string())
}
