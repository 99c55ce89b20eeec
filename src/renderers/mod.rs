//! Renderers for trace steps and heap trees.

pub mod ascii_tree;
pub mod bars;
pub mod canvas;
pub mod charset;
pub mod svg;

pub use ascii_tree::AsciiTreeRenderer;
pub use bars::BarChartRenderer;
pub use svg::SvgRenderer;

use crate::layout::TreeNode;
use crate::trace::Step;

/// Renders a laid-out heap tree to a string.
pub trait Renderer {
    fn render(&self, nodes: &[TreeNode]) -> String;
}

/// Renders one frame of the sort animation.
pub trait StepRenderer {
    fn render(&self, step: &Step) -> String;
}
