//! SVG renderer — draws a laid-out heap tree.
//!
//! Edges go first so the node circles sit on top of them. Node centres are
//! shifted down by the radius so the root circle touches `y = 0`.

use super::Renderer;
use crate::config::RenderConfig;
use crate::layout::TreeNode;
use crate::trace::format_number;
use crate::tree::HeapTree;

// ── Constants ────────────────────────────────────────────────────────────────

const EDGE_STROKE: &str = "#cbd5e1";
const NODE_FILL: &str = "#10b981";
const NODE_STROKE: &str = "#059669";
const INDEX_FILL: &str = "#64748b";
const VALUE_FONT_SIZE: u32 = 14;
const INDEX_FONT_SIZE: u32 = 10;
/// Offset of the `[index]` label below the circle centre.
const INDEX_GAP: f64 = 25.0;

pub struct SvgRenderer {
    pub node_radius: f64,
    pub margin: f64,
}

impl SvgRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            node_radius: config.node_radius,
            margin: config.margin,
        }
    }

    fn render_edges(&self, nodes: &[TreeNode]) -> Vec<String> {
        let r = self.node_radius;
        HeapTree::new(nodes.len())
            .edges()
            .into_iter()
            .map(|(parent, child)| {
                let (p, c) = (&nodes[parent], &nodes[child]);
                format!(
                    r#"<line class="tree-edge" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{EDGE_STROKE}" stroke-width="2"/>"#,
                    p.x,
                    p.y + r,
                    c.x,
                    c.y + r
                )
            })
            .collect()
    }

    fn render_node(&self, node: &TreeNode) -> String {
        let r = self.node_radius;
        let (cx, cy) = (node.x, node.y + r);
        let index_y = cy + INDEX_GAP;
        [
            r#"<g class="tree-node">"#.to_string(),
            format!(
                r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{NODE_FILL}" stroke="{NODE_STROKE}" stroke-width="2"/>"#
            ),
            format!(
                r#"  <text x="{cx}" y="{cy}" text-anchor="middle" dominant-baseline="middle" fill="white" font-size="{VALUE_FONT_SIZE}" font-weight="600">{}</text>"#,
                format_number(node.value)
            ),
            format!(
                r#"  <text x="{cx}" y="{index_y}" text-anchor="middle" fill="{INDEX_FILL}" font-size="{INDEX_FONT_SIZE}">[{}]</text>"#,
                node.index
            ),
            "</g>".to_string(),
        ]
        .join("\n")
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl Renderer for SvgRenderer {
    /// Render the tree to a standalone SVG document. Empty input renders nothing.
    fn render(&self, nodes: &[TreeNode]) -> String {
        if nodes.is_empty() {
            return String::new();
        }

        let min_x = nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min) - self.margin;
        let max_x = nodes.iter().map(|n| n.x).fold(f64::NEG_INFINITY, f64::max) + self.margin;
        let max_y = nodes.iter().map(|n| n.y).fold(f64::NEG_INFINITY, f64::max) + self.margin;
        let width = max_x - min_x;
        let height = max_y;

        let mut parts = vec![format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{min_x} 0 {width} {height}">"#
        )];
        parts.extend(self.render_edges(nodes));
        parts.extend(nodes.iter().map(|n| self.render_node(n)));
        parts.push("</svg>".to_string());

        let mut out = parts.join("\n");
        out.push('\n');
        out
    }
}
