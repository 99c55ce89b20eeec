//! Terminal renderer for a laid-out heap tree.
//!
//! Layout x coordinates are mapped onto character columns: adjacent bottom
//! slots are `cell` columns apart, so parents land midway between children.
//! Each level takes a label row followed by a branch row.

use super::Renderer;
use super::canvas::Canvas;
use super::charset::{CharSet, Glyphs};
use crate::layout::TreeNode;
use crate::trace::format_number;
use crate::tree::HeapTree;

pub struct AsciiTreeRenderer {
    pub charset: CharSet,
}

impl AsciiTreeRenderer {
    pub fn new(unicode: bool) -> Self {
        Self {
            charset: CharSet::from_unicode_flag(unicode),
        }
    }
}

/// Smallest horizontal gap between two nodes in the layout.
fn min_spacing(nodes: &[TreeNode]) -> f64 {
    let mut xs: Vec<f64> = nodes.iter().map(|n| n.x).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs.windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min)
}

impl Renderer for AsciiTreeRenderer {
    fn render(&self, nodes: &[TreeNode]) -> String {
        if nodes.is_empty() {
            return String::new();
        }
        let glyphs = Glyphs::for_charset(self.charset);
        let labels: Vec<String> = nodes.iter().map(|n| format_number(n.value)).collect();
        let label_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);
        // Even cell width so half-slot offsets stay on whole columns.
        let cell = (label_w + 2).max(4).next_multiple_of(2);

        let min_x = nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min);
        let max_x = nodes.iter().map(|n| n.x).fold(f64::NEG_INFINITY, f64::max);
        let step = if nodes.len() > 1 { min_spacing(nodes) } else { 1.0 };
        let offset = label_w / 2;
        let col_of = |x: f64| offset + ((x - min_x) / step * (cell / 2) as f64).round() as usize;

        let levels = nodes.iter().map(|n| n.level).max().unwrap_or(0) + 1;
        let width = col_of(max_x) + label_w + 1;
        let mut canvas = Canvas::new(width, levels * 2);

        for (node, label) in nodes.iter().zip(&labels) {
            canvas.write_centered(col_of(node.x), node.level * 2, label);
        }

        let tree = HeapTree::new(nodes.len());
        for node in nodes {
            let kids = tree.children(node.index);
            let Some(&left) = kids.first() else {
                continue;
            };
            let row = node.level * 2 + 1;
            let pc = col_of(node.x);
            let lc = col_of(nodes[left].x);
            match kids.get(1) {
                Some(&right) => {
                    let rc = col_of(nodes[right].x);
                    canvas.hline(row, lc, rc, glyphs.horizontal);
                    canvas.set(lc, row, glyphs.branch_left);
                    canvas.set(rc, row, glyphs.branch_right);
                    canvas.set(pc, row, glyphs.branch_both);
                }
                None => {
                    canvas.hline(row, lc, pc, glyphs.horizontal);
                    canvas.set(lc, row, glyphs.branch_left);
                    canvas.set(pc, row, glyphs.branch_only);
                }
            }
        }

        canvas.render_to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    #[test]
    fn test_empty() {
        assert_eq!(AsciiTreeRenderer::new(true).render(&[]), "");
    }

    #[test]
    fn test_single_node() {
        let out = AsciiTreeRenderer::new(true).render(&compute_layout(&[7.0]));
        assert_eq!(out, "7\n");
    }

    #[test]
    fn test_three_nodes_unicode() {
        let out = AsciiTreeRenderer::new(true).render(&compute_layout(&[3.0, 1.0, 2.0]));
        assert_eq!(out, "  3\n┌─┴─┐\n1   2\n");
    }

    #[test]
    fn test_left_child_only_ascii() {
        let out = AsciiTreeRenderer::new(false).render(&compute_layout(&[2.0, 1.0]));
        assert_eq!(out, "  2\n+-+\n1\n");
    }

    #[test]
    fn test_rows_per_level() {
        let nodes = compute_layout(&[8.0, 5.0, 4.0, 1.0, 2.0, 3.0, 0.0]);
        let out = AsciiTreeRenderer::new(false).render(&nodes);
        let lines: Vec<&str> = out.lines().collect();
        // Three label rows, two branch rows; the last level has no branches.
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4].split_whitespace().collect::<Vec<_>>(), vec!["1", "2", "3", "0"]);
    }
}
