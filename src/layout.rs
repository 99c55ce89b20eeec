//! Tree layout for a heap stored in level order.
//!
//! Node `i` has children `2i+1` and `2i+2`. Each level splits the width of
//! the bottom level into equal slots, so a parent always sits centred over its
//! two child slots and sibling subtrees never overlap.

use serde::Serialize;
use tracing::debug;

use crate::config::LayoutConfig;

/// A heap element with its computed position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub value: f64,
    /// Position in the array; doubles as the node's identity.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    /// Depth in the tree, root = 0.
    pub level: usize,
}

/// Number of levels of a complete binary tree holding `n` nodes,
/// i.e. `ceil(log2(n + 1))`.
pub fn level_count(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// Lay out `array` with the default spacing.
pub fn compute_layout(array: &[f64]) -> Vec<TreeNode> {
    compute_layout_with_config(array, &LayoutConfig::default())
}

/// Lay out `array` as a complete binary tree. The root is centred at `x = 0`.
pub fn compute_layout_with_config(array: &[f64], config: &LayoutConfig) -> Vec<TreeNode> {
    let total_levels = level_count(array.len());
    let mut nodes = Vec::with_capacity(array.len());
    let mut values = array.iter().copied().enumerate();

    'levels: for level in 0..total_levels {
        let nodes_in_level = 1usize << level;
        let slot_width = config.node_spacing * (1u64 << (total_levels - level - 1)) as f64;
        let level_width = nodes_in_level as f64 * slot_width;
        let y = level as f64 * config.level_height;

        for slot in 0..nodes_in_level {
            let Some((index, value)) = values.next() else {
                break 'levels;
            };
            nodes.push(TreeNode {
                value,
                index,
                x: (slot as f64 + 0.5) * slot_width - level_width / 2.0,
                y,
                level,
            });
        }
    }

    debug!(nodes = nodes.len(), levels = total_levels, "heap tree laid out");
    nodes
}
