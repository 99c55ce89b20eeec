//! HeapTree — parent/child structure of a level-order heap as a petgraph DiGraph.
//!
//! Renderers walk this graph to draw edges instead of recomputing child
//! indices themselves.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Which child slot an edge leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSide {
    Left,
    Right,
}

/// Directed parent → child graph over array indices.
///
/// Node weights are array indices; node `i` is stored at `NodeIndex::new(i)`.
#[derive(Debug, Clone)]
pub struct HeapTree {
    pub digraph: DiGraph<usize, ChildSide>,
}

impl HeapTree {
    /// Build the tree for a heap of `len` elements.
    pub fn new(len: usize) -> Self {
        let mut digraph = DiGraph::with_capacity(len, len.saturating_sub(1));
        for i in 0..len {
            digraph.add_node(i);
        }
        for i in 0..len {
            for (child, side) in [(2 * i + 1, ChildSide::Left), (2 * i + 2, ChildSide::Right)] {
                if child < len {
                    digraph.add_edge(NodeIndex::new(i), NodeIndex::new(child), side);
                }
            }
        }
        Self { digraph }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// All `(parent, child)` index pairs, ordered by parent then left before right.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = self
            .digraph
            .edge_references()
            .map(|e| (self.digraph[e.source()], self.digraph[e.target()]))
            .collect();
        out.sort_unstable();
        out
    }

    /// Children of `index`, left first.
    pub fn children(&self, index: usize) -> Vec<usize> {
        if index >= self.node_count() {
            return Vec::new();
        }
        let mut kids: Vec<(ChildSide, usize)> = self
            .digraph
            .edges_directed(NodeIndex::new(index), Direction::Outgoing)
            .map(|e| (*e.weight(), self.digraph[e.target()]))
            .collect();
        kids.sort_unstable_by_key(|(side, _)| *side == ChildSide::Right);
        kids.into_iter().map(|(_, child)| child).collect()
    }

    /// Parent of `index`, or `None` for the root and out-of-range indices.
    pub fn parent(&self, index: usize) -> Option<usize> {
        if index >= self.node_count() {
            return None;
        }
        self.digraph
            .neighbors_directed(NodeIndex::new(index), Direction::Incoming)
            .next()
            .map(|p| self.digraph[p])
    }
}
