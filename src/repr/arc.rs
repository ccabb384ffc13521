use crate::testing::test_graph_ops;

use super::*;

/// A directed graph stored as a plain list of arcs `(u, v)` in insertion order.
///
/// Uses minimal memory for very sparse graphs, but every query (including insertion, which
/// rejects duplicates) scans the whole arc list.
#[derive(Clone, Default)]
pub struct ArcGraph {
    num_nodes: NumNodes,
    arcs: Vec<Edge>,
}

impl ArcGraph {
    /// Returns all arcs in the order they were first inserted
    pub fn arcs(&self) -> &[Edge] {
        &self.arcs
    }
}

impl GraphNodeOrder for ArcGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }
}

impl GraphEdgeOrder for ArcGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.arcs.len() as NumEdges
    }
}

impl GraphNew for ArcGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            num_nodes: n,
            arcs: Vec::new(),
        }
    }
}

impl AdjacencyList for ArcGraph {
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.assert_node(u);
        self.arcs
            .iter()
            .filter_map(move |&Edge(s, t)| (s == u).then_some(t))
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.assert_node(u);
        self.arcs
            .iter()
            .filter_map(move |&Edge(s, t)| (t == u).then_some(s))
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.arcs.iter().copied()
    }
}

impl AdjacencyTest for ArcGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_node(u);
        self.assert_node(v);
        self.arcs.contains(&Edge(u, v))
    }
}

impl GraphEdgeEditing for ArcGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            true
        } else {
            self.arcs.push(Edge(u, v));
            false
        }
    }
}

test_graph_ops!(
    test_arc_graph,
    ArcGraph,
    (
        GraphNew,
        AdjacencyList,
        AdjacencyTest,
        GraphEdgeEditing,
        Scenarios
    )
);
