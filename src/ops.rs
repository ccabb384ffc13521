/*!
# Graph Operations

The capability shared by every representation, split into small traits in the same way
the representations differ in what they can answer cheaply:

- [`GraphNodeOrder`] / [`GraphEdgeOrder`]: sizes,
- [`AdjacencyList`]: successors and predecessors of a node,
- [`AdjacencyTest`]: edge membership,
- [`GraphNew`] / [`GraphEdgeEditing`]: construction and edge insertion,
- [`GraphFromScratch`] / [`GraphFromGraph`]: building a graph from an edge list or from any other
  representation.

[`Graph`] bundles all of them and is implemented for every type that implements the parts.

Operations taking a node panic if the node is out of range; each of them has a `checked_*`
counterpart returning a [`GraphError`] instead.
*/

use std::ops::Range;

use itertools::Itertools;
use log::debug;

use crate::{edge::*, error::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph. This never changes after construction.
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range `0..n` of all nodes.
    /// The range does not borrow `self` and may be used while `self` is borrowed mutably.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns `Ok(())` if `u` is a node of the graph and an error otherwise
    fn check_node(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                num_nodes: self.number_of_nodes(),
            })
        }
    }

    /// ** Panics if `u >= n` **
    #[inline]
    #[track_caller]
    fn assert_node(&self, u: Node) {
        if let Err(e) = self.check_node(u) {
            panic!("{e}");
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (distinct) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Successors and predecessors of nodes.
///
/// No node is ever reported twice for the same query. The order of neighbors is
/// representation-specific and should be treated as arbitrary.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over all `v` with an edge `(u, v)`.
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all `v` with an edge `(v, u)`.
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_neighbors_of(u).count() as NumNodes
    }

    /// Returns the number of incoming edges of `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }

    /// Returns the successors of `u` as an owned vector.
    /// ** Panics if `u >= n` **
    fn successors(&self, u: Node) -> Vec<Node> {
        self.out_neighbors_of(u).collect()
    }

    /// Returns the predecessors of `u` as an owned vector.
    /// ** Panics if `u >= n` **
    fn predecessors(&self, u: Node) -> Vec<Node> {
        self.in_neighbors_of(u).collect()
    }

    /// Like [`AdjacencyList::successors`] but returns an error if `u >= n`
    fn checked_successors(&self, u: Node) -> Result<Vec<Node>> {
        self.check_node(u)?;
        Ok(self.successors(u))
    }

    /// Like [`AdjacencyList::predecessors`] but returns an error if `u >= n`
    fn checked_predecessors(&self, u: Node) -> Result<Vec<Node>> {
        self.check_node(u)?;
        Ok(self.predecessors(u))
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.out_neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph, grouped by source node.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.out_edges_of(u))
    }

    /// Returns all edges in the graph in lexicographic order.
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().sorted_unstable()
    }

    /// Returns *true* if both graphs have the same number of nodes and the same edge set,
    /// regardless of their representation.
    fn has_same_edges_as<H: AdjacencyList>(&self, other: &H) -> bool {
        self.number_of_nodes() == other.number_of_nodes()
            && self.ordered_edges().eq(other.ordered_edges())
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges. Edges can never be removed again.
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously, in which case the graph
    /// is left unchanged.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds the edge *(u,v)* to the graph. Adding an existing edge is a no-op.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node) {
        self.try_add_edge(u, v);
    }

    /// Like [`GraphEdgeEditing::try_add_edge`] but returns an error (and leaves the graph
    /// untouched) if `u >= n || v >= n`
    fn checked_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.try_add_edge(u, v))
    }

    /// Adds all edges in the collection
    /// ** Panics if any endpoint is `>= n` **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and a collection of edges.
    /// Repeated edges are added only once.
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Materializes a graph of one representation from a graph of any other representation.
pub trait GraphFromGraph {
    /// Creates a graph with the same number of nodes and the same edges as `source`.
    /// `source` is only borrowed for the duration of the call.
    fn from_graph<S: AdjacencyList>(source: &S) -> Self;
}

impl<G: GraphEdgeEditing> GraphFromGraph for G {
    fn from_graph<S: AdjacencyList>(source: &S) -> Self {
        let mut graph = Self::new(source.number_of_nodes());
        let mut num_edges: NumEdges = 0;

        // predecessors follow from successors, so reading one direction suffices
        for u in source.vertices_range() {
            for v in source.out_neighbors_of(u) {
                graph.add_edge(u, v);
                num_edges += 1;
            }
        }

        debug!(
            "materialized graph with {} nodes and {} edges",
            source.number_of_nodes(),
            num_edges
        );

        graph
    }
}

/// The full capability of a graph representation
pub trait Graph:
    AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphEdgeEditing + GraphFromGraph
{
}

impl<G> Graph for G where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphEdgeEditing + GraphFromGraph
{
}
