/*!
# Neighborhood-based Directed Graphs

A directed graph is represented by parameterizing [`DirectedGraph`] or [`DirectedGraphIn`]
with one or two [`Neighborhood`] types, which control how adjacency information is stored.

## Provided Representations

- [`AdjListGraph`]: adjacency lists for outgoing and incoming neighbors.
- [`SetGraph`]: hash sets for outgoing and incoming neighbors.
- [`MatrixGraph`]: a dense `n x n` bit matrix, one row per node.

## Design
- [`DirectedGraph`] stores **only outgoing neighborhoods** and derives incoming neighborhoods
  by scanning all nodes. For [`MatrixGraph`] this scan is exactly a column lookup.
- [`DirectedGraphIn`] stores **both outgoing and incoming neighborhoods**, both updated by every
  inserted edge.
*/

use fxhash::FxBuildHasher;

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Clone)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
}

/// A directed graph storing **both outgoing and incoming neighborhoods**.
///
/// - `out_nbs[u]` holds all `v` with an edge `(u, v)`.
/// - `in_nbs[v]` holds all `u` with an edge `(u, v)`.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
/// - `InNbs`: [`Neighborhood`] implementation used for incoming adjacency.
#[derive(Clone)]
pub struct DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    in_nbs: Vec<InNbs>,
    num_edges: NumEdges,
}

/// Dual adjacency lists (`Vec<Node>`) in insertion order.
///
/// Duplicate edges are rejected on insertion, which costs `O(outdeg(u))` per `add_edge`.
/// Neighbor enumeration is `O(deg)` in either direction.
pub type AdjListGraph = DirectedGraphIn<ArrNeighborhood, ArrNeighborhood>;

/// Dense `n x n` boolean matrix.
///
/// `O(1)` insertion and edge test, `O(n)` neighbor enumeration in either direction,
/// `n^2` bits of memory.
pub type MatrixGraph = DirectedGraph<BitNeighborhood>;

/// Dual hash sets per node, hashed with `FxBuildHasher`.
///
/// `O(1)` expected insertion and edge test, `O(deg)` neighbor enumeration.
pub type SetGraph = SetGraphWith<FxBuildHasher>;

/// [`SetGraph`] with a custom hasher `S`.
pub type SetGraphWith<S> = DirectedGraphIn<HashNeighborhood<S>, HashNeighborhood<S>>;

impl_common_graph_ops!(DirectedGraph<out_nbs : OutNbs> => out_nbs);
impl_common_graph_ops!(DirectedGraphIn<out_nbs : OutNbs, in_nbs : InNbs> => out_nbs);

impl<OutNbs> AdjacencyList for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.assert_node(u);
        self.out_nbs[u as usize].neighbors()
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.assert_node(u);
        // Should be avoided for sparse neighborhoods as this scans every node
        self.vertices_range()
            .filter(move |&v| self.out_nbs[v as usize].has_neighbor(u))
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.assert_node(u);
        self.out_nbs[u as usize].num_of_neighbors()
    }
}

impl<OutNbs> AdjacencyTest for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_node(u);
        self.assert_node(v);
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl<OutNbs> GraphEdgeEditing for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        self.assert_node(u);
        self.assert_node(v);

        if self.out_nbs[u as usize].try_add_neighbor(v) {
            true
        } else {
            self.num_edges += 1;
            false
        }
    }
}

impl<OutNbs, InNbs> AdjacencyList for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.assert_node(u);
        self.out_nbs[u as usize].neighbors()
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.assert_node(u);
        self.in_nbs[u as usize].neighbors()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.assert_node(u);
        self.out_nbs[u as usize].num_of_neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.assert_node(u);
        self.in_nbs[u as usize].num_of_neighbors()
    }
}

impl<OutNbs, InNbs> AdjacencyTest for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_node(u);
        self.assert_node(v);
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl<OutNbs, InNbs> GraphEdgeEditing for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        self.assert_node(u);
        self.assert_node(v);

        if self.out_nbs[u as usize].try_add_neighbor(v) {
            return true;
        }

        // `in_nbs` mirrors `out_nbs`, so `u` cannot be an in-neighbor of `v` yet
        let was_present = self.in_nbs[v as usize].try_add_neighbor(u);
        debug_assert!(!was_present);

        self.num_edges += 1;
        false
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_list_graph,
    AdjListGraph,
    (
        GraphNew,
        AdjacencyList,
        AdjacencyTest,
        GraphEdgeEditing,
        Scenarios
    )
);

test_graph_ops!(
    test_matrix_graph,
    MatrixGraph,
    (
        GraphNew,
        AdjacencyList,
        AdjacencyTest,
        GraphEdgeEditing,
        Scenarios
    )
);

test_graph_ops!(
    test_set_graph,
    SetGraph,
    (
        GraphNew,
        AdjacencyList,
        AdjacencyTest,
        GraphEdgeEditing,
        Scenarios
    )
);
