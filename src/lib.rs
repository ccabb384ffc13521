/*!
`dgraphs` is a small library of interchangeable in-memory representations of **d**irected graphs
over the fixed node set `0..n`, together with a breadth-first traversal that works on all of them.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
The number of nodes is fixed at construction; afterwards, edges can only be added.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` pointing from the first to the second node.
Edges form a set: adding an edge twice is a no-op, and self-loops `(u, u)` are allowed.

### Available Representations

See the [`repr`] module for the trade-offs between

- [`AdjListGraph`](crate::repr::AdjListGraph): dual adjacency lists,
- [`MatrixGraph`](crate::repr::MatrixGraph): a dense boolean matrix,
- [`ArcGraph`](crate::repr::ArcGraph): a plain list of arcs,
- [`SetGraph`](crate::repr::SetGraph): dual hash sets per node.

# Design

All representations implement the same set of traits from [`ops`] (bundled as [`ops::Graph`]).
Nothing else in the crate knows more about a graph than these traits. In particular,
- any representation can be built from any other via [`GraphFromGraph::from_graph`](ops::GraphFromGraph::from_graph),
- [`algo::breadth_first`] and [`algo::Traversal::bfs`] only use successor queries.

Neighbor queries return neighbors in a representation-specific order; treat them as sets.

Operations taking a node panic if it is out of range. Each of them has a `checked_*` variant
that returns an [`error::GraphError`] instead.

# Usage

```
use dgraphs::{prelude::*, algo::*};

let mut graph = AdjListGraph::new(5);
graph.add_edge(0, 1);
graph.add_edge(0, 3);
graph.add_edge(1, 3);

let matrix = MatrixGraph::from_graph(&graph);
assert_eq!(matrix.predecessors(3), vec![0, 1]);

let mut order = Vec::new();
breadth_first(&matrix, 0, |u| order.push(u));
assert_eq!(order, vec![0, 1, 3]);
```

In most use-cases, `use dgraphs::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `dgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits
/// as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
