/*!
# Graph Representations

Four interchangeable storage schemes for a directed graph over the nodes `0..n`:

| Representation | Edge test | Successors | Predecessors | Memory |
|---|---|---|---|---|
| [`AdjListGraph`] | `O(outdeg)` | `O(outdeg)` | `O(indeg)` | `O(n + m)` |
| [`MatrixGraph`] | `O(1)` | `O(n)` | `O(n)` | `O(n^2)` bits |
| [`ArcGraph`] | `O(m)` | `O(m)` | `O(m)` | `O(m)` |
| [`SetGraph`] | `O(1)` expected | `O(outdeg)` | `O(indeg)` | `O(n + m)` |

All of them implement [`Graph`](crate::ops::Graph) and can be materialized from each other via
[`GraphFromGraph::from_graph`](crate::ops::GraphFromGraph::from_graph):

```
use dgraphs::prelude::*;

let list = AdjListGraph::from_edges(4, [(0, 1), (1, 2), (1, 3)]);
let matrix = MatrixGraph::from_graph(&list);
let arcs = ArcGraph::from_graph(&matrix);

assert!(arcs.has_same_edges_as(&list));
assert_eq!(matrix.successors(1), vec![2, 3]);
```
*/

use crate::{edge::*, node::*, ops::*};

mod arc;
mod directed;
mod neighborhood;

pub use arc::*;
pub use directed::*;
pub use neighborhood::*;

pub(crate) mod macros {
    /// Implements `GraphNodeOrder`, `GraphEdgeOrder` and `GraphNew` for a struct holding one
    /// `Vec` of neighborhoods per listed field and a `num_edges` counter.
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$first_field:ident : $first_generic:ident $(, $field:ident : $generic:ident)*> => $nbs:ident) => {
            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphNodeOrder for $struct<$first_generic, $($generic),*> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphEdgeOrder for $struct<$first_generic, $($generic),*> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphNew for $struct<$first_generic, $($generic),*> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        num_edges: 0,
                        $first_field: vec![$first_generic::new(n); n as usize],
                        $(
                            $field: vec![$generic::new(n); n as usize],
                        )*
                    }
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    const LAYERED_EDGES: [(Node, Node); 7] =
        [(1, 2), (1, 3), (1, 4), (2, 5), (3, 6), (3, 7), (3, 8)];

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sorted(mut nodes: Vec<Node>) -> Vec<Node> {
        nodes.sort_unstable();
        nodes
    }

    /// Compares successors and predecessors of every node as sets
    fn assert_equivalent<A: AdjacencyList, B: AdjacencyList>(a: &A, b: &B) {
        assert_eq!(a.number_of_nodes(), b.number_of_nodes());
        for u in a.vertices() {
            assert_eq!(sorted(a.successors(u)), sorted(b.successors(u)), "succ {u}");
            assert_eq!(sorted(a.predecessors(u)), sorted(b.predecessors(u)), "pred {u}");
        }
        assert!(a.has_same_edges_as(b));
    }

    macro_rules! test_copy {
        ($($name:ident: $source:ty => $target:ty),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    init_logger();

                    let source = <$source>::from_edges(9, LAYERED_EDGES);
                    let target = <$target>::from_graph(&source);
                    assert_equivalent(&source, &target);
                    assert_eq!(source.number_of_edges(), target.number_of_edges());

                    let rng = &mut Pcg64Mcg::seed_from_u64(7);
                    for n in [1 as NumNodes, 5, 20, 40] {
                        let edges = (0..3 * n)
                            .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                            .collect_vec();

                        let source = <$source>::from_edges(n, edges.iter());
                        let target = <$target>::from_graph(&source);
                        let direct = <$target>::from_edges(n, edges.iter());

                        assert_equivalent(&source, &target);
                        assert_equivalent(&direct, &target);
                    }
                }
            )*
        };
    }

    test_copy!(
        copy_adj_list_to_adj_list: AdjListGraph => AdjListGraph,
        copy_adj_list_to_matrix: AdjListGraph => MatrixGraph,
        copy_adj_list_to_arc: AdjListGraph => ArcGraph,
        copy_adj_list_to_set: AdjListGraph => SetGraph,
        copy_matrix_to_adj_list: MatrixGraph => AdjListGraph,
        copy_matrix_to_matrix: MatrixGraph => MatrixGraph,
        copy_matrix_to_arc: MatrixGraph => ArcGraph,
        copy_matrix_to_set: MatrixGraph => SetGraph,
        copy_arc_to_adj_list: ArcGraph => AdjListGraph,
        copy_arc_to_matrix: ArcGraph => MatrixGraph,
        copy_arc_to_arc: ArcGraph => ArcGraph,
        copy_arc_to_set: ArcGraph => SetGraph,
        copy_set_to_adj_list: SetGraph => AdjListGraph,
        copy_set_to_matrix: SetGraph => MatrixGraph,
        copy_set_to_arc: SetGraph => ArcGraph,
        copy_set_to_set: SetGraph => SetGraph,
    );

    #[test]
    fn copy_chain_round_trip() {
        init_logger();

        let list = AdjListGraph::from_edges(9, LAYERED_EDGES);
        let matrix = MatrixGraph::from_graph(&list);
        let arcs = ArcGraph::from_graph(&matrix);
        let set = SetGraph::from_graph(&arcs);

        for u in set.vertices() {
            let expected_succ = LAYERED_EDGES
                .iter()
                .filter(|&&(s, _)| s == u)
                .map(|&(_, t)| t)
                .sorted()
                .collect_vec();
            let expected_pred = LAYERED_EDGES
                .iter()
                .filter(|&&(_, t)| t == u)
                .map(|&(s, _)| s)
                .sorted()
                .collect_vec();

            assert_eq!(sorted(set.successors(u)), expected_succ);
            assert_eq!(sorted(set.predecessors(u)), expected_pred);
        }

        // `SetGraph` enumerates in hash order, so layers are compared as sets
        assert_eq!(
            set.bfs(1).layers().into_iter().map(sorted).collect_vec(),
            vec![vec![1], vec![2, 3, 4], vec![5, 6, 7, 8]]
        );
    }

    #[test]
    fn copy_empty_graph() {
        let empty = MatrixGraph::new(0);
        let copy = SetGraph::from_graph(&empty);
        assert!(copy.is_empty());
        assert!(copy.is_singleton_graph());
    }
}
