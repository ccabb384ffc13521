/// Instantiates the common test suite for a graph representation.
/// Every representation should pass all arms.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, prelude::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges for nodes `0..n`, possibly with repetitions
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v)
                }).collect_vec()
            }

            /// Reference adjacency matrices `(out, in)` for a list of edges
            fn reference_matrices(n: NumNodes, edges: &[Edge]) -> (Vec<NodeBitSet>, Vec<NodeBitSet>) {
                let mut adj_out: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                let mut adj_in: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                for &Edge(u, v) in edges {
                    adj_out[u as usize].set_bit(v);
                    adj_in[v as usize].set_bit(u);
                }
                (adj_out, adj_in)
            }

            fn sorted(mut nodes: Vec<Node>) -> Vec<Node> {
                nodes.sort_unstable();
                nodes
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);
                assert!(graph.is_singleton_graph());

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                for u in 0..n {
                    assert!(graph.successors(u).is_empty());
                    assert!(graph.predecessors(u).is_empty());
                }
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m as NumEdges);
                        let (adj_out, adj_in) = reference_matrices(n, &edges);

                        let graph = <$graph>::from_edges(n, edges.iter());

                        let mut distinct = edges.clone();
                        distinct.sort_unstable();
                        distinct.dedup();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), distinct.len() as NumEdges);
                        assert_eq!(graph.ordered_edges().collect_vec(), distinct);

                        for u in 0..n {
                            let succ = graph.successors(u);
                            let pred = graph.predecessors(u);

                            // range & uniqueness
                            assert!(succ.iter().chain(pred.iter()).all(|&v| v < n));
                            assert!(succ.iter().all_unique());
                            assert!(pred.iter().all_unique());

                            assert_eq!(NodeBitSet::new_with_bits_set(n, succ.iter().copied()), adj_out[u as usize]);
                            assert_eq!(NodeBitSet::new_with_bits_set(n, pred.iter().copied()), adj_in[u as usize]);
                            assert_eq!(graph.out_degree_of(u), adj_out[u as usize].cardinality());
                            assert_eq!(graph.in_degree_of(u), adj_in[u as usize].cardinality());

                            // duality
                            for &v in &succ {
                                assert!(graph.in_neighbors_of(v).any(|w| w == u));
                            }
                        }
                    }
                }
            }
        }

        #[test]
        fn test_checked_queries() {
            let graph = <$graph>::from_edges(4, [(0, 1), (2, 1)]);

            assert_eq!(sorted(graph.checked_predecessors(1).unwrap()), vec![0, 2]);
            assert_eq!(graph.checked_successors(0).unwrap(), vec![1]);
            assert_eq!(
                graph.checked_successors(4),
                Err(GraphError::NodeOutOfRange { node: 4, num_nodes: 4 })
            );
            assert!(graph.checked_predecessors(Node::MAX).is_err());
        }

        #[test]
        #[should_panic(expected = "out of range")]
        fn test_successors_out_of_range() {
            let graph = <$graph>::new(3);
            graph.successors(3);
        }

        #[test]
        #[should_panic(expected = "out of range")]
        fn test_predecessors_out_of_range() {
            let graph = <$graph>::new(3);
            graph.predecessors(7);
        }
    };
    ($graph:ident: AdjacencyTest) => {
        #[test]
        fn test_adjacency_test() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [5 as NumNodes, 20] {
                let edges = random_edges(rng, n, 3 * n as NumEdges);
                let (adj_out, _) = reference_matrices(n, &edges);
                let graph = <$graph>::from_edges(n, edges.iter());

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(graph.has_edge(u, v), adj_out[u as usize].get_bit(v));
                    }
                    assert_eq!(graph.has_self_loop(u), adj_out[u as usize].get_bit(u));
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                let mut graph = <$graph>::new(n);
                let mut adj_out: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                let mut m = 0;

                for Edge(u, v) in random_edges(rng, n, 5 * n as NumEdges) {
                    let was_present = adj_out[u as usize].set_bit(v);
                    assert_eq!(graph.try_add_edge(u, v), was_present);

                    if !was_present {
                        m += 1;
                    }
                    assert_eq!(graph.number_of_edges(), m);
                }

                // idempotence: re-adding every edge changes nothing
                let before = graph.ordered_edges().collect_vec();
                let edges = graph.edges().collect_vec();
                graph.add_edges(edges.iter());
                assert_eq!(graph.ordered_edges().collect_vec(), before);
                assert_eq!(graph.number_of_edges(), m);
            }
        }

        #[test]
        fn test_checked_add_edge() {
            let mut graph = <$graph>::new(3);

            assert_eq!(graph.checked_add_edge(0, 2), Ok(false));
            assert_eq!(graph.checked_add_edge(0, 2), Ok(true));
            assert_eq!(
                graph.checked_add_edge(3, 0),
                Err(GraphError::NodeOutOfRange { node: 3, num_nodes: 3 })
            );
            assert_eq!(
                graph.checked_add_edge(1, 5),
                Err(GraphError::NodeOutOfRange { node: 5, num_nodes: 3 })
            );

            assert_eq!(graph.number_of_edges(), 1);
            assert_eq!(graph.ordered_edges().collect_vec(), vec![Edge(0, 2)]);
        }

        #[test]
        #[should_panic(expected = "node 3 is out of range for a graph with 3 nodes")]
        fn test_add_edge_out_of_range() {
            let mut graph = <$graph>::new(3);
            graph.add_edge(1, 3);
        }
    };
    ($graph:ident: Scenarios) => {
        #[test]
        fn add_get_successors() {
            let mut graph = <$graph>::new(5);
            graph.add_edge(0, 1);
            graph.add_edge(0, 3);
            graph.add_edge(1, 3);

            assert_eq!(sorted(graph.successors(0)), vec![1, 3]);
        }

        #[test]
        fn add_get_predecessors() {
            let mut graph = <$graph>::new(5);
            graph.add_edge(0, 1);
            graph.add_edge(0, 3);
            graph.add_edge(1, 3);

            assert_eq!(sorted(graph.predecessors(3)), vec![0, 1]);
        }

        #[test]
        fn bfs_layers() {
            let graph = <$graph>::from_edges(9, [(1, 2), (1, 3), (1, 4), (2, 5), (3, 6), (3, 7), (3, 8)]);

            let mut order = Vec::new();
            breadth_first(&graph, 1, |u| order.push(u));

            assert_eq!(order.len(), 8);
            assert_eq!(order[0], 1);
            assert_eq!(sorted(order[1..4].to_vec()), vec![2, 3, 4]);
            assert_eq!(sorted(order[4..8].to_vec()), vec![5, 6, 7, 8]);
            assert!(!order.contains(&0));
        }

        #[test]
        fn idempotent_insertion() {
            let mut graph = <$graph>::new(3);
            for _ in 0..3 {
                graph.add_edge(0, 1);
            }

            assert_eq!(graph.successors(0), vec![1]);
            assert_eq!(graph.predecessors(1), vec![0]);
            assert_eq!(graph.number_of_edges(), 1);
        }

        #[test]
        fn self_loop() {
            let mut graph = <$graph>::new(2);
            graph.add_edge(0, 0);

            assert_eq!(graph.successors(0), vec![0]);
            assert_eq!(graph.predecessors(0), vec![0]);
            assert!(graph.has_self_loop(0));
            assert!(!graph.has_self_loop(1));

            let mut visits = Vec::new();
            breadth_first(&graph, 0, |u| visits.push(u));
            assert_eq!(visits, vec![0]);
        }
    };
}

pub(crate) use test_graph_ops;
