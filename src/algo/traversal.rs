/*!
Breadth-first traversal over any [`AdjacencyList`].

- [`BreadthFirstSearch`] is a lazy iterator over the nodes reachable from a start node.
- [`Traversal`] exposes it as `graph.bfs(start)` on every graph.
- [`breadth_first`] drives the search and hands every reached node to an observer callback.

Only successors are ever queried, so the traversal works unchanged on every representation.
*/

use std::collections::VecDeque;

use log::trace;

use super::*;

/// Breadth-first search iterator.
///
/// Nodes are marked when they are *enqueued*, not when they are returned, so a node reachable
/// along several shortest paths is still queued only once. Every node reachable from the start
/// is returned exactly once, layer by layer. Within a layer, the order follows the successor
/// order of the graph and is therefore representation-specific.
pub struct BreadthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    enqueued: NodeBitSet,
    queue: VecDeque<(Node, NumNodes)>,
}

impl<'a, G> BreadthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        graph.assert_node(start);

        let mut enqueued = NodeBitSet::new(graph.number_of_nodes());
        enqueued.set_bit(start);

        Self {
            graph,
            enqueued,
            queue: VecDeque::from([(start, 0)]),
        }
    }

    /// Like [`BreadthFirstSearch::new`] but returns an error if `start >= n`
    pub fn checked_new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;
        Ok(Self::new(graph, start))
    }

    /// Returns the next node together with its distance from the start node.
    pub fn next_with_depth(&mut self) -> Option<(Node, NumNodes)> {
        let (u, depth) = self.queue.pop_front()?;

        for v in self.graph.out_neighbors_of(u) {
            if !self.enqueued.set_bit(v) {
                self.queue.push_back((v, depth + 1));
            }
        }

        Some((u, depth))
    }

    /// Returns *true* if `u` was already reached, i.e. it was returned or is about to be.
    /// ** Panics if `u >= n` **
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.graph.assert_node(u);
        self.enqueued.get_bit(u)
    }

    /// Consumes the search and groups the remaining nodes by distance from the start node.
    /// On a fresh search, `layers()[k]` holds exactly the nodes at distance `k`.
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::from_edges(5, [(0, 1), (0, 2), (2, 3)]);
    /// assert_eq!(g.bfs(0).layers(), vec![vec![0], vec![1, 2], vec![3]]);
    /// ```
    pub fn layers(mut self) -> Vec<Vec<Node>> {
        let mut layers: Vec<Vec<Node>> = Vec::new();
        let offset = self.queue.front().map_or(0, |&(_, d)| d);

        while let Some((u, depth)) = self.next_with_depth() {
            let layer = (depth - offset) as usize;
            if layer == layers.len() {
                layers.push(Vec::new());
            }
            layers[layer].push(u);
        }

        layers
    }
}

impl<G> Iterator for BreadthFirstSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_depth().map(|(u, _)| u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

/// Provides traversal methods directly on graphs
pub trait Traversal: AdjacencyList {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use dgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BreadthFirstSearch<'_, Self> {
        BreadthFirstSearch::new(self, start)
    }

    /// Returns *true* if there exists a directed path from `u` to `v`.
    /// Every node reaches itself.
    /// ** Panics if `u >= n || v >= n` **
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.assert_node(v);
        self.bfs(u).any(|w| w == v)
    }
}

impl<G> Traversal for G where G: AdjacencyList {}

/// Calls `visit` once for every node reachable from `start`, in BFS order.
/// The start node is visited first.
/// ** Panics if `start >= n` **
///
/// # Examples
/// ```
/// use dgraphs::{prelude::*, algo::*};
///
/// let g = SetGraph::from_edges(4, [(3, 1), (1, 2)]);
///
/// let mut visited = Vec::new();
/// breadth_first(&g, 3, |u| visited.push(u));
/// assert_eq!(visited, vec![3, 1, 2]);
/// ```
pub fn breadth_first<G, F>(graph: &G, start: Node, mut visit: F)
where
    G: AdjacencyList,
    F: FnMut(Node),
{
    let mut num_visited: NumNodes = 0;
    for u in graph.bfs(start) {
        visit(u);
        num_visited += 1;
    }

    trace!(
        "bfs from {start} visited {num_visited} of {} nodes",
        graph.number_of_nodes()
    );
}

/// Like [`breadth_first`] but returns an error instead of panicking if `start >= n`
pub fn checked_breadth_first<G, F>(graph: &G, start: Node, visit: F) -> Result<()>
where
    G: AdjacencyList,
    F: FnMut(Node),
{
    graph.check_node(start)?;
    breadth_first(graph, start, visit);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn sorted_layers(layers: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
        layers
            .into_iter()
            .map(|l| l.into_iter().sorted().collect())
            .collect()
    }

    /// Shortest-path distances by relaxing edges until nothing changes
    fn distances<G: AdjacencyList>(graph: &G, start: Node) -> Vec<Option<NumNodes>> {
        let mut dist = vec![None; graph.len()];
        dist[start as usize] = Some(0);

        loop {
            let mut changed = false;
            for Edge(u, v) in graph.edges() {
                if let Some(du) = dist[u as usize] {
                    if dist[v as usize].is_none_or(|dv| du + 1 < dv) {
                        dist[v as usize] = Some(du + 1);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjListGraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        {
            let order: Vec<Node> = graph.bfs(1).collect();
            assert_eq!(order, [1, 2, 0, 4, 5, 3]);
        }

        {
            let order: Vec<Node> = BreadthFirstSearch::new(&graph, 5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn bfs_diamond_enqueues_once() {
        let graph = MatrixGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 0)]);
        let mut bfs = graph.bfs(0);

        assert_eq!(bfs.next_with_depth(), Some((0, 0)));
        assert!(bfs.did_visit_node(1));
        assert!(!bfs.did_visit_node(3));

        assert_eq!(bfs.collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn layers_match_distances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [1 as NumNodes, 10, 30] {
            let edges = (0..2 * n)
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                .collect_vec();

            let graph = SetGraph::from_edges(n, edges);
            for start in graph.vertices() {
                let dist = distances(&graph, start);
                let layers = graph.bfs(start).layers();

                // coverage, layering & uniqueness
                let visited = layers.iter().flatten().copied().collect_vec();
                assert!(visited.iter().all_unique());
                assert_eq!(
                    visited.iter().copied().sorted().collect_vec(),
                    graph
                        .vertices()
                        .filter(|&u| dist[u as usize].is_some())
                        .collect_vec()
                );

                for (k, layer) in layers.iter().enumerate() {
                    assert!(!layer.is_empty());
                    for &u in layer {
                        assert_eq!(dist[u as usize], Some(k as NumNodes));
                    }
                }
            }
        }
    }

    #[test]
    fn layers_per_representation() {
        let edges = [(1, 2), (1, 3), (1, 4), (2, 5), (3, 6), (3, 7), (3, 8)];
        let expected = vec![vec![1], vec![2, 3, 4], vec![5, 6, 7, 8]];

        assert_eq!(sorted_layers(AdjListGraph::from_edges(9, edges).bfs(1).layers()), expected);
        assert_eq!(sorted_layers(MatrixGraph::from_edges(9, edges).bfs(1).layers()), expected);
        assert_eq!(sorted_layers(ArcGraph::from_edges(9, edges).bfs(1).layers()), expected);
        assert_eq!(sorted_layers(SetGraph::from_edges(9, edges).bfs(1).layers()), expected);
    }

    #[test]
    fn reachability() {
        let graph = ArcGraph::from_edges(5, [(0, 1), (1, 2), (2, 0), (3, 2)]);

        assert!(graph.is_reachable(0, 2));
        assert!(graph.is_reachable(3, 0));
        assert!(!graph.is_reachable(0, 3));
        assert!(graph.is_reachable(4, 4));
        assert!(!graph.is_reachable(4, 0));
    }

    #[test]
    fn checked_bfs() {
        let graph = AdjListGraph::from_edges(3, [(0, 1)]);

        let mut visited = Vec::new();
        assert_eq!(
            checked_breadth_first(&graph, 3, |u| visited.push(u)),
            Err(GraphError::NodeOutOfRange {
                node: 3,
                num_nodes: 3
            })
        );
        assert!(visited.is_empty());

        assert!(checked_breadth_first(&graph, 0, |u| visited.push(u)).is_ok());
        assert_eq!(visited, vec![0, 1]);

        assert!(BreadthFirstSearch::checked_new(&graph, 2).is_ok());
        assert!(BreadthFirstSearch::checked_new(&graph, 9).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn bfs_start_out_of_range() {
        let graph = MatrixGraph::new(0);
        breadth_first(&graph, 0, |_| {});
    }
}
