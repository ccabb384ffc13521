use std::{collections::HashSet, hash::BuildHasher};

use fxhash::FxBuildHasher;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node.
///
/// A Neighborhood never holds the same node twice.
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood for a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_add_neighbor(&mut self, u: Node) -> bool;
}

/// Basic Neighborhood-Impl. using `Vec<Node>` in insertion order.
///
/// Duplicates are rejected on insertion at the cost of a linear scan.
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(&v)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.0.push(u);
            false
        }
    }
}

/// A Neighborhood represented by a NodeBitSet, i.e. one row of an adjacency matrix
#[derive(Default, Clone)]
pub struct BitNeighborhood(pub NodeBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(NodeBitSet::new(n))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.cardinality()
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter_set_bits()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.get_bit(v)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        self.0.set_bit(u)
    }
}

/// A Neighborhood backed by a `HashSet<Node, S>`.
/// Iteration order depends on the hasher and is arbitrary.
#[derive(Clone)]
pub struct HashNeighborhood<S = FxBuildHasher>(pub HashSet<Node, S>);

impl<S: BuildHasher + Default> Default for HashNeighborhood<S> {
    fn default() -> Self {
        Self(HashSet::default())
    }
}

impl<S> Neighborhood for HashNeighborhood<S>
where
    S: BuildHasher + Default + Clone,
{
    fn new(_n: NumNodes) -> Self {
        Self::default()
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(&v)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        !self.0.insert(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn check_neighborhood<N: Neighborhood>() {
        let mut nbs = N::new(10);
        assert_eq!(nbs.num_of_neighbors(), 0);

        assert!(!nbs.try_add_neighbor(3));
        assert!(!nbs.try_add_neighbor(7));
        assert!(nbs.try_add_neighbor(3));
        assert!(!nbs.try_add_neighbor(0));

        assert_eq!(nbs.num_of_neighbors(), 3);
        assert!(nbs.has_neighbor(0));
        assert!(nbs.has_neighbor(7));
        assert!(!nbs.has_neighbor(5));
        assert_eq!(nbs.neighbors().sorted().collect_vec(), vec![0, 3, 7]);
    }

    #[test]
    fn arr_neighborhood() {
        check_neighborhood::<ArrNeighborhood>();

        let mut nbs = ArrNeighborhood::new(5);
        for u in [4, 1, 4, 2] {
            nbs.try_add_neighbor(u);
        }
        // insertion order is kept
        assert_eq!(nbs.0, vec![4, 1, 2]);
    }

    #[test]
    fn bit_neighborhood() {
        check_neighborhood::<BitNeighborhood>();
    }

    #[test]
    fn hash_neighborhood() {
        check_neighborhood::<HashNeighborhood>();
        check_neighborhood::<HashNeighborhood<std::hash::RandomState>>();
    }
}
