use std::fmt::{Debug, Display};

use crate::node::Node;

/// A directed edge `Edge(u, v)` from `u` to `v`.
/// `Edge(u, v)` and `Edge(v, u)` are distinct unless `u == v`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Wide enough to count every edge of a complete graph on `NumNodes::MAX` nodes, self-loops included.
pub type NumEdges = u64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the tail of the edge
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the head of the edge
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<Edge> for (Node, Node) {
    fn from(value: Edge) -> Self {
        (value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_conversions() {
        let e: Edge = (3, 7).into();
        assert_eq!(format!("{e}"), "(3,7)");
        assert_eq!(format!("{e:?}"), "(3,7)");
        assert_eq!(e.reverse(), Edge(7, 3));
        assert_eq!(<(Node, Node)>::from(e), (3, 7));
        assert!(!e.is_loop());
        assert!(Edge(2, 2).is_loop());
    }

    #[test]
    fn edge_count_fits_complete_graph() {
        let n = crate::node::NumNodes::MAX as NumEdges;
        assert!(n.checked_mul(n).is_some());
    }
}
