/*!
# Node Representation

Nodes are plain `u32` values in `0..n`. There is no payload: the identity of a node is its number.
Since the type is unsigned, negative node ids cannot be expressed and the only possible range
violation is `u >= n`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
