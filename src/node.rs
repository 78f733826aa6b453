/*!
# Node Representation

We choose `Node = u32` as graphs stored as a triangular bit matrix never come close to `2^32`
nodes: the bit array alone grows quadratically.

A [`Vertex`] is a thin handle around a [`Node`]. It carries no reference to the graph it came
from; every operation taking a vertex also takes (or is called on) the graph, and validates the
index against that graph's node count. Using a handle of one graph with another graph is not
detected beyond that range check and simply addresses the node with the same index.
*/

use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `n - 1`
pub type Node = u32;

/// Number of nodes in a graph
pub type NumNodes = Node;

/// Every graph has at least this many nodes
pub const MIN_NODES: NumNodes = 2;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Lightweight handle identifying a node by index.
///
/// Equality compares indices only, also against plain [`Node`] values.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vertex(Node);

impl Vertex {
    /// Wraps a raw index. No range check happens here; see [`crate::repr::Graph::vertex`].
    pub const fn new(idx: Node) -> Self {
        Self(idx)
    }

    /// Returns the underlying index
    pub const fn idx(&self) -> Node {
        self.0
    }
}

impl From<Node> for Vertex {
    fn from(value: Node) -> Self {
        Vertex(value)
    }
}

impl From<Vertex> for Node {
    fn from(value: Vertex) -> Self {
        value.0
    }
}

impl PartialEq<Node> for Vertex {
    fn eq(&self, other: &Node) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Vertex> for Node {
    fn eq(&self, other: &Vertex) -> bool {
        *self == other.0
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
