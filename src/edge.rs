use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

use crate::{Node, Vertex};

/// An undirected edge defined by two endpoints.
/// Graphs in this crate always hand out edges normalized, ie. with `self.0 < self.1`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Edges are addressed by their position in the triangular bit array.
/// This bounds a graph to `n * (n - 1) / 2 <= NumEdges::MAX`.
pub type NumEdges = u32;

/// A BitSet over NumEdges
pub type EdgeBitSet = BitSetImpl<NumEdges>;

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
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
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

impl From<(Vertex, Vertex)> for Edge {
    fn from(value: (Vertex, Vertex)) -> Self {
        Edge(value.0.idx(), value.1.idx())
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
