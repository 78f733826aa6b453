//! Unchecked graph operations.
//!
//! These traits are what algorithms are written against. In contrast to the `Result`-returning
//! inherent methods of the representations, they assume valid node indices and document where
//! they panic otherwise.

use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a node of the graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Adjacency queries for single node pairs
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge {u,v} exists in the graph.
    /// Every node counts as adjacent to itself.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over all neighbors `v >= start` of `u` in ascending order.
    /// `u` itself is never reported. The iterator is lazy; calling this method again restarts
    /// the scan.
    /// ** Panics if `u >= n` **
    fn neighbors_of_from(&self, u: Node, start: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of_from(u, 0)
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns a NodeBitSet with bit `v` set exactly if `v` is a neighbor of `u`
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.neighbors_of(u))
    }

    /// Returns an iterator over all normalized edges `Edge(u, v)` with `u < v` in
    /// lexicographic order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.neighbors_of_from(u, u + 1).map(move |v| Edge(u, v)))
    }

    /// Collects all normalized edges into a vector
    fn edges_vec(&self) -> Vec<Edge> {
        self.edges().collect_vec()
    }
}

/// Provides a constructor for a graph without edges
pub trait GraphNew: Sized {
    /// Creates a graph with `n` nodes and no edges.
    ///
    /// # Errors
    /// Fails with [`GraphError::InvalidSize`] if `n` is smaller than [`MIN_NODES`] or too
    /// large for the representation.
    fn try_new(n: NumNodes) -> Result<Self>;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Sets the presence of edge {u,v} and returns whether it was present before.
    /// Self-loops are not stored: for `u == v` this is a no-op returning *true*.
    /// ** Panics if `u >= n || v >= n` **
    fn assign_edge(&mut self, u: Node, v: Node, present: bool) -> bool;

    /// Adds the edge {u,v}. Returns *true* if it was present before.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        self.assign_edge(u, v, true)
    }

    /// Removes the edge {u,v}. Returns *true* if it was present before.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.assign_edge(u, v, false)
    }

    /// Removes all edges incident to `u`
    /// ** Panics if `u >= n` **
    fn remove_edges_at_node(&mut self, u: Node) {
        for v in 0..self.number_of_nodes() {
            self.try_remove_edge(u, v);
        }
    }
}

/// Create graphs from a list of edges
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges.
    ///
    /// # Errors
    /// Fails if the graph cannot be created or an endpoint is not in `0..n`.
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut graph = Self::try_new(n)?;
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            if u >= n {
                return Err(GraphError::out_of_range(u, n));
            }
            if v >= n {
                return Err(GraphError::out_of_range(v, n));
            }
            graph.try_add_edge(u, v);
        }
        Ok(graph)
    }
}
