use super::*;

/// Owning view over a [`TriangularMatrix`] that hands out [`Vertex`] handles.
///
/// Every method taking a node accepts anything convertible into a [`Node`], ie. a raw index
/// or a [`Vertex`]. Indices are validated against this graph; a handle obtained from another
/// graph is treated as a plain index.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    matrix: TriangularMatrix,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] if `n < 2`.
    pub fn new(n: NumNodes) -> Result<Self> {
        Ok(Self {
            matrix: TriangularMatrix::new(n)?,
        })
    }

    /// Creates a graph from either a prepared [`TriangularMatrix`] or a full square matrix
    /// (`Vec<Vec<bool>>` / `&[Vec<bool>]`).
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidMatrix`] if a square matrix is passed that is not square or
    /// smaller than `2x2`.
    pub fn from_adj_matrix<M>(matrix: M) -> Result<Self>
    where
        M: TryInto<TriangularMatrix>,
        GraphError: From<M::Error>,
    {
        Ok(Self {
            matrix: matrix.try_into()?,
        })
    }

    /// Returns the handle of vertex `idx`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] unless `0 <= idx < n`.
    pub fn vertex(&self, idx: i64) -> Result<Vertex> {
        match Node::try_from(idx) {
            Ok(u) if u < self.vertex_count() => Ok(Vertex::new(u)),
            _ => Err(GraphError::out_of_range(idx, self.vertex_count())),
        }
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> NumNodes {
        self.matrix.vertex_count()
    }

    /// Returns an iterator over the handles of all vertices
    pub fn all_vertices(&self) -> impl Iterator<Item = Vertex> {
        (0..self.vertex_count()).map(Vertex::new)
    }

    /// Returns *true* if `a` and `b` are adjacent; every vertex is adjacent to itself.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `a` or `b` is not a vertex of this graph.
    pub fn are_neighbors(&self, a: impl Into<Node>, b: impl Into<Node>) -> Result<bool> {
        self.matrix.are_neighbors(a.into(), b.into())
    }

    /// Returns a lazy iterator over the neighbors `>= start` of `vertex` in ascending order.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `vertex` is not a vertex of this graph.
    pub fn all_neighbors(
        &self,
        vertex: impl Into<Node>,
        start: impl Into<Node>,
    ) -> Result<impl Iterator<Item = Vertex> + '_> {
        Ok(self
            .matrix
            .all_neighbors(vertex.into(), start.into())?
            .map(Vertex::new))
    }

    /// Adds (`present = true`) or removes the edge {a,b}.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `a` or `b` is not a vertex; nothing is modified
    /// then.
    pub fn change_neighborhood(
        &mut self,
        a: impl Into<Node>,
        b: impl Into<Node>,
        present: bool,
    ) -> Result<()> {
        self.matrix.set_edge(a.into(), b.into(), present)
    }

    /// Returns a lazy iterator over all edges as ordered handle pairs `(a, b)` with `a < b`
    pub fn all_edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.matrix
            .all_edges()
            .map(|Edge(a, b)| (Vertex::new(a), Vertex::new(b)))
    }

    /// Materializes the full symmetric adjacency matrix
    pub fn regular_adjacency_matrix(&self) -> Vec<Vec<bool>> {
        self.matrix.to_regular_matrix()
    }
}

impl From<TriangularMatrix> for Graph {
    fn from(matrix: TriangularMatrix) -> Self {
        Self { matrix }
    }
}

impl Vertex {
    /// Shorthand for [`Graph::all_neighbors`] of this vertex
    pub fn neighbors<'a>(
        self,
        graph: &'a Graph,
        start: impl Into<Node>,
    ) -> Result<impl Iterator<Item = Vertex> + 'a> {
        graph.all_neighbors(self, start)
    }

    /// Shorthand for [`Graph::change_neighborhood`] between this vertex and `neighbor`
    pub fn change_neighborhood(
        self,
        graph: &mut Graph,
        neighbor: impl Into<Node>,
        present: bool,
    ) -> Result<()> {
        graph.change_neighborhood(self, neighbor, present)
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.matrix.number_of_nodes()
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.matrix.number_of_edges()
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.matrix.has_edge(u, v)
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of_from(&self, u: Node, start: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix.neighbors_of_from(u, start)
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.matrix.all_edges()
    }
}

impl GraphNew for Graph {
    fn try_new(n: NumNodes) -> Result<Self> {
        Self::new(n)
    }
}

impl GraphEdgeEditing for Graph {
    fn assign_edge(&mut self, u: Node, v: Node, present: bool) -> bool {
        self.matrix.assign_edge(u, v, present)
    }
}

test_graph_ops!(
    test_graph_view,
    Graph,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn path_matrix() -> Vec<Vec<bool>> {
        vec![
            vec![false, true, false, false],
            vec![true, false, true, false],
            vec![false, true, false, true],
            vec![false, false, true, false],
        ]
    }

    #[test]
    fn from_adj_matrix_accepts_both_sources() {
        let from_regular = Graph::from_adj_matrix(path_matrix()).unwrap();
        let from_slice = Graph::from_adj_matrix(path_matrix().as_slice()).unwrap();
        let from_store =
            Graph::from_adj_matrix(TriangularMatrix::from_regular_matrix(path_matrix()).unwrap())
                .unwrap();

        assert_eq!(from_regular, from_store);
        assert_eq!(from_slice, from_store);
        assert_eq!(from_regular.vertex_count(), 4);
        assert_eq!(from_regular.regular_adjacency_matrix(), path_matrix());

        assert!(matches!(
            Graph::from_adj_matrix(vec![vec![true]]),
            Err(GraphError::InvalidMatrix(_))
        ));
    }

    #[test]
    fn vertex_handles() {
        let graph = Graph::new(4).unwrap();

        let v = graph.vertex(3).unwrap();
        assert_eq!(v, 3u32);
        assert_eq!(v.idx(), 3);
        assert!(matches!(
            graph.vertex(4),
            Err(GraphError::OutOfRange { index: 4, count: 4 })
        ));
        assert!(matches!(
            graph.vertex(-1),
            Err(GraphError::OutOfRange { index: -1, count: 4 })
        ));
        assert_eq!(graph.all_vertices().collect_vec(), [0, 1, 2, 3].map(Vertex::new));
    }

    #[test]
    fn handles_and_indices_are_interchangeable() {
        let mut graph = Graph::new(5).unwrap();
        let a = graph.vertex(0).unwrap();
        let c = graph.vertex(2).unwrap();

        graph.change_neighborhood(a, 1u32, true).unwrap();
        graph.change_neighborhood(4u32, a, true).unwrap();
        c.change_neighborhood(&mut graph, a, true).unwrap();

        assert_eq!(
            graph.all_neighbors(a, 0u32).unwrap().collect_vec(),
            vec![Vertex::new(1), Vertex::new(2), Vertex::new(4)]
        );
        assert_eq!(
            a.neighbors(&graph, Vertex::new(2)).unwrap().collect_vec(),
            vec![Vertex::new(2), Vertex::new(4)]
        );
        assert!(graph.are_neighbors(c, 0u32).unwrap());
        assert!(graph.are_neighbors(3u32, 3u32).unwrap());

        assert_eq!(
            graph.all_edges().collect_vec(),
            vec![
                (Vertex::new(0), Vertex::new(1)),
                (Vertex::new(0), Vertex::new(2)),
                (Vertex::new(0), Vertex::new(4)),
            ]
        );

        graph.change_neighborhood(a, 4u32, false).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn rebuild_from_handle_edges() {
        let graph = Graph::from_adj_matrix(path_matrix()).unwrap();
        let copy = Graph::from_edges(graph.vertex_count(), graph.all_edges()).unwrap();
        assert_eq!(copy, graph);
    }

    #[test]
    fn foreign_handles_are_range_checked() {
        let large = Graph::new(10).unwrap();
        let mut small = Graph::new(3).unwrap();
        let foreign = large.vertex(7).unwrap();

        assert!(matches!(
            small.change_neighborhood(foreign, 0u32, true),
            Err(GraphError::OutOfRange { index: 7, count: 3 })
        ));
        assert!(small.all_neighbors(foreign, 0u32).is_err());
        assert!(small.is_singleton());
    }
}
