/*!
# Triangular Adjacency Matrix

An undirected graph without self-loops has a symmetric adjacency matrix with an empty diagonal.
[`TriangularMatrix`] therefore only stores the strict upper triangle, row by row, in a single
[`EdgeBitSet`] of length `n * (n - 1) / 2`.

Row `a` holds the columns `a + 1..n` and starts right after the `a` previous rows, so the pair
`a < b` lives at
```text
idx(a, b) = (n - 1) * a - a * (a + 1) / 2 + b - 1
```
*/

use stream_bitset::prelude::*;
use tracing::trace;

use super::*;

/// Bit-packed upper triangle of a symmetric adjacency matrix
#[derive(Clone, Debug, PartialEq)]
pub struct TriangularMatrix {
    n: NumNodes,
    bits: EdgeBitSet,
}

/// Number of unordered node pairs of a graph with `n` nodes
pub fn number_of_pairs(n: NumNodes) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

/// Position of the pair `a < b` in the triangular bit array of a graph with `n` nodes.
/// ** Panics in debug builds unless `a < b < n` **
pub fn pair_index(a: Node, b: Node, n: NumNodes) -> NumEdges {
    debug_assert!(a < b && b < n);
    let (a, b, n) = (a as u64, b as u64, n as u64);
    ((n - 1) * a + b - 1 - a * (a + 1) / 2) as NumEdges
}

/// First index of row `a`, ie. `pair_index(a, a + 1, n)`. Also valid for `a = n - 1`, where it
/// equals the total number of pairs.
fn row_start(a: Node, n: NumNodes) -> u64 {
    let (a, n) = (a as u64, n as u64);
    n * a - a * (a + 1) / 2
}

impl TriangularMatrix {
    /// Creates a graph with `n` nodes and no edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] if `n < 2` or `n * (n - 1) / 2` exceeds
    /// [`NumEdges::MAX`].
    pub fn new(n: NumNodes) -> Result<Self> {
        if n < MIN_NODES || number_of_pairs(n) > NumEdges::MAX as u64 {
            return Err(GraphError::InvalidSize(n));
        }

        Ok(Self {
            n,
            bits: EdgeBitSet::new(number_of_pairs(n) as NumEdges),
        })
    }

    /// Builds the triangular matrix from a full square matrix.
    ///
    /// Only the strict upper triangle (`row < col`) is read. Entries below the diagonal and on
    /// the diagonal are ignored, so an asymmetric matrix is accepted as if it were mirrored
    /// from its upper half.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidMatrix`] if the matrix is not square or has fewer than two
    /// rows.
    pub fn from_regular_matrix<M, R>(matrix: M) -> Result<Self>
    where
        M: AsRef<[R]>,
        R: AsRef<[bool]>,
    {
        let rows = matrix.as_ref();
        let side = rows.len();

        if side < MIN_NODES as usize {
            return Err(GraphError::InvalidMatrix(format!(
                "{side}x{side} matrix is too small"
            )));
        }
        if let Some((row, len)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != side)
        {
            return Err(GraphError::InvalidMatrix(format!(
                "row {row} has {len} columns but the matrix has {side} rows"
            )));
        }

        let n = NumNodes::try_from(side).map_err(|_| {
            GraphError::InvalidMatrix(format!("{side} rows exceed the number of nodes"))
        })?;
        let mut result = Self::new(n)?;

        for (a, row) in rows.iter().enumerate() {
            for (b, _) in row
                .as_ref()
                .iter()
                .enumerate()
                .skip(a + 1)
                .filter(|(_, present)| **present)
            {
                result.bits.set_bit(pair_index(a as Node, b as Node, n));
            }
        }

        Ok(result)
    }

    /// Returns the number of nodes
    pub fn vertex_count(&self) -> NumNodes {
        self.n
    }

    /// Returns an error unless `u` is a node of this graph
    fn check_node(&self, u: Node) -> Result<()> {
        if u < self.n {
            Ok(())
        } else {
            Err(GraphError::out_of_range(u, self.n))
        }
    }

    /// Reads the bit of a pair of distinct, valid nodes in any order
    fn pair_bit(&self, a: Node, b: Node) -> bool {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        self.bits.get_bit(pair_index(a, b, self.n))
    }

    /// Returns *true* if `a` and `b` are adjacent. Every node is adjacent to itself.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `a` or `b` is not a node.
    pub fn are_neighbors(&self, a: Node, b: Node) -> Result<bool> {
        self.check_node(a)?;
        self.check_node(b)?;
        Ok(a == b || self.pair_bit(a, b))
    }

    /// Returns a lazy iterator over all neighbors `b >= start` of `a`, in ascending order.
    /// A `start >= n` yields an empty iterator.
    ///
    /// The iterator borrows the matrix, so the graph cannot be mutated while it is alive.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `a` is not a node.
    pub fn all_neighbors(&self, a: Node, start: Node) -> Result<Neighbors<'_>> {
        self.check_node(a)?;
        Ok(Neighbors::new(self, a, start))
    }

    /// Adds (`present = true`) or removes the edge {a,b}. A no-op for `a == b`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `a` or `b` is not a node; nothing is modified then.
    pub fn set_edge(&mut self, a: Node, b: Node, present: bool) -> Result<()> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.assign_edge(a, b, present);
        Ok(())
    }

    /// Returns a lazy iterator over all edges `Edge(a, b)` with `a < b` in lexicographic order
    pub fn all_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.n;
        let mut row: Node = 0;
        let mut next_row_start = row_start(1, n);

        self.bits.iter_set_bits().map(move |idx| {
            let idx = idx as u64;
            while idx >= next_row_start {
                row += 1;
                next_row_start = row_start(row + 1, n);
            }
            let col = idx - row_start(row, n) + row as u64 + 1;
            Edge(row, col as Node)
        })
    }

    /// Materializes the full symmetric `n x n` matrix with an empty diagonal
    pub fn to_regular_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.n as usize;
        let mut matrix = vec![vec![false; n]; n];
        for Edge(a, b) in self.all_edges() {
            matrix[a as usize][b as usize] = true;
            matrix[b as usize][a as usize] = true;
        }
        matrix
    }
}

impl TryFrom<Vec<Vec<bool>>> for TriangularMatrix {
    type Error = GraphError;

    fn try_from(value: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_regular_matrix(value)
    }
}

impl TryFrom<&[Vec<bool>]> for TriangularMatrix {
    type Error = GraphError;

    fn try_from(value: &[Vec<bool>]) -> Result<Self> {
        Self::from_regular_matrix(value)
    }
}

/// Lazy, ascending scan over the neighbors of a node.
///
/// Created by [`TriangularMatrix::all_neighbors`] and [`AdjacencyList::neighbors_of_from`].
#[derive(Clone)]
pub struct Neighbors<'a> {
    matrix: &'a TriangularMatrix,
    node: Node,
    next: Node,
}

impl<'a> Neighbors<'a> {
    fn new(matrix: &'a TriangularMatrix, node: Node, start: Node) -> Self {
        Self {
            matrix,
            node,
            next: start,
        }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.matrix.n {
            let candidate = self.next;
            self.next += 1;

            if candidate != self.node && self.matrix.pair_bit(self.node, candidate) {
                return Some(candidate);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.matrix.n.saturating_sub(self.next) as usize))
    }
}

impl GraphNodeOrder for TriangularMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for TriangularMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.bits.cardinality()
    }
}

impl AdjacencyTest for TriangularMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(u < self.n && v < self.n);
        u == v || self.pair_bit(u, v)
    }
}

impl AdjacencyList for TriangularMatrix {
    fn neighbors_of_from(&self, u: Node, start: Node) -> impl Iterator<Item = Node> + '_ {
        assert!(u < self.n);
        Neighbors::new(self, u, start)
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.all_edges()
    }
}

impl GraphNew for TriangularMatrix {
    fn try_new(n: NumNodes) -> Result<Self> {
        Self::new(n)
    }
}

impl GraphEdgeEditing for TriangularMatrix {
    fn assign_edge(&mut self, u: Node, v: Node, present: bool) -> bool {
        assert!(u < self.n && v < self.n);
        if u == v {
            return true;
        }

        let idx = pair_index(u.min(v), u.max(v), self.n);
        trace!(u, v, present, "assign edge");
        if present {
            self.bits.set_bit(idx)
        } else {
            self.bits.clear_bit(idx)
        }
    }
}

test_graph_ops!(
    test_triangular_matrix,
    TriangularMatrix,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_edges;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn pair_index_is_a_bijection() {
        for n in 2..40 {
            let mut seen = EdgeBitSet::new(number_of_pairs(n) as NumEdges);
            let mut expected = 0;

            for a in 0..n {
                for b in (a + 1)..n {
                    let idx = pair_index(a, b, n);
                    // rows are stored back to back
                    assert_eq!(idx, expected);
                    assert!(!seen.set_bit(idx));
                    expected += 1;
                }
            }

            assert_eq!(expected as u64, number_of_pairs(n));
            assert_eq!(seen.cardinality() as u64, number_of_pairs(n));
        }
    }

    #[test]
    fn new_rejects_small_graphs() {
        assert!(matches!(
            TriangularMatrix::new(0),
            Err(GraphError::InvalidSize(0))
        ));
        assert!(matches!(
            TriangularMatrix::new(1),
            Err(GraphError::InvalidSize(1))
        ));
        assert!(matches!(
            TriangularMatrix::new(100_000),
            Err(GraphError::InvalidSize(100_000))
        ));

        let matrix = TriangularMatrix::new(2).unwrap();
        assert_eq!(matrix.vertex_count(), 2);
        assert_eq!(matrix.number_of_edges(), 0);
    }

    #[test]
    fn out_of_range_queries() {
        let mut matrix = TriangularMatrix::new(4).unwrap();

        assert!(matches!(
            matrix.are_neighbors(5, 1),
            Err(GraphError::OutOfRange { index: 5, count: 4 })
        ));
        assert!(matches!(
            matrix.are_neighbors(1, 4),
            Err(GraphError::OutOfRange { index: 4, count: 4 })
        ));
        assert!(matrix.all_neighbors(4, 0).is_err());
        assert!(matrix.set_edge(0, 4, true).is_err());
        assert_eq!(matrix.number_of_edges(), 0);
    }

    #[test]
    fn symmetry_and_self_adjacency() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 5, 17, 40] {
            let edges = random_edges(rng, n, 3 * n);
            let matrix = TriangularMatrix::from_edges(n, edges.iter()).unwrap();

            for a in 0..n {
                assert!(matrix.are_neighbors(a, a).unwrap());
                for b in 0..n {
                    assert_eq!(
                        matrix.are_neighbors(a, b).unwrap(),
                        matrix.are_neighbors(b, a).unwrap()
                    );
                }
            }

            for &Edge(a, b) in &edges {
                assert!(matrix.are_neighbors(b, a).unwrap());
            }
        }
    }

    #[test]
    fn set_edge_and_self_loops() {
        let mut matrix = TriangularMatrix::new(3).unwrap();

        matrix.set_edge(2, 0, true).unwrap();
        matrix.set_edge(1, 1, true).unwrap();
        assert_eq!(matrix.all_edges().collect_vec(), vec![Edge(0, 2)]);

        matrix.set_edge(0, 2, false).unwrap();
        assert!(!matrix.are_neighbors(2, 0).unwrap());
        assert_eq!(matrix.number_of_edges(), 0);
    }

    #[test]
    fn neighbors_from_start() {
        let matrix = TriangularMatrix::from_edges(6, [(2, 0), (2, 1), (2, 4), (2, 5), (3, 4)])
            .unwrap();

        assert_eq!(matrix.all_neighbors(2, 0).unwrap().collect_vec(), vec![0, 1, 4, 5]);
        assert_eq!(matrix.all_neighbors(2, 2).unwrap().collect_vec(), vec![4, 5]);
        assert_eq!(matrix.all_neighbors(2, 5).unwrap().collect_vec(), vec![5]);
        assert_eq!(matrix.all_neighbors(2, 6).unwrap().count(), 0);
        assert_eq!(matrix.all_neighbors(2, 100).unwrap().count(), 0);
        assert_eq!(matrix.all_neighbors(0, 0).unwrap().collect_vec(), vec![2]);

        // restartable: a second call scans again
        let first = matrix.all_neighbors(4, 0).unwrap().collect_vec();
        let second = matrix.all_neighbors(4, 0).unwrap().collect_vec();
        assert_eq!(first, vec![2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn regular_matrix_round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [2, 3, 10, 33] {
            let edges = random_edges(rng, n, 2 * n);
            let matrix = TriangularMatrix::from_edges(n, edges.iter()).unwrap();
            let regular = matrix.to_regular_matrix();

            assert_eq!(regular.len(), n as usize);
            for a in 0..n as usize {
                assert!(!regular[a][a]);
                for b in 0..n as usize {
                    assert_eq!(regular[a][b], regular[b][a]);
                }
            }

            assert_eq!(TriangularMatrix::from_regular_matrix(&regular).unwrap(), matrix);
            assert_eq!(matrix.all_edges().collect_vec(), edges);
        }
    }

    #[test]
    fn from_regular_matrix_reads_upper_triangle_only() {
        let matrix = TriangularMatrix::from_regular_matrix([
            [true, true, false],
            [false, true, false],
            [true, true, false],
        ])
        .unwrap();

        assert_eq!(matrix.all_edges().collect_vec(), vec![Edge(0, 1)]);
    }

    #[test]
    fn from_regular_matrix_rejects_bad_shapes() {
        let empty: Vec<Vec<bool>> = Vec::new();
        assert!(matches!(
            TriangularMatrix::from_regular_matrix(&empty),
            Err(GraphError::InvalidMatrix(_))
        ));
        assert!(matches!(
            TriangularMatrix::from_regular_matrix(vec![vec![false]]),
            Err(GraphError::InvalidMatrix(_))
        ));
        assert!(matches!(
            TriangularMatrix::from_regular_matrix(vec![vec![false, true], vec![true]]),
            Err(GraphError::InvalidMatrix(_))
        ));
        assert!(matches!(
            TriangularMatrix::try_from(vec![vec![false; 3]; 2]),
            Err(GraphError::InvalidMatrix(_))
        ));
    }
}
