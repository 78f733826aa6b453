/*!
# Graph Representations

- [`TriangularMatrix`]: the storage layer. Keeps the strict upper triangle of the adjacency
  matrix in one flat bitset and exposes checked (`Result`-returning) queries and edits.
- [`Graph`]: a thin owning view over a [`TriangularMatrix`] that speaks in [`Vertex`] handles
  and accepts either handles or raw indices wherever a node is expected.

Both implement the traits of [`crate::ops`], so algorithms can run on either.
*/

use crate::{ops::*, testing::test_graph_ops, *};

mod graph;
mod triangular;

pub use graph::*;
pub use triangular::*;
