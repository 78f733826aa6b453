/*!
`trigraphs` stores **undirected**, **unweighted** graphs as the upper triangle of their adjacency
matrix and builds depth-first spanning trees on top of it.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n >= 2` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`, normalized such that `Edge(u, v)` has `u < v`.

An undirected graph without self-loops has a symmetric adjacency matrix with an empty diagonal, so only
the `n * (n - 1) / 2` entries above the diagonal carry information. [`TriangularMatrix`](crate::repr::TriangularMatrix)
keeps exactly those in a single flat bitset. Every node is considered adjacent to itself, but self-loops
are never stored.

On top of the storage sits [`Graph`](crate::repr::Graph), a view that hands out [`Vertex`] handles and
accepts either handles or raw indices wherever a node is expected.

# Design

Queries and edits that take user-provided indices are checked and return a [`Result`] with a [`GraphError`].
The traits in [`ops`] are the unchecked layer algorithms are written against; they panic on invalid indices.

Algorithms are provided as iterators and as extension traits on the graph itself, e.g.
`graph.dfs_spanning_tree(start)` from [`algo::SpanningTree`].

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and both representations,
- [`algo`] includes the spanning tree construction,
- [`io`] includes readers and writers for the `regular-matrix` and `edge-set` text formats.

```rust
use trigraphs::{algo::*, io::*, prelude::*};

let graph = Graph::try_from_reader("a b c\nab bc ca\n".as_bytes(), FileFormat::EdgeSet).unwrap();
let tree = build_spanning_tree(0u32, &graph).unwrap();

let mut output = Vec::new();
tree.try_write_to_writer(&mut output, FileFormat::EdgeSet).unwrap();
assert_eq!(String::from_utf8(output).unwrap(), "a b c\nab bc\n");
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `trigraphs::prelude` includes definitions for nodes, edges, errors, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
