/*!
# Graph Algorithms

Algorithms are written against the traits of [`crate::ops`] and therefore run on every
representation. They are provided as iterators where possible, so results can be consumed
lazily, and as extension traits on the graphs themselves:
```rust
use trigraphs::{algo::*, prelude::*};

let graph = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
let tree = graph.dfs_spanning_tree(0u32).unwrap();
assert_eq!(tree.number_of_edges(), 2);
```
*/

mod spanning_tree;

use crate::prelude::*;

pub use spanning_tree::*;
