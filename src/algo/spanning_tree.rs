/*!
Depth-first spanning trees.

The search is iterative: every stack frame stores the node it expands together with a
*resume cursor*, the smallest neighbor index not yet tried. Taking a tree edge `u -> v` moves
the cursor of `u` past `v` and pushes `v`; a frame whose neighbors are exhausted is popped.
Hence each neighborhood is scanned at most once in total and the stack depth is bounded by the
number of nodes instead of the call stack.

Siblings are explored in ascending index order, so the resulting tree is deterministic.
Only the connected component of the start node is spanned; all other nodes stay isolated.
*/

use tracing::{debug, trace};

use super::*;

/// A stack frame of the search
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    resume_from: Node,
}

/// Iterator over the edges of a DFS tree, in the order in which they are discovered.
///
/// Each yielded edge is `Edge(parent, child)`; it is not necessarily normalized.
pub struct DfsTreeEdges<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Frame>,
}

impl<'a, G> DfsTreeEdges<'a, G>
where
    G: AdjacencyList,
{
    /// Starts a search at `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `start` is not a node of `graph`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        if !graph.contains_node(start) {
            return Err(GraphError::out_of_range(start, graph.number_of_nodes()));
        }

        Ok(Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: vec![Frame {
                node: start,
                resume_from: 0,
            }],
        })
    }

    /// Returns *true* if `u` has been reached so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G> Iterator for DfsTreeEdges<'_, G>
where
    G: AdjacencyList,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            let Frame { node, resume_from } = *top;
            self.visited.set_bit(node);

            let visited = &self.visited;
            let unvisited = self
                .graph
                .neighbors_of_from(node, resume_from)
                .find(|&v| !visited.get_bit(v));

            match unvisited {
                Some(next) => {
                    top.resume_from = next + 1;
                    self.stack.push(Frame {
                        node: next,
                        resume_from: 0,
                    });
                    trace!(parent = node, child = next, "tree edge");
                    return Some(Edge(node, next));
                }
                None => {
                    trace!(node, "backtrack");
                    self.stack.pop();
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.len().saturating_sub(1)))
    }
}

/// Spanning trees as methods on graphs
pub trait SpanningTree: AdjacencyList {
    /// Returns a lazy iterator over the DFS tree edges rooted at `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `start` is not a node.
    fn dfs_tree_edges(&self, start: impl Into<Node>) -> Result<DfsTreeEdges<'_, Self>> {
        DfsTreeEdges::new(self, start.into())
    }

    /// Builds a new graph with the same nodes and only the edges of the DFS tree rooted at
    /// `start`. The input graph is not modified.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `start` is not a node.
    fn dfs_spanning_tree(&self, start: impl Into<Node>) -> Result<Self>
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        let start = start.into();
        let mut tree = Self::try_new(self.number_of_nodes())?;

        let mut num_tree_edges = 0;
        for Edge(u, v) in self.dfs_tree_edges(start)? {
            tree.try_add_edge(u, v);
            num_tree_edges += 1;
        }

        debug!(
            start,
            nodes = self.number_of_nodes(),
            tree_edges = num_tree_edges,
            "built DFS spanning tree"
        );
        Ok(tree)
    }
}

impl<G: AdjacencyList> SpanningTree for G {}

/// Builds the DFS spanning tree of `start`'s component of `graph`.
///
/// `start` may be a [`Vertex`] or a raw index.
///
/// # Errors
/// Returns [`GraphError::OutOfRange`] if `start` is not a vertex of `graph`.
pub fn build_spanning_tree(start: impl Into<Node>, graph: &Graph) -> Result<Graph> {
    graph.dfs_spanning_tree(start)
}
