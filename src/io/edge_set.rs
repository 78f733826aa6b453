/*!
# EdgeSet

The EdgeSet-Format names every node by a single character:
```text
a b c d
ab bc cd
```
The first line declares the labels; the `i`-th label names node `i`. All following lines up to
the end of the input or the first blank line list the edges as two-character tokens made of
declared labels. Without edge lines there are no edges, self-loops such as `aa` are ignored.
The blank line ends the graph, so further input (eg. a start vertex) may follow it.

The writer labels nodes with [`ALPHABET`] and therefore supports at most 26 nodes. Edge tokens
are wrapped onto further lines so that no line exceeds [`MAX_LINE_WIDTH`] characters; a token
is never split. The reader joins all edge lines again, so every written graph reads back
unchanged.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use super::*;

/// Labels used by [`EdgeSetWriter`], node `i` gets the `i`-th letter
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Default upper bound on the width of a written edge line
pub const MAX_LINE_WIDTH: usize = 120;

/// Rendered width of one edge token
const TOKEN_WIDTH: usize = 2;

/// A GraphReader for the EdgeSet-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeSetReader;

impl EdgeSetReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self
    }

    /// Parses the label line into a label-to-node map
    fn parse_labels(line: &str) -> Result<FxHashMap<char, Node>> {
        let mut labels = FxHashMap::default();

        for (idx, token) in line.split_whitespace().enumerate() {
            let mut chars = token.chars();
            let (Some(label), None) = (chars.next(), chars.next()) else {
                return Err(format_error!(
                    "Invalid vertex \"{token}\". It should be a single character."
                ));
            };
            raise_error_unless!(
                labels.insert(label, idx as Node).is_none(),
                "Vertex \"{label}\" already exists."
            );
        }

        Ok(labels)
    }
}

impl<G: From<TriangularMatrix>> GraphReader<G> for EdgeSetReader {
    fn try_read_graph<R: BufRead>(&self, mut reader: R) -> Result<G> {
        let labels = Self::parse_labels(&next_line(&mut reader)?.unwrap_or_default())?;
        let mut matrix = TriangularMatrix::new(labels.len() as NumNodes)?;

        while let Some(edges) = next_line(&mut reader)? {
            if edges.trim().is_empty() {
                break;
            }

            for token in edges.split_whitespace() {
                let (a, b) = match token.chars().collect_tuple() {
                    Some((a, b)) => (a, b),
                    None => {
                        return Err(format_error!(
                            "Invalid edge \"{token}\". It should be a pair of vertex labels without spaces."
                        ));
                    }
                };

                let (Some(&a), Some(&b)) = (labels.get(&a), labels.get(&b)) else {
                    return Err(format_error!(
                        "Not found vertexes described by edge \"{token}\"."
                    ));
                };
                matrix.set_edge(a, b, true)?;
            }
        }

        debug!(
            format = %FileFormat::EdgeSet,
            nodes = matrix.number_of_nodes(),
            edges = matrix.number_of_edges(),
            "read graph"
        );
        Ok(matrix.into())
    }
}

/// A writer for the EdgeSet-Format
#[derive(Debug, Clone)]
pub struct EdgeSetWriter {
    /// Edge lines are wrapped before they exceed this width
    max_line_width: usize,
}

impl Default for EdgeSetWriter {
    fn default() -> Self {
        Self {
            max_line_width: MAX_LINE_WIDTH,
        }
    }
}

impl EdgeSetWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the maximum width of an edge line. Every line holds at least one token, even if
    /// `width` is smaller than a token.
    pub fn max_line_width(mut self, width: usize) -> Self {
        self.max_line_width = width;
        self
    }

    /// Renders the complete output, failing before anything is written
    fn render<G: AdjacencyList>(&self, graph: &G) -> Result<String> {
        let n = graph.len();
        raise_error_unless!(
            n <= ALPHABET.len(),
            "Too large graph to show it as edge set: {n} vertices but only {} labels.",
            ALPHABET.len()
        );

        let labels = ALPHABET.chars().take(n).collect_vec();
        let mut output = labels.iter().join(" ");
        output.push('\n');

        let mut line_width = 0;
        for Edge(u, v) in graph.edges() {
            if line_width > 0 {
                if line_width + 1 + TOKEN_WIDTH > self.max_line_width {
                    output.push('\n');
                    line_width = 0;
                } else {
                    output.push(' ');
                    line_width += 1;
                }
            }
            output.push(labels[u as usize]);
            output.push(labels[v as usize]);
            line_width += TOKEN_WIDTH;
        }
        if line_width > 0 {
            output.push('\n');
        }

        Ok(output)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeSetWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let output = self.render(graph)?;
        writer.write_all(output.as_bytes())?;
        writer.flush()?;

        debug!(
            format = %FileFormat::EdgeSet,
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "wrote graph"
        );
        Ok(())
    }
}
