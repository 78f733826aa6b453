/*!
# RegularMatrix

The RegularMatrix-Format consists of a line holding the number of nodes `n`, followed by `n`
lines with `n` whitespace-separated integers each. A non-zero entry in row `a` and column `b`
marks the edge {a,b}.

Only entries above the diagonal are interpreted; the rest merely has to be well-formed. The
writer always emits the symmetric matrix with an empty diagonal.

# Examples
```
use trigraphs::{io::*, prelude::*};

let input = "3\n0 1 0\n1 0 1\n0 1 0\n";
let graph: Graph = RegularMatrixReader::new().try_read_graph(input.as_bytes()).unwrap();
assert_eq!(graph.edges_vec(), vec![Edge(0, 1), Edge(1, 2)]);

let mut output = Vec::new();
RegularMatrixWriter::new().try_write_graph(&graph, &mut output).unwrap();
assert_eq!(String::from_utf8(output).unwrap(), input);
```
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// The size line is untrusted input; never reserve more than this upfront
const MAX_PREALLOCATED_ROWS: usize = 1 << 12;

/// A GraphReader for the RegularMatrix-Format
#[derive(Debug, Clone, Default)]
pub struct RegularMatrixReader;

impl RegularMatrixReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self
    }

    /// Parses the full square matrix without converting it into a graph
    pub fn try_read_matrix<R: BufRead>(&self, mut reader: R) -> Result<Vec<Vec<bool>>> {
        let header = next_line(&mut reader)?.unwrap_or_default();
        let mut parts = header.split_whitespace();
        let n: usize = parse_next_value!(parts, "the vertex count");
        raise_error_unless!(
            parts.next().is_none(),
            "Unexpected tokens after the vertex count."
        );

        let mut matrix = Vec::with_capacity(n.min(MAX_PREALLOCATED_ROWS));
        for row in 0..n {
            let Some(line) = next_line(&mut reader)? else {
                return Err(format_error!(
                    "Not all rows provided: expected {n}, found {row}."
                ));
            };

            let mut entries = Vec::with_capacity(n.min(MAX_PREALLOCATED_ROWS));
            for token in line.split_whitespace() {
                let value: i64 = token.parse().map_err(|_| {
                    format_error!("Edge as number not provided in row {row}: \"{token}\".")
                })?;
                entries.push(value != 0);
            }

            raise_error_unless!(
                entries.len() == n,
                "Not all columns provided for row {row}: expected {n}, found {}.",
                entries.len()
            );
            matrix.push(entries);
        }

        Ok(matrix)
    }
}

impl<G: From<TriangularMatrix>> GraphReader<G> for RegularMatrixReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let matrix = TriangularMatrix::from_regular_matrix(self.try_read_matrix(reader)?)?;
        debug!(
            format = %FileFormat::RegularMatrix,
            nodes = matrix.number_of_nodes(),
            edges = matrix.number_of_edges(),
            "read graph"
        );
        Ok(matrix.into())
    }
}

/// A writer for the RegularMatrix-Format
#[derive(Debug, Clone, Default)]
pub struct RegularMatrixWriter;

impl RegularMatrixWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for RegularMatrixWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let n = graph.number_of_nodes();
        writeln!(writer, "{n}")?;

        let mut row = vec![false; n as usize];
        for u in graph.vertices() {
            row.iter_mut().for_each(|x| *x = false);
            for v in graph.neighbors_of(u) {
                row[v as usize] = true;
            }
            writeln!(
                writer,
                "{}",
                row.iter().map(|&x| if x { "1" } else { "0" }).join(" ")
            )?;
        }
        writer.flush()?;

        debug!(
            format = %FileFormat::RegularMatrix,
            nodes = n,
            edges = graph.number_of_edges(),
            "wrote graph"
        );
        Ok(())
    }
}
