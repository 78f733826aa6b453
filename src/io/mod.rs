/*!
# IO

Utilities for reading and writing graphs in two plain-text formats.

## Formats

- **RegularMatrix** (`regular-matrix`): a line with the number of nodes `n`, followed by `n` rows
  of `n` whitespace-separated `0`/`1` tokens. Only the strict upper triangle is interpreted.
- **EdgeSet** (`edge-set`): a line of distinct single-character vertex labels (their order
  defines the node indices), followed by lines of two-character edge tokens up to the end of
  the input or a blank line.

Readers consume exactly the lines their format needs (for EdgeSet including the terminating
blank line) and leave the rest of the input alone.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod edge_set;
pub mod regular_matrix;

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use edge_set::*;
pub use regular_matrix::*;

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] and [`GraphWrite`] to determine the
/// correct parser or writer to use.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Size line followed by the full 0/1 adjacency matrix
    #[default]
    RegularMatrix,
    /// Vertex labels followed by label pairs
    EdgeSet,
}

impl FileFormat {
    /// All formats in the order they are listed to users
    pub const ALL: [FileFormat; 2] = [FileFormat::RegularMatrix, FileFormat::EdgeSet];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::RegularMatrix => "regular-matrix",
            FileFormat::EdgeSet => "edge-set",
        }
    }
}

impl Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FileFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format_error!("Unknown FileFormat: {s}"))
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns [`GraphError::Format`] if the input is not a valid representation
    /// of a graph in the expected format, or [`GraphError::Io`] if reading fails.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns [`GraphError::Format`] if the graph cannot be expressed in the format and
    /// [`GraphError::Io`] if writing fails. Nothing is written in the former case.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the input
    /// is invalid for the chosen format.
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: From<TriangularMatrix>,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        let matrix: TriangularMatrix = match format {
            FileFormat::RegularMatrix => RegularMatrixReader::new().try_read_graph(reader)?,
            FileFormat::EdgeSet => EdgeSetReader::new().try_read_graph(reader)?,
        };
        Ok(matrix.into())
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the graph cannot be expressed in the format or if writing fails.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    ///
    /// The graph is rendered before the file is created, so a graph that cannot be expressed
    /// in `format` leaves no file behind.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut buffer = Vec::new();
        self.try_write_to_writer(&mut buffer, format)?;
        std::fs::write(path, buffer)?;
        Ok(())
    }
}

impl<G> GraphWrite for G
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::RegularMatrix => RegularMatrixWriter::new().try_write_graph(self, writer),
            FileFormat::EdgeSet => EdgeSetWriter::new().try_write_graph(self, writer),
        }
    }
}

/// Reads the next line without its line terminator, or `None` at the end of the input
fn next_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}

/// Shorthand for creating a new format error
macro_rules! format_error {
    ($($info:tt)*) => {
        $crate::GraphError::Format(format!($($info)*))
    };
}

/// Shorthand for returning `Err(GraphError::Format)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $($info:tt)*) => {
        if !($cond) {
            return Err(format_error!($($info)*));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(format_error!("Premature end of line when parsing {}.", $name));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(format_error!(
                    "Invalid value \"{}\" found. Cannot parse {}.",
                    next,
                    $name
                ))
            }
        }
    }};
}

use format_error;
use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use std::io::Cursor;

    #[test]
    fn file_format_names() {
        for format in FileFormat::ALL {
            assert_eq!(format.to_string().parse::<FileFormat>().unwrap(), format);
        }
        assert_eq!("Edge-Set".parse::<FileFormat>().unwrap(), FileFormat::EdgeSet);
        assert!(matches!(
            "metis".parse::<FileFormat>(),
            Err(GraphError::Format(_))
        ));
        assert_eq!(FileFormat::default(), FileFormat::RegularMatrix);
    }

    #[test]
    fn round_trip_through_both_formats() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [2 as NumNodes, 7, 26] {
            for m_ub in [0, n, 4 * n, 20 * n] {
                let edges = random_edges(rng, n, m_ub);
                let graph = Graph::from_edges(n, edges.iter()).unwrap();

                for format in FileFormat::ALL {
                    let mut buffer = Vec::new();
                    graph.try_write_to_writer(&mut buffer, format).unwrap();

                    let read = Graph::try_from_reader(Cursor::new(buffer), format).unwrap();
                    assert_eq!(read, graph);
                }
            }
        }
    }

    #[test]
    fn regular_matrix_round_trip_beyond_alphabet() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);
        let edges = random_edges(rng, 60, 200);
        let matrix = TriangularMatrix::from_edges(60, edges.iter()).unwrap();

        let mut buffer = Vec::new();
        matrix
            .try_write_to_writer(&mut buffer, FileFormat::RegularMatrix)
            .unwrap();
        let read =
            TriangularMatrix::try_from_reader(buffer.as_slice(), FileFormat::RegularMatrix)
                .unwrap();
        assert_eq!(read, matrix);

        assert!(matches!(
            matrix.try_write_to_writer(Vec::new(), FileFormat::EdgeSet),
            Err(GraphError::Format(_))
        ));
    }

    #[test]
    fn clique_round_trip_through_files() {
        let n = 26;
        let clique = Graph::from_edges(
            n,
            (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v))),
        )
        .unwrap();

        let dir = std::env::temp_dir().join(format!("trigraphs-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        for format in FileFormat::ALL {
            let path = dir.join(format.name());
            clique.try_write_to_file(&path, format).unwrap();
            assert_eq!(Graph::try_from_file(&path, format).unwrap(), clique);
        }

        let path = dir.join("writer");
        EdgeSetWriter::new()
            .try_write_graph_file(&clique, &path)
            .unwrap();
        let read: TriangularMatrix = EdgeSetReader::new().try_read_graph_file(&path).unwrap();
        assert_eq!(read.number_of_edges(), 325);

        RegularMatrixWriter::new()
            .try_write_graph_file(&read, &path)
            .unwrap();
        let read: Graph = RegularMatrixReader::new().try_read_graph_file(&path).unwrap();
        assert_eq!(read, clique);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn readers_leave_trailing_input() {
        let mut input = Cursor::new("2\n0 1\n1 0\n1\n");
        let graph = Graph::try_from_reader(&mut input, FileFormat::RegularMatrix).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(next_line(&mut input).unwrap().as_deref(), Some("1"));

        let mut input = Cursor::new("a b\nab\n\n0\n");
        let graph = Graph::try_from_reader(&mut input, FileFormat::EdgeSet).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(next_line(&mut input).unwrap().as_deref(), Some("0"));
        assert_eq!(next_line(&mut input).unwrap(), None);
    }
}
