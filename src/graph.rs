use std::fmt;

use crate::{
    adjacency_matrix::AdjacencyMatrix,
    labels::{LabelError, VertexLabels},
};

/// Errors produced when building or querying a [`LabeledGraph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error(transparent)]
    Labels(#[from] LabelError),
    #[error("matrix has {matrix} rows but there are {labels} labels")]
    SizeMismatch { matrix: usize, labels: usize },
    #[error("no vertex labeled {0:?}")]
    UnknownLabel(char),
}

/// A directed graph stored as an adjacency matrix, with one letter label per
/// vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledGraph {
    labels: VertexLabels,
    matrix: AdjacencyMatrix,
}

impl LabeledGraph {
    pub fn new(labels: VertexLabels, matrix: AdjacencyMatrix) -> Result<Self, GraphError> {
        if labels.len() != matrix.size() {
            return Err(GraphError::SizeMismatch {
                matrix: matrix.size(),
                labels: labels.len(),
            });
        }
        Ok(Self { labels, matrix })
    }

    /// Builds a graph from its labels and a list of `(source, target)` label
    /// pairs.
    pub fn from_edges(labels: VertexLabels, edges: &[(char, char)]) -> Result<Self, GraphError> {
        let mut matrix = AdjacencyMatrix::with_size(labels.len());
        for &(source, target) in edges {
            let source = labels
                .index_of(source)
                .ok_or(GraphError::UnknownLabel(source))?;
            let target = labels
                .index_of(target)
                .ok_or(GraphError::UnknownLabel(target))?;
            matrix.insert(source, target);
        }
        Self::new(labels, matrix)
    }

    /// The built-in sample graph: vertices `A` through `G` with edges
    /// D→A, A→C, C→B, C→E, C→F and E→G.
    pub fn example() -> Self {
        let labels = VertexLabels::alphabetic(7);
        let mut matrix = AdjacencyMatrix::with_size(labels.len());
        for (source, target) in [(3, 0), (0, 2), (2, 1), (2, 4), (2, 5), (4, 6)] {
            matrix.insert(source, target);
        }
        Self { labels, matrix }
    }

    pub fn labels(&self) -> &VertexLabels {
        &self.labels
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, vertex: usize) -> char {
        self.labels.label(vertex)
    }

    pub fn index_of(&self, label: char) -> Option<usize> {
        self.labels.index_of(label)
    }

    /// Like [`index_of`](Self::index_of), but fails for unknown labels.
    pub fn vertex(&self, label: char) -> Result<usize, GraphError> {
        self.index_of(label).ok_or(GraphError::UnknownLabel(label))
    }

    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.matrix.contains(source, target)
    }

    /// Returns the targets of edges leaving `vertex`, sorted by label rather
    /// than by index.
    pub fn sorted_successors(&self, vertex: usize) -> Vec<usize> {
        let mut successors: Vec<_> = self.matrix.successors(vertex).collect();
        successors.sort_by_key(|&v| self.labels.label(v));
        successors
    }

    /// Renders vertices as space-terminated labels, e.g. `"D A C "`.
    pub fn render(&self, vertices: impl IntoIterator<Item = usize>) -> String {
        self.labels.render(vertices)
    }
}

/// Prints the matrix with a header row of labels and one labeled line of
/// `0`/`1` entries per vertex.
impl fmt::Display for LabeledGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for label in self.labels.iter() {
            write!(f, "{label} ")?;
        }
        writeln!(f)?;
        for (row, label) in self.labels.iter().enumerate() {
            write!(f, "{label} ")?;
            for col in 0..self.num_vertices() {
                write!(f, "{} ", u8::from(self.matrix.contains(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
