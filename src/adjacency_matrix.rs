use std::fmt;

use bitvec::vec::BitVec;

/// A dense, square, directed adjacency matrix of boolean entries.
///
/// Entries are bit-packed in row-major order, so the row of a vertex is a
/// contiguous bit slice and its successors can be found with a single
/// `iter_ones` scan. The size is fixed at construction; indexing outside of
/// it panics.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    bits: BitVec,
    size: usize,
}

impl AdjacencyMatrix {
    /// Creates a `size` × `size` matrix with no edges.
    pub fn with_size(size: usize) -> Self {
        let mut bits = BitVec::with_capacity(size * size);
        bits.resize(size * size, false);
        AdjacencyMatrix { bits, size }
    }

    /// Builds a matrix from rows of booleans. Returns `None` if the rows do
    /// not form a square.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        let mut matrix = Self::with_size(size);
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != size {
                return None;
            }
            for (col, &entry) in entries.iter().enumerate() {
                matrix.set(row, col, entry);
            }
        }
        Some(matrix)
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "entry ({row}, {col}) out of bounds for a matrix of size {}",
            self.size
        );
        row * self.size + col
    }

    /// Adds an edge from `row` to `col`. Returns `true` if the edge was
    /// already present.
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);
        self.bits.replace(index, true)
    }

    /// Removes the edge from `row` to `col`. Returns `true` if the edge was
    /// present.
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);
        self.bits.replace(index, false)
    }

    /// Sets the entry at `row` and `col`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let index = self.index(row, col);
        self.bits.set(index, value);
    }

    /// Tests whether there is an edge from `row` to `col`.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.bits[self.index(row, col)]
    }

    /// Iterates over the targets of edges leaving `row`, in ascending index
    /// order.
    pub fn successors(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        let start = self.index(row, 0);
        self.bits[start..start + self.size].iter_ones()
    }

    /// Iterates over all edges as `(row, col)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.bits.iter_ones().map(move |idx| (idx / size, idx % size))
    }

    pub fn num_edges(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns row `row` as a vector of booleans.
    pub fn row(&self, row: usize) -> Vec<bool> {
        let start = self.index(row, 0);
        self.bits[start..start + self.size].iter().by_vals().collect()
    }
}

impl fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("size", &self.size)
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_insert_and_contains() {
        let mut matrix = AdjacencyMatrix::with_size(3);
        assert!(!matrix.insert(0, 1));
        assert!(matrix.contains(0, 1));
        assert!(!matrix.contains(1, 0));
    }

    #[test]
    fn test_matrix_insert_reports_existing() {
        let mut matrix = AdjacencyMatrix::with_size(2);
        matrix.insert(1, 0);
        assert!(matrix.insert(1, 0));
        assert_eq!(matrix.num_edges(), 1);
    }

    #[test]
    fn test_matrix_remove() {
        let mut matrix = AdjacencyMatrix::with_size(2);
        matrix.insert(0, 1);
        assert!(matrix.remove(0, 1));
        assert!(!matrix.remove(0, 1));
        assert!(!matrix.contains(0, 1));
    }

    #[test]
    fn test_matrix_successors_are_ascending() {
        let mut matrix = AdjacencyMatrix::with_size(5);
        matrix.insert(2, 4);
        matrix.insert(2, 0);
        matrix.insert(2, 3);
        matrix.insert(1, 2);
        assert_eq!(matrix.successors(2).collect::<Vec<_>>(), vec![0, 3, 4]);
        assert_eq!(matrix.successors(1).collect::<Vec<_>>(), vec![2]);
        assert_eq!(matrix.successors(0).count(), 0);
    }

    #[test]
    fn test_matrix_self_loop() {
        let mut matrix = AdjacencyMatrix::with_size(1);
        matrix.insert(0, 0);
        assert_eq!(matrix.successors(0).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_matrix_edges() {
        let mut matrix = AdjacencyMatrix::with_size(3);
        matrix.insert(2, 1);
        matrix.insert(0, 2);
        assert_eq!(matrix.edges().collect::<Vec<_>>(), vec![(0, 2), (2, 1)]);
    }

    #[test]
    fn test_matrix_from_rows() {
        let matrix = AdjacencyMatrix::from_rows(&[
            vec![false, true],
            vec![true, false],
        ])
        .unwrap();
        assert!(matrix.contains(0, 1));
        assert!(matrix.contains(1, 0));
        assert_eq!(matrix.row(0), vec![false, true]);
        assert_eq!(matrix.num_edges(), 2);
    }

    #[test]
    fn test_matrix_from_ragged_rows() {
        assert!(AdjacencyMatrix::from_rows(&[vec![false, true], vec![true]]).is_none());
    }

    #[test]
    #[should_panic]
    fn test_matrix_out_of_bounds() {
        let matrix = AdjacencyMatrix::with_size(2);
        matrix.contains(2, 0);
    }
}
