use std::fmt::Debug;

use crate::{adjacency_matrix::AdjacencyMatrix, graph::LabeledGraph};

/// One cycle found during a traversal, as the sequence of vertices it
/// passes through.
///
/// The first and last vertex are both the target of the back-edge that
/// closed the cycle, so a two-vertex cycle `X → Y → X` is stored as
/// `[X, Y, X]` and a self-loop on `X` as `[X, X]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CycleWitness {
    vertices: Vec<usize>,
}

impl CycleWitness {
    /// Builds the witness for the back-edge `current → target` by walking
    /// `parents` upward from `current` until `target` or the root is reached.
    pub fn from_parent_chain(parents: &[Option<usize>], current: usize, target: usize) -> Self {
        let mut chain = Vec::new();
        let mut node = Some(current);
        while let Some(v) = node {
            if v == target {
                break;
            }
            chain.push(v);
            node = parents[v];
        }
        let mut vertices = Vec::with_capacity(chain.len() + 2);
        vertices.push(target);
        vertices.extend(chain.into_iter().rev());
        vertices.push(target);
        Self { vertices }
    }

    /// Returns the vertices of the cycle, starting and ending with the same
    /// vertex.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Tests whether the witness returns to the vertex it started from.
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Returns an iterator over consecutive `(source, target)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Checks that every step of the witness is an edge of `matrix`.
    pub fn is_walk_in(&self, matrix: &AdjacencyMatrix) -> bool {
        self.edges().all(|(source, target)| matrix.contains(source, target))
    }

    /// Renders the witness as space-terminated labels.
    pub fn labels(&self, graph: &LabeledGraph) -> String {
        graph.render(self.vertices.iter().copied())
    }
}

impl Debug for CycleWitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CycleWitness").field(&self.vertices).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_witness_from_ancestor_chain() {
        // 0 -> 1 -> 2 -> 3, back-edge 3 -> 1.
        let parents = [None, Some(0), Some(1), Some(2)];
        let witness = CycleWitness::from_parent_chain(&parents, 3, 1);
        assert_eq!(witness.vertices(), &[1, 2, 3, 1]);
        assert!(witness.is_closed());
        assert_eq!(witness.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_witness_for_self_loop() {
        let parents = [None, Some(0)];
        let witness = CycleWitness::from_parent_chain(&parents, 1, 1);
        assert_eq!(witness.vertices(), &[1, 1]);
    }

    #[test]
    fn test_witness_when_target_is_not_an_ancestor() {
        // 0 -> 1, 0 -> 2; edge 2 -> 1 is a cross edge and the chain runs out.
        let parents = [None, Some(0), Some(0)];
        let witness = CycleWitness::from_parent_chain(&parents, 2, 1);
        assert_eq!(witness.vertices(), &[1, 0, 2, 1]);
    }

    #[test]
    fn test_is_walk_in() {
        let mut matrix = AdjacencyMatrix::with_size(2);
        matrix.insert(0, 1);
        let parents = [None, Some(0)];
        let witness = CycleWitness::from_parent_chain(&parents, 1, 0);
        assert_eq!(witness.vertices(), &[0, 1, 0]);
        assert!(!witness.is_walk_in(&matrix));
        matrix.insert(1, 0);
        assert!(witness.is_walk_in(&matrix));
    }
}
