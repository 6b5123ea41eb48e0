use std::fmt;

/// The largest number of vertices a graph can have: one per uppercase letter.
pub const MAX_VERTICES: usize = 26;

/// Errors produced when building a [`VertexLabels`] set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("a graph needs at least one vertex")]
    Empty,
    #[error("invalid label {0:?}: labels must be letters")]
    NotALetter(char),
    #[error("duplicate label {0:?}")]
    Duplicate(char),
}

/// An ordered set of single-letter vertex labels.
///
/// Position `i` in the set is the label of vertex `i`. Labels are stored in
/// uppercase and are unique.
#[derive(Clone, PartialEq, Eq)]
pub struct VertexLabels {
    labels: Vec<char>,
}

impl VertexLabels {
    /// Builds a label set, uppercasing each label.
    pub fn new(labels: impl IntoIterator<Item = char>) -> Result<Self, LabelError> {
        let mut result = Vec::new();
        for label in labels {
            let label = normalize(label)?;
            if result.contains(&label) {
                return Err(LabelError::Duplicate(label));
            }
            result.push(label);
        }
        // At most 26 distinct letters can get this far.
        if result.is_empty() {
            return Err(LabelError::Empty);
        }
        Ok(Self { labels: result })
    }

    /// The first `n` letters of the alphabet. Panics if `n` is zero or
    /// greater than [`MAX_VERTICES`].
    pub fn alphabetic(n: usize) -> Self {
        assert!((1..=MAX_VERTICES).contains(&n), "bad vertex count {n}");
        Self {
            labels: ('A'..='Z').take(n).collect(),
        }
    }

    /// Finds the vertex with the given label, ignoring case.
    pub fn index_of(&self, label: char) -> Option<usize> {
        let label = label.to_ascii_uppercase();
        self.labels.iter().position(|&l| l == label)
    }

    /// Returns the label of vertex `index`.
    pub fn label(&self, index: usize) -> char {
        self.labels[index]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.labels.iter().copied()
    }

    /// Renders a sequence of vertices as their labels, each followed by a
    /// space.
    pub fn render(&self, vertices: impl IntoIterator<Item = usize>) -> String {
        vertices
            .into_iter()
            .map(|v| format!("{} ", self.label(v)))
            .collect()
    }
}

/// Uppercases `label`, rejecting anything that is not an ASCII letter.
pub fn normalize(label: char) -> Result<char, LabelError> {
    if label.is_ascii_alphabetic() {
        Ok(label.to_ascii_uppercase())
    } else {
        Err(LabelError::NotALetter(label))
    }
}

impl fmt::Debug for VertexLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.labels).finish()
    }
}
