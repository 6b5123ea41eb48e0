pub mod adjacency_matrix;
pub mod config;
pub mod console;
pub mod cycle;
pub mod error;
pub mod graph;
pub mod labels;
pub mod search;
pub mod session;
pub mod tracing_support;

pub use crate::cycle::CycleWitness;
pub use crate::error::{ConsoleError, Error, Result};
pub use crate::graph::{GraphError, LabeledGraph};
pub use crate::labels::{LabelError, VertexLabels};
pub use crate::search::{BackEdgeRule, Strategy, Traversal, traverse, traverse_with};
