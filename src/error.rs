use std::{io, path::PathBuf};

use crate::graph::GraphError;

/// Errors raised while talking to the user.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before the session was complete")]
    UnexpectedEof,
}

/// Top-level error type for the console programs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error("cannot open {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
