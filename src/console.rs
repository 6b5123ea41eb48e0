//! Prompting and input validation for the interactive programs.
//!
//! Input is read as whitespace-separated tokens, so answers may be typed one
//! per line or several to a line. Invalid answers are reported and asked
//! for again; only the end of input or an I/O failure is an error.

use std::{
    collections::VecDeque,
    fmt::Display,
    io::{BufRead, Write},
};

use derivative::Derivative;
use tracing::{trace, warn};

use crate::{
    adjacency_matrix::AdjacencyMatrix,
    error::{ConsoleError, Result},
    graph::{GraphError, LabeledGraph},
    labels::{self, MAX_VERTICES, VertexLabels},
};

/// A prompt-and-answer channel over any buffered reader and writer.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Console<R, W> {
    #[derivative(Debug = "ignore")]
    input: R,
    #[derivative(Debug = "ignore")]
    output: W,
    /// Unread tokens from the current input line.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` without a trailing newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        write!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `text` followed by a newline.
    pub fn say_line(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(%token, "read token");
                return Ok(token);
            }
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads one non-blank character. The rest of its token stays unread.
    fn next_char(&mut self) -> Result<char, ConsoleError> {
        loop {
            let token = self.next_token()?;
            let mut chars = token.chars();
            if let Some(first) = chars.next() {
                let rest = chars.as_str();
                if !rest.is_empty() {
                    self.pending.push_front(rest.to_owned());
                }
                return Ok(first);
            }
        }
    }

    /// Drops whatever is left of the current input line.
    fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Reads an integer in `range`, printing `retry` and discarding the rest
    /// of the line after each bad answer.
    fn read_number_in(
        &mut self,
        range: std::ops::RangeInclusive<usize>,
        retry: &str,
    ) -> Result<usize, ConsoleError> {
        loop {
            let token = self.next_token()?;
            match token.parse::<usize>() {
                Ok(n) if range.contains(&n) => return Ok(n),
                _ => {
                    warn!(%token, "rejected answer");
                    self.discard_line();
                    self.say(retry)?;
                }
            }
        }
    }

    /// Asks for the number of vertices, between 1 and 26.
    pub fn read_vertex_count(&mut self) -> Result<usize, ConsoleError> {
        self.say("\nEnter number of vertices: ")?;
        self.read_number_in(
            1..=MAX_VERTICES,
            "Invalid input. Please enter a number between 1 and 26: ",
        )
    }

    /// Asks for `count` distinct letter labels.
    pub fn read_labels(&mut self, count: usize) -> Result<VertexLabels> {
        self.say("Enter vertex labels (uppercase letters, space-separated): ")?;
        let mut chosen = Vec::with_capacity(count);
        while chosen.len() < count {
            let raw = self.next_char()?;
            let label = match labels::normalize(raw) {
                Ok(label) => label,
                Err(_) => {
                    self.say_line(format!("Invalid label '{raw}'. Labels must be letters."))?;
                    continue;
                }
            };
            if chosen.contains(&label) {
                self.say_line("Duplicate label detected. Please enter unique labels only.")?;
                continue;
            }
            chosen.push(label);
        }
        Ok(VertexLabels::new(chosen).map_err(GraphError::from)?)
    }

    /// Asks for every entry of the adjacency matrix, row by row.
    pub fn read_matrix(&mut self, labels: VertexLabels) -> Result<LabeledGraph> {
        let n = labels.len();
        let mut matrix = AdjacencyMatrix::with_size(n);
        self.say("\nEnter the adjacency matrix (1 for edge, 0 for no edge):\n")?;
        for row in 0..n {
            let from = labels.label(row);
            self.say(format!("\nConnections from {from} to ("))?;
            self.say(labels.render(0..n))?;
            self.say("):\n")?;
            for col in 0..n {
                self.say(format!(
                    "  Edge from {from} to {} (0 or 1): ",
                    labels.label(col)
                ))?;
                let entry = self.read_number_in(0..=1, "  Invalid input. Enter 0 or 1: ")?;
                matrix.set(row, col, entry == 1);
            }
        }
        Ok(LabeledGraph::new(labels, matrix)?)
    }

    /// Asks for a complete graph: vertex count, labels, then the matrix.
    pub fn read_graph(&mut self) -> Result<LabeledGraph> {
        let count = self.read_vertex_count()?;
        let labels = self.read_labels(count)?;
        self.read_matrix(labels)
    }

    /// Asks for a start vertex. Returns `None` after telling the user if the
    /// label is not in `graph`.
    pub fn read_start_vertex(
        &mut self,
        graph: &LabeledGraph,
    ) -> Result<Option<usize>, ConsoleError> {
        self.say("\nEnter starting vertex: ")?;
        let label = self.next_char()?;
        let vertex = graph.index_of(label);
        if vertex.is_none() {
            self.say_line("Invalid vertex label. Try again.")?;
        }
        Ok(vertex)
    }

    /// Asks a yes/no question. Any word starting with `y` or `Y` is yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool, ConsoleError> {
        self.say(question)?;
        let answer = self.next_token()?;
        Ok(answer.starts_with(['y', 'Y']))
    }
}
