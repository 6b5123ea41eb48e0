//! Breadth-first and depth-first traversal with cycle detection.
//!
//! Both traversals start from a single vertex, explore neighbors in
//! ascending label order, and stop at the first back-edge they find,
//! reporting it as a [`CycleWitness`].

use std::{collections::VecDeque, fmt};

use bitvec::vec::BitVec;
use tracing::{debug, info_span};

use crate::{cycle::CycleWitness, graph::LabeledGraph};

/// The order in which a traversal explores the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
}

impl Strategy {
    /// Short name used in program output.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Decides which edges to already-visited vertices count as closing a cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BackEdgeRule {
    /// The edge closes a cycle if its target is on the current vertex's
    /// chain of parents (the current vertex itself included). Breadth-first
    /// walks also accept a cross edge whose target reaches the current
    /// vertex through vertices already dequeued. Every reported witness is
    /// a directed cycle of the graph, and a cycle is reported whenever one
    /// is reachable from the start.
    #[default]
    Ancestor,
    /// The edge closes a cycle unless its target is the parent of the
    /// current vertex. This flags cross edges between sibling subtrees and
    /// never flags the return edge of a two-vertex cycle. Depth-first walks
    /// rescan the neighbors of a vertex each time it is popped.
    ParentOfCurrent,
}

/// The outcome of one traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traversal {
    /// Vertices in the order they were finalized.
    pub order: Vec<usize>,
    /// The first cycle found, if any.
    pub cycle: Option<CycleWitness>,
}

impl Traversal {
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }
}

/// Traverses `graph` from `start` using the default [`BackEdgeRule`].
///
/// Panics if `start` is not a vertex of `graph`.
pub fn traverse(graph: &LabeledGraph, start: usize, strategy: Strategy) -> Traversal {
    traverse_with(graph, start, strategy, BackEdgeRule::default())
}

/// Traverses `graph` from `start`, stopping at the first back-edge accepted
/// by `rule`.
pub fn traverse_with(
    graph: &LabeledGraph,
    start: usize,
    strategy: Strategy,
    rule: BackEdgeRule,
) -> Traversal {
    assert!(
        start < graph.num_vertices(),
        "start vertex {start} out of range"
    );
    let _span = info_span!("traverse", %strategy, start = %graph.label(start)).entered();
    let (order, cycle) = match strategy {
        Strategy::BreadthFirst => {
            let mut walk = BfsWalk::new(graph, start, rule);
            let order: Vec<usize> = walk.by_ref().collect();
            (order, walk.into_cycle())
        }
        Strategy::DepthFirst => {
            let mut walk = DfsWalk::new(graph, start, rule);
            let order: Vec<usize> = walk.by_ref().collect();
            (order, walk.into_cycle())
        }
    };
    debug!(visited = order.len(), cycle = cycle.is_some(), "traversal finished");
    Traversal { order, cycle }
}

/// Per-traversal bookkeeping shared by both strategies.
struct SearchState<'g> {
    graph: &'g LabeledGraph,
    rule: BackEdgeRule,
    visited: BitVec,
    parents: Vec<Option<usize>>,
    cycle: Option<CycleWitness>,
}

impl<'g> SearchState<'g> {
    fn new(graph: &'g LabeledGraph, rule: BackEdgeRule) -> Self {
        let n = graph.num_vertices();
        let mut visited = BitVec::with_capacity(n);
        visited.resize(n, false);
        Self {
            graph,
            rule,
            visited,
            parents: vec![None; n],
            cycle: None,
        }
    }

    fn is_visited(&self, vertex: usize) -> bool {
        self.visited[vertex]
    }

    /// Marks `vertex` as visited, returning `true` if it was not already.
    fn visit(&mut self, vertex: usize) -> bool {
        !self.visited.replace(vertex, true)
    }

    fn is_ancestor(&self, ancestor: usize, vertex: usize) -> bool {
        let mut node = Some(vertex);
        while let Some(v) = node {
            if v == ancestor {
                return true;
            }
            node = self.parents[v];
        }
        false
    }

    /// Examines the edge `current → neighbor`, where `neighbor` has already
    /// been visited. Records a witness and returns `true` if the edge closes
    /// a cycle.
    fn check_back_edge(&mut self, current: usize, neighbor: usize) -> bool {
        let closes_cycle = match self.rule {
            BackEdgeRule::Ancestor => self.is_ancestor(neighbor, current),
            BackEdgeRule::ParentOfCurrent => self.parents[current] != Some(neighbor),
        };
        if closes_cycle {
            debug!(
                from = %self.graph.label(current),
                to = %self.graph.label(neighbor),
                "back-edge"
            );
            self.cycle = Some(CycleWitness::from_parent_chain(
                &self.parents,
                current,
                neighbor,
            ));
        }
        closes_cycle
    }

    /// Examines the edge `current → neighbor` when `neighbor` is visited but
    /// not an ancestor of `current`. The edge still closes a cycle if
    /// `neighbor` reaches `current` using only vertices in `within`; the
    /// witness then follows the shortest such path, preferring lower labels.
    fn check_cross_edge(&mut self, current: usize, neighbor: usize, within: &BitVec) -> bool {
        if !within[neighbor] {
            return false;
        }
        let n = self.graph.num_vertices();
        let mut previous = vec![None; n];
        let mut seen: BitVec = BitVec::repeat(false, n);
        seen.set(neighbor, true);
        let mut queue = VecDeque::from([neighbor]);
        while let Some(v) = queue.pop_front() {
            if v == current {
                debug!(
                    from = %self.graph.label(current),
                    to = %self.graph.label(neighbor),
                    "cross edge closes a cycle"
                );
                self.cycle = Some(CycleWitness::from_parent_chain(&previous, current, neighbor));
                return true;
            }
            for w in self.graph.sorted_successors(v) {
                if within[w] && !seen.replace(w, true) {
                    previous[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }
        false
    }
}

/// Breadth-first walk yielding vertices as they are dequeued.
///
/// Vertices are marked visited when they are enqueued, so each one enters
/// the queue at most once.
pub struct BfsWalk<'g> {
    state: SearchState<'g>,
    queue: VecDeque<usize>,
    dequeued: BitVec,
}

impl<'g> BfsWalk<'g> {
    pub fn new(graph: &'g LabeledGraph, start: usize, rule: BackEdgeRule) -> Self {
        let mut state = SearchState::new(graph, rule);
        state.visit(start);
        Self {
            state,
            queue: VecDeque::from([start]),
            dequeued: BitVec::repeat(false, graph.num_vertices()),
        }
    }

    /// The cycle found so far, if any.
    pub fn cycle(&self) -> Option<&CycleWitness> {
        self.state.cycle.as_ref()
    }

    pub fn into_cycle(self) -> Option<CycleWitness> {
        self.state.cycle
    }
}

impl Iterator for BfsWalk<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.state.cycle.is_some() {
            return None;
        }
        let current = self.queue.pop_front()?;
        self.dequeued.set(current, true);
        debug!(vertex = %self.state.graph.label(current), "dequeue");
        let follow_cross_edges = self.state.rule == BackEdgeRule::Ancestor;
        for neighbor in self.state.graph.sorted_successors(current) {
            if self.state.visit(neighbor) {
                self.state.parents[neighbor] = Some(current);
                self.queue.push_back(neighbor);
            } else if self.state.check_back_edge(current, neighbor)
                || (follow_cross_edges
                    && self.state.check_cross_edge(current, neighbor, &self.dequeued))
            {
                break;
            }
        }
        Some(current)
    }
}

/// Depth-first walk yielding vertices the first time they are popped.
///
/// Vertices are marked visited when popped rather than when pushed, so the
/// stack may hold several entries for one vertex. A later entry is only
/// yielded once; under [`BackEdgeRule::Ancestor`] it is skipped outright,
/// while [`BackEdgeRule::ParentOfCurrent`] scans its neighbors again.
/// Neighbors are pushed in descending label order so they are popped in
/// ascending order.
pub struct DfsWalk<'g> {
    state: SearchState<'g>,
    stack: Vec<usize>,
}

impl<'g> DfsWalk<'g> {
    pub fn new(graph: &'g LabeledGraph, start: usize, rule: BackEdgeRule) -> Self {
        Self {
            state: SearchState::new(graph, rule),
            stack: vec![start],
        }
    }

    /// The cycle found so far, if any.
    pub fn cycle(&self) -> Option<&CycleWitness> {
        self.state.cycle.as_ref()
    }

    pub fn into_cycle(self) -> Option<CycleWitness> {
        self.state.cycle
    }
}

impl Iterator for DfsWalk<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.state.cycle.is_some() {
            return None;
        }
        while let Some(current) = self.stack.pop() {
            let first_visit = self.state.visit(current);
            if first_visit {
                debug!(vertex = %self.state.graph.label(current), "visit");
            } else if self.state.rule == BackEdgeRule::Ancestor {
                continue;
            } else {
                debug!(vertex = %self.state.graph.label(current), "rescan");
            }
            for neighbor in self.state.graph.sorted_successors(current).into_iter().rev() {
                if !self.state.is_visited(neighbor) {
                    self.state.parents[neighbor] = Some(current);
                    self.stack.push(neighbor);
                } else if self.state.check_back_edge(current, neighbor) {
                    break;
                }
            }
            if first_visit {
                return Some(current);
            }
            if self.state.cycle.is_some() {
                return None;
            }
        }
        None
    }
}
