//! The two interactive programs: cycle detection by breadth-first search
//! over a built-in example (optionally followed by a custom graph), and
//! cycle detection by depth-first search over a graph entered by the user.

use std::io::{BufRead, Write};

use tracing::info;

use crate::{
    config::SessionConfig,
    console::Console,
    error::Result,
    graph::LabeledGraph,
    search::{Strategy, traverse_with},
};

/// Runs traversals over `graph` from start vertices chosen by the user until
/// they decline to try another one.
pub fn run_traversals<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    graph: &LabeledGraph,
    strategy: Strategy,
    config: &SessionConfig,
) -> Result<()> {
    loop {
        let Some(start) = console.read_start_vertex(graph)? else {
            continue;
        };
        let start_label = graph.label(start);
        info!(%strategy, start = %start_label, rule = ?config.rule, "running traversal");
        console.say(format!(
            "\nPerforming {strategy} starting from vertex {start_label}...\n"
        ))?;

        let result = traverse_with(graph, start, strategy, config.rule);

        console.say_line(format!(
            "{strategy} Traversal Order: {}",
            graph.render(result.order.iter().copied())
        ))?;
        match &result.cycle {
            Some(cycle) => console.say_line(format!(
                "Cycle detected! Vertices in the cycle: {}",
                cycle.labels(graph)
            ))?,
            None => console.say(format!(
                "No cycle detected starting from vertex {start_label}.\n"
            ))?,
        }

        let again = format!("\nTry {strategy} from another starting node? (Y/N): ");
        if !console.confirm(&again)? {
            return Ok(());
        }
    }
}

fn show_graph<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    graph: &LabeledGraph,
) -> Result<()> {
    console.say("\nAdjacency Matrix:\n")?;
    console.say(graph)?;
    Ok(())
}

/// The breadth-first program.
///
/// Starts with [`LabeledGraph::example`] unless `config.show_example` is
/// off, then offers to read a custom graph from the user.
pub fn run_bfs_program<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
) -> Result<()> {
    let strategy = Strategy::BreadthFirst;
    console.say(" *** GRAPH CYCLE DETECTION USING BFS *** \n")?;

    let custom = if config.show_example {
        let graph = LabeledGraph::example();
        let names: Vec<_> = graph.labels().iter().map(|l| format!("'{l}'")).collect();
        console.say(format!("\nvertexLabels = {{{}}}.", names.join(", ")))?;
        show_graph(console, &graph)?;
        run_traversals(console, &graph, strategy, config)?;
        console.confirm("\nDo you want to enter a new graph? (Y/N): ")?
    } else {
        true
    };

    if custom {
        console.say("\n--- Enter Your Custom Graph ---\n")?;
        let graph = console.read_graph()?;
        show_graph(console, &graph)?;
        run_traversals(console, &graph, strategy, config)?;
    }

    console.say("\nProgram ended. Goodbye!\n")?;
    Ok(())
}

/// The depth-first program: reads a graph from the user and traverses it.
pub fn run_dfs_program<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
) -> Result<()> {
    console.say(" *** GRAPH CYCLE DETECTION USING DFS *** \n")?;
    let graph = console.read_graph()?;
    show_graph(console, &graph)?;
    run_traversals(console, &graph, Strategy::DepthFirst, config)?;
    console.say("\nProgram ended. Goodbye!\n")?;
    Ok(())
}
