//! Cycle detection by depth-first search over a graph typed in by the user.
//!
//! Usage:
//!   cargo run --bin cyclic-dfs
//!   cargo run --bin cyclic-dfs -- --input answers.txt

use std::{io, process::ExitCode};

use clap::Parser;
use cyclewalk::{
    config::CommonArgs, console::Console, session::run_dfs_program,
    tracing_support::init_tracing,
};

/// Find cycles in a directed graph with depth-first search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.common.verbose);
    let result = args.common.open_input().and_then(|input| {
        let mut console = Console::new(input, io::stdout().lock());
        run_dfs_program(&mut console, &args.common.session_config())
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nerror: {err}");
            ExitCode::FAILURE
        }
    }
}
