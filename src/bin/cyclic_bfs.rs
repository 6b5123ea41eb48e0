//! Cycle detection by breadth-first search.
//!
//! Usage:
//!   cargo run --bin cyclic-bfs
//!   cargo run --bin cyclic-bfs -- --skip-example --rule parent-of-current
//!   cargo run --bin cyclic-bfs -- --input answers.txt -vv

use std::{io, process::ExitCode};

use clap::Parser;
use cyclewalk::{
    config::CommonArgs, console::Console, session::run_bfs_program,
    tracing_support::init_tracing,
};

/// Find cycles in a directed graph with breadth-first search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Go straight to entering a custom graph instead of starting with the
    /// built-in example
    #[arg(long)]
    skip_example: bool,
}

fn run(args: &Args) -> cyclewalk::Result<()> {
    let mut config = args.common.session_config();
    config.show_example = !args.skip_example;
    let mut console = Console::new(args.common.open_input()?, io::stdout().lock());
    run_bfs_program(&mut console, &config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.common.verbose);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nerror: {err}");
            ExitCode::FAILURE
        }
    }
}
