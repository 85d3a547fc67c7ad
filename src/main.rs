//! The calcline CLI tool

use std::path::PathBuf;
use std::{io, process};

use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;

use calcline::config::Config;
use calcline::session::Session;
use calcline::Error;

#[derive(Parser)]
#[command(name = "calcline", author, version, about, long_about = None)]
struct Cli {
    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Computes a Fibonacci number by bottom-up tabulation.
    /// Prompts for n unless it is given on the command line.
    Fib {
        /// Compute this value instead of prompting for one
        n: Option<u32>,
    },

    /// Evaluates an integer arithmetic expression.
    /// Prompts for a line unless one is given on the command line.
    Expr {
        /// Evaluate this expression instead of prompting for one
        expression: Option<String>,
    },
}

fn run(args: Cli) -> Result<(), Error> {
    let config = match &args.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    match args.command {
        Some(Commands::Fib { n: Some(n) }) => session.fib(n),
        Some(Commands::Fib { n: None }) | None => session.run_fib(),
        Some(Commands::Expr {
            expression: Some(expression),
        }) => session.eval(&expression),
        Some(Commands::Expr { expression: None }) => session.run_expr(),
    }
}

fn main() {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stdout)
        .init();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
