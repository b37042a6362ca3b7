//! CLI frontend for Tarski grid worlds.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tarski",
    about = "Evaluate first-order queries over a grid of shapes",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the world's objects, one per line
    Show {
        /// JSON world file (default: the built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// List the world's objects as a table
    List {
        /// JSON world file (default: the built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// List the predicate library
    Predicates,

    /// Evaluate one or more queries
    Eval {
        /// Queries, e.g. 'isBetweenOf(B, C, A) && !isCube(B)'
        #[arg(required = true)]
        exprs: Vec<String>,

        /// JSON world file (default: the built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Check names and arities without evaluating
    Check {
        /// Queries to check
        #[arg(required = true)]
        exprs: Vec<String>,

        /// JSON world file (default: the built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Print a query's syntax tree as JSON
    Ast {
        /// Query to parse
        expr: String,
    },

    /// Print the demo world and evaluate the sample queries against it
    Demo,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { world } => commands::show::run(world.as_deref()),
        Commands::List { world } => commands::list::run(world.as_deref()),
        Commands::Predicates => commands::predicates::run(),
        Commands::Eval { exprs, world } => commands::eval::run(world.as_deref(), &exprs),
        Commands::Check { exprs, world } => commands::check::run(world.as_deref(), &exprs),
        Commands::Ast { expr } => commands::ast::run(&expr),
        Commands::Demo => commands::demo::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
