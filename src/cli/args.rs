use crate::singleton::InitStrategy;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "creator_patterns")]
#[command(about = "Factory and Singleton pattern demonstrations")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create shapes by name and draw them
    Factory {
        /// Shape names (case-insensitive): circle, rectangle, square
        #[arg(default_values = ["circle", "rectangle", "square"])]
        shapes: Vec<String>,
    },

    /// Race threads on the first singleton access and print the instance
    Singleton {
        /// Initialization strategy
        #[arg(short, long, value_enum, default_value_t = InitStrategy::Guarded)]
        strategy: InitStrategy,

        /// Number of threads racing the first access, 1 to 256 (defaults to CPU count)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// List the shapes the factory can create
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
