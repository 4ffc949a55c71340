use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "duetodo", version)]
#[command(about = "A small todo list kept in a JSON file", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Todo file to use (default: ./todos.json)
    #[arg(long, global = true, env = "DUETODO_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Hold an advisory lock on the todo file while reading and writing it
    #[arg(
        long,
        global = true,
        env = "DUETODO_LOCK",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub lock: bool,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Add a new todo (usage: add "Buy milk" --due 2025-01-01)
    Add {
        /// Title of the todo; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Due date as YYYY-MM-DD or RFC3339 (default: 24 hours from now)
        #[arg(short, long)]
        due: Option<String>,
    },
    /// Show all todos ordered by due date
    #[command(alias = "list")]
    View {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single todo
    Get {
        #[arg(allow_hyphen_values = true)]
        id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete a todo
    #[command(alias = "remove")]
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Set the status of a todo (pending, in-progress, completed)
    Update {
        #[arg(allow_hyphen_values = true)]
        id: String,
        status: String,
    },
}
