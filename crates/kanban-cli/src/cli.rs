use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kanban")]
#[command(about = "A three-stage kanban board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// SQLite database holding the tasks (or set KANBAN_DB env var)
    #[arg(value_name = "DB", env = "KANBAN_DB")]
    pub db: Option<PathBuf>,

    /// Use this config file instead of the per-user one
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
