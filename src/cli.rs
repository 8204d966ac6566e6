use crate::tui::logic::Column;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "usertable")]
#[command(about = "Browse and sort a table of random users from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Cache session name (defaults to the configured one)")]
    pub session: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the user table sorted by a column")]
    List {
        #[arg(short, long, help = "Column name, label or 0-based index")]
        sort: Option<Column>,
        #[arg(long, requires = "sort")]
        desc: bool,
        #[arg(short = 'F', long, default_value = "human")]
        format: OutputFormat,
        #[arg(short, long)]
        out: Option<String>,
    },
    #[command(about = "Manage the session cache")]
    Cache {
        #[command(subcommand)]
        action: CacheActions,
    },
    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Subcommand)]
pub enum CacheActions {
    #[command(about = "Show where the session cache lives and whether it holds data")]
    Show,
    #[command(about = "Drop the cached dataset for the session")]
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigActions {
    #[command(about = "Show current configuration")]
    Show,
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(short, long)]
        key: String,
        #[arg(short, long)]
        value: String,
    },
    #[command(about = "Disable a column header for keyboard focus")]
    DisableColumn {
        #[arg(short, long)]
        column: Column,
    },
    #[command(about = "Re-enable a column header")]
    EnableColumn {
        #[arg(short, long)]
        column: Column,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
