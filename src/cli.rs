use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "coursehub")]
#[command(about = "A terminal course catalog browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List course categories")]
    Categories {
        #[arg(short = 'F', long, default_value = "human")]
        format: OutputFormat,
        #[arg(short, long)]
        out: Option<String>,
    },
    #[command(about = "List courses (one page)")]
    Courses {
        #[arg(short, long, help = "Filter by subject substring")]
        query: Option<String>,
        #[arg(short, long, help = "Filter by category id")]
        category: Option<i64>,
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short = 'F', long, default_value = "human")]
        format: OutputFormat,
        #[arg(short, long)]
        out: Option<String>,
    },
    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
    #[command(about = "View fetch history")]
    History {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
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
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
