mod analysis;
mod api;
mod app;
mod config;
mod domain;
mod feed;
mod infrastructure;
mod report;
mod search;
mod trends;

use anyhow::Result;
use clap::{Parser, Subcommand};
use domain::PostOrder;
use infrastructure::{directories, logging};

/// Search posts, break down their tone, and browse what is trending.
#[derive(Parser)]
#[command(name = "minescope", version, about)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search recent posts and analyze their emotion and keywords
    Search {
        /// Search keywords
        query: String,
        /// Order of the previewed posts
        #[arg(long, value_enum, default_value_t = PostOrder::Newest)]
        sort: PostOrder,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the trend board (live search, RSS headlines, or offline)
    Trends {
        /// Use the location trends endpoint instead of live search
        #[arg(long)]
        place: bool,
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    let _log_guard = logging::init_tracing(&config, &paths, cli.verbose)?;

    let app = app::MinescopeApp::initialize(config)?;
    match cli.command {
        Command::Search { query, sort, json } => app.run_search(&query, sort, json).await,
        Command::Trends { place, json } => app.run_trends(place, json).await,
    }
}
