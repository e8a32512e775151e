use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "sports-feed schedule aggregator")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Aggregate once and print the JSON envelope.
    ///
    /// Filter flags apply to the sport and league listings only.
    Fetch {
        /// Sport category, e.g. soccer (omit for every sport)
        sport: Option<String>,
        /// League slug within the sport, e.g. premier-league
        league: Option<String>,
        /// Keep only events in progress
        #[arg(long)]
        live_only: bool,
        /// Keep only events that have not started
        #[arg(long)]
        upcoming_only: bool,
        /// Maximum number of events to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List the supported sports and league slugs
    Leagues,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
