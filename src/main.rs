use anyhow::Result;

use sports_feed::cli::Command;
use sports_feed::domain::FeedFilter;
use sports_feed::{handle_completions, handle_fetch, handle_leagues, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Fetch {
            sport,
            league,
            live_only,
            upcoming_only,
            limit,
        } => {
            let filter = FeedFilter {
                live_only: *live_only,
                upcoming_only: *upcoming_only,
                limit: *limit,
            };
            handle_fetch(sport.as_deref(), league.as_deref(), filter)
        }
        Command::Leagues => handle_leagues(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
