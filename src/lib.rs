pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod rate_limiter;
pub mod services;

use anyhow::{anyhow, bail, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use serde_json::Value;
use cli::Cli;

use crate::api::models::{AllSportsResponse, LeagueResponse, SportResponse};
use crate::cli::Command;
use crate::config::leagues;
use crate::config::settings::AppConfig;
use crate::domain::{FeedFilter, SportCategory};
use crate::services::aggregation::{Aggregator, RequestScope};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_fetch(
    sport: Option<&str>,
    league: Option<&str>,
    filter: FeedFilter,
) -> Result<()> {
    let scope = RequestScope::resolve(sport, league).map_err(|e| anyhow!(e))?;
    if scope == RequestScope::AllSports && !filter.is_empty() {
        bail!("--live-only, --upcoming-only and --limit need a sport");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let envelope = runtime.block_on(async {
        let config = AppConfig::from_env();
        let aggregator = Aggregator::new(&config)?;
        fetch_envelope(&aggregator, &scope, &filter).await
    })?;

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// Same envelope the HTTP routes return for `scope`.
pub async fn fetch_envelope(
    aggregator: &Aggregator,
    scope: &RequestScope,
    filter: &FeedFilter,
) -> Result<Value> {
    let aggregation = aggregator.aggregate(scope).await?;
    let envelope = match scope {
        RequestScope::AllSports => serde_json::to_value(AllSportsResponse::new(aggregation))?,
        RequestScope::Sport(sport) => {
            serde_json::to_value(SportResponse::new(*sport, aggregation, filter))?
        }
        RequestScope::League(league) => {
            serde_json::to_value(LeagueResponse::new(league, aggregation, filter))?
        }
    };
    Ok(envelope)
}

pub fn handle_leagues() -> Result<()> {
    let registry = leagues::get_leagues();
    for sport in SportCategory::ALL {
        println!("{}", sport.as_str().bold().green());
        for league in registry.iter().filter(|league| league.sport == sport) {
            println!("  {:<20} {}", league.slug, league.provider_id.dimmed());
        }
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
