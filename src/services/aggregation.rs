use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use std::collections::BTreeMap;

use crate::api::{EspnClient, Scores365Client};
use crate::config::leagues::{self, LeagueConfig};
use crate::config::settings::AppConfig;
use crate::domain::{normalize, NormalizeOptions, Normalized, Provider, SportCategory, SportEvent};
use crate::http::UpstreamClient;
use crate::rate_limiter::{wait_for_slot, PacingSchedule};

/// What a caller asked to aggregate
#[derive(Debug, Clone, PartialEq)]
pub enum RequestScope {
    League(LeagueConfig),
    Sport(SportCategory),
    AllSports,
}

/// One fetch+normalize unit
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    pub provider: Provider,
    pub sport: SportCategory,
    pub provider_id: &'static str,
    pub group_key: String,
}

impl RequestScope {
    /// Resolves optional path segments against the league registry.
    pub fn resolve(sport_type: Option<&str>, league_slug: Option<&str>) -> Result<Self, String> {
        let Some(sport_type) = sport_type else {
            return match league_slug {
                None => Ok(RequestScope::AllSports),
                Some(slug) => Err(format!("League '{}' requires a sport type", slug)),
            };
        };
        let sport: SportCategory = sport_type.parse()?;
        match league_slug {
            None => Ok(RequestScope::Sport(sport)),
            Some(slug) => leagues::find_league(sport, slug)
                .map(RequestScope::League)
                .ok_or_else(|| {
                    format!(
                        "League '{}' not supported for sport type '{}'",
                        slug, sport_type
                    )
                }),
        }
    }

    /// Fixed, ordered work list for the scope.
    pub fn work_items(&self) -> Vec<WorkItem> {
        match self {
            RequestScope::League(league) => vec![WorkItem {
                provider: Provider::Espn,
                sport: league.sport,
                provider_id: league.provider_id,
                group_key: league.provider_id.to_string(),
            }],
            RequestScope::Sport(sport) => leagues::get_sport_league_ids(*sport)
                .into_iter()
                .map(|league_id| WorkItem {
                    provider: Provider::Espn,
                    sport: *sport,
                    provider_id: league_id,
                    group_key: league_id.to_string(),
                })
                .collect(),
            RequestScope::AllSports => leagues::get_overview_sources()
                .into_iter()
                .map(|source| WorkItem {
                    provider: source.provider,
                    sport: source.sport,
                    provider_id: source.provider_id,
                    group_key: source.sport.as_str().to_string(),
                })
                .collect(),
        }
    }
}

/// Merged result of one aggregation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub flat: Vec<SportEvent>,
    pub grouped: BTreeMap<String, Vec<SportEvent>>,
    /// Upstream full league names by group key, when reported
    pub league_names: BTreeMap<String, String>,
}

impl Aggregation {
    /// Merges batches in work-item order. Empty batches get no group entry.
    pub fn merge(batches: Vec<(WorkItem, Normalized)>) -> Self {
        let mut aggregation = Aggregation::default();

        for (item, normalized) in batches {
            if let Some(name) = normalized.league_name {
                aggregation
                    .league_names
                    .entry(item.group_key.clone())
                    .or_insert(name);
            }

            if normalized.events.is_empty() {
                continue;
            }

            aggregation
                .grouped
                .entry(item.group_key)
                .or_default()
                .extend(normalized.events.iter().cloned());
            aggregation.flat.extend(normalized.events);
        }

        aggregation
    }
}

/// Fans a scope out to upstream providers and merges the normalized results
#[derive(Clone)]
pub struct Aggregator {
    espn: EspnClient,
    scores365: Scores365Client,
    options: NormalizeOptions,
    interval_ms: u64,
}

impl Aggregator {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = UpstreamClient::new(&config.upstream.user_agent, config.upstream.timeout_secs)?;
        Ok(Self {
            espn: EspnClient::new(client.clone(), config.upstream.espn_base_url.clone()),
            scores365: Scores365Client::new(client, config.upstream.scores365_base_url.clone()),
            options: NormalizeOptions::from_settings(&config.display),
            interval_ms: config.pacing.interval_ms,
        })
    }

    /// Runs every work item of `scope` and waits for all of them.
    ///
    /// Upstream failures degrade to empty batches inside the clients. An error
    /// here means a work item's task itself died.
    pub async fn aggregate(&self, scope: &RequestScope) -> Result<Aggregation> {
        let as_of = self.as_of_date();
        let mut schedule = PacingSchedule::new(self.interval_ms);

        let tasks: Vec<_> = scope
            .work_items()
            .into_iter()
            .map(|item| {
                let delay = schedule.next_delay(item.provider);
                debug!("Scheduling {} in {:?}", item.provider_id, delay);
                let worker = self.clone();
                let task_item = item.clone();
                let handle = tokio::spawn(async move {
                    wait_for_slot(delay).await;
                    worker.run_item(&task_item, as_of).await
                });
                (item, handle)
            })
            .collect();

        let item_count = tasks.len();
        let mut batches = Vec::with_capacity(item_count);
        for (item, handle) in tasks {
            let normalized = handle
                .await
                .with_context(|| format!("Work item {} did not complete", item.provider_id))?;
            batches.push((item, normalized));
        }

        let aggregation = Aggregation::merge(batches);
        info!(
            "Aggregated {} events from {} sources",
            aggregation.flat.len(),
            item_count
        );
        Ok(aggregation)
    }

    async fn run_item(&self, item: &WorkItem, as_of: NaiveDate) -> Normalized {
        let payload = match item.provider {
            Provider::Espn => {
                self.espn
                    .fetch_scoreboard(item.sport, item.provider_id, as_of)
                    .await
            }
            Provider::Scores365 => self.scores365.fetch_games(item.provider_id).await,
        };
        normalize(item.provider, item.sport, &payload, &self.options)
    }

    fn as_of_date(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.options.offset).date_naive()
    }
}
