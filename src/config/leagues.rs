//! Static league registry.
//!
//! Slugs are the public path segments; provider ids are what the upstream
//! APIs expect. Scoreboard league ids follow `{sport}/{id}/scoreboard` on the
//! scoreboard API; games-listing ids are numeric competition ids.

use crate::domain::{Provider, SportCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueConfig {
    pub sport: SportCategory,
    pub slug: &'static str,
    pub provider_id: &'static str,
}

impl LeagueConfig {
    pub fn new(sport: SportCategory, slug: &'static str, provider_id: &'static str) -> Self {
        Self {
            sport,
            slug,
            provider_id,
        }
    }
}

/// One upstream source in the cross-sport overview
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSource {
    pub provider: Provider,
    pub sport: SportCategory,
    pub provider_id: &'static str,
}

impl FeedSource {
    pub fn new(provider: Provider, sport: SportCategory, provider_id: &'static str) -> Self {
        Self {
            provider,
            sport,
            provider_id,
        }
    }
}

/// Leagues addressable individually by slug
pub fn get_leagues() -> Vec<LeagueConfig> {
    use SportCategory::*;
    vec![
        LeagueConfig::new(Soccer, "premier-league", "ENG.1"),
        LeagueConfig::new(Soccer, "la-liga", "ESP.1"),
        LeagueConfig::new(Soccer, "serie-a", "ITA.1"),
        LeagueConfig::new(Soccer, "bundesliga", "GER.1"),
        LeagueConfig::new(Soccer, "ligue-1", "FRA.1"),
        LeagueConfig::new(Soccer, "champions-league", "UEFA.CHAMPIONS"),
        LeagueConfig::new(Soccer, "europa-league", "UEFA.EUROPA"),
        LeagueConfig::new(Soccer, "mls", "USA.1"),
        LeagueConfig::new(Basketball, "nba", "nba"),
        LeagueConfig::new(Basketball, "wnba", "wnba"),
        LeagueConfig::new(Baseball, "mlb", "mlb"),
        LeagueConfig::new(Hockey, "nhl", "nhl"),
        LeagueConfig::new(Football, "nfl", "nfl"),
        LeagueConfig::new(Football, "college", "college-football"),
        LeagueConfig::new(Mma, "ufc", "ufc"),
        LeagueConfig::new(Mma, "pfl", "pfl"),
        LeagueConfig::new(Racing, "f1", "f1"),
        LeagueConfig::new(Racing, "indycar", "irl"),
        LeagueConfig::new(Golf, "pga", "pga"),
        LeagueConfig::new(Golf, "lpga", "lpga"),
        LeagueConfig::new(Golf, "champions", "champions-tour"),
        LeagueConfig::new(Golf, "liv", "liv"),
    ]
}

pub fn find_league(sport: SportCategory, slug: &str) -> Option<LeagueConfig> {
    get_leagues()
        .into_iter()
        .find(|league| league.sport == sport && league.slug == slug)
}

/// Scoreboard league ids fetched when a whole sport is requested
pub fn get_sport_league_ids(sport: SportCategory) -> Vec<&'static str> {
    match sport {
        SportCategory::Soccer => vec!["ESP.1", "ENG.1", "ITA.1", "GER.1"],
        SportCategory::Basketball => vec!["nba"],
        SportCategory::Baseball => vec!["mlb"],
        SportCategory::Hockey => vec!["nhl"],
        SportCategory::Football => vec!["nfl"],
        SportCategory::Mma => vec!["ufc", "pfl", "bellator"],
        SportCategory::Racing => vec!["f1", "irl", "nascar"],
        SportCategory::Golf => vec!["pga"],
    }
}

/// Sources behind the cross-sport overview, kept short to stay under rate limits
pub fn get_overview_sources() -> Vec<FeedSource> {
    use SportCategory::*;
    vec![
        FeedSource::new(Provider::Espn, Soccer, "ESP.1"),
        FeedSource::new(Provider::Espn, Soccer, "ENG.1"),
        FeedSource::new(Provider::Espn, Basketball, "nba"),
        FeedSource::new(Provider::Espn, Baseball, "mlb"),
        FeedSource::new(Provider::Espn, Hockey, "nhl"),
        FeedSource::new(Provider::Espn, Football, "nfl"),
        // premier league and nba competitions
        FeedSource::new(Provider::Scores365, Soccer, "7"),
        FeedSource::new(Provider::Scores365, Soccer, "103"),
    ]
}
