use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::leagues::LeagueConfig;
use crate::domain::{FeedFilter, SportCategory, SportEvent};
use crate::services::aggregation::Aggregation;

/// Millisecond ISO-8601 timestamp stamped on every success envelope
pub fn response_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllSportsResponse {
    pub success: bool,
    pub timestamp: String,
    pub data: BTreeMap<String, Vec<SportEvent>>,
}

impl AllSportsResponse {
    pub fn new(aggregation: Aggregation) -> Self {
        Self {
            success: true,
            timestamp: response_timestamp(),
            data: aggregation.grouped,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportResponse {
    pub success: bool,
    pub timestamp: String,
    pub sport_type: SportCategory,
    pub events: Vec<SportEvent>,
    pub events_by_league: BTreeMap<String, Vec<SportEvent>>,
}

impl SportResponse {
    pub fn new(sport: SportCategory, aggregation: Aggregation, filter: &FeedFilter) -> Self {
        Self {
            success: true,
            timestamp: response_timestamp(),
            sport_type: sport,
            events: filter.apply(aggregation.flat),
            events_by_league: aggregation.grouped,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueInfo {
    pub slug: String,
    pub name: String,
    pub full_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueResponse {
    pub success: bool,
    pub timestamp: String,
    pub sport_type: SportCategory,
    pub league: LeagueInfo,
    pub events: Vec<SportEvent>,
}

impl LeagueResponse {
    /// `fullName` prefers the upstream league name over the provider id.
    pub fn new(league: &LeagueConfig, mut aggregation: Aggregation, filter: &FeedFilter) -> Self {
        let full_name = aggregation
            .league_names
            .remove(league.provider_id)
            .unwrap_or_else(|| league.provider_id.to_string());

        Self {
            success: true,
            timestamp: response_timestamp(),
            sport_type: league.sport,
            league: LeagueInfo {
                slug: league.slug.to_string(),
                name: league.provider_id.to_string(),
                full_name,
            },
            events: filter.apply(aggregation.flat),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
