use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::{Provider, SportCategory};
use crate::http::UpstreamClient;

/// Scoreboard API client
#[derive(Clone)]
pub struct EspnClient {
    client: UpstreamClient,
    base_url: String,
}

impl EspnClient {
    pub fn new(client: UpstreamClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch one league's scoreboard. Never fails: degraded fetches yield `{"events": []}`.
    pub async fn fetch_scoreboard(
        &self,
        sport: SportCategory,
        league_id: &str,
        as_of: NaiveDate,
    ) -> Value {
        let url = self.build_scoreboard_url(sport, league_id, as_of);
        self.client
            .get_json(&url, league_id)
            .await
            .into_payload(|| Provider::Espn.empty_payload())
    }

    pub fn build_scoreboard_url(
        &self,
        sport: SportCategory,
        league_id: &str,
        as_of: NaiveDate,
    ) -> String {
        let base = format!(
            "{}/{}/{}/scoreboard",
            self.base_url.trim_end_matches('/'),
            sport,
            league_id
        );
        if sport.omits_date() {
            base
        } else {
            format!("{}?dates={}", base, as_of.format("%Y%m%d"))
        }
    }
}
