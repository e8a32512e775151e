use serde_json::Value;

use crate::domain::Provider;
use crate::http::UpstreamClient;

const APP_TYPE_ID: u32 = 5;

/// Games-listing API client
#[derive(Clone)]
pub struct Scores365Client {
    client: UpstreamClient,
    base_url: String,
}

impl Scores365Client {
    pub fn new(client: UpstreamClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch current games of a competition. Degraded fetches yield an empty listing.
    pub async fn fetch_games(&self, competition_id: &str) -> Value {
        let url = self.build_games_url(competition_id);
        let label = format!("competition {}", competition_id);
        self.client
            .get_json(&url, &label)
            .await
            .into_payload(|| Provider::Scores365.empty_payload())
    }

    pub fn build_games_url(&self, competition_id: &str) -> String {
        format!(
            "{}?appTypeId={}&competitions={}",
            self.base_url, APP_TYPE_ID, competition_id
        )
    }
}
