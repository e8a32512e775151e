use log::warn;
use std::str::FromStr;

pub struct UpstreamSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub espn_base_url: String,
    pub scores365_base_url: String,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            // Some providers refuse requests without a browser-like agent
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            timeout_secs: 30,
            espn_base_url: "https://site.api.espn.com/apis/site/v2/sports".to_string(),
            scores365_base_url: "https://webws.365scores.com/web/games/current/".to_string(),
        }
    }
}

pub struct PacingSettings {
    pub interval_ms: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self { interval_ms: 500 }
    }
}

pub struct DisplaySettings {
    pub link_base_url: String,
    pub utc_offset_minutes: i32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            link_base_url: "https://www.sportsurge.uno/#".to_string(),
            utc_offset_minutes: 0,
        }
    }
}

#[derive(Default)]
pub struct AppConfig {
    pub upstream: UpstreamSettings,
    pub pacing: PacingSettings,
    pub display: DisplaySettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, adjusted by `SPORTS_FEED_*` environment variables.
    pub fn from_env() -> Self {
        Self::new().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup. Unparseable numbers are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SPORTS_FEED_ESPN_URL") {
            self.upstream.espn_base_url = url;
        }
        if let Some(url) = lookup("SPORTS_FEED_365_URL") {
            self.upstream.scores365_base_url = url;
        }
        if let Some(secs) = parse_override(&lookup, "SPORTS_FEED_TIMEOUT_SECS") {
            self.upstream.timeout_secs = secs;
        }
        if let Some(ms) = parse_override(&lookup, "SPORTS_FEED_PACING_MS") {
            self.pacing.interval_ms = ms;
        }
        if let Some(minutes) = parse_override(&lookup, "SPORTS_FEED_UTC_OFFSET_MINUTES") {
            self.display.utc_offset_minutes = minutes;
        }
        self
    }
}

fn parse_override<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: '{}' is not a valid number", key, raw);
            None
        }
    }
}
