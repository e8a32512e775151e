use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use serde::Serialize;
use serde_json::Value;
use urlencoding::encode;

use crate::config::settings::DisplaySettings;
use crate::domain::models::{EventStatus, SportCategory, SportEvent};
use crate::domain::{espn, scores365};

pub const LIVE_TIME_DISPLAY: &str = "LIVE NOW!";
pub const FINISHED_TIME_DISPLAY: &str = "Full Time";
const UNKNOWN_TIME_DISPLAY: &str = "TBD";

/// Upstream data sources, each with its own payload shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Espn,
    #[serde(rename = "365scores")]
    Scores365,
}

impl Provider {
    /// Payload substituted whenever a fetch degrades
    pub fn empty_payload(&self) -> Value {
        match self {
            Provider::Espn => serde_json::json!({ "events": [] }),
            Provider::Scores365 => {
                serde_json::json!({ "games": [], "competitions": [{ "name": "Unknown" }] })
            }
        }
    }
}

/// Presentation knobs shared by every normalizer
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub link_base_url: String,
    pub offset: FixedOffset,
}

impl NormalizeOptions {
    pub fn new(link_base_url: impl Into<String>, utc_offset_minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix());
        Self {
            link_base_url: link_base_url.into(),
            offset,
        }
    }

    pub fn from_settings(settings: &DisplaySettings) -> Self {
        Self::new(settings.link_base_url.clone(), settings.utc_offset_minutes)
    }

    pub fn link_for(&self, label: &str) -> String {
        format!("{}{}", self.link_base_url, encode(label))
    }

    pub fn time_display(&self, status: EventStatus, date: &str) -> String {
        match status {
            EventStatus::Live => LIVE_TIME_DISPLAY.to_string(),
            EventStatus::Finished => FINISHED_TIME_DISPLAY.to_string(),
            EventStatus::Scheduled => match parse_start_time(date) {
                Some(start) => start.with_timezone(&self.offset).format("%I:%M %p").to_string(),
                None => UNKNOWN_TIME_DISPLAY.to_string(),
            },
        }
    }
}

/// One provider payload mapped into canonical events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub events: Vec<SportEvent>,
    pub league_name: Option<String>,
}

/// Dispatches a raw payload to the normalizer for its provider.
pub fn normalize(
    provider: Provider,
    sport: SportCategory,
    payload: &Value,
    options: &NormalizeOptions,
) -> Normalized {
    match provider {
        Provider::Espn => espn::normalize_scoreboard(payload, sport, options),
        Provider::Scores365 => scores365::normalize_games(payload, options),
    }
}

/// Accepts RFC 3339 as well as the minute-precision `2026-10-19T19:00Z` form.
pub fn parse_start_time(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Renders an identifier that may arrive as a string or a number.
pub(crate) fn id_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Parses a score field. Absent or non-numeric values yield `None`.
pub fn parse_score(score: Option<&Value>) -> Option<i64> {
    match score? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}
