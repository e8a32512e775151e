use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::models::{EventStatus, SportEvent};
use crate::domain::normalize::parse_start_time;

/// Optional narrowing applied to a flat event list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedFilter {
    #[serde(default)]
    pub live_only: bool,
    #[serde(default)]
    pub upcoming_only: bool,
    pub limit: Option<usize>,
}

impl FeedFilter {
    pub fn is_empty(&self) -> bool {
        !self.live_only && !self.upcoming_only && self.limit.is_none()
    }

    /// Filters by status, orders, then truncates to `limit`.
    pub fn apply(&self, events: Vec<SportEvent>) -> Vec<SportEvent> {
        if self.is_empty() {
            return events;
        }

        let mut events: Vec<SportEvent> = events
            .into_iter()
            .filter(|event| self.keeps(event.status))
            .collect();
        events.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

        if let Some(limit) = self.limit {
            events.truncate(limit);
        }
        events
    }

    fn keeps(&self, status: EventStatus) -> bool {
        if self.live_only {
            status == EventStatus::Live
        } else if self.upcoming_only {
            status == EventStatus::Scheduled
        } else {
            true
        }
    }
}

/// Scheduled events first, by kick-off (unknown times last), then the rest by name.
fn sort_key(event: &SportEvent) -> (bool, bool, Option<DateTime<Utc>>, &str) {
    let start = match event.status {
        EventStatus::Scheduled => parse_start_time(&event.date),
        _ => None,
    };
    let scheduled = event.status == EventStatus::Scheduled;
    (!scheduled, start.is_none(), start, event.name.as_str())
}
