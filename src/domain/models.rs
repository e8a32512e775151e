use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sport categories served by the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportCategory {
    Soccer,
    Basketball,
    Baseball,
    Hockey,
    Football,
    Mma,
    Racing,
    Golf,
}

impl SportCategory {
    pub const ALL: [SportCategory; 8] = [
        SportCategory::Soccer,
        SportCategory::Basketball,
        SportCategory::Baseball,
        SportCategory::Hockey,
        SportCategory::Football,
        SportCategory::Mma,
        SportCategory::Racing,
        SportCategory::Golf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SportCategory::Soccer => "soccer",
            SportCategory::Basketball => "basketball",
            SportCategory::Baseball => "baseball",
            SportCategory::Hockey => "hockey",
            SportCategory::Football => "football",
            SportCategory::Mma => "mma",
            SportCategory::Racing => "racing",
            SportCategory::Golf => "golf",
        }
    }

    /// Individual sports have no head-to-head competitors
    pub fn is_individual(&self) -> bool {
        matches!(
            self,
            SportCategory::Mma | SportCategory::Racing | SportCategory::Golf
        )
    }

    /// Sparse schedules are queried without a date filter
    pub fn omits_date(&self) -> bool {
        matches!(self, SportCategory::Mma | SportCategory::Racing)
    }
}

impl fmt::Display for SportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SportCategory::ALL
            .into_iter()
            .find(|sport| sport.as_str() == s)
            .ok_or_else(|| format!("Sport type '{}' not supported", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Live,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub score: Option<i64>,
}

/// Canonical event shared by every provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportEvent {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub league: String,
    pub date: String,
    pub status: EventStatus,
    pub status_text: String,
    pub time_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<Competitor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<Option<i64>>>,
    pub link: String,
    pub sport_type: SportCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_category_round_trips_through_path_segment() {
        for sport in SportCategory::ALL {
            assert_eq!(sport.as_str().parse::<SportCategory>(), Ok(sport));
        }
    }

    #[test]
    fn unknown_sport_reports_name() {
        let err = "curling".parse::<SportCategory>().unwrap_err();
        assert_eq!(err, "Sport type 'curling' not supported");
    }

    #[test]
    fn individual_sports() {
        assert!(SportCategory::Mma.is_individual());
        assert!(SportCategory::Golf.is_individual());
        assert!(!SportCategory::Soccer.is_individual());
        assert!(SportCategory::Racing.omits_date());
        assert!(!SportCategory::Golf.omits_date());
    }

    #[test]
    fn individual_event_omits_competitor_fields() {
        let event = SportEvent {
            id: "1".into(),
            name: "Fighter A vs Fighter B".into(),
            short_name: "Fighter A vs Fighter B".into(),
            league: "UFC".into(),
            date: "2026-10-19T02:00Z".into(),
            status: EventStatus::Scheduled,
            status_text: "Scheduled".into(),
            time_display: "02:00 AM".into(),
            competitors: None,
            scores: None,
            link: "https://example.test/#Fighter%20A".into(),
            sport_type: SportCategory::Mma,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("competitors").is_none());
        assert!(json.get("scores").is_none());
        assert_eq!(json["sportType"], "mma");
        assert_eq!(json["timeDisplay"], "02:00 AM");
    }
}
