//! Scoreboard provider wire types and their mapping into `SportEvent`.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::models::{Competitor, EventStatus, SportCategory, SportEvent};
use crate::domain::normalize::{id_string, parse_score, NormalizeOptions, Normalized};

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EspnEvent {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub date: Option<String>, // ISO 8601, sometimes minute precision
    pub status: Option<EspnStatus>,
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatusType {
    pub state: Option<String>, // "pre", "in", "post"
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub competitors: Option<Vec<EspnCompetitor>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetitor {
    pub id: Option<Value>,
    pub team: Option<EspnTeam>,
    pub score: Option<Value>, // usually a string, occasionally a number
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EspnTeam {
    pub display_name: Option<String>,
    pub short_display_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLeague {
    pub abbreviation: Option<String>,
    pub name: Option<String>,
}

impl EspnEvent {
    fn state(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.status_type.as_ref())
            .and_then(|t| t.state.as_deref())
    }

    fn competitors(&self) -> &[EspnCompetitor] {
        self.competitions
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.competitors.as_deref())
            .unwrap_or_default()
    }
}

pub fn parse_state(state: Option<&str>) -> EventStatus {
    match state {
        Some("in") => EventStatus::Live,
        Some("post") => EventStatus::Finished,
        _ => EventStatus::Scheduled,
    }
}

fn status_text(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Scheduled => "Scheduled",
        EventStatus::Live => "Live",
        EventStatus::Finished => "Finished",
    }
}

fn first_league(payload: &Value) -> Option<EspnLeague> {
    let league = payload.get("leagues")?.as_array()?.first()?;
    serde_json::from_value(league.clone()).ok()
}

/// Maps a scoreboard payload. A payload without an `events` list yields no events.
pub fn normalize_scoreboard(
    payload: &Value,
    sport: SportCategory,
    options: &NormalizeOptions,
) -> Normalized {
    let league = first_league(payload).unwrap_or_default();
    let league_label = league
        .abbreviation
        .clone()
        .unwrap_or_else(|| sport.as_str().to_string());

    let Some(raw_events) = payload.get("events").and_then(Value::as_array) else {
        return Normalized {
            events: Vec::new(),
            league_name: league.name,
        };
    };

    let events = raw_events
        .iter()
        .filter_map(|raw| match serde_json::from_value::<EspnEvent>(raw.clone()) {
            Ok(event) => Some(map_event(&event, sport, &league_label, options)),
            Err(e) => {
                warn!("Skipping unreadable {} scoreboard event: {}", sport, e);
                None
            }
        })
        .collect();

    Normalized {
        events,
        league_name: league.name,
    }
}

fn map_event(
    event: &EspnEvent,
    sport: SportCategory,
    league: &str,
    options: &NormalizeOptions,
) -> SportEvent {
    let status = parse_state(event.state());
    let name = event.name.clone().unwrap_or_default();
    let short_name = event.short_name.clone().unwrap_or_else(|| name.clone());
    let date = event.date.clone().unwrap_or_default();
    let time_display = options.time_display(status, &date);

    let (competitors, scores, link) = if sport.is_individual() {
        (None, None, options.link_for(&name))
    } else {
        let competitors: Vec<Competitor> = event.competitors().iter().map(map_competitor).collect();
        let scores = competitors.iter().map(|c| c.score).collect();
        let matchup = competitors
            .iter()
            .map(|c| c.short_name.as_str())
            .collect::<Vec<_>>()
            .join(" vs ");
        (Some(competitors), Some(scores), options.link_for(&matchup))
    };

    SportEvent {
        id: id_string(event.id.as_ref()),
        name,
        short_name,
        league: league.to_string(),
        date,
        status,
        status_text: status_text(status).to_string(),
        time_display,
        competitors,
        scores,
        link,
        sport_type: sport,
    }
}

fn map_competitor(raw: &EspnCompetitor) -> Competitor {
    let team = raw.team.clone().unwrap_or_default();
    let name = team.display_name.unwrap_or_default();
    Competitor {
        id: id_string(raw.id.as_ref()),
        short_name: team.short_display_name.unwrap_or_else(|| name.clone()),
        name,
        score: parse_score(raw.score.as_ref()),
    }
}
