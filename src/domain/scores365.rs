//! Games-listing provider. It only serves soccer competitions.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::models::{Competitor, EventStatus, SportCategory, SportEvent};
use crate::domain::normalize::{id_string, parse_score, NormalizeOptions, Normalized};

const UNKNOWN_LEAGUE: &str = "Unknown League";

/// Every event from this provider is filed under this category.
pub const SPORT: SportCategory = SportCategory::Soccer;

const FINISHED_STATUSES: [&str; 6] = [
    "Ended",
    "Final",
    "Final (OT)",
    "After Penalties",
    "Final (SO)",
    "Final (Ex)",
];

const NOT_STARTED_STATUSES: [&str; 4] = ["Scheduled", "WalkOver", "Postponed", "Abandoned"];

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Option<Value>,
    pub start_time: Option<String>,
    pub status_text: Option<String>,
    pub home_competitor: Option<GameCompetitor>,
    pub away_competitor: Option<GameCompetitor>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct GameCompetitor {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub score: Option<Value>, // -1 before kick-off
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Competition {
    pub name: Option<String>,
}

/// Closed-set status test. Any unrecognised text counts as in progress.
pub fn parse_status(status_text: Option<&str>) -> EventStatus {
    match status_text {
        None => EventStatus::Scheduled,
        Some(text) if FINISHED_STATUSES.contains(&text) => EventStatus::Finished,
        Some(text) if NOT_STARTED_STATUSES.contains(&text) => EventStatus::Scheduled,
        Some(_) => EventStatus::Live,
    }
}

fn competition_name(payload: &Value) -> Option<String> {
    let competition = payload.get("competitions")?.as_array()?.first()?;
    serde_json::from_value::<Competition>(competition.clone()).ok()?.name
}

/// Maps a games-listing payload. Games missing a side are skipped.
pub fn normalize_games(payload: &Value, options: &NormalizeOptions) -> Normalized {
    let league_name = competition_name(payload);
    let league = league_name.clone().unwrap_or_else(|| UNKNOWN_LEAGUE.to_string());

    let Some(raw_games) = payload.get("games").and_then(Value::as_array) else {
        return Normalized {
            events: Vec::new(),
            league_name,
        };
    };

    let events = raw_games
        .iter()
        .filter_map(|raw| {
            let game = match serde_json::from_value::<Game>(raw.clone()) {
                Ok(game) => game,
                Err(e) => {
                    warn!("Skipping unreadable game in {}: {}", league, e);
                    return None;
                }
            };
            let mapped = map_game(&game, &league, options);
            if mapped.is_none() {
                warn!(
                    "Skipping game {} in {}: missing competitor",
                    id_string(game.id.as_ref()),
                    league
                );
            }
            mapped
        })
        .collect();

    Normalized {
        events,
        league_name,
    }
}

fn map_game(game: &Game, league: &str, options: &NormalizeOptions) -> Option<SportEvent> {
    let home = map_competitor(game.home_competitor.as_ref()?);
    let away = map_competitor(game.away_competitor.as_ref()?);

    let status = parse_status(game.status_text.as_deref());
    let status_text = game
        .status_text
        .clone()
        .unwrap_or_else(|| "Scheduled".to_string());
    let date = game.start_time.clone().unwrap_or_default();
    let matchup = format!("{} vs {}", home.name, away.name);

    Some(SportEvent {
        id: id_string(game.id.as_ref()),
        name: matchup.clone(),
        short_name: matchup.clone(),
        league: league.to_string(),
        time_display: options.time_display(status, &date),
        date,
        status,
        status_text,
        scores: Some(vec![home.score, away.score]),
        competitors: Some(vec![home, away]),
        link: options.link_for(&matchup),
        sport_type: SPORT,
    })
}

fn map_competitor(raw: &GameCompetitor) -> Competitor {
    let name = raw.name.clone().unwrap_or_default();
    Competitor {
        id: id_string(raw.id.as_ref()),
        short_name: name.clone(),
        name,
        score: parse_score(raw.score.as_ref()).filter(|score| *score >= 0),
    }
}
