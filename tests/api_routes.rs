use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use sports_feed::api::handlers::AppState;
use sports_feed::api::routes::create_router;
use sports_feed::config::settings::AppConfig;
use sports_feed::services::aggregation::Aggregator;

fn test_config(server: &ServerGuard) -> AppConfig {
    let mut config = AppConfig::new();
    config.upstream.espn_base_url = format!("{}/espn", server.url());
    config.upstream.scores365_base_url = format!("{}/games/", server.url());
    config.upstream.timeout_secs = 5;
    config.pacing.interval_ms = 0;
    config.display.link_base_url = "https://watch.test/#".to_string();
    config
}

fn router(server: &ServerGuard) -> Router {
    let aggregator = Aggregator::new(&test_config(server)).unwrap();
    create_router(Arc::new(AppState { aggregator }))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn scoreboard(server: &mut ServerGuard, sport: &str, league: &str, body: Value) -> Mock {
    server
        .mock("GET", format!("/espn/{}/{}/scoreboard", sport, league).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

fn soccer_event(id: &str, name: &str, state: &str, date: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "shortName": name,
        "date": date,
        "status": { "type": { "state": state } },
        "competitions": [{
            "competitors": [
                { "id": "1", "score": "1", "team": { "displayName": "Home FC", "shortDisplayName": "HOM" } },
                { "id": "2", "score": "0", "team": { "displayName": "Away FC", "shortDisplayName": "AWY" } }
            ]
        }]
    })
}

#[tokio::test]
async fn supported_league_without_events_succeeds() {
    let mut server = Server::new_async().await;
    let _mock = scoreboard(
        &mut server,
        "soccer",
        "ESP.1",
        json!({ "leagues": [{ "abbreviation": "LALIGA", "name": "Spanish LALIGA" }], "events": [] }),
    )
    .await;

    let (status, body) = get(router(&server), "/api/sports/soccer/la-liga").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["sportType"], "soccer");
    assert_eq!(body["league"]["slug"], "la-liga");
    assert_eq!(body["league"]["name"], "ESP.1");
    assert_eq!(body["league"]["fullName"], "Spanish LALIGA");
    assert_eq!(body["events"], json!([]));
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn unknown_sport_is_rejected() {
    let server = Server::new_async().await;
    let (status, body) = get(router(&server), "/api/sports/cricket").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Sport type 'cricket' not supported");
}

#[tokio::test]
async fn unknown_league_is_rejected() {
    let server = Server::new_async().await;
    let (status, body) = get(router(&server), "/api/sports/soccer/eredivisie").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "League 'eredivisie' not supported for sport type 'soccer'"
    );
}

#[tokio::test]
async fn individual_sport_events_have_no_competitors() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/espn/mma/ufc/scoreboard")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "leagues": [{ "abbreviation": "UFC", "name": "Ultimate Fighting Championship" }],
                "events": [{
                    "id": 600041,
                    "name": "UFC Fight Night: Smith vs. Jones",
                    "shortName": "Smith vs Jones",
                    "date": "2026-10-19T23:00Z",
                    "status": { "type": { "state": "pre" } }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let (status, body) = get(router(&server), "/api/sports/mma/ufc").await;

    assert_eq!(status, StatusCode::OK);
    let event = &body["events"][0];
    assert_eq!(event["id"], "600041");
    assert_eq!(event["league"], "UFC");
    assert_eq!(event["status"], "scheduled");
    assert_eq!(event["sportType"], "mma");
    assert_eq!(event["timeDisplay"], "11:00 PM");
    assert!(event.get("competitors").is_none());
    assert!(event.get("scores").is_none());
    assert_eq!(
        event["link"],
        "https://watch.test/#UFC%20Fight%20Night%3A%20Smith%20vs.%20Jones"
    );
}

#[tokio::test]
async fn rate_limited_source_is_left_out_of_overview() {
    let mut server = Server::new_async().await;
    let _limited = server
        .mock("GET", "/espn/soccer/ESP.1/scoreboard")
        .match_query(Matcher::Any)
        .with_status(429)
        .create_async()
        .await;
    let _epl = scoreboard(
        &mut server,
        "soccer",
        "ENG.1",
        json!({
            "leagues": [{ "abbreviation": "EPL" }],
            "events": [soccer_event("1", "Home FC vs Away FC", "in", "2026-10-19T14:00Z")]
        }),
    )
    .await;
    let _nba = scoreboard(
        &mut server,
        "basketball",
        "nba",
        json!({ "leagues": [{ "abbreviation": "NBA" }], "events": [] }),
    )
    .await;

    let (status, body) = get(router(&server), "/api/sports").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = body["data"].as_object().unwrap();
    assert_eq!(data.keys().collect::<Vec<_>>(), vec!["soccer"]);
    assert_eq!(data["soccer"].as_array().unwrap().len(), 1);
    assert_eq!(data["soccer"][0]["league"], "EPL");
}

#[tokio::test]
async fn sport_route_groups_events_by_league() {
    let mut server = Server::new_async().await;
    let _laliga = scoreboard(
        &mut server,
        "soccer",
        "ESP.1",
        json!({
            "leagues": [{ "abbreviation": "LALIGA" }],
            "events": [soccer_event("10", "Girona vs Betis", "post", "2026-10-19T12:00Z")]
        }),
    )
    .await;
    let _seriea = scoreboard(
        &mut server,
        "soccer",
        "ITA.1",
        json!({
            "leagues": [{ "abbreviation": "SERIE A" }],
            "events": [
                soccer_event("20", "Roma vs Lazio", "in", "2026-10-19T13:00Z"),
                soccer_event("21", "Inter vs Milan", "pre", "2026-10-19T18:45Z")
            ]
        }),
    )
    .await;

    let (status, body) = get(router(&server), "/api/sports/soccer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sportType"], "soccer");
    let ids: Vec<_> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["10", "20", "21"]);

    let grouped = body["eventsByLeague"].as_object().unwrap();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["ESP.1"].as_array().unwrap().len(), 1);
    assert_eq!(grouped["ITA.1"].as_array().unwrap().len(), 2);
    assert_eq!(grouped["ITA.1"][0]["scores"], json!([1, 0]));
    assert_eq!(grouped["ITA.1"][0]["link"], "https://watch.test/#HOM%20vs%20AWY");
}

#[tokio::test]
async fn live_only_query_filters_flat_events() {
    let mut server = Server::new_async().await;
    let _nhl = scoreboard(
        &mut server,
        "hockey",
        "nhl",
        json!({
            "leagues": [{ "abbreviation": "NHL" }],
            "events": [
                soccer_event("1", "Bruins vs Rangers", "pre", "2026-10-19T23:00Z"),
                soccer_event("2", "Kings vs Ducks", "in", "2026-10-19T20:00Z"),
                soccer_event("3", "Jets vs Flames", "post", "2026-10-19T17:00Z")
            ]
        }),
    )
    .await;

    let (status, body) = get(router(&server), "/api/sports/hockey?liveOnly=true").await;

    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"], "2");
    assert_eq!(body["eventsByLeague"]["nhl"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_query_is_rejected() {
    let server = Server::new_async().await;
    let (status, body) = get(router(&server), "/api/sports/hockey?limit=many").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn undecodable_path_segments_get_json_errors() {
    let server = Server::new_async().await;

    let (status, body) = get(router(&server), "/api/sports/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("sport_type"));

    let (status, body) = get(router(&server), "/api/sports/soccer/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unmatched_paths_get_json_not_found() {
    let server = Server::new_async().await;
    let (status, body) = get(router(&server), "/api/teams").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Not found");
}
