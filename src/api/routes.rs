use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    sports::{get_all_sports, get_league, get_sport, not_found},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/sports", get(get_all_sports))
        .route("/api/sports/:sport_type", get(get_sport))
        .route("/api/sports/:sport_type/:league", get(get_league))
        .fallback(not_found)
        .with_state(state)
}
