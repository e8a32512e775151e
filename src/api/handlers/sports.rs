use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use std::sync::Arc;

use super::AppState;
use crate::api::error::ApiError;
use crate::api::models::{AllSportsResponse, LeagueResponse, SportResponse};
use crate::domain::FeedFilter;
use crate::services::aggregation::RequestScope;

pub async fn get_all_sports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AllSportsResponse>, ApiError> {
    let aggregation = state.aggregator.aggregate(&RequestScope::AllSports).await?;
    Ok(Json(AllSportsResponse::new(aggregation)))
}

pub async fn get_sport(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    filter: Result<Query<FeedFilter>, QueryRejection>,
) -> Result<Json<SportResponse>, ApiError> {
    let Path(sport_type) = parse_path(path)?;
    let scope = resolve(Some(&sport_type), None)?;
    let filter = parse_filter(filter)?;

    let RequestScope::Sport(sport) = scope else {
        return Err(ApiError::NotFound);
    };
    let aggregation = state.aggregator.aggregate(&scope).await?;

    Ok(Json(SportResponse::new(sport, aggregation, &filter)))
}

pub async fn get_league(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
    filter: Result<Query<FeedFilter>, QueryRejection>,
) -> Result<Json<LeagueResponse>, ApiError> {
    let Path((sport_type, league_slug)) = parse_path(path)?;
    let scope = resolve(Some(&sport_type), Some(&league_slug))?;
    let filter = parse_filter(filter)?;

    let RequestScope::League(league) = &scope else {
        return Err(ApiError::NotFound);
    };
    let aggregation = state.aggregator.aggregate(&scope).await?;

    Ok(Json(LeagueResponse::new(league, aggregation, &filter)))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn resolve(sport_type: Option<&str>, league_slug: Option<&str>) -> Result<RequestScope, ApiError> {
    RequestScope::resolve(sport_type, league_slug).map_err(ApiError::UnknownRoute)
}

fn parse_path<T>(path: Result<Path<T>, PathRejection>) -> Result<Path<T>, ApiError> {
    path.map_err(|rejection| ApiError::UnknownRoute(rejection.body_text()))
}

fn parse_filter(filter: Result<Query<FeedFilter>, QueryRejection>) -> Result<FeedFilter, ApiError> {
    filter
        .map(|Query(filter)| filter)
        .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))
}
