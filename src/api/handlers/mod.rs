use crate::services::aggregation::Aggregator;

pub mod sports;

pub struct AppState {
    pub aggregator: Aggregator,
}
