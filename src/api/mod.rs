pub mod error;
pub mod espn_client;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod scores365_client;

pub use error::ApiError;
pub use espn_client::EspnClient;
pub use scores365_client::Scores365Client;
