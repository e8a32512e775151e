pub mod espn;
pub mod feed;
pub mod models;
pub mod normalize;
pub mod scores365;

pub use feed::FeedFilter;
pub use models::{Competitor, EventStatus, SportCategory, SportEvent};
pub use normalize::{normalize, NormalizeOptions, Normalized, Provider};
