pub mod leagues;
pub mod settings;

pub use leagues::{find_league, get_leagues, get_overview_sources, get_sport_league_ids};
pub use settings::AppConfig;
