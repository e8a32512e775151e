pub mod aggregation;
pub mod server;
