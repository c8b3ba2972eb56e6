pub mod app;
pub mod config;
pub mod directions;
pub mod normalize;
pub mod output;
pub mod polyline;
pub mod query;
