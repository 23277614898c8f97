pub mod config;
pub mod errors;
pub mod guide;
pub mod models;
pub mod repositories;
pub mod sources;
pub mod utils;
