pub mod config;
pub mod schedule;
pub mod status;
