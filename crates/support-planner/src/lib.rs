pub mod assessment;
pub mod auth;
pub mod config;
pub mod error;
pub mod progress;
pub mod storage;
pub mod telemetry;
