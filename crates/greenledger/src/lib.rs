pub mod config;
pub mod error;
pub mod portfolio;
pub mod scoring;
pub mod telemetry;
pub mod verification;
