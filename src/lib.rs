pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod query;
pub mod rate_limiter;
pub mod regions;
pub mod types;

// Layered boundaries: use case + ports, adapters, pipeline stages
pub mod app;
pub mod infra;
pub mod pipeline;
