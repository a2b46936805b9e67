// Harvest pipeline: fetch, processing stages, and export

pub mod export;
pub mod fetch;
pub mod processing;
