// Record processing: flattening, deduplication, enrichment, and classification

pub mod classify;
pub mod dedupe;
pub mod enrich;
pub mod flatten;

pub use classify::classify;
pub use dedupe::dedupe;
pub use enrich::Enricher;
pub use flatten::{flatten, flatten_all};
