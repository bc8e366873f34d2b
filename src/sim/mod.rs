pub mod address;
pub mod cache_configs;
pub mod cache_stats;
pub mod caches;
pub mod experiments;
pub mod reports;
pub mod sim_errors;
pub mod traces;

// Re-export
pub use cache_configs::CacheConfig;
pub use caches::Cache;
pub use sim_errors::{SimError, SimResult};
