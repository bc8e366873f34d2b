
pub mod sim;

//
// Re-export des types principaux
pub use sim::cache_configs::CacheConfig;
pub use sim::caches::Cache;
pub use sim::sim_errors::{SimError, SimResult};
pub use sim::traces::TraceReader;
