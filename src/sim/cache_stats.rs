//src/sim/cache_stats.rs

use std::fmt;


#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStatistics {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStatistics {
    /// Taux de hits dans [0, 1]. Vaut 0.0 tant qu'aucun accès n'a eu lieu
    /// (politique assumée, pas une erreur).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Taux de misses dans [0, 1]. Même convention que `hit_rate`.
    pub fn miss_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.misses as f64 / total as f64
        }
    }

    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn reset(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }
}

impl fmt::Display for CacheStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cache Statistics:\n\
             Hit Rate: {:.2}%\n\
             Miss Rate: {:.2}%\n\
             Hits: {}\n\
             Misses: {}\n\
             Total Accesses: {}\n",
            self.hit_rate() * 100.0,
            self.miss_rate() * 100.0,
            self.hits,
            self.misses,
            self.total_accesses()
        )
    }
}
