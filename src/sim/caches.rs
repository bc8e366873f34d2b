//src/sim/caches.rs

use crate::sim::address::AddressDecoder;
use crate::sim::cache_configs::CacheConfig;
use crate::sim::cache_stats::CacheStatistics;
use crate::sim::sim_errors::{SimError, SimResult};

/// Une ligne de cache : seule l'identité du bloc compte pour la simulation,
/// on ne stocke pas les données.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLine {
    pub tag: u64,
}

/// Un set : exactement `associativity` emplacements, vides au départ.
/// Jamais redimensionné après construction.
pub type CacheSet = Vec<Option<CacheLine>>;

/// Cache set-associatif simulé.
///
/// Toute mutation passe par `access`/`clear` ; les sets et les compteurs
/// ne sont jamais exposés en écriture. Une instance par point d'expérience,
/// aucun état partagé entre instances.
#[derive(Debug, Clone)]
pub struct Cache {
    config: CacheConfig,
    decoder: AddressDecoder,
    sets: Vec<CacheSet>,
    stats: CacheStatistics,
}

impl Cache {
    /// Crée un cache vide. Échoue si la géométrie viole la précondition
    /// puissance-de-deux (on refuse plutôt que de corriger en silence).
    pub fn new(config: CacheConfig) -> SimResult<Self> {
        if !config.is_valid() {
            return Err(SimError::config_error(&format!(
                "geometrie invalide: size={} block_size={} associativity={}",
                config.size, config.block_size, config.associativity
            )));
        }

        let num_sets = config.num_sets();
        let mut sets = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            sets.push(vec![None; config.associativity]);
        }

        Ok(Self {
            config,
            decoder: AddressDecoder::new(&config),
            sets,
            stats: CacheStatistics::default(),
        })
    }

    pub fn with_geometry(size: usize, block_size: usize, associativity: usize) -> SimResult<Self> {
        Self::new(CacheConfig::new(size, block_size, associativity))
    }

    /// Accès à une adresse : `true` si hit, `false` si miss.
    ///
    /// Sur miss, la ligne est installée dans le premier emplacement vide
    /// (balayage de gauche à droite). Si le set est plein, c'est toujours
    /// l'emplacement 0 qui est évincé — règle volontairement simpliste,
    /// ni LRU ni FIFO, à reproduire telle quelle.
    ///
    /// Ne peut pas échouer : toute adresse u64 se décode vers un index valide.
    pub fn access(&mut self, addr: u64) -> bool {
        let index = self.decoder.extract_index(addr);
        let tag = self.decoder.extract_tag(addr);

        let set = &mut self.sets[index];

        // Hit si une voie occupée porte le tag
        for slot in set.iter() {
            if let Some(line) = slot {
                if line.tag == tag {
                    self.stats.hits += 1;
                    return true;
                }
            }
        }

        // Miss : première voie libre, sinon éviction de la voie 0
        self.stats.misses += 1;
        for slot in set.iter_mut() {
            if slot.is_none() {
                *slot = Some(CacheLine { tag });
                return false;
            }
        }

        set[0] = Some(CacheLine { tag });
        false
    }

    /// Vide tous les sets et remet les compteurs à zéro. La géométrie
    /// est conservée. Idempotent.
    pub fn clear(&mut self) {
        for set in &mut self.sets {
            for slot in set.iter_mut() {
                *slot = None;
            }
        }
        self.stats.reset();
    }

    pub fn hit_count(&self) -> u64 {
        self.stats.hits
    }

    pub fn miss_count(&self) -> u64 {
        self.stats.misses
    }

    pub fn hit_rate(&self) -> f64 {
        self.stats.hit_rate()
    }

    pub fn miss_rate(&self) -> f64 {
        self.stats.miss_rate()
    }

    pub fn statistics(&self) -> &CacheStatistics {
        &self.stats
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    #[cfg(test)]
    fn set(&self, index: usize) -> &CacheSet {
        &self.sets[index]
    }
}
