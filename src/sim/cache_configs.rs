//src/sim/cache_configs.rs

/// Configuration geometrique d'un cache set-associatif.
///
/// La geometrie est fixée à la construction du cache et ne change jamais
/// ensuite. `num_sets` et `block_size` doivent être des puissances de deux,
/// sinon la décomposition tag/index/offset par décalage de bits est fausse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub size: usize,          // Taille totale du cache en octets
    pub block_size: usize,    // Taille d'un bloc en octets
    pub associativity: usize, // Nombre de voies par set
}

impl Default for CacheConfig {
    fn default() -> Self {
        // Expérience "a" : 1024 kB, blocs de 4 octets, 4 voies
        Self {
            size: 1024 * 1024, // 1MB
            block_size: 4,
            associativity: 4,
        }
    }
}

impl CacheConfig {
    pub fn new(size: usize, block_size: usize, associativity: usize) -> Self {
        Self {
            size,
            block_size,
            associativity,
        }
    }

    /// Les expériences du simulateur parlent en kilo-octets
    pub fn with_size_kb(size_kb: usize, block_size: usize, associativity: usize) -> Self {
        Self::new(size_kb * 1024, block_size, associativity)
    }

    /// Nombre de sets (division entière)
    pub fn num_sets(&self) -> usize {
        self.size / (self.block_size * self.associativity)
    }

    /// log2 entier du nombre de sets
    pub fn index_bits(&self) -> u32 {
        self.num_sets().trailing_zeros()
    }

    /// log2 entier de la taille de bloc
    pub fn offset_bits(&self) -> u32 {
        self.block_size.trailing_zeros()
    }

    /// Précondition de construction : tout doit être positif et
    /// `num_sets`/`block_size` des puissances de deux exactes.
    /// On ne corrige jamais une géométrie invalide en silence.
    pub fn is_valid(&self) -> bool {
        self.size > 0
            && self.block_size > 0
            && self.associativity > 0
            && self.size >= self.block_size * self.associativity
            && self.block_size.is_power_of_two()
            && self.num_sets().is_power_of_two()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.num_sets(), 65536); // 1024kB / (4 * 4)
        assert_eq!(config.index_bits(), 16);
        assert_eq!(config.offset_bits(), 2);
        assert!(config.is_valid());
    }

    #[test]
    fn test_num_sets_calculation() {
        let config = CacheConfig::new(1024, 4, 4);
        assert_eq!(config.num_sets(), 64); // 1024 / (4 * 4) = 64
        assert_eq!(config.index_bits(), 6);
        assert_eq!(config.offset_bits(), 2);
    }

    #[test]
    fn test_with_size_kb() {
        let config = CacheConfig::with_size_kb(128, 4, 4);
        assert_eq!(config.size, 128 * 1024);
        assert_eq!(config.num_sets(), 8192);
    }

    #[test]
    fn test_invalid_configs() {
        // num_sets = 1000 / (4 * 4) = 62, pas une puissance de deux
        assert!(!CacheConfig::new(1000, 4, 4).is_valid());
        // bloc de 3 octets
        assert!(!CacheConfig::new(1024, 3, 4).is_valid());
        assert!(!CacheConfig::new(0, 4, 4).is_valid());
        assert!(!CacheConfig::new(1024, 4, 0).is_valid());
        // cache plus petit qu'un seul set
        assert!(!CacheConfig::new(8, 4, 4).is_valid());
    }

    #[test]
    fn test_fully_associative_geometry() {
        // Un seul set : index sur 0 bit
        let config = CacheConfig::new(64, 4, 16);
        assert_eq!(config.num_sets(), 1);
        assert_eq!(config.index_bits(), 0);
        assert!(config.is_valid());
    }
}
