//src/sim/address.rs

use crate::sim::cache_configs::CacheConfig;

/// Décomposition d'une adresse physique en (tag, index).
///
/// Pure fonction de (adresse, géométrie) : aucune mutation, aucun effet.
/// Les largeurs de bits sont figées à la construction du cache.
#[derive(Debug, Clone, Copy)]
pub struct AddressDecoder {
    index_bits: u32,  // Bits d'index (log2 du nombre de sets)
    offset_bits: u32, // Bits d'offset dans le bloc (log2 de la taille de bloc)
}

impl AddressDecoder {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            index_bits: config.index_bits(),
            offset_bits: config.offset_bits(),
        }
    }

    /// Index du set : `(addr >> offset_bits) & ((1 << index_bits) - 1)`
    ///
    /// Aucune vérification que `offset_bits + index_bits` tient dans 64 bits.
    /// Si la géométrie déborde la largeur d'adresse, le décalage sature à 0
    /// au lieu de paniquer (limitation connue, voir les tests).
    pub fn extract_index(&self, addr: u64) -> usize {
        let shifted = addr.checked_shr(self.offset_bits).unwrap_or(0);
        let mask = if self.index_bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.index_bits) - 1
        };
        (shifted & mask) as usize
    }

    /// Tag : `addr >> (index_bits + offset_bits)`
    pub fn extract_tag(&self, addr: u64) -> u64 {
        addr.checked_shr(self.index_bits + self.offset_bits)
            .unwrap_or(0)
    }

    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }
}
