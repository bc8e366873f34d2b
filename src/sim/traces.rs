//src/sim/traces.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::sim::caches::Cache;
use crate::sim::sim_errors::{SimError, SimResult};

/// Extrait l'adresse d'un enregistrement de trace.
///
/// Format : champs séparés par des blancs, le deuxième champ est une
/// adresse hexadécimale (préfixe `0x` accepté). Un enregistrement trop
/// court ou dont l'adresse ne se parse pas est ignoré en silence —
/// politique explicite du lecteur de trace, pas une erreur.
pub fn parse_record(line: &str) -> Option<u64> {
    let mut fields = line.split_whitespace();
    let _operation = fields.next()?;
    let raw = fields.next()?;
    let hex = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")).unwrap_or(raw);
    u64::from_str_radix(hex, 16).ok()
}

/// Parse une trace complète déjà en mémoire (surtout pour les tests)
pub fn parse_trace(input: &str) -> Vec<u64> {
    input.lines().filter_map(parse_record).collect()
}

/// Lecteur de fichier de trace.
///
/// Chaque appel à `addresses` rouvre le fichier : la séquence est
/// paresseuse, finie et relançable — deux parcours successifs produisent
/// exactement les mêmes adresses.
#[derive(Debug, Clone)]
pub struct TraceReader {
    path: PathBuf,
}

impl TraceReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Itérateur paresseux sur les adresses de la trace. Échoue seulement
    /// si le fichier ne peut pas être ouvert (condition récupérable pour
    /// l'appelant : la passe produit alors des statistiques vides).
    pub fn addresses(&self) -> SimResult<impl Iterator<Item = u64>> {
        let file = File::open(&self.path).map_err(|e| {
            SimError::trace_error(&format!(
                "impossible d'ouvrir le fichier {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);
        Ok(reader
            .lines()
            .filter_map(|line| line.ok())
            .filter_map(|line| parse_record(&line)))
    }
}

/// Fait passer toute la trace dans le cache via `access`.
/// Les compteurs du cache s'accumulent, rien d'autre n'est touché.
pub fn run_trace(cache: &mut Cache, trace: &TraceReader) -> SimResult<()> {
    for addr in trace.addresses()? {
        cache.access(addr);
    }
    Ok(())
}

/// Génère une trace synthétique de `len` adresses dans `[0, addr_space)`,
/// pour le mode démo et les benchmarks.
pub fn generate_trace<R: Rng>(rng: &mut R, len: usize, addr_space: u64) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(0..addr_space)).collect()
}
