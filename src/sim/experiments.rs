//src/sim/experiments.rs

use crate::sim::cache_configs::CacheConfig;
use crate::sim::caches::Cache;
use crate::sim::sim_errors::SimResult;
use crate::sim::traces::{run_trace, TraceReader};

/// Un point de mesure : une valeur du paramètre balayé, un fichier de
/// trace, et les compteurs obtenus.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub x: usize,      // Valeur du paramètre balayé (kB, octets ou voies)
    pub trace: String, // Fichier de trace
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub miss_rate: f64,
}

/// Résultats d'un balayage complet d'un paramètre
#[derive(Debug, Clone)]
pub struct SweepResults {
    pub label: String, // Nom du paramètre balayé, pour les rendus
    pub x_values: Vec<usize>,
    pub points: Vec<SweepPoint>,
}

impl SweepResults {
    /// Les points d'un fichier de trace, dans l'ordre des valeurs balayées
    pub fn points_for<'a>(&'a self, trace: &'a str) -> impl Iterator<Item = &'a SweepPoint> {
        self.points.iter().filter(move |p| p.trace == trace)
    }

    pub fn trace_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for point in &self.points {
            if !names.contains(&point.trace.as_str()) {
                names.push(&point.trace);
            }
        }
        names
    }
}

/// Un cache neuf par point (valeur, trace) : aucun état ne fuit entre
/// les points. Un fichier de trace manquant donne des statistiques vides
/// pour ce point, jamais un abandon du balayage.
fn sweep<F>(label: &str, traces: &[TraceReader], x_values: &[usize], make_config: F) -> SimResult<SweepResults>
where
    F: Fn(usize) -> CacheConfig,
{
    let mut points = Vec::with_capacity(x_values.len() * traces.len());

    for &x in x_values {
        for trace in traces {
            let mut cache = Cache::new(make_config(x))?;
            if let Err(e) = run_trace(&mut cache, trace) {
                eprintln!("Warning: {}", e);
            }
            points.push(SweepPoint {
                x,
                trace: trace.path().display().to_string(),
                hits: cache.hit_count(),
                misses: cache.miss_count(),
                hit_rate: cache.hit_rate(),
                miss_rate: cache.miss_rate(),
            });
        }
    }

    Ok(SweepResults {
        label: label.to_string(),
        x_values: x_values.to_vec(),
        points,
    })
}

/// Balayage de la taille totale du cache (en kB), bloc et associativité fixes
pub fn sweep_cache_size(
    traces: &[TraceReader],
    sizes_kb: &[usize],
    block_size: usize,
    associativity: usize,
) -> SimResult<SweepResults> {
    sweep("Cache Size (kB)", traces, sizes_kb, |kb| {
        CacheConfig::with_size_kb(kb, block_size, associativity)
    })
}

/// Balayage de la taille de bloc (en octets), taille totale et associativité fixes
pub fn sweep_block_size(
    traces: &[TraceReader],
    size_kb: usize,
    block_sizes: &[usize],
    associativity: usize,
) -> SimResult<SweepResults> {
    sweep("Block Size (Bytes)", traces, block_sizes, |bs| {
        CacheConfig::with_size_kb(size_kb, bs, associativity)
    })
}

/// Balayage de l'associativité, taille totale et bloc fixes
pub fn sweep_associativity(
    traces: &[TraceReader],
    size_kb: usize,
    block_size: usize,
    associativities: &[usize],
) -> SimResult<SweepResults> {
    sweep("Associativity", traces, associativities, |ways| {
        CacheConfig::with_size_kb(size_kb, block_size, ways)
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;
    use std::io::Write;

    fn write_trace(lines: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", lines).unwrap();
        file
    }

    #[test]
    fn test_sweep_cache_size_one_point_per_pair() {
        let t1 = write_trace("L 0\nL 0\nL 100\n");
        let t2 = write_trace("L 0\n");
        let traces = vec![TraceReader::new(t1.path()), TraceReader::new(t2.path())];

        let results = sweep_cache_size(&traces, &[1, 4], 4, 4).unwrap();
        assert_eq!(results.points.len(), 4);
        assert_eq!(results.x_values, vec![1, 4]);

        let name = t1.path().display().to_string();
        for point in results.points_for(&name) {
            assert_eq!(point.hits, 1);
            assert_eq!(point.misses, 2);
        }
    }

    #[test]
    fn test_sweep_associativity_changes_behavior() {
        // Quatre tags en conflit dans le même set d'un cache 1 kB / blocs 4.
        // En direct-mapped ça thrash, en 4 voies tout tient.
        // Pas de 0x400 : au-dessus des bits d'index des deux géométries,
        // donc même set dans les deux cas
        let mut body = String::new();
        for _ in 0..2 {
            for tag in 0u64..4 {
                body.push_str(&format!("L {:x}\n", tag << 10));
            }
        }
        let t = write_trace(&body);
        let traces = vec![TraceReader::new(t.path())];

        let results = sweep_associativity(&traces, 1, 4, &[1, 4]).unwrap();
        let direct = &results.points[0];
        let four_way = &results.points[1];

        // Direct-mapped : chaque accès évince le précédent, zéro hit
        assert_eq!(direct.hits, 0);
        assert_eq!(direct.misses, 8);
        // 4 voies : le set absorbe les quatre tags
        assert_eq!(four_way.hits, 4);
        assert_eq!(four_way.misses, 4);
    }

    #[test]
    fn test_missing_trace_gives_empty_point() {
        let traces = vec![TraceReader::new("/nonexistent/trace.din")];
        let results = sweep_cache_size(&traces, &[1], 4, 4).unwrap();
        assert_eq!(results.points.len(), 1);
        assert_eq!(results.points[0].hits, 0);
        assert_eq!(results.points[0].misses, 0);
        assert_eq!(results.points[0].hit_rate, 0.0);
    }

    #[test]
    fn test_invalid_geometry_stops_sweep() {
        let t = write_trace("L 0\n");
        let traces = vec![TraceReader::new(t.path())];
        // Blocs de 3 octets : géométrie rejetée à la construction
        let result = sweep_block_size(&traces, 1, &[3], 4);
        assert_matches!(result, Err(crate::sim::sim_errors::SimError::ConfigError(_)));
    }

    #[test]
    fn test_trace_names_preserve_order() {
        let t1 = write_trace("L 0\n");
        let t2 = write_trace("L 0\n");
        let traces = vec![TraceReader::new(t1.path()), TraceReader::new(t2.path())];
        let results = sweep_cache_size(&traces, &[1, 2], 4, 4).unwrap();
        let names = results.trace_names();
        assert_eq!(names.len(), 2);
        assert_eq!(names[0], t1.path().display().to_string());
    }
}
