//src/main.rs

use std::io::{self, Write as IoWrite};

use CacheLab::sim::experiments::{
    sweep_associativity, sweep_block_size, sweep_cache_size, SweepResults,
};
use CacheLab::sim::reports::{print_chart, print_table};
use CacheLab::sim::traces::{generate_trace, TraceReader};
use CacheLab::SimResult;

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn explain_experiment(experiment: &str) {
    let explanation = match experiment {
        "a" => {
            "\
        Instructions:
        - Cache 4 voies de 1024 kB, blocs de 4 octets.
        - 65 536 sets, 16 bits d'index, 2 bits d'offset.
        - cache_size = 1024 kB, block_size = 4 octets, associativity = 4"
        }
        "b" => {
            "\
        Instructions:
        - Taille de cache variable de 128 kB à 4096 kB, miss rate vs taille.
        - cache_size = [128, 256, 512, 1024, 2048, 4096] kB
        - block_size = 4 octets, associativity = 4"
        }
        "c" => {
            "\
        Instructions:
        - Taille de bloc variable de 1 à 32 octets, miss rate vs bloc.
        - cache_size = 1024 kB
        - block_size = [1, 2, 4, 8, 16, 32] octets, associativity = 4"
        }
        "d" => {
            "\
        Instructions:
        - Associativité variable de 1 à 16 voies, hit rate vs associativité.
        - cache_size = 1024 kB, block_size = 4 octets
        - associativity = [1, 2, 4, 8, 16] voies"
        }
        _ => "Expérience inconnue (choix valides : a, b, c, d)",
    };
    println!("{}\n", explanation);
}

/// Sans fichiers de trace on fabrique une trace synthétique sur disque,
/// pour que l'outil tourne tel quel en mode démo.
fn demo_trace() -> io::Result<tempfile::NamedTempFile> {
    use rand::SeedableRng;

    println!("Aucun fichier de trace fourni, génération d'une trace de démo...");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xCAC4E);
    let mut file = tempfile::NamedTempFile::new()?;
    for addr in generate_trace(&mut rng, 100_000, 1 << 20) {
        writeln!(file, "L {:x}", addr)?;
    }
    Ok(file)
}

fn run_experiment(experiment: &str, traces: &[TraceReader]) -> SimResult<SweepResults> {
    match experiment {
        "a" => sweep_cache_size(traces, &[1024], 4, 4),
        "b" => sweep_cache_size(traces, &[128, 256, 512, 1024, 2048, 4096], 4, 4),
        "c" => sweep_block_size(traces, 1024, &[1, 2, 4, 8, 16, 32], 4),
        "d" => sweep_associativity(traces, 1024, 4, &[1, 2, 4, 8, 16]),
        _ => Err(CacheLab::SimError::config_error(&format!(
            "expérience inconnue: {}",
            experiment
        ))),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n===== CACHELAB - SIMULATEUR DE CACHE SET-ASSOCIATIF =====\n");

    let experiment = prompt("Expérience à lancer (a, b, c, d): ")?.to_lowercase();
    explain_experiment(&experiment);

    let files = prompt("Fichiers de trace séparés par des espaces: ")?;

    // Le fichier de démo doit vivre jusqu'à la fin des balayages
    let mut demo_file = None;
    let traces: Vec<TraceReader> = if files.is_empty() {
        let file = demo_trace()?;
        let reader = TraceReader::new(file.path());
        demo_file = Some(file);
        vec![reader]
    } else {
        files.split_whitespace().map(TraceReader::new).collect()
    };

    let output_type = prompt("Sortie en 'graph' ou 'table' ? ")?.to_lowercase();

    println!("\n===== EXÉCUTION DE L'EXPÉRIENCE '{}' =====\n", experiment);

    match run_experiment(&experiment, &traces) {
        Ok(results) => {
            if output_type == "graph" {
                print_chart(&results);
            } else {
                print_table(&results);
            }
        }
        Err(e) => {
            println!("Erreur lors de l'expérience: {}", e);
        }
    }

    drop(demo_file);
    Ok(())
}
