//src/sim/reports.rs

use std::fmt::Write;

use chrono::Local;

use crate::sim::experiments::SweepResults;

const CHART_WIDTH: usize = 50; // Largeur maximale d'une barre

fn header(results: &SweepResults) -> String {
    format!(
        "{} vs Miss Rate — generated {}\n",
        results.label,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Table à largeur fixe, une ligne par point (valeur balayée, trace)
pub fn render_table(results: &SweepResults) -> String {
    let mut out = String::new();
    out.push_str(&header(results));
    out.push_str(&"-".repeat(100));
    out.push('\n');
    let _ = writeln!(
        out,
        "{:<15} {:<30} {:<15} {:<10} {:<10} {:<12}",
        results.label, "Trace File", "Miss Rate (%)", "Hits", "Misses", "Hit Rate (%)"
    );
    out.push_str(&"-".repeat(100));
    out.push('\n');

    for &x in &results.x_values {
        for point in results.points.iter().filter(|p| p.x == x) {
            let _ = writeln!(
                out,
                "{:<15} {:<30} {:<15.2} {:<10} {:<10} {:<12.2}",
                point.x,
                point.trace,
                point.miss_rate * 100.0,
                point.hits,
                point.misses,
                point.hit_rate * 100.0
            );
        }
    }
    out.push_str(&"-".repeat(100));
    out.push('\n');
    out
}

/// Rendu "graphique" : un diagramme à barres ASCII du miss rate par
/// valeur balayée, un bloc par fichier de trace. Remplace les tracés
/// matplotlib de l'outil d'origine pour un terminal.
pub fn render_chart(results: &SweepResults) -> String {
    let mut out = String::new();
    out.push_str(&header(results));

    for trace in results.trace_names() {
        let _ = writeln!(out, "\nTrace: {}", trace);
        for point in results.points_for(trace) {
            let bar_len = (point.miss_rate * CHART_WIDTH as f64).round() as usize;
            let bar_len = bar_len.min(CHART_WIDTH);
            let _ = writeln!(
                out,
                "{:>10} | {:<width$} {:.4}",
                point.x,
                "#".repeat(bar_len),
                point.miss_rate,
                width = CHART_WIDTH
            );
        }
    }
    out
}

pub fn print_table(results: &SweepResults) {
    print!("{}", render_table(results));
}

pub fn print_chart(results: &SweepResults) {
    print!("{}", render_chart(results));
}
