use std::fs::File;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use analyzer::report::write_targets_csv;
use analyzer::samples::sample_sequence;
use analyzer::{analyze, simulate_seeded, AnalyzeRequest, SimulateRequest, VirusType};

const SIMULATION_SEED: u64 = 42;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting the viral CRISPR targeting engine");

    for virus_type in [VirusType::Hiv1, VirusType::SarsCov2] {
        let sequence = sample_sequence(&virus_type)
            .with_context(|| format!("no bundled sample for {}", virus_type.label()))?;
        let request = AnalyzeRequest {
            sequence: sequence.to_string(),
            virus_type: virus_type.label().to_string(),
        };

        let report = analyze(&request)
            .with_context(|| format!("analysis failed for {}", virus_type.label()))?;
        for recommendation in &report.analysis.recommendations {
            info!("{}: {}", virus_type.label(), recommendation);
        }

        let stem = virus_type.label().to_lowercase().replace('-', "_");
        let csv_path = format!("targets_{stem}.csv");
        write_targets_csv(&report.targets, &csv_path)?;
        info!("Ranked targets written to {csv_path}");

        let json_path = format!("analysis_{stem}.json");
        serde_json::to_writer_pretty(File::create(&json_path)?, &report.analysis)?;
        info!("Analysis summary written to {json_path}");
    }

    // Seeded drift run on the SARS-CoV-2 sample so reruns are comparable.
    let spike = sample_sequence(&VirusType::SarsCov2).context("missing SARS-CoV-2 sample")?;
    let request = SimulateRequest {
        original_sequence: spike.to_string(),
        mutation_rate: 0.001,
        generations: 100,
    };
    let result = simulate_seeded(&request, SIMULATION_SEED)?;
    info!(
        "Drift simulation: {} mutations across {} generations",
        result.mutation_count, result.generations
    );
    serde_json::to_writer_pretty(File::create("simulation_sars_cov_2.json")?, &result)?;
    info!("Simulation trace written to simulation_sars_cov_2.json");

    Ok(())
}
