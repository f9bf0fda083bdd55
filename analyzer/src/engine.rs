//! Entry points composing the scan-and-score pipeline and the drift
//! simulator. All validation happens before any scoring or simulation work;
//! any failure aborts the whole call, never returning partial results.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::conservation::ConservationProfile;
use crate::error::{EngineError, EngineResult};
use crate::escape::{binding_strength, escape_probability};
use crate::models::{
    AnalysisReport, AnalyzeRequest, CrisprTarget, SimulateRequest, SimulationResult,
    ViralSequence, VirusType,
};
use crate::ranker::{build_result, RankThresholds};
use crate::scanner::{ScanParams, TargetScanner};
use crate::simulation::simulate_drift;
use crate::validation::normalize_sequence;

/// Run the full analysis pipeline with the protocol defaults.
pub fn analyze(request: &AnalyzeRequest) -> EngineResult<AnalysisReport> {
    analyze_with(request, ScanParams::default(), &RankThresholds::default())
}

/// Run the full analysis pipeline: validate, scan for PAM-adjacent windows,
/// score each window, assemble the ranked report.
pub fn analyze_with(
    request: &AnalyzeRequest,
    scan_params: ScanParams,
    thresholds: &RankThresholds,
) -> EngineResult<AnalysisReport> {
    let sequence = normalize_sequence(&request.sequence)?;
    let min_len = scan_params.window_len + scan_params.pam_len;
    if sequence.len() < min_len {
        return Err(EngineError::validation(
            "sequence",
            format!(
                "sequence length {} is shorter than target window ({}) plus PAM ({})",
                sequence.len(),
                scan_params.window_len,
                scan_params.pam_len
            ),
        ));
    }

    let virus_type = VirusType::parse(&request.virus_type);
    let viral = ViralSequence::new(virus_type.label().to_string(), virus_type, sequence);
    let scanner = TargetScanner::new(scan_params)?;

    info!(
        "Scanning {} nt {} sequence for CRISPR targets",
        viral.length, viral.name
    );
    let hits = scanner.scan(&viral.sequence);
    debug!("{} PAM-adjacent windows found", hits.len());

    let targets: Vec<CrisprTarget> = hits
        .into_iter()
        .map(|hit| {
            let profile = ConservationProfile::from_window(&hit.sequence);
            let conservation_score = profile.conservation_score();
            CrisprTarget {
                sequence_id: viral.id.clone(),
                escape_probability: escape_probability(conservation_score, hit.gc_content),
                binding_strength: binding_strength(hit.gc_content, profile.longest_run),
                conservation_score,
                target_sequence: hit.sequence,
                pam_sequence: hit.pam_sequence,
                position: hit.position,
                gc_content: hit.gc_content,
            }
        })
        .collect();

    let analysis = build_result(&viral.id, &targets, thresholds);
    info!(
        "Analysis complete: {} targets, {} high-confidence",
        analysis.total_targets, analysis.high_confidence_targets
    );

    Ok(AnalysisReport { analysis, targets })
}

/// Validate and run a drift simulation with an entropy-seeded generator.
/// Separate invocations are independent stochastic samples.
pub fn simulate(request: &SimulateRequest) -> EngineResult<SimulationResult> {
    let (sequence, mutation_rate, generations) = validated_simulation_inputs(request)?;
    let mut rng = StdRng::from_entropy();
    run_simulation(&sequence, mutation_rate, generations, &mut rng)
}

/// Validate and run a drift simulation reproducibly: the same seed and
/// inputs always yield the same mutation trace.
pub fn simulate_seeded(request: &SimulateRequest, seed: u64) -> EngineResult<SimulationResult> {
    let (sequence, mutation_rate, generations) = validated_simulation_inputs(request)?;
    let mut rng = StdRng::seed_from_u64(seed);
    run_simulation(&sequence, mutation_rate, generations, &mut rng)
}

fn run_simulation(
    sequence: &str,
    mutation_rate: f64,
    generations: usize,
    rng: &mut StdRng,
) -> EngineResult<SimulationResult> {
    info!(
        "Simulating {} generations over {} nt at rate {}",
        generations,
        sequence.len(),
        mutation_rate
    );
    let result = simulate_drift(sequence, mutation_rate, generations, rng);
    info!("Simulation applied {} mutations", result.mutation_count);
    Ok(result)
}

fn validated_simulation_inputs(request: &SimulateRequest) -> EngineResult<(String, f64, usize)> {
    let sequence = normalize_sequence(&request.original_sequence)?;

    if !(0.0..=1.0).contains(&request.mutation_rate) {
        return Err(EngineError::validation(
            "mutation_rate",
            format!(
                "expected a probability in [0, 1], got {}",
                request.mutation_rate
            ),
        ));
    }
    if request.generations < 0 {
        return Err(EngineError::validation(
            "generations",
            format!(
                "expected a non-negative generation count, got {}",
                request.generations
            ),
        ));
    }

    Ok((sequence, request.mutation_rate, request.generations as usize))
}
