//! Analysis engine for CRISPR targeting of viral genomes: scans a sequence
//! for PAM-adjacent guide windows, scores each window's resistance to
//! mutational escape, and stress-tests sequences with a stochastic drift
//! simulator.

pub mod conservation;
pub mod engine;
pub mod error;
pub mod escape;
pub mod models;
pub mod ranker;
pub mod report;
pub mod samples;
pub mod scanner;
pub mod simulation;
pub mod validation;

pub use engine::{analyze, analyze_with, simulate, simulate_seeded};
pub use error::{EngineError, EngineResult};
pub use models::{
    AnalysisReport, AnalysisResult, AnalyzeRequest, CrisprTarget, Mutation, SimulateRequest,
    SimulationResult, ViralSequence, VirusType,
};
