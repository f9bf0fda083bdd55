use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Virus annotation attached to an uploaded sequence. Free-text labels are
/// preserved as `Other` so the engine never rejects an unknown virus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VirusType {
    #[serde(rename = "HIV-1")]
    Hiv1,
    #[serde(rename = "SARS-CoV-2")]
    SarsCov2,
    #[serde(untagged)]
    Other(String),
}

impl VirusType {
    pub fn parse(label: &str) -> Self {
        match label {
            "HIV-1" => Self::Hiv1,
            "SARS-CoV-2" => Self::SarsCov2,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Hiv1 => "HIV-1",
            Self::SarsCov2 => "SARS-CoV-2",
            Self::Other(label) => label,
        }
    }
}

/// A validated viral sequence. Immutable once constructed; the id correlates
/// later analysis and simulation records with their source sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViralSequence {
    pub id: String,
    pub name: String,
    pub virus_type: VirusType,
    pub sequence: String,
    pub length: usize,
}

impl ViralSequence {
    /// `sequence` must already be normalized (see `validation::normalize_sequence`).
    pub fn new(name: impl Into<String>, virus_type: VirusType, sequence: String) -> Self {
        let length = sequence.len();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            virus_type,
            sequence,
            length,
        }
    }
}

/// A scored guide-RNA candidate. Regenerated on every analysis run and owned
/// by the `AnalysisReport` that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisprTarget {
    pub sequence_id: String,
    pub target_sequence: String,
    pub pam_sequence: String,
    /// 0-based start of the target window in the parent sequence.
    pub position: usize,
    /// Percent G+C over the window, 0-100.
    pub gc_content: f64,
    pub conservation_score: f64,
    pub escape_probability: f64,
    pub binding_strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationData {
    pub avg_conservation: f64,
    pub max_conservation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscapeAnalysis {
    pub avg_escape_prob: f64,
    pub min_escape_prob: f64,
}

/// Summary produced once per analyze invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sequence_id: String,
    pub total_targets: usize,
    pub high_confidence_targets: usize,
    pub conservation_data: ConservationData,
    pub escape_analysis: EscapeAnalysis,
    pub recommendations: Vec<String>,
}

/// Full analyze response: the summary plus every scored target in scan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: AnalysisResult,
    pub targets: Vec<CrisprTarget>,
}

/// One applied base change, ordered by generation then application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    /// 1-based generation index.
    pub generation: usize,
    pub position: usize,
    pub from: char,
    pub to: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub original_sequence: String,
    pub mutation_rate: f64,
    pub generations: usize,
    /// Literal count of applied base changes, i.e. `mutations.len()`.
    pub mutation_count: usize,
    pub mutations: Vec<Mutation>,
    pub final_sequence: String,
}

/// Analyze request contract: the caller supplies decoded fields, storage and
/// id lookup are a collaborator's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub sequence: String,
    pub virus_type: String,
}

/// Simulate request contract. `generations` is signed so a negative count is
/// reported as a validation error rather than failing to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub original_sequence: String,
    pub mutation_rate: f64,
    pub generations: i64,
}
