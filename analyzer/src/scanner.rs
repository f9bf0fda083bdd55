use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Guide width used by the SpCas9 protocol.
pub const DEFAULT_WINDOW_LEN: usize = 20;
/// Cas9 NGG protospacer-adjacent motif, expressed as a regex over one window.
pub const DEFAULT_PAM_PATTERN: &str = "[ACGT]GG";
pub const DEFAULT_PAM_LEN: usize = 3;

/// Scan policy constants. The PAM motif immediately FOLLOWS the target
/// window (Cas9 scans the protospacer upstream of NGG); changing nuclease
/// family means changing these values, not the scan code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanParams {
    pub window_len: usize,
    pub pam_pattern: String,
    pub pam_len: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            window_len: DEFAULT_WINDOW_LEN,
            pam_pattern: DEFAULT_PAM_PATTERN.to_string(),
            pam_len: DEFAULT_PAM_LEN,
        }
    }
}

/// One candidate window, before any motif filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetWindow {
    /// 0-based start position in the parent sequence.
    pub position: usize,
    pub sequence: String,
    /// Percent G+C, 0-100.
    pub gc_content: f64,
}

/// A candidate window whose downstream bases matched the PAM motif.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedTarget {
    pub position: usize,
    pub sequence: String,
    pub pam_sequence: String,
    pub gc_content: f64,
}

/// Slides a fixed-width window across a sequence and keeps the windows that
/// sit immediately upstream of the PAM motif. Deterministic for a given
/// sequence and parameter set.
#[derive(Debug, Clone)]
pub struct TargetScanner {
    params: ScanParams,
    pam_regex: Regex,
}

impl TargetScanner {
    pub fn new(params: ScanParams) -> EngineResult<Self> {
        let pam_regex = Regex::new(&format!("^(?:{})$", params.pam_pattern)).map_err(|e| {
            EngineError::validation("pam_pattern", format!("invalid motif pattern: {e}"))
        })?;
        Ok(Self { params, pam_regex })
    }

    pub fn with_defaults() -> Self {
        Self::new(ScanParams::default()).expect("default PAM pattern compiles")
    }

    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    /// Every window of width W that leaves room for the P-base motif:
    /// exactly `max(0, len - W - P + 1)` windows, one per start position.
    pub fn candidate_windows(&self, sequence: &str) -> Vec<TargetWindow> {
        let w = self.params.window_len;
        let p = self.params.pam_len;
        if sequence.len() < w + p {
            return Vec::new();
        }

        (0..=sequence.len() - w - p)
            .map(|start| {
                let text = &sequence[start..start + w];
                TargetWindow {
                    position: start,
                    sequence: text.to_string(),
                    gc_content: gc_content_percent(text),
                }
            })
            .collect()
    }

    /// The candidate windows whose following `pam_len` bases match the PAM
    /// motif, in ascending position order.
    pub fn scan(&self, sequence: &str) -> Vec<ScannedTarget> {
        let w = self.params.window_len;
        let p = self.params.pam_len;
        self.candidate_windows(sequence)
            .into_iter()
            .filter_map(|window| {
                let pam = &sequence[window.position + w..window.position + w + p];
                if self.pam_regex.is_match(pam) {
                    Some(ScannedTarget {
                        position: window.position,
                        sequence: window.sequence,
                        pam_sequence: pam.to_string(),
                        gc_content: window.gc_content,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Percent G+C over a window, 0-100.
pub fn gc_content_percent(window: &str) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let gc = window.bytes().filter(|&b| b == b'G' || b == b'C').count();
    100.0 * gc as f64 / window.len() as f64
}
