//! Single-sequence conservation proxy.
//!
//! Conservation here is approximated from intrinsic window statistics
//! (base-composition entropy, dinucleotide positional entropy, homopolymer
//! runs), not from cross-strain alignment data. The scoring is deterministic
//! and stateless: the same window text always yields the same score.

/// Homopolymer runs up to this length carry no penalty.
pub const RUN_FREE_LIMIT: usize = 4;
/// Penalty per base of run length beyond the free limit.
pub const RUN_PENALTY_STEP: f64 = 0.08;
pub const RUN_PENALTY_CAP: f64 = 0.25;

/// Weights combining the two entropy terms into the conservation score.
pub const WEIGHT_COMPOSITION: f64 = 0.6;
pub const WEIGHT_POSITIONAL: f64 = 0.4;

const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Per-window statistical summary feeding the conservation score.
/// Transient; not persisted independently of the analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConservationProfile {
    /// Counts of A, C, G, T in the window (ambiguity codes are skipped).
    pub base_counts: [usize; 4],
    /// Shannon entropy of base composition, in bits (0..=2).
    pub composition_entropy: f64,
    /// Shannon entropy of overlapping dinucleotides, in bits (0..=4).
    pub positional_entropy: f64,
    pub longest_run: usize,
}

impl ConservationProfile {
    pub fn from_window(window: &str) -> Self {
        let bytes = window.as_bytes();

        let mut base_counts = [0usize; 4];
        for &b in bytes {
            if let Some(i) = base_index(b) {
                base_counts[i] += 1;
            }
        }

        let mut dinuc_counts = [0usize; 16];
        for pair in bytes.windows(2) {
            if let (Some(i), Some(j)) = (base_index(pair[0]), base_index(pair[1])) {
                dinuc_counts[i * 4 + j] += 1;
            }
        }

        Self {
            base_counts,
            composition_entropy: shannon_entropy(&base_counts),
            positional_entropy: shannon_entropy(&dinuc_counts),
            longest_run: longest_homopolymer_run(window),
        }
    }

    /// Conservation score in [0, 1]; lower entropy yields higher
    /// conservation, long homopolymer runs are penalized.
    pub fn conservation_score(&self) -> f64 {
        let composition = 1.0 - self.composition_entropy / 2.0;
        let positional = 1.0 - self.positional_entropy / 4.0;
        let score = WEIGHT_COMPOSITION * composition + WEIGHT_POSITIONAL * positional
            - run_penalty(self.longest_run);
        score.clamp(0.0, 1.0)
    }
}

fn base_index(b: u8) -> Option<usize> {
    BASES.iter().position(|&base| base == b)
}

/// Shannon entropy in bits over a count table. Zero for an empty table.
fn shannon_entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

fn run_penalty(longest_run: usize) -> f64 {
    (RUN_PENALTY_STEP * longest_run.saturating_sub(RUN_FREE_LIMIT) as f64).min(RUN_PENALTY_CAP)
}

/// Length of the longest run of identical bases in the window.
pub fn longest_homopolymer_run(window: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for ch in window.chars() {
        if Some(ch) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(ch);
        }
        longest = longest.max(current);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_window_always_scores_the_same() {
        let window = "ATGCGATCGATCGATCGATC";
        let a = ConservationProfile::from_window(window).conservation_score();
        let b = ConservationProfile::from_window(window).conservation_score();
        assert_eq!(a, b);
    }

    #[test]
    fn score_stays_in_unit_interval() {
        for window in [
            "AAAAAAAAAAAAAAAAAAAA",
            "ACGTACGTACGTACGTACGT",
            "GGGGGGGGGGCCCCCCCCCC",
            "ATATATATATATATATATAT",
            "NNNNNNNNNNNNNNNNNNNN",
            "ATGCGATCGATCGATCGATC",
        ] {
            let score = ConservationProfile::from_window(window).conservation_score();
            assert!((0.0..=1.0).contains(&score), "{window} scored {score}");
        }
    }

    #[test]
    fn lower_entropy_scores_higher() {
        // Dinucleotide repeat vs maximally mixed composition at the same GC.
        let low = ConservationProfile::from_window("ATATATATATATATATATAT");
        let high = ConservationProfile::from_window("AATTACGTTGCATCGATGCA");
        assert!(low.composition_entropy < high.composition_entropy);
        assert!(low.conservation_score() > high.conservation_score());
    }

    #[test]
    fn entropy_extremes() {
        let uniform = ConservationProfile::from_window("AAAAAAAAAAAAAAAAAAAA");
        assert!((uniform.composition_entropy - 0.0).abs() < 1e-12);
        assert!((uniform.positional_entropy - 0.0).abs() < 1e-12);
        assert_eq!(uniform.longest_run, 20);

        let balanced = ConservationProfile::from_window("ACGTACGTACGTACGTACGT");
        assert!((balanced.composition_entropy - 2.0).abs() < 1e-9);
        // 19 overlapping pairs over 4 dinucleotides: close to, but not
        // exactly, 2 bits.
        assert!((balanced.positional_entropy - 2.0).abs() < 0.01);
    }

    #[test]
    fn homopolymer_run_is_penalized() {
        // Identical base composition, different arrangement.
        let grouped = ConservationProfile::from_window("AAAAAAAAAATTTTTTTTTT");
        let alternating = ConservationProfile::from_window("ATATATATATATATATATAT");
        assert_eq!(grouped.base_counts, alternating.base_counts);
        assert_eq!(grouped.longest_run, 10);
        assert_eq!(alternating.longest_run, 1);
        assert!(grouped.conservation_score() < alternating.conservation_score());
    }

    #[test]
    fn longest_run_detection() {
        assert_eq!(longest_homopolymer_run(""), 0);
        assert_eq!(longest_homopolymer_run("ACGT"), 1);
        assert_eq!(longest_homopolymer_run("AACCCGT"), 3);
        assert_eq!(longest_homopolymer_run("ACGTTTT"), 4);
    }
}
