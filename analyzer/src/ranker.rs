use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::models::{AnalysisResult, ConservationData, CrisprTarget, EscapeAnalysis};

pub const DEFAULT_MAX_ESCAPE_PROBABILITY: f64 = 0.3;
pub const DEFAULT_MIN_CONSERVATION_SCORE: f64 = 0.6;

/// Classification thresholds. Policy constants, configurable so tuning does
/// not touch the ranking code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankThresholds {
    pub max_escape_probability: f64,
    pub min_conservation_score: f64,
}

impl Default for RankThresholds {
    fn default() -> Self {
        Self {
            max_escape_probability: DEFAULT_MAX_ESCAPE_PROBABILITY,
            min_conservation_score: DEFAULT_MIN_CONSERVATION_SCORE,
        }
    }
}

pub fn is_high_confidence(target: &CrisprTarget, thresholds: &RankThresholds) -> bool {
    target.escape_probability < thresholds.max_escape_probability
        && target.conservation_score > thresholds.min_conservation_score
}

/// View of the targets sorted by ascending escape probability, ties broken
/// by lower position. The underlying slice keeps scan order.
pub fn escape_sorted<'a>(targets: &'a [CrisprTarget]) -> Vec<&'a CrisprTarget> {
    let mut sorted: Vec<&CrisprTarget> = targets.iter().collect();
    sorted.sort_by(|a, b| {
        a.escape_probability
            .total_cmp(&b.escape_probability)
            .then(a.position.cmp(&b.position))
    });
    sorted
}

/// Assemble the scored targets into an `AnalysisResult`. Targets are left in
/// scan order; the escape-sorted view only drives the recommendation text.
pub fn build_result(
    sequence_id: &str,
    targets: &[CrisprTarget],
    thresholds: &RankThresholds,
) -> AnalysisResult {
    let high_confidence: Vec<&CrisprTarget> = targets
        .iter()
        .filter(|t| is_high_confidence(t, thresholds))
        .collect();

    let conservation_data = if targets.is_empty() {
        ConservationData {
            avg_conservation: 0.0,
            max_conservation: 0.0,
        }
    } else {
        ConservationData {
            avg_conservation: targets.iter().map(|t| t.conservation_score).mean(),
            max_conservation: targets
                .iter()
                .map(|t| t.conservation_score)
                .fold(f64::NEG_INFINITY, f64::max),
        }
    };

    let escape_analysis = if targets.is_empty() {
        EscapeAnalysis {
            avg_escape_prob: 0.0,
            min_escape_prob: 0.0,
        }
    } else {
        EscapeAnalysis {
            avg_escape_prob: targets.iter().map(|t| t.escape_probability).mean(),
            min_escape_prob: targets
                .iter()
                .map(|t| t.escape_probability)
                .fold(f64::INFINITY, f64::min),
        }
    };

    let recommendations = build_recommendations(targets, high_confidence.len(), thresholds);

    AnalysisResult {
        sequence_id: sequence_id.to_string(),
        total_targets: targets.len(),
        high_confidence_targets: high_confidence.len(),
        conservation_data,
        escape_analysis,
        recommendations,
    }
}

fn build_recommendations(
    targets: &[CrisprTarget],
    high_confidence_count: usize,
    thresholds: &RankThresholds,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    if high_confidence_count == 0 {
        if targets.is_empty() {
            recommendations.push(
                "No PAM-adjacent target windows found in this sequence. Consider scanning a longer region."
                    .to_string(),
            );
        } else {
            recommendations.push(
                "No high-confidence targets found. Consider alternative target regions or relaxed thresholds."
                    .to_string(),
            );
        }
        return recommendations;
    }

    recommendations.push(format!(
        "{} targets show low escape risk and are suitable for validation",
        high_confidence_count
    ));

    // Best target by the escape-sorted view, restricted to the
    // high-confidence set.
    if let Some(best) = escape_sorted(targets)
        .into_iter()
        .find(|t| is_high_confidence(t, thresholds))
    {
        recommendations.push(format!(
            "Best target: {} at position {} (escape probability {:.3})",
            best.target_sequence, best.position, best.escape_probability
        ));
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(position: usize, conservation: f64, escape: f64) -> CrisprTarget {
        CrisprTarget {
            sequence_id: "seq".to_string(),
            target_sequence: "ACGTACGTACGTACGTACGT".to_string(),
            pam_sequence: "TGG".to_string(),
            position,
            gc_content: 50.0,
            conservation_score: conservation,
            escape_probability: escape,
            binding_strength: 0.8,
        }
    }

    #[test]
    fn high_confidence_requires_both_thresholds() {
        let thresholds = RankThresholds::default();
        assert!(is_high_confidence(&target(0, 0.7, 0.2), &thresholds));
        // Escape too high.
        assert!(!is_high_confidence(&target(0, 0.7, 0.3), &thresholds));
        // Conservation too low.
        assert!(!is_high_confidence(&target(0, 0.6, 0.2), &thresholds));
    }

    #[test]
    fn high_confidence_count_matches_per_target_classification() {
        let thresholds = RankThresholds::default();
        let targets = vec![
            target(0, 0.8, 0.1),
            target(5, 0.5, 0.1),
            target(9, 0.9, 0.25),
            target(14, 0.7, 0.6),
        ];
        let result = build_result("seq", &targets, &thresholds);
        let expected = targets
            .iter()
            .filter(|t| t.escape_probability < 0.3 && t.conservation_score > 0.6)
            .count();
        assert_eq!(result.high_confidence_targets, expected);
        assert_eq!(result.high_confidence_targets, 2);
        assert_eq!(result.total_targets, 4);
    }

    #[test]
    fn aggregates_are_means_and_extremes() {
        let targets = vec![target(0, 0.4, 0.2), target(3, 0.8, 0.6)];
        let result = build_result("seq", &targets, &RankThresholds::default());
        assert!((result.conservation_data.avg_conservation - 0.6).abs() < 1e-12);
        assert!((result.conservation_data.max_conservation - 0.8).abs() < 1e-12);
        assert!((result.escape_analysis.avg_escape_prob - 0.4).abs() < 1e-12);
        assert!((result.escape_analysis.min_escape_prob - 0.2).abs() < 1e-12);
    }

    #[test]
    fn empty_target_list_yields_zero_aggregates_and_a_caution() {
        let result = build_result("seq", &[], &RankThresholds::default());
        assert_eq!(result.total_targets, 0);
        assert_eq!(result.high_confidence_targets, 0);
        assert_eq!(result.conservation_data.avg_conservation, 0.0);
        assert_eq!(result.escape_analysis.avg_escape_prob, 0.0);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("No PAM-adjacent target windows"));
    }

    #[test]
    fn escape_ties_break_by_lower_position() {
        let targets = vec![target(30, 0.7, 0.2), target(10, 0.7, 0.2), target(20, 0.7, 0.1)];
        let sorted = escape_sorted(&targets);
        assert_eq!(sorted[0].position, 20);
        assert_eq!(sorted[1].position, 10);
        assert_eq!(sorted[2].position, 30);
    }

    #[test]
    fn recommendations_name_the_best_high_confidence_target() {
        let targets = vec![target(12, 0.9, 0.05), target(3, 0.8, 0.15)];
        let result = build_result("seq", &targets, &RankThresholds::default());
        assert_eq!(
            result.recommendations[0],
            "2 targets show low escape risk and are suitable for validation"
        );
        assert!(result.recommendations[1].contains("position 12"));
        assert!(result.recommendations[1].contains("0.050"));
    }

    #[test]
    fn cautionary_message_when_no_high_confidence_targets() {
        let targets = vec![target(0, 0.2, 0.9)];
        let result = build_result("seq", &targets, &RankThresholds::default());
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("No high-confidence targets"));
    }
}
